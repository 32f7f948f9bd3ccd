use crate::{BusyFlag, Operation};

pub const APP_TITLE: &str = "Document Q&A";
pub const QUESTION_PLACEHOLDER: &str = "Ask about your document";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonView {
    pub label: &'static str,
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppViewModel {
    pub title: &'static str,
    pub document_name: Option<String>,
    pub question: String,
    pub question_placeholder: &'static str,
    pub upload_button: ButtonView,
    pub ask_button: ButtonView,
    pub notification: Option<String>,
    pub answer: String,
    pub busy: bool,
    pub dirty: bool,
}

// Both buttons are disabled by the one shared flag; only the label follows
// the operation that holds it.
pub(crate) fn upload_button(busy: BusyFlag) -> ButtonView {
    ButtonView {
        label: match busy.operation() {
            Some(Operation::Upload) => "Uploading...",
            _ => "Upload",
        },
        enabled: !busy.is_busy(),
    }
}

pub(crate) fn ask_button(busy: BusyFlag) -> ButtonView {
    ButtonView {
        label: match busy.operation() {
            Some(Operation::Ask) => "Getting Answer...",
            _ => "Ask",
        },
        enabled: !busy.is_busy(),
    }
}
