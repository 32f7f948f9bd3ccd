/// Shown in the answer area before any question has completed.
pub const ANSWER_PLACEHOLDER: &str = "Your answer will appear here.";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AnswerStore {
    text: Option<String>,
}

impl AnswerStore {
    /// Last answer or fallback text, `None` before the first completed ask.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn display_text(&self) -> &str {
        self.text.as_deref().unwrap_or(ANSWER_PLACEHOLDER)
    }

    pub(crate) fn set(&mut self, text: impl Into<String>) {
        self.text = Some(text.into());
    }
}
