#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User picked a file in the document picker.
    DocumentSelected(crate::SelectedDocument),
    /// User edited the question input.
    QuestionChanged(String),
    /// User clicked Upload.
    UploadClicked,
    /// User clicked Ask.
    AskClicked,
    /// Engine completion for the in-flight upload.
    UploadFinished(UploadResult),
    /// Engine completion for the in-flight question.
    AskFinished(AskResult),
    /// A notification clear timer fired.
    NotificationExpired { generation: u64 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadResult {
    Uploaded,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AskResult {
    /// The endpoint replied with a 2xx status. `answer` is `None` when the
    /// body carried no usable `answer` field.
    Answered { answer: Option<String> },
    Failed,
}
