use bytes::Bytes;

/// A single user-chosen file held in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedDocument {
    name: String,
    content: Bytes,
}

impl SelectedDocument {
    pub fn new(name: impl Into<String>, content: impl Into<Bytes>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn content(&self) -> &Bytes {
        &self.content
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// Current document selection and question text. Setters replace the stored
/// value wholesale and never validate.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionStore {
    document: Option<SelectedDocument>,
    question: String,
}

impl SelectionStore {
    pub fn set_document(&mut self, document: SelectedDocument) {
        self.document = Some(document);
    }

    pub fn set_question(&mut self, text: impl Into<String>) {
        self.question = text.into();
    }

    pub fn document(&self) -> Option<&SelectedDocument> {
        self.document.as_ref()
    }

    /// Question text exactly as typed.
    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn trimmed_question(&self) -> &str {
        self.question.trim()
    }
}
