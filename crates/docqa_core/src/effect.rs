use std::time::Duration;

use crate::SelectedDocument;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// POST the document to the ingestion endpoint.
    UploadDocument { document: SelectedDocument },
    /// POST the (already trimmed) question to the answering endpoint.
    AskQuestion { question: String },
    /// Deliver `Msg::NotificationExpired { generation }` after `after`.
    ScheduleNotificationClear { generation: u64, after: Duration },
}
