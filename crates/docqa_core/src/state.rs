use std::time::Duration;

use crate::view_model::{ask_button, upload_button, AppViewModel, APP_TITLE, QUESTION_PLACEHOLDER};
use crate::{AnswerStore, BusyFlag, NotificationService, SelectionStore};

/// Everything one interactive session owns. Nothing here outlives the session.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    pub(crate) selection: SelectionStore,
    pub(crate) notifications: NotificationService,
    pub(crate) busy: BusyFlag,
    pub(crate) answer: AnswerStore,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Session whose notifications stay visible for `duration` by default.
    pub fn with_notification_duration(duration: Duration) -> Self {
        Self {
            notifications: NotificationService::with_default_duration(duration),
            ..Self::default()
        }
    }

    pub fn selection(&self) -> &SelectionStore {
        &self.selection
    }

    pub fn notifications(&self) -> &NotificationService {
        &self.notifications
    }

    pub fn busy(&self) -> BusyFlag {
        self.busy
    }

    pub fn answer(&self) -> &AnswerStore {
        &self.answer
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            title: APP_TITLE,
            document_name: self.selection.document().map(|doc| doc.name().to_owned()),
            question: self.selection.question().to_owned(),
            question_placeholder: QUESTION_PLACEHOLDER,
            upload_button: upload_button(self.busy),
            ask_button: ask_button(self.busy),
            notification: self.notifications.message().map(ToOwned::to_owned),
            answer: self.answer.display_text().to_owned(),
            busy: self.busy.is_busy(),
            dirty: self.dirty,
        }
    }

    /// Returns whether the state changed since the last call and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}
