//! Document Q&A core: pure session state machine and view-model helpers.
mod answer;
mod busy;
mod effect;
mod msg;
mod notification;
mod query;
mod selection;
mod state;
mod update;
mod upload;
mod view_model;

pub use answer::{AnswerStore, ANSWER_PLACEHOLDER};
pub use busy::{BusyFlag, Operation};
pub use effect::Effect;
pub use msg::{AskResult, Msg, UploadResult};
pub use notification::{NotificationService, DEFAULT_NOTIFICATION_DURATION};
pub use selection::{SelectedDocument, SelectionStore};
pub use state::AppState;
pub use update::update;
pub use view_model::{AppViewModel, ButtonView, APP_TITLE, QUESTION_PLACEHOLDER};
