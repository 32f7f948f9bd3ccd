//! Document Q&A engine: HTTP round trips, notification timers and effect execution.
mod client;
mod engine;
mod types;
mod wire;

pub use client::{ClientSettings, QaService, ReqwestQaClient, DOCUMENT_FIELD};
pub use engine::{EngineError, EngineEvents, EngineHandle};
pub use types::{DocumentUpload, EngineEvent, FailureKind, RequestError, UploadReceipt};
