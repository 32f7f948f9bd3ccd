use std::io;
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use docqa_logging::{qa_debug, qa_info, qa_warn};
use tokio_util::sync::CancellationToken;

use crate::client::{ClientSettings, QaService, ReqwestQaClient};
use crate::{DocumentUpload, EngineEvent, RequestError};

enum EngineCommand {
    Upload(DocumentUpload),
    Ask { question: String },
    ScheduleClear { generation: u64, after: Duration },
}

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("failed to start engine runtime: {0}")]
    Runtime(#[from] io::Error),
    #[error("failed to build http client: {0}")]
    Client(#[from] RequestError),
}

/// Sends work to the engine thread. Dropping the handle cancels everything
/// still in flight without reporting it; call `shutdown` first when the
/// cancellations must be observed.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    cancel: CancellationToken,
}

/// Receiving side of the engine. While the handle is alive, every upload and
/// ask command produces exactly one completion event; after `shutdown` that
/// event is a `FailureKind::Cancelled` failure. Dropping the handle tears the
/// runtime down and may discard completions still in flight.
pub struct EngineEvents {
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: &ClientSettings) -> Result<(Self, EngineEvents), EngineError> {
        let client = ReqwestQaClient::new(settings)?;
        qa_info!(
            "Engine endpoints: upload={} ask={}",
            client.upload_url(),
            client.ask_url()
        );
        Self::with_service(Arc::new(client))
    }

    pub fn with_service(
        service: Arc<dyn QaService>,
    ) -> Result<(Self, EngineEvents), EngineError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("docqa-engine-worker")
            .enable_all()
            .build()?;
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let cancel = CancellationToken::new();
        let token = cancel.clone();

        thread::Builder::new()
            .name("docqa-engine".to_string())
            .spawn(move || {
                while let Ok(command) = cmd_rx.recv() {
                    let service = service.clone();
                    let event_tx = event_tx.clone();
                    let token = token.clone();
                    runtime.spawn(async move {
                        handle_command(service.as_ref(), command, &event_tx, &token).await;
                    });
                }
                qa_debug!("Engine command channel closed");
            })?;

        Ok((Self { cmd_tx, cancel }, EngineEvents { event_rx }))
    }

    pub fn upload(&self, document: DocumentUpload) {
        self.send(EngineCommand::Upload(document));
    }

    pub fn ask(&self, question: impl Into<String>) {
        self.send(EngineCommand::Ask {
            question: question.into(),
        });
    }

    pub fn schedule_clear(&self, generation: u64, after: Duration) {
        self.send(EngineCommand::ScheduleClear { generation, after });
    }

    /// Cancels in-flight requests and pending timers. Cancelled requests
    /// still report a `FailureKind::Cancelled` completion.
    pub fn shutdown(&self) {
        self.cancel.cancel();
    }

    fn send(&self, command: EngineCommand) {
        if self.cmd_tx.send(command).is_err() {
            qa_warn!("Engine thread is gone; command dropped");
        }
    }
}

impl Drop for EngineHandle {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

impl EngineEvents {
    /// Blocks until the next event. `None` once the engine has stopped and
    /// every in-flight task has reported.
    pub fn recv(&self) -> Option<EngineEvent> {
        self.event_rx.recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }
}

async fn handle_command(
    service: &dyn QaService,
    command: EngineCommand,
    event_tx: &mpsc::Sender<EngineEvent>,
    cancel: &CancellationToken,
) {
    let event = match command {
        EngineCommand::Upload(document) => {
            qa_info!(
                "Uploading {} ({} bytes)",
                document.file_name,
                document.content.len()
            );
            let result = tokio::select! {
                result = service.upload_document(&document) => result,
                _ = cancel.cancelled() => Err(RequestError::cancelled()),
            };
            EngineEvent::UploadCompleted { result }
        }
        EngineCommand::Ask { question } => {
            qa_info!("Asking question ({} chars)", question.chars().count());
            let result = tokio::select! {
                result = service.ask_question(&question) => result,
                _ = cancel.cancelled() => Err(RequestError::cancelled()),
            };
            EngineEvent::AskCompleted { result }
        }
        EngineCommand::ScheduleClear { generation, after } => {
            tokio::select! {
                _ = tokio::time::sleep(after) => EngineEvent::NotificationExpired { generation },
                _ = cancel.cancelled() => return,
            }
        }
    };
    let _ = event_tx.send(event);
}
