use std::sync::mpsc;
use std::thread;

use docqa_core::{AskResult, Effect, Msg, UploadResult};
use docqa_engine::{DocumentUpload, EngineEvent, EngineEvents, EngineHandle};
use docqa_logging::{qa_debug, qa_info, qa_warn};

use super::app::LoopEvent;

pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    /// Takes ownership of the engine and forwards its events to `loop_tx`.
    pub fn new(
        engine: EngineHandle,
        events: EngineEvents,
        loop_tx: mpsc::Sender<LoopEvent>,
    ) -> Self {
        spawn_event_loop(events, loop_tx);
        Self { engine }
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::UploadDocument { document } => {
                    qa_info!(
                        "UploadDocument name={} bytes={}",
                        document.name(),
                        document.len()
                    );
                    self.engine.upload(DocumentUpload {
                        file_name: document.name().to_owned(),
                        content: document.content().clone(),
                    });
                }
                Effect::AskQuestion { question } => {
                    qa_info!("AskQuestion len={}", question.len());
                    self.engine.ask(question);
                }
                Effect::ScheduleNotificationClear { generation, after } => {
                    self.engine.schedule_clear(generation, after);
                }
            }
        }
    }

    pub fn shutdown(&self) {
        self.engine.shutdown();
    }
}

fn spawn_event_loop(events: EngineEvents, loop_tx: mpsc::Sender<LoopEvent>) {
    thread::spawn(move || {
        while let Some(event) = events.recv() {
            if loop_tx.send(LoopEvent::Msg(map_event(event))).is_err() {
                break;
            }
        }
    });
}

/// Translates an engine outcome into a core message. Failure details end up
/// in the log only; the core sees a bare `Failed`.
pub(crate) fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::UploadCompleted { result: Ok(receipt) } => {
            qa_debug!("Upload acknowledged: {}", receipt.body);
            Msg::UploadFinished(UploadResult::Uploaded)
        }
        EngineEvent::UploadCompleted { result: Err(err) } => {
            qa_warn!("Upload failed: {}", err);
            Msg::UploadFinished(UploadResult::Failed)
        }
        EngineEvent::AskCompleted { result: Ok(answer) } => {
            Msg::AskFinished(AskResult::Answered { answer })
        }
        EngineEvent::AskCompleted { result: Err(err) } => {
            qa_warn!("Failed to get answer: {}", err);
            Msg::AskFinished(AskResult::Failed)
        }
        EngineEvent::NotificationExpired { generation } => Msg::NotificationExpired { generation },
    }
}
