use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use bytes::Bytes;
use docqa_engine::{
    DocumentUpload, EngineEvent, EngineHandle, FailureKind, QaService, RequestError,
    UploadReceipt,
};
use serde_json::json;

const WAIT: Duration = Duration::from_secs(5);

/// Answers immediately and records what it was asked.
#[derive(Default)]
struct StubService {
    questions: Mutex<Vec<String>>,
    uploads: Mutex<Vec<String>>,
}

#[async_trait::async_trait]
impl QaService for StubService {
    async fn upload_document(
        &self,
        document: &DocumentUpload,
    ) -> Result<UploadReceipt, RequestError> {
        self.uploads.lock().unwrap().push(document.file_name.clone());
        Ok(UploadReceipt {
            body: json!({ "status": "ok" }),
        })
    }

    async fn ask_question(&self, question: &str) -> Result<Option<String>, RequestError> {
        self.questions.lock().unwrap().push(question.to_string());
        Ok(Some("Paris".to_string()))
    }
}

/// Never completes a request.
struct HangingService;

#[async_trait::async_trait]
impl QaService for HangingService {
    async fn upload_document(
        &self,
        _document: &DocumentUpload,
    ) -> Result<UploadReceipt, RequestError> {
        std::future::pending().await
    }

    async fn ask_question(&self, _question: &str) -> Result<Option<String>, RequestError> {
        std::future::pending().await
    }
}

#[test]
fn upload_and_ask_report_completion() {
    let service = Arc::new(StubService::default());
    let (engine, events) = EngineHandle::with_service(service.clone()).unwrap();

    engine.upload(DocumentUpload {
        file_name: "a.pdf".to_string(),
        content: Bytes::from_static(b"pdf"),
    });
    let event = events.recv_timeout(WAIT).expect("upload event");
    assert_eq!(
        event,
        EngineEvent::UploadCompleted {
            result: Ok(UploadReceipt {
                body: json!({ "status": "ok" })
            })
        }
    );

    engine.ask("capital?");
    let event = events.recv_timeout(WAIT).expect("ask event");
    assert_eq!(
        event,
        EngineEvent::AskCompleted {
            result: Ok(Some("Paris".to_string()))
        }
    );

    assert_eq!(*service.uploads.lock().unwrap(), vec!["a.pdf".to_string()]);
    assert_eq!(*service.questions.lock().unwrap(), vec!["capital?".to_string()]);
}

#[test]
fn notification_timer_fires_after_delay() {
    let (engine, events) = EngineHandle::with_service(Arc::new(StubService::default())).unwrap();
    let started = Instant::now();

    engine.schedule_clear(3, Duration::from_millis(50));
    assert!(events.try_recv().is_none());

    let event = events.recv_timeout(WAIT).expect("timer event");
    assert_eq!(event, EngineEvent::NotificationExpired { generation: 3 });
    assert!(started.elapsed() >= Duration::from_millis(50));
}

#[test]
fn timers_fire_in_deadline_order() {
    let (engine, events) = EngineHandle::with_service(Arc::new(StubService::default())).unwrap();

    engine.schedule_clear(1, Duration::from_millis(300));
    engine.schedule_clear(2, Duration::from_millis(20));

    assert_eq!(
        events.recv_timeout(WAIT),
        Some(EngineEvent::NotificationExpired { generation: 2 })
    );
    assert_eq!(
        events.recv_timeout(WAIT),
        Some(EngineEvent::NotificationExpired { generation: 1 })
    );
}

#[test]
fn shutdown_cancels_in_flight_requests() {
    let (engine, events) = EngineHandle::with_service(Arc::new(HangingService)).unwrap();

    engine.ask("will never be answered");
    assert!(events.recv_timeout(Duration::from_millis(100)).is_none());

    engine.shutdown();
    match events.recv_timeout(WAIT) {
        Some(EngineEvent::AskCompleted { result: Err(err) }) => {
            assert_eq!(err.kind, FailureKind::Cancelled);
        }
        other => panic!("expected cancelled ask, got {other:?}"),
    }
}

#[test]
fn shutdown_drops_pending_timers() {
    let (engine, events) = EngineHandle::with_service(Arc::new(StubService::default())).unwrap();

    engine.schedule_clear(9, Duration::from_secs(30));
    engine.shutdown();

    assert!(events.recv_timeout(Duration::from_millis(200)).is_none());
}

#[test]
fn shutdown_cancels_in_flight_upload() {
    let (engine, events) = EngineHandle::with_service(Arc::new(HangingService)).unwrap();

    engine.upload(DocumentUpload {
        file_name: "big.pdf".to_string(),
        content: Bytes::from_static(b"pdf"),
    });
    engine.shutdown();

    match events.recv_timeout(WAIT) {
        Some(EngineEvent::UploadCompleted { result: Err(err) }) => {
            assert_eq!(err.kind, FailureKind::Cancelled);
        }
        other => panic!("expected cancelled upload, got {other:?}"),
    }
    assert!(events.recv_timeout(Duration::from_millis(100)).is_none());
}
