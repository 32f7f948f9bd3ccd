use crate::{AppState, Effect, Operation, UploadResult};

const SELECT_FILE_FIRST: &str = "Please select a file first.";
const UPLOAD_SUCCEEDED: &str = "Document uploaded successfully.";
const UPLOAD_FAILED: &str = "Document upload failed.";

/// Starts a document upload, or notifies when nothing is selected.
///
/// The guard path leaves the busy flag untouched and requests no IO.
pub(crate) fn upload(state: &mut AppState) -> Vec<Effect> {
    let Some(document) = state.selection.document().cloned() else {
        return vec![state.notifications.show(SELECT_FILE_FIRST)];
    };

    state.busy.acquire(Operation::Upload);
    vec![Effect::UploadDocument { document }]
}

/// Applies the engine's completion. Upload failures only use the
/// notification channel; the answer area is left alone.
pub(crate) fn finish(state: &mut AppState, result: UploadResult) -> Vec<Effect> {
    let message = match result {
        UploadResult::Uploaded => UPLOAD_SUCCEEDED,
        UploadResult::Failed => UPLOAD_FAILED,
    };
    let effect = state.notifications.show(message);
    state.busy.release();
    vec![effect]
}
