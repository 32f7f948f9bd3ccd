use serde::Serialize;
use serde_json::Value;

use crate::{FailureKind, RequestError};

#[derive(Debug, Serialize)]
pub(crate) struct AskRequest<'a> {
    pub question: &'a str,
}

/// Any JSON document is an acceptable upload acknowledgement.
pub(crate) fn parse_upload_body(bytes: &[u8]) -> Result<Value, RequestError> {
    serde_json::from_slice(bytes).map_err(malformed)
}

/// Extracts the `answer` field. Empty strings, zero, `null` and non-scalar
/// values count as no answer; numbers are shown as written. A body that is
/// the bare `null` literal has no fields to read and is rejected.
pub(crate) fn parse_answer(bytes: &[u8]) -> Result<Option<String>, RequestError> {
    let value: Value = serde_json::from_slice(bytes).map_err(malformed)?;
    if value.is_null() {
        return Err(RequestError::new(FailureKind::MalformedBody, "answer body is null"));
    }
    let answer = match value.get("answer") {
        Some(Value::String(text)) if !text.is_empty() => Some(text.clone()),
        Some(Value::Number(number)) if number.as_f64() != Some(0.0) => Some(number.to_string()),
        _ => None,
    };
    Ok(answer)
}

fn malformed(err: serde_json::Error) -> RequestError {
    RequestError::new(FailureKind::MalformedBody, err.to_string())
}
