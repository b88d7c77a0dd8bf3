//! `{data}` / `{message}` envelope decoding.
//!
//! Every API response is wrapped: success bodies are `{"data": ...}` and
//! error bodies are `{"message": "..."}` with a non-2xx status.

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::core::error::{ApiError, PARSE_ERROR_MESSAGE};

#[derive(Deserialize)]
struct DataEnvelope<T> {
    data: T,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    message: String,
}

/// Error for a non-success response.
///
/// Uses the body's `message` when it is a JSON object with a string
/// `message`, the generic message otherwise.
pub fn decode_error(status: u16, body: &str) -> ApiError {
    serde_json::from_str::<ErrorEnvelope>(body)
        .map(|env| ApiError::new(env.message, status))
        .unwrap_or_else(|_| ApiError::generic(status))
}

/// Payload of a response, or the error it represents.
pub fn decode_response<T: DeserializeOwned>(
    ok: bool,
    status: u16,
    body: &str,
) -> Result<T, ApiError> {
    if !ok {
        return Err(decode_error(status, body));
    }
    serde_json::from_str::<DataEnvelope<T>>(body)
        .map(|env| env.data)
        .map_err(|_| ApiError::new(PARSE_ERROR_MESSAGE, status))
}

/// Success/failure only; a success body is ignored.
pub fn decode_status(ok: bool, status: u16, body: &str) -> Result<(), ApiError> {
    if ok { Ok(()) } else { Err(decode_error(status, body)) }
}
