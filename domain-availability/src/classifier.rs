//! Response classification
//!
//! Decides, from the HTTP status and body alone, whether a response is a
//! success or one of the API error kinds. The status code always wins over
//! the body: a 403 with a garbage body is still an authentication error.

use serde_json::Value;

use crate::error::{DomainAvailabilityError, ErrorPayload, Result};
use crate::http_client::BodyReadError;
use crate::response::ErrorMessage;

/// Classify a response, returning the body unchanged on success.
pub fn classify_response(status: u16, body: String) -> Result<String> {
    match status {
        401..=403 => Err(DomainAvailabilityError::Auth {
            status,
            payload: ErrorPayload::from_body(&body),
        }),
        400 | 422 => Err(DomainAvailabilityError::BadRequest {
            status,
            payload: ErrorPayload::from_body(&body),
        }),
        300.. => Err(DomainAvailabilityError::Http { status, body }),
        _ => match error_in_body(&body) {
            Some(detail) => Err(DomainAvailabilityError::Response { detail }),
            None => Ok(body),
        },
    }
}

/// Classify a response whose body could not be read.
///
/// The status still decides the kind; only a 2xx with an unreadable body
/// is a connection failure.
pub(crate) fn classify_unreadable(status: u16, error: BodyReadError) -> DomainAvailabilityError {
    match status {
        401..=403 => DomainAvailabilityError::Auth {
            status,
            payload: unreadable_payload(&error),
        },
        400 | 422 => DomainAvailabilityError::BadRequest {
            status,
            payload: unreadable_payload(&error),
        },
        300.. => DomainAvailabilityError::Http {
            status,
            body: String::new(),
        },
        _ => DomainAvailabilityError::Connection {
            detail: error.detail,
            timeout: error.timeout,
        },
    }
}

fn unreadable_payload(error: &BodyReadError) -> ErrorPayload {
    ErrorPayload::Unparsable {
        reason: error.detail.clone(),
        body: String::new(),
    }
}

/// An error object hiding behind a 2xx status, if there is one.
///
/// Non-JSON bodies (e.g. XML) and JSON without an error shape are not errors.
fn error_in_body(body: &str) -> Option<ErrorMessage> {
    match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(values)) if ErrorMessage::is_error_shaped(&values) => {
            Some(ErrorMessage::from_map(&values))
        }
        _ => None,
    }
}
