use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::response::ErrorMessage;

/// Error body attached to authentication and bad-request failures.
///
/// The service normally answers these statuses with a `{"code", "messages"}`
/// JSON object. When it does not, the raw body is kept together with the
/// reason it could not be read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ErrorPayload {
    /// The body was a JSON object and was read as an [`ErrorMessage`].
    Parsed(ErrorMessage),
    /// The body could not be read as a JSON object.
    Unparsable {
        /// Why parsing failed.
        reason: String,
        /// Raw response body.
        body: String,
    },
}

impl ErrorPayload {
    /// Read an error body, falling back to [`ErrorPayload::Unparsable`].
    pub fn from_body(body: &str) -> Self {
        match ErrorMessage::parse(body) {
            Ok(message) => Self::Parsed(message),
            Err(reason) => Self::Unparsable {
                reason,
                body: body.to_string(),
            },
        }
    }

    /// The structured server detail, if the body was readable.
    pub fn message(&self) -> Option<&ErrorMessage> {
        match self {
            Self::Parsed(message) => Some(message),
            Self::Unparsable { .. } => None,
        }
    }
}

impl std::fmt::Display for ErrorPayload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parsed(message) => write!(f, "{message}"),
            Self::Unparsable { reason, .. } => write!(f, "unparsable error body ({reason})"),
        }
    }
}

/// Unified error type for every Domain Availability API operation.
///
/// Every variant except [`Connection`](Self::Connection) belongs to the
/// Domain Availability API error family (see [`is_api_error`](Self::is_api_error));
/// `Connection` is a lower-level transport signal raised when no HTTP response
/// was obtained at all.
///
/// Nothing is retried internally: each variant reaches the caller as soon as it
/// is produced.
#[derive(Debug, Clone, Error, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum DomainAvailabilityError {
    /// A lookup argument failed validation. Raised before any network call.
    #[error("{message}")]
    Parameter {
        /// Human readable reason, e.g. `Invalid domain name.`
        message: String,
    },

    /// A configuration update was rejected.
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue {
        /// Name of the configuration field (or environment variable).
        field: String,
        /// Human readable reason.
        message: String,
    },

    /// The client has no API key configured.
    #[error("API key is empty")]
    EmptyApiKey,

    /// The server answered 401, 402 or 403.
    #[error("Authentication failed (HTTP {status}): {payload}")]
    Auth {
        /// HTTP status code.
        status: u16,
        /// Error body sent by the server.
        payload: ErrorPayload,
    },

    /// The server answered 400 or 422.
    #[error("Bad request (HTTP {status}): {payload}")]
    BadRequest {
        /// HTTP status code.
        status: u16,
        /// Error body sent by the server.
        payload: ErrorPayload,
    },

    /// Any other HTTP status >= 300.
    #[error("Unexpected HTTP status {status}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: String,
    },

    /// A successful status whose body describes an error.
    #[error("API returned an error: {detail}")]
    Response {
        /// Error reported in the body.
        detail: ErrorMessage,
    },

    /// The body could not be turned into a lookup result.
    #[error("{}", unparsable_message(.message, .cause.as_deref()))]
    UnparsableResponse {
        /// What went wrong.
        message: String,
        /// Underlying parse failure, when there was one.
        cause: Option<String>,
    },

    /// No HTTP response was obtained (DNS failure, connection refused, timeout).
    #[error("Connection error: {detail}")]
    Connection {
        /// Error details.
        detail: String,
        /// Whether the request timed out.
        timeout: bool,
    },
}

fn unparsable_message(message: &str, cause: Option<&str>) -> String {
    match cause {
        Some(cause) => format!("{message}: {cause}"),
        None => message.to_string(),
    }
}

impl DomainAvailabilityError {
    pub(crate) fn parameter(message: impl Into<String>) -> Self {
        Self::Parameter {
            message: message.into(),
        }
    }

    pub(crate) fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// `true` for every member of the API error family, `false` for
    /// transport-level [`Connection`](Self::Connection) failures.
    #[must_use]
    pub fn is_api_error(&self) -> bool {
        !matches!(self, Self::Connection { .. })
    }

    /// 是否为预期行为（用户输入、鉴权失败等），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::Parameter { .. }
                | Self::InvalidValue { .. }
                | Self::EmptyApiKey
                | Self::Auth { .. }
                | Self::BadRequest { .. }
                | Self::Response { .. }
        )
    }

    /// The structured error detail supplied by the server, if any.
    pub fn error_message(&self) -> Option<&ErrorMessage> {
        match self {
            Self::Auth { payload, .. } | Self::BadRequest { payload, .. } => payload.message(),
            Self::Response { detail } => Some(detail),
            _ => None,
        }
    }
}

/// Convenience type alias for `Result<T, DomainAvailabilityError>`.
pub type Result<T> = std::result::Result<T, DomainAvailabilityError>;
