//! Response models
//!
//! Both models are built from a loosely-typed JSON map with per-field
//! defaulting, so construction never fails on a missing or mistyped key.
//! Whether the body had the right shape at all is decided by the caller
//! (the `DomainInfo` root key is the success/error discriminator).

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{DomainAvailabilityError, Result};
use crate::utils::log_sanitizer::truncate_for_log;

/// Root key of a successful JSON response.
pub(crate) const DOMAIN_INFO_KEY: &str = "DomainInfo";

// ============ Field extraction ============

/// String field: JSON strings as-is, other scalars stringified, missing or
/// `null` as empty.
fn string_value(values: &Map<String, Value>, key: &str) -> String {
    match values.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

/// Integer field: JSON integers or numeric strings, anything else as 0.
#[allow(clippy::cast_possible_truncation)]
fn int_value(values: &Map<String, Value>, key: &str) -> i64 {
    match values.get(key) {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or_default(),
        Some(Value::String(s)) => s.trim().parse().unwrap_or_default(),
        _ => 0,
    }
}

// ============ Domain availability ============

/// Availability verdict as reported by the service.
///
/// Values other than `AVAILABLE` / `UNAVAILABLE` are kept verbatim in
/// [`Other`](Self::Other); only a missing or empty field is [`Unknown`](Self::Unknown).
/// Serialized as the raw wire string (`""` for `Unknown`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DomainAvailability {
    Available,
    Unavailable,
    /// Any other non-empty value, e.g. `UNDETERMINED`.
    Other(String),
    /// Missing from the response or empty.
    #[default]
    Unknown,
}

impl DomainAvailability {
    /// Map the raw `domainAvailability` value. Matching is exact, as sent by the service.
    pub fn from_raw(raw: &str) -> Self {
        match raw {
            "" => Self::Unknown,
            "AVAILABLE" => Self::Available,
            "UNAVAILABLE" => Self::Unavailable,
            other => Self::Other(other.to_string()),
        }
    }

    /// The raw value sent by the service; empty for [`Unknown`](Self::Unknown).
    pub fn as_str(&self) -> &str {
        match self {
            Self::Available => "AVAILABLE",
            Self::Unavailable => "UNAVAILABLE",
            Self::Other(raw) => raw,
            Self::Unknown => "",
        }
    }
}

impl From<String> for DomainAvailability {
    fn from(raw: String) -> Self {
        Self::from_raw(&raw)
    }
}

impl From<DomainAvailability> for String {
    fn from(value: DomainAvailability) -> Self {
        match value {
            DomainAvailability::Other(raw) => raw,
            other => other.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for DomainAvailability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a successful availability lookup.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainInfo {
    /// Domain name echoed by the service; empty when absent.
    pub domain_name: String,
    /// Availability verdict.
    pub domain_availability: DomainAvailability,
}

impl DomainInfo {
    /// Build from the object found under the `DomainInfo` root key.
    pub fn from_map(values: &Map<String, Value>) -> Self {
        Self {
            domain_name: string_value(values, "domainName"),
            domain_availability: DomainAvailability::from_raw(&string_value(
                values,
                "domainAvailability",
            )),
        }
    }

    /// Build from any JSON value; non-objects yield the all-default result.
    pub fn from_value(value: &Value) -> Self {
        value.as_object().map(Self::from_map).unwrap_or_default()
    }

    /// `Some(true)` only for `AVAILABLE`, `None` when the service sent no
    /// value, `Some(false)` for anything else.
    pub fn is_available(&self) -> Option<bool> {
        match self.domain_availability {
            DomainAvailability::Available => Some(true),
            DomainAvailability::Unknown => None,
            DomainAvailability::Unavailable | DomainAvailability::Other(_) => Some(false),
        }
    }
}

/// Parse a JSON lookup response into a [`DomainInfo`].
///
/// # Errors
/// * `DomainAvailabilityError::UnparsableResponse` - the body is not JSON, or
///   has no `DomainInfo` root element
pub fn parse_domain_info(body: &str) -> Result<DomainInfo> {
    let parsed: Value = serde_json::from_str(body).map_err(|e| {
        log::error!("JSON parse failed: {e}");
        log::error!("Raw response: {}", truncate_for_log(body));
        DomainAvailabilityError::UnparsableResponse {
            message: "Could not parse API response".to_string(),
            cause: Some(e.to_string()),
        }
    })?;

    parsed
        .get(DOMAIN_INFO_KEY)
        .map(DomainInfo::from_value)
        .ok_or_else(|| DomainAvailabilityError::UnparsableResponse {
            message: "Could not find the correct root element.".to_string(),
            cause: None,
        })
}

// ============ Error message ============

/// Error detail sent by the service as `{"code": <int>, "messages": <string>}`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ErrorMessage {
    /// Error code; 0 when absent.
    pub code: i64,
    /// Error text (the `messages` key); empty when absent.
    pub message: String,
}

impl ErrorMessage {
    pub fn from_map(values: &Map<String, Value>) -> Self {
        Self {
            code: int_value(values, "code"),
            message: string_value(values, "messages"),
        }
    }

    /// Parse an error body. Fails only when the text is not a JSON object.
    pub fn parse(body: &str) -> std::result::Result<Self, String> {
        match serde_json::from_str::<Value>(body) {
            Ok(Value::Object(values)) => Ok(Self::from_map(&values)),
            Ok(_) => Err("expected a JSON object".to_string()),
            Err(e) => Err(e.to_string()),
        }
    }

    /// Whether a parsed body looks like an error rather than a lookup result.
    pub(crate) fn is_error_shaped(values: &Map<String, Value>) -> bool {
        !values.contains_key(DOMAIN_INFO_KEY)
            && (values.contains_key("code") || values.contains_key("messages"))
    }
}

impl std::fmt::Display for ErrorMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}
