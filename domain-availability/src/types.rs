use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{DomainAvailabilityError, Result};
use crate::validators::{validate_credits_type, validate_mode, validate_output_format};

// ============ Defaults ============

/// Default Domain Availability API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://domain-availability.whoisxmlapi.com/api/v1";
/// 默认请求超时（秒）
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// 默认连接超时（秒）
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

// ============ Lookup parameters ============

/// Whether the lookup relies on DNS heuristics only or also on WHOIS data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Mode {
    DnsOnly,
    #[default]
    DnsAndWhois,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DnsOnly => "DNS_ONLY",
            Self::DnsAndWhois => "DNS_AND_WHOIS",
        }
    }
}

/// Which billing quota a lookup consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CreditsType {
    #[default]
    #[serde(rename = "WHOIS")]
    Whois,
    #[serde(rename = "DA")]
    DomainAvailability,
}

impl CreditsType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Whois => "WHOIS",
            Self::DomainAvailability => "DA",
        }
    }
}

/// Response body format. Only [`OutputFormat::Json`] can be parsed by
/// [`Client::data`](crate::Client::data); XML is returned as opaque text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Xml,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Xml => "xml",
        }
    }
}

macro_rules! impl_wire_value {
    ($ty:ty, $validate:ident) => {
        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = DomainAvailabilityError;

            fn from_str(s: &str) -> Result<Self> {
                $validate(s)
            }
        }

        impl AsRef<str> for $ty {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl From<$ty> for String {
            fn from(value: $ty) -> Self {
                value.as_str().to_string()
            }
        }
    };
}

impl_wire_value!(Mode, validate_mode);
impl_wire_value!(CreditsType, validate_credits_type);
impl_wire_value!(OutputFormat, validate_output_format);

/// Per-call overrides for a lookup.
///
/// Values are kept as strings and validated when the lookup runs, so an
/// unsupported value surfaces as a [`DomainAvailabilityError::Parameter`]
/// before any request is sent. Unset fields fall back to the client
/// configuration (or JSON for the output format).
///
/// ```rust
/// use domain_availability::{LookupOptions, Mode};
///
/// let options = LookupOptions::new().mode(Mode::DnsOnly).output_format("xml");
/// assert_eq!(options.mode.as_deref(), Some("DNS_ONLY"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credits_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_format: Option<String>,
}

impl LookupOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = Some(mode.into());
        self
    }

    #[must_use]
    pub fn credits_type(mut self, credits_type: impl Into<String>) -> Self {
        self.credits_type = Some(credits_type.into());
        self
    }

    #[must_use]
    pub fn output_format(mut self, output_format: impl Into<String>) -> Self {
        self.output_format = Some(output_format.into());
        self
    }
}

// ============ Client configuration ============

/// Environment variables read by [`ClientConfig::from_env`].
pub const ENV_MODE: &str = "DOMAIN_AVAILABILITY_MODE";
pub const ENV_CREDITS_TYPE: &str = "DOMAIN_AVAILABILITY_CREDITS_TYPE";
pub const ENV_BASE_URL: &str = "DOMAIN_AVAILABILITY_BASE_URL";
pub const ENV_TIMEOUT_SECS: &str = "DOMAIN_AVAILABILITY_TIMEOUT_SECS";

/// Client-wide lookup defaults and transport settings.
///
/// # Default
///
/// `DNS_AND_WHOIS` mode, `WHOIS` credits, [`DEFAULT_BASE_URL`] and a
/// [`DEFAULT_TIMEOUT_SECS`] second timeout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub mode: Mode,
    pub credits_type: CreditsType,
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            credits_type: CreditsType::default(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ClientConfig {
    /// Defaults overridden by the `DOMAIN_AVAILABILITY_*` environment variables.
    ///
    /// Unset variables keep their default; set but invalid ones are reported
    /// as [`DomainAvailabilityError::InvalidValue`] naming the variable.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(mode) = lookup(ENV_MODE) {
            config.mode = validate_mode(&mode).map_err(|e| as_invalid_value(ENV_MODE, e))?;
        }
        if let Some(credits) = lookup(ENV_CREDITS_TYPE) {
            config.credits_type = validate_credits_type(&credits)
                .map_err(|e| as_invalid_value(ENV_CREDITS_TYPE, e))?;
        }
        if let Some(base_url) = lookup(ENV_BASE_URL) {
            config.base_url = checked_base_url(ENV_BASE_URL, &base_url)?;
        }
        if let Some(secs) = lookup(ENV_TIMEOUT_SECS) {
            let secs: u64 = secs.trim().parse().map_err(|_| {
                DomainAvailabilityError::invalid_value(
                    ENV_TIMEOUT_SECS,
                    format!("expected a whole number of seconds, got '{secs}'"),
                )
            })?;
            config.timeout = checked_timeout(ENV_TIMEOUT_SECS, Duration::from_secs(secs))?;
        }

        Ok(config)
    }
}

/// Re-label a validator failure as a configuration error.
pub(crate) fn as_invalid_value(
    field: &str,
    error: DomainAvailabilityError,
) -> DomainAvailabilityError {
    match error {
        DomainAvailabilityError::Parameter { message } => {
            DomainAvailabilityError::invalid_value(field, message)
        }
        other => other,
    }
}

pub(crate) fn checked_base_url(field: &str, base_url: &str) -> Result<String> {
    match reqwest::Url::parse(base_url) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(base_url.to_string()),
        Ok(url) => Err(DomainAvailabilityError::invalid_value(
            field,
            format!("unsupported URL scheme '{}'", url.scheme()),
        )),
        Err(e) => Err(DomainAvailabilityError::invalid_value(
            field,
            format!("invalid URL '{base_url}': {e}"),
        )),
    }
}

pub(crate) fn checked_timeout(field: &str, timeout: Duration) -> Result<Duration> {
    if timeout.is_zero() {
        Err(DomainAvailabilityError::invalid_value(
            field,
            "timeout must be greater than zero",
        ))
    } else {
        Ok(timeout)
    }
}
