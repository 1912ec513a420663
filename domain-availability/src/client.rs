//! Domain Availability API client

use std::time::Duration;

use crate::classifier::{classify_response, classify_unreadable};
use crate::error::{DomainAvailabilityError, Result};
use crate::http_client::HttpTransport;
use crate::payload::{QueryPayload, build_payload};
use crate::response::{DomainInfo, parse_domain_info};
use crate::types::{
    ClientConfig, CreditsType, DEFAULT_BASE_URL, LookupOptions, Mode, OutputFormat,
    as_invalid_value, checked_base_url, checked_timeout,
};
use crate::utils::log_sanitizer::mask_api_key;
use crate::validators::{
    validate_api_key, validate_credits_type, validate_domain_name, validate_mode,
    validate_output_format,
};

/// Environment variable read by [`Client::from_env`] for the API key.
pub const ENV_API_KEY: &str = "DOMAIN_AVAILABILITY_API_KEY";

/// Format requested by [`Client::data`], the only one it can parse.
const PARSABLE_FORMAT: OutputFormat = OutputFormat::Json;

/// Client for the Domain Availability API.
///
/// Holds the API key and the lookup defaults. Lookups take `&self` and never
/// touch shared state, so one configured client can serve concurrent
/// lookups; configuration updates need `&mut self`.
pub struct Client {
    api_key: String,
    config: ClientConfig,
    http: HttpTransport,
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("api_key", &mask_api_key(&self.api_key))
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Client {
    /// Create a client with the default configuration.
    ///
    /// Fails with [`DomainAvailabilityError::Parameter`] if the key is not of
    /// the `at_` + 29 alphanumerics form.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(api_key, ClientConfig::default())
    }

    pub fn with_config(api_key: impl Into<String>, config: ClientConfig) -> Result<Self> {
        let api_key = api_key.into();
        validate_api_key(&api_key)?;
        Self::build(api_key, config)
    }

    /// Create a client from `DOMAIN_AVAILABILITY_*` environment variables.
    ///
    /// The API key is optional here: without it the client is created, but
    /// every lookup fails with [`DomainAvailabilityError::EmptyApiKey`].
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let config = ClientConfig::from_lookup(&lookup)?;
        let api_key = lookup(ENV_API_KEY)
            .map(|key| key.trim().to_string())
            .unwrap_or_default();
        if !api_key.is_empty() {
            validate_api_key(&api_key).map_err(|e| as_invalid_value(ENV_API_KEY, e))?;
        }
        Self::build(api_key, config)
    }

    fn build(api_key: String, config: ClientConfig) -> Result<Self> {
        let config = ClientConfig {
            base_url: checked_base_url("base_url", &config.base_url)?,
            timeout: checked_timeout("timeout", config.timeout)?,
            ..config
        };
        Ok(Self {
            api_key,
            config,
            http: HttpTransport::new()?,
        })
    }

    // ============ Configuration ============

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn mode(&self) -> Mode {
        self.config.mode
    }

    pub fn credits_type(&self) -> CreditsType {
        self.config.credits_type
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.config.timeout
    }

    /// Replace the API key. An invalid key is a
    /// [`DomainAvailabilityError::Parameter`] error and leaves the old key in place.
    pub fn set_api_key(&mut self, api_key: impl Into<String>) -> Result<()> {
        let api_key = api_key.into();
        validate_api_key(&api_key)?;
        self.api_key = api_key;
        Ok(())
    }

    pub fn set_mode(&mut self, mode: impl AsRef<str>) -> Result<()> {
        self.config.mode = validate_mode(mode.as_ref()).map_err(|e| as_invalid_value("mode", e))?;
        Ok(())
    }

    pub fn set_credits_type(&mut self, credits_type: impl AsRef<str>) -> Result<()> {
        self.config.credits_type = validate_credits_type(credits_type.as_ref())
            .map_err(|e| as_invalid_value("credits_type", e))?;
        Ok(())
    }

    /// Point the client at another endpoint; `None` restores [`DEFAULT_BASE_URL`].
    pub fn set_base_url(&mut self, base_url: Option<&str>) -> Result<()> {
        self.config.base_url = match base_url {
            Some(url) => checked_base_url("base_url", url)?,
            None => DEFAULT_BASE_URL.to_string(),
        };
        Ok(())
    }

    pub fn set_timeout(&mut self, timeout: Duration) -> Result<()> {
        self.config.timeout = checked_timeout("timeout", timeout)?;
        Ok(())
    }

    // ============ Lookups ============

    /// Look up a domain and return the response body as-is (JSON or XML).
    ///
    /// # Errors
    /// * `EmptyApiKey` - no API key configured
    /// * `Parameter` - invalid domain name or option value (no request is sent)
    /// * `Auth` - HTTP 401, 402 or 403
    /// * `BadRequest` - HTTP 400 or 422
    /// * `Http` - any other HTTP status >= 300
    /// * `Response` - a successful status with an error body
    /// * `Connection` - no HTTP response was obtained
    pub async fn raw_data(&self, domain: &str, options: &LookupOptions) -> Result<String> {
        let result = match self.prepare(domain, options, None) {
            Ok(payload) => self.execute(&payload).await,
            Err(e) => Err(e),
        };
        result.inspect_err(|e| log_failure(domain, e))
    }

    /// Look up a domain and parse the result.
    ///
    /// Always requests JSON. An `output_format` option is still validated, so
    /// an unsupported value fails before any request is sent.
    ///
    /// # Errors
    /// Everything [`raw_data`](Self::raw_data) returns, plus
    /// `UnparsableResponse` when the body is not JSON or lacks the
    /// `DomainInfo` root element.
    pub async fn data(&self, domain: &str, options: &LookupOptions) -> Result<DomainInfo> {
        let result = match self.prepare(domain, options, Some(PARSABLE_FORMAT)) {
            Ok(payload) => match self.execute(&payload).await {
                Ok(body) => parse_domain_info(&body),
                Err(e) => Err(e),
            },
            Err(e) => Err(e),
        };
        result.inspect_err(|e| log_failure(domain, e))
    }

    /// Validate the inputs and merge per-call options over the configuration.
    fn prepare<'a>(
        &'a self,
        domain: &'a str,
        options: &LookupOptions,
        forced_format: Option<OutputFormat>,
    ) -> Result<QueryPayload<'a>> {
        if self.api_key.is_empty() {
            return Err(DomainAvailabilityError::EmptyApiKey);
        }

        let domain = validate_domain_name(domain)?;

        let credits = match options.credits_type.as_deref() {
            Some(value) => validate_credits_type(value)?,
            None => self.config.credits_type,
        };
        let requested_format = match options.output_format.as_deref() {
            Some(value) => validate_output_format(value)?,
            None => OutputFormat::default(),
        };
        let mode = match options.mode.as_deref() {
            Some(value) => validate_mode(value)?,
            None => self.config.mode,
        };

        Ok(build_payload(
            &self.api_key,
            domain,
            credits,
            mode,
            forced_format.unwrap_or(requested_format),
        ))
    }

    async fn execute(&self, payload: &QueryPayload<'_>) -> Result<String> {
        let response = self
            .http
            .get(&self.config.base_url, payload, self.config.timeout)
            .await?;
        match response.body {
            Ok(body) => classify_response(response.status, body),
            Err(e) => Err(classify_unreadable(response.status, e)),
        }
    }
}

fn log_failure(domain: &str, error: &DomainAvailabilityError) {
    if error.is_expected() {
        log::warn!("Domain availability lookup for '{domain}' failed: {error}");
    } else {
        log::error!("Domain availability lookup for '{domain}' failed: {error}");
    }
}
