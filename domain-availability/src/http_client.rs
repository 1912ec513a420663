//! HTTP transport
//!
//! The only networking code in the crate: one GET with the payload as query
//! parameters. Status and body are handed back untouched; interpreting them
//! is the classifier's job, even when the body could not be read. Nothing is
//! retried.

use std::time::Duration;

use reqwest::Client;

use crate::error::{DomainAvailabilityError, Result};
use crate::payload::QueryPayload;
use crate::types::DEFAULT_CONNECT_TIMEOUT_SECS;
use crate::utils::log_sanitizer::{mask_api_key, truncate_for_log};

/// The status line arrived but reading the body failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BodyReadError {
    pub detail: String,
    pub timeout: bool,
}

/// Status plus the body, or why the body could not be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: std::result::Result<String, BodyReadError>,
}

/// Thin wrapper around a shared [`reqwest::Client`].
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// 创建带连接超时配置的 HTTP Client（请求超时按调用传入）
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
            .build()
            .map_err(|e| client_build_error(&e))?;
        Ok(Self { client })
    }

    /// Performs the GET request and returns the status with the body.
    ///
    /// # Errors
    /// * `DomainAvailabilityError::Connection` - no HTTP response was obtained
    pub async fn get(
        &self,
        base_url: &str,
        payload: &QueryPayload<'_>,
        timeout: Duration,
    ) -> Result<RawResponse> {
        log::debug!(
            "GET {base_url} domainName={} mode={} credits={} outputFormat={} apiKey={}",
            payload.domain_name,
            payload.mode,
            payload.credits,
            payload.output_format,
            mask_api_key(payload.api_key)
        );

        let response = self
            .client
            .get(base_url)
            .query(payload)
            .timeout(timeout)
            .send()
            .await
            .map_err(connection_error)?;

        let status_code = response.status().as_u16();
        log::debug!("Response Status: {status_code}");

        let body = match response.text().await {
            Ok(text) => {
                log::debug!("Response Body: {}", truncate_for_log(&text));
                Ok(text)
            }
            Err(e) => {
                let timeout = e.is_timeout();
                let e = e.without_url();
                log::debug!("Response body unreadable: {e}");
                Err(BodyReadError {
                    detail: format!("Failed to read response body: {e}"),
                    timeout,
                })
            }
        };

        Ok(RawResponse {
            status: status_code,
            body,
        })
    }
}

fn client_build_error(e: &impl std::fmt::Display) -> DomainAvailabilityError {
    DomainAvailabilityError::invalid_value(
        "http_client",
        format!("failed to create HTTP client: {e}"),
    )
}

fn connection_error(e: reqwest::Error) -> DomainAvailabilityError {
    let timeout = e.is_timeout();
    // reqwest 的错误信息里带完整 URL（含 apiKey），需去掉
    DomainAvailabilityError::Connection {
        detail: e.without_url().to_string(),
        timeout,
    }
}
