//! # domain-availability
//!
//! A typed client for the [WhoisXML API Domain Availability](https://domain-availability.whoisxmlapi.com/)
//! service: one validated GET per lookup, one classified response.
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)*: Use the platform's native TLS implementation.
//! - **`rustls`**: Use rustls. Recommended for cross-compilation and Android targets.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use domain_availability::{Client, LookupOptions, Mode};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::new("at_00000000000000000000000000000")?;
//!
//!     // Parsed result (always requested as JSON)
//!     let info = client.data("whoisxmlapi.com", &LookupOptions::default()).await?;
//!     println!("{} -> {}", info.domain_name, info.domain_availability);
//!
//!     // Raw body, with per-call overrides
//!     let xml = client
//!         .raw_data(
//!             "whoisxmlapi.com",
//!             &LookupOptions::new().mode(Mode::DnsOnly).output_format("xml"),
//!         )
//!         .await?;
//!     println!("{xml}");
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Every operation returns [`Result<T, DomainAvailabilityError>`](DomainAvailabilityError):
//!
//! - [`DomainAvailabilityError::Parameter`]: invalid input, raised before any request
//! - [`DomainAvailabilityError::InvalidValue`]: rejected configuration value
//! - [`DomainAvailabilityError::EmptyApiKey`]: no API key configured
//! - [`DomainAvailabilityError::Auth`]: HTTP 401/402/403
//! - [`DomainAvailabilityError::BadRequest`]: HTTP 400/422
//! - [`DomainAvailabilityError::Http`]: any other HTTP status >= 300
//! - [`DomainAvailabilityError::Response`]: error body behind a successful status
//! - [`DomainAvailabilityError::UnparsableResponse`]: body could not be parsed
//! - [`DomainAvailabilityError::Connection`]: no HTTP response was obtained
//!
//! Nothing is cached or retried; every failure reaches the caller directly.
//!
//! ## Logging
//!
//! The crate logs through the [`log`] facade (request/response at `debug`,
//! failed lookups at `warn`/`error`). API keys are redacted.

mod classifier;
mod client;
mod error;
mod http_client;
mod payload;
mod response;
mod types;
mod utils;

/// Input validators used before any request is built.
pub mod validators;

// Re-export error types
pub use error::{DomainAvailabilityError, ErrorPayload, Result};

pub use client::{Client, ENV_API_KEY};

pub use classifier::classify_response;
pub use payload::{QueryPayload, build_payload};

// Re-export types
pub use response::{DomainAvailability, DomainInfo, ErrorMessage, parse_domain_info};
pub use types::{
    ClientConfig, CreditsType, DEFAULT_BASE_URL, DEFAULT_CONNECT_TIMEOUT_SECS,
    DEFAULT_TIMEOUT_SECS, ENV_BASE_URL, ENV_CREDITS_TYPE, ENV_MODE, ENV_TIMEOUT_SECS,
    LookupOptions, Mode, OutputFormat,
};
