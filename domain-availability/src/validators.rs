//! 参数校验
//!
//! Pure checks run before any request is built. Each failure is a
//! [`DomainAvailabilityError::Parameter`] carrying a fixed message.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{DomainAvailabilityError, Result};
use crate::types::{CreditsType, Mode, OutputFormat};

const INVALID_API_KEY: &str = "Invalid API key format.";
const INVALID_DOMAIN_NAME: &str = "Invalid domain name.";
const INCORRECT_VALUE: &str = "Incorrect value.";
const INVALID_OUTPUT_FORMAT: &str = "Output format should be either JSON or XML.";

static API_KEY_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)^at_[a-z0-9]{29}$").ok());

// Labels: 1-63 chars of [0-9a-z_-], no leading/trailing '-' or '_'.
// TLD: 2-63 chars of [0-9a-z-], alphanumeric at both ends.
static DOMAIN_NAME_RE: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(?:[0-9a-z](?:[0-9a-z_-]{0,61}[0-9a-z])?\.)+[0-9a-z][0-9a-z-]{0,61}[0-9a-z]$",
    )
    .ok()
});

/// A pattern that failed to compile matches nothing.
fn is_match(pattern: Option<&Regex>, text: &str) -> bool {
    pattern.is_some_and(|re| re.is_match(text))
}

/// Check an API key (`at_` followed by 29 alphanumerics, any case).
/// Returns the key unchanged.
pub fn validate_api_key(api_key: &str) -> Result<&str> {
    if is_match((*API_KEY_RE).as_ref(), api_key) {
        Ok(api_key)
    } else {
        Err(DomainAvailabilityError::parameter(INVALID_API_KEY))
    }
}

/// Check a domain name against the hostname grammar. Returns it unchanged.
pub fn validate_domain_name(domain: &str) -> Result<&str> {
    if !domain.is_empty() && is_match((*DOMAIN_NAME_RE).as_ref(), domain) {
        Ok(domain)
    } else {
        Err(DomainAvailabilityError::parameter(INVALID_DOMAIN_NAME))
    }
}

pub fn validate_mode(value: &str) -> Result<Mode> {
    match value.to_uppercase().as_str() {
        "DNS_ONLY" => Ok(Mode::DnsOnly),
        "DNS_AND_WHOIS" => Ok(Mode::DnsAndWhois),
        _ => Err(DomainAvailabilityError::parameter(INCORRECT_VALUE)),
    }
}

/// `DA` is the wire value for domain-availability credits; the long form is
/// accepted as an alias.
pub fn validate_credits_type(value: &str) -> Result<CreditsType> {
    match value.to_uppercase().as_str() {
        "WHOIS" => Ok(CreditsType::Whois),
        "DA" | "DOMAIN_AVAILABILITY" => Ok(CreditsType::DomainAvailability),
        _ => Err(DomainAvailabilityError::parameter(INCORRECT_VALUE)),
    }
}

pub fn validate_output_format(value: &str) -> Result<OutputFormat> {
    if value.eq_ignore_ascii_case("json") {
        Ok(OutputFormat::Json)
    } else if value.eq_ignore_ascii_case("xml") {
        Ok(OutputFormat::Xml)
    } else {
        Err(DomainAvailabilityError::parameter(INVALID_OUTPUT_FORMAT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parameter_message(result: Result<impl std::fmt::Debug>) -> String {
        match result {
            Err(DomainAvailabilityError::Parameter { message }) => message,
            other => panic!("expected a parameter error, got {other:?}"),
        }
    }

    #[test]
    fn patterns_compile() {
        assert!(API_KEY_RE.is_some());
        assert!(DOMAIN_NAME_RE.is_some());
    }

    // ---- API key ----

    #[test]
    fn api_key_valid() {
        let key = "at_0123456789abcdefghijklmnopqrs";
        assert_eq!(validate_api_key(key).unwrap(), key);
    }

    #[test]
    fn api_key_is_case_insensitive() {
        let key = "AT_0123456789ABCDEFGHIJKLMNOPQRS";
        assert_eq!(validate_api_key(key).unwrap(), key);
    }

    #[test]
    fn api_key_invalid() {
        for key in [
            "",
            "at_",
            "at_0123456789abcdefghijklmnopqr",
            "at_0123456789abcdefghijklmnopqrst",
            "xx_0123456789abcdefghijklmnopqrs",
            "at_0123456789abcdefghijklmnopq-s",
            " at_0123456789abcdefghijklmnopqrs",
        ] {
            assert_eq!(
                parameter_message(validate_api_key(key)),
                "Invalid API key format.",
                "key {key:?}"
            );
        }
    }

    // ---- Domain name ----

    #[test]
    fn domain_valid() {
        for domain in [
            "whoisxmlapi.com",
            "google.com",
            "sub.domain.example.co.uk",
            "my_host.example.com",
            "a-b.example.io",
            "xn--80ak6aa92e.com",
            "WHOISXMLAPI.COM",
            "1.2.3.example.c0",
        ] {
            assert_eq!(validate_domain_name(domain).unwrap(), domain);
        }
    }

    #[test]
    fn domain_longest_label() {
        let domain = format!("{}.com", "a".repeat(63));
        assert!(validate_domain_name(&domain).is_ok());

        let domain = format!("{}.com", "a".repeat(64));
        assert!(validate_domain_name(&domain).is_err());
    }

    #[test]
    fn domain_invalid() {
        for domain in [
            "",
            "incorrect-domain",
            "-leading.com",
            "trailing-.com",
            "_leading.com",
            "trailing_.com",
            "example.c",
            "example.-com",
            "example.com-",
            "example.co_m",
            "example..com",
            ".example.com",
            "example.com.",
            "exa mple.com",
        ] {
            assert_eq!(
                parameter_message(validate_domain_name(domain)),
                "Invalid domain name.",
                "domain {domain:?}"
            );
        }
    }

    // ---- Enums ----

    #[test]
    fn mode_any_case() {
        assert_eq!(validate_mode("dns_only").unwrap(), Mode::DnsOnly);
        assert_eq!(validate_mode("Dns_And_Whois").unwrap(), Mode::DnsAndWhois);
        assert_eq!(validate_mode("DNS_AND_WHOIS").unwrap().as_str(), "DNS_AND_WHOIS");
    }

    #[test]
    fn mode_invalid() {
        assert_eq!(parameter_message(validate_mode("full")), "Incorrect value.");
        assert_eq!(parameter_message(validate_mode("")), "Incorrect value.");
    }

    #[test]
    fn credits_type_any_case() {
        assert_eq!(validate_credits_type("whois").unwrap(), CreditsType::Whois);
        assert_eq!(
            validate_credits_type("da").unwrap(),
            CreditsType::DomainAvailability
        );
        assert_eq!(
            validate_credits_type("domain_availability").unwrap().as_str(),
            "DA"
        );
    }

    #[test]
    fn credits_type_invalid() {
        assert_eq!(
            parameter_message(validate_credits_type("drs")),
            "Incorrect value."
        );
    }

    #[test]
    fn output_format_any_case() {
        assert_eq!(validate_output_format("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(validate_output_format("Xml").unwrap(), OutputFormat::Xml);
        assert_eq!(validate_output_format("XML").unwrap().as_str(), "xml");
    }

    #[test]
    fn output_format_invalid() {
        for value in ["pdf", "", "jsonx", "xjson", "json xml"] {
            assert_eq!(
                parameter_message(validate_output_format(value)),
                "Output format should be either JSON or XML.",
                "value {value:?}"
            );
        }
    }
}
