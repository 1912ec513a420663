//! Query payload for a lookup request

use serde::Serialize;

use crate::types::{CreditsType, Mode, OutputFormat};

/// Flat query-string payload sent with every lookup.
///
/// Serialized with the service's parameter names
/// (`apiKey`, `domainName`, `credits`, `mode`, `outputFormat`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryPayload<'a> {
    pub api_key: &'a str,
    pub domain_name: &'a str,
    pub credits: CreditsType,
    pub mode: Mode,
    pub output_format: OutputFormat,
}

/// Assemble the payload. Inputs are expected to be validated already.
pub fn build_payload<'a>(
    api_key: &'a str,
    domain_name: &'a str,
    credits: CreditsType,
    mode: Mode,
    output_format: OutputFormat,
) -> QueryPayload<'a> {
    QueryPayload {
        api_key,
        domain_name,
        credits,
        mode,
        output_format,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const KEY: &str = "at_0123456789abcdefghijklmnopqrs";

    #[test]
    fn payload_uses_service_parameter_names() {
        let payload = build_payload(
            KEY,
            "whoisxmlapi.com",
            CreditsType::DomainAvailability,
            Mode::DnsOnly,
            OutputFormat::Xml,
        );
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "apiKey": KEY,
                "domainName": "whoisxmlapi.com",
                "credits": "DA",
                "mode": "DNS_ONLY",
                "outputFormat": "xml",
            })
        );
    }

    #[test]
    fn payload_with_defaults() {
        let payload = build_payload(
            KEY,
            "example.com",
            CreditsType::default(),
            Mode::default(),
            OutputFormat::default(),
        );
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["credits"], "WHOIS");
        assert_eq!(value["mode"], "DNS_AND_WHOIS");
        assert_eq!(value["outputFormat"], "json");
        assert_eq!(value.as_object().map(serde_json::Map::len), Some(5));
    }
}
