//! Log sanitization utilities
//!
//! Keeps API keys and oversized response bodies out of debug/error logs.

/// Response bodies longer than this many bytes are cut in logs.
const BODY_LOG_LIMIT: usize = 256;

/// Leading characters of an API key that stay visible in logs.
const API_KEY_VISIBLE_PREFIX: usize = 6;

/// Longest prefix of `text` that is at most `max_bytes` long and ends on a char boundary.
fn prefix_within(text: &str, max_bytes: usize) -> &str {
    let end = (0..=max_bytes.min(text.len()))
        .rev()
        .find(|&i| text.is_char_boundary(i))
        .unwrap_or(0);
    &text[..end]
}

/// Shorten a response body for logging, noting the full size when cut.
pub fn truncate_for_log(body: &str) -> String {
    if body.len() <= BODY_LOG_LIMIT {
        return body.to_string();
    }
    format!(
        "{}... [truncated, total {} bytes]",
        prefix_within(body, BODY_LOG_LIMIT),
        body.len()
    )
}

/// Redact an API key, keeping only its prefix (`at_xxx***`).
pub fn mask_api_key(api_key: &str) -> String {
    if api_key.is_empty() {
        return "<empty>".to_string();
    }
    let visible = API_KEY_VISIBLE_PREFIX.min(api_key.len() / 2);
    format!("{}***", prefix_within(api_key, visible))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_body_kept_whole() {
        let body = r#"{"DomainInfo":{"domainAvailability":"AVAILABLE","domainName":"x.com"}}"#;
        assert_eq!(truncate_for_log(body), body);
    }

    #[test]
    fn long_xml_body_is_cut() {
        let body = format!(
            "<?xml version=\"1.0\"?><DomainInfo>{}</DomainInfo>",
            "<domainName>whoisxmlapi.com</domainName>".repeat(20)
        );
        let logged = truncate_for_log(&body);
        assert!(logged.starts_with("<?xml"));
        assert!(logged.ends_with(&format!("[truncated, total {} bytes]", body.len())));
        assert!(!logged.contains("</DomainInfo>"));
    }

    #[test]
    fn cut_lands_on_char_boundary() {
        // 3-byte chars: 256 is not a multiple of 3
        let body = format!("{{\"messages\": \"{}\"}}", "域".repeat(120));
        let logged = truncate_for_log(&body);
        let kept = logged.split("... [truncated").next().unwrap();
        assert!(kept.len() <= BODY_LOG_LIMIT);
        assert!(kept.len() > BODY_LOG_LIMIT - 3);
    }

    #[test]
    fn prefix_within_bounds() {
        assert_eq!(prefix_within("whois", 10), "whois");
        assert_eq!(prefix_within("whois", 0), "");
        assert_eq!(prefix_within("é", 1), "");
    }

    #[test]
    fn api_key_is_masked() {
        let masked = mask_api_key("at_0123456789abcdefghijklmnopqrs");
        assert_eq!(masked, "at_012***");
        assert!(!masked.contains("abcdef"));
    }

    #[test]
    fn short_and_empty_keys() {
        assert_eq!(mask_api_key(""), "<empty>");
        assert_eq!(mask_api_key("ab"), "a***");
        assert_eq!(mask_api_key("x"), "***");
    }
}
