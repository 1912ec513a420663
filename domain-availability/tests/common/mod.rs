//! 共享测试工具和辅助函数

#![allow(dead_code)]

use std::time::Duration;

use domain_availability::{Client, ClientConfig};
use wiremock::MockServer;

/// Well-formed key that the mock server accepts.
pub const TEST_API_KEY: &str = "at_0123456789abcdefghijklmnopqrs";

/// Well-formed key that the real service rejects.
pub const REJECTED_API_KEY: &str = "at_00000000000000000000000000000";

/// Path the mock service is mounted on.
pub const API_PATH: &str = "/api/v1";

pub const TEST_DOMAIN: &str = "whoisxmlapi.com";

pub const UNAVAILABLE_BODY: &str = r#"{
   "DomainInfo": {
      "domainAvailability": "UNAVAILABLE",
      "domainName": "whoisxmlapi.com"
   }
}"#;

pub const AVAILABLE_BODY: &str = r#"{
    "DomainInfo": {
        "domainAvailability": "AVAILABLE",
        "domainName": "dsajkdhksajhdkjsahdkjshakjdhsakdhksajhdsakdsadjksahdkjas.com"
    }
}"#;

pub const ACCESS_RESTRICTED_BODY: &str = r#"{
    "code": 403,
    "messages": "Access restricted. Check credits balance or enter the correct API key."
}"#;

pub const XML_BODY: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<DomainInfo>
  <domainAvailability>UNAVAILABLE</domainAvailability>
  <domainName>whoisxmlapi.com</domainName>
</DomainInfo>"#;

/// Environment variable holding the key for live tests.
pub const LIVE_API_KEY_VAR: &str = "API_KEY";

/// 读取真实 API key；未设置时直接结束当前测试
#[macro_export]
macro_rules! live_api_key_or_skip {
    () => {
        match std::env::var($crate::common::LIVE_API_KEY_VAR) {
            Ok(key) if !key.trim().is_empty() => key.trim().to_string(),
            _ => {
                eprintln!(
                    "跳过真实 API 测试: 未设置 {}",
                    $crate::common::LIVE_API_KEY_VAR
                );
                return;
            }
        }
    };
}

/// Client pointed at the mock server.
pub fn mock_client(server: &MockServer) -> Client {
    mock_client_with_timeout(server, Duration::from_secs(5))
}

pub fn mock_client_with_timeout(server: &MockServer, timeout: Duration) -> Client {
    let config = ClientConfig {
        base_url: format!("{}{API_PATH}", server.uri()),
        timeout,
        ..ClientConfig::default()
    };
    Client::with_config(TEST_API_KEY, config).expect("mock client")
}

/// Number of requests the mock server has seen so far.
pub async fn request_count(server: &MockServer) -> usize {
    server
        .received_requests()
        .await
        .map_or(0, |requests| requests.len())
}
