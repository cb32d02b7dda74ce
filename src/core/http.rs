//! HTTP utilities shared by the provider clients

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::Client;

use crate::Result;

const USER_AGENT: &str = concat!("yahoo-ffl/", env!("CARGO_PKG_VERSION"));

/// Build the shared reqwest client with the configured timeout.
pub fn build_client(timeout: Duration) -> Result<Client> {
    Ok(Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .build()?)
}

/// Headers for Yahoo requests. The bearer token is attached only when present.
pub fn yahoo_header_map(access_token: Option<&str>) -> Result<HeaderMap> {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    if let Some(token) = access_token {
        h.insert(AUTHORIZATION, HeaderValue::from_str(&format!("Bearer {}", token))?);
    }
    Ok(h)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yahoo_header_map_with_token() {
        let headers = yahoo_header_map(Some("abc123")).unwrap();
        assert_eq!(headers.get(ACCEPT).unwrap(), "application/json");
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer abc123");
    }

    #[test]
    fn test_yahoo_header_map_without_token() {
        let headers = yahoo_header_map(None).unwrap();
        assert!(headers.contains_key(ACCEPT));
        assert!(!headers.contains_key(AUTHORIZATION));
    }

    #[test]
    fn test_yahoo_header_map_rejects_bad_token() {
        assert!(yahoo_header_map(Some("bad\ntoken")).is_err());
    }

    #[test]
    fn test_build_client() {
        assert!(build_client(Duration::from_secs(1)).is_ok());
    }
}
