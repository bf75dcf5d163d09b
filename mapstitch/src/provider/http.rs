//! HTTP client abstraction for testability

use std::time::Duration;

use super::types::ProviderError;

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Trait for HTTP client operations.
///
/// This abstraction allows for dependency injection and easier testing
/// by enabling mock HTTP clients in tests.
pub trait HttpClient: Send + Sync {
    /// Performs an HTTP GET request and returns the response body.
    fn get(&self, url: &str) -> Result<Vec<u8>, ProviderError>;
}

/// Real HTTP client implementation using reqwest.
pub struct ReqwestClient {
    client: reqwest::blocking::Client,
}

impl ReqwestClient {
    /// Creates a new ReqwestClient with the default timeout.
    pub fn new() -> Result<Self, ProviderError> {
        Self::with_timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Creates a new ReqwestClient with custom timeout.
    pub fn with_timeout(timeout: Duration) -> Result<Self, ProviderError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("mapstitch/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ProviderError::Http(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }
}

/// Drops the query string, which carries the API key.
fn redact(url: &reqwest::Url) -> String {
    let mut url = url.clone();
    url.set_query(None);
    url.to_string()
}

impl HttpClient for ReqwestClient {
    fn get(&self, url: &str) -> Result<Vec<u8>, ProviderError> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| ProviderError::Http(format!("Request failed: {}", e.without_url())))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::HttpStatus {
                status: status.as_u16(),
                url: redact(response.url()),
            });
        }

        response
            .bytes()
            .map(|b| b.to_vec())
            .map_err(|e| {
                ProviderError::Http(format!("Failed to read response: {}", e.without_url()))
            })
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Mock HTTP client that answers every request the same way and
    /// records the URLs it was asked for.
    pub struct MockHttpClient {
        pub response: Result<Vec<u8>, ProviderError>,
        pub requested: Mutex<Vec<String>>,
    }

    impl MockHttpClient {
        pub fn new(response: Result<Vec<u8>, ProviderError>) -> Self {
            Self {
                response,
                requested: Mutex::new(Vec::new()),
            }
        }

        pub fn last_url(&self) -> Option<String> {
            self.requested.lock().unwrap().last().cloned()
        }
    }

    impl HttpClient for MockHttpClient {
        fn get(&self, url: &str) -> Result<Vec<u8>, ProviderError> {
            self.requested.lock().unwrap().push(url.to_string());
            self.response.clone()
        }
    }

    #[test]
    fn test_mock_client_success() {
        let mock = MockHttpClient::new(Ok(vec![1, 2, 3, 4]));

        let result = mock.get("http://example.com");
        assert_eq!(result.unwrap(), vec![1, 2, 3, 4]);
        assert_eq!(mock.last_url().as_deref(), Some("http://example.com"));
    }

    #[test]
    fn test_mock_client_error() {
        let mock = MockHttpClient::new(Err(ProviderError::Http("Test error".to_string())));

        let result = mock.get("http://example.com");
        assert!(result.is_err());
    }

    #[test]
    fn test_redact_strips_key() {
        let url = reqwest::Url::parse("https://example.com/staticmap?center=1,2&key=secret")
            .unwrap();
        let redacted = redact(&url);
        assert_eq!(redacted, "https://example.com/staticmap");
        assert!(!redacted.contains("secret"));
    }

    #[test]
    fn test_real_client_builds() {
        assert!(ReqwestClient::with_timeout(Duration::from_secs(5)).is_ok());
    }
}
