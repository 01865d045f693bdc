//! Scraping API client.
//!
//! The module exposes a small trait-based surface:
//! - [`ScrapeApi`]: issue one scrape request for one URL
//! - [`FirecrawlClient`]: [`ScrapeApi`] over the Firecrawl `/v1/scrape` endpoint
//!
//! A request is issued exactly once. Failures are surfaced to the caller and
//! never retried.

use crate::error::ScrapeError;
use crate::models::{ScrapeFormat, ScrapeRequest, ScrapeResponse};
use crate::utils::truncate_for_log;
use reqwest::StatusCode;
use std::fmt;
use std::time::{Duration, Instant};
use tracing::{info, instrument, warn};

/// Public Firecrawl endpoint; override for self-hosted deployments.
pub const DEFAULT_API_URL: &str = "https://api.firecrawl.dev";

/// Trait for a content-extraction backend.
///
/// `Ok` means the API produced a readable answer; the caller still has to
/// check [`ScrapeResponse::success`].
pub trait ScrapeApi {
    async fn scrape(
        &self,
        url: &str,
        formats: &[ScrapeFormat],
    ) -> Result<ScrapeResponse, ScrapeError>;
}

/// HTTP client bound to one API key.
pub struct FirecrawlClient {
    http: reqwest::Client,
    api_key: String,
    api_url: String,
}

impl FirecrawlClient {
    /// Build a client for `api_url` authenticated with `api_key`.
    ///
    /// Without a `timeout` the request waits as long as the transport allows.
    pub fn new(
        api_key: impl Into<String>,
        api_url: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, ScrapeError> {
        let mut builder = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            api_key: api_key.into(),
            api_url: api_url.into(),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/v1/scrape", self.api_url.trim_end_matches('/'))
    }
}

impl fmt::Debug for FirecrawlClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FirecrawlClient")
            .field("api_url", &self.api_url)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

impl ScrapeApi for FirecrawlClient {
    #[instrument(level = "info", skip_all, fields(%url))]
    async fn scrape(
        &self,
        url: &str,
        formats: &[ScrapeFormat],
    ) -> Result<ScrapeResponse, ScrapeError> {
        let t0 = Instant::now();
        let request = ScrapeRequest { url, formats };

        let response = self
            .http
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;
        let dt = t0.elapsed();

        if status.is_success() {
            info!(%status, bytes = body.len(), elapsed_ms = dt.as_millis(), "Scraping API answered");
        } else {
            warn!(%status, elapsed_ms = dt.as_millis(), body = %truncate_for_log(&body, 300), "Scraping API returned an error status");
        }

        interpret_response(status, &body)
    }
}

/// Turn an HTTP answer into a [`ScrapeResponse`].
///
/// Error statuses whose body is a Firecrawl envelope come back as `Ok` with
/// `success == false` so the caller sees the API's own message.
fn interpret_response(status: StatusCode, body: &str) -> Result<ScrapeResponse, ScrapeError> {
    match serde_json::from_str::<ScrapeResponse>(body) {
        Ok(mut parsed) => {
            if !status.is_success() && parsed.success {
                parsed.success = false;
                parsed.error.get_or_insert_with(|| format!("HTTP {status}"));
            }
            Ok(parsed)
        }
        Err(e) if status.is_success() => Err(ScrapeError::Remote(format!(
            "malformed response from scraping API: {e}"
        ))),
        Err(_) => Err(ScrapeError::Remote(format!(
            "HTTP {status}: {}",
            truncate_for_log(body, 300)
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const FORMATS: [ScrapeFormat; 2] = [ScrapeFormat::Markdown, ScrapeFormat::Html];

    #[tokio::test]
    async fn test_scrape_sends_bearer_and_formats() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/scrape"))
            .and(header("authorization", "Bearer fc-test-key"))
            .and(body_json(json!({
                "url": "https://example.com/",
                "formats": ["markdown", "html"]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "data": {"markdown": "# Example", "html": "<p>Hello</p>"}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = FirecrawlClient::new("fc-test-key", server.uri(), None).unwrap();
        let resp = client.scrape("https://example.com/", &FORMATS).await.unwrap();

        assert!(resp.success);
        let data = resp.data.unwrap();
        assert_eq!(data.markdown.as_deref(), Some("# Example"));
        assert_eq!(data.html.as_deref(), Some("<p>Hello</p>"));
    }

    #[tokio::test]
    async fn test_scrape_unauthorized_envelope_is_unsuccessful() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/scrape"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "success": false,
                "error": "Unauthorized: Invalid token"
            })))
            .mount(&server)
            .await;

        let client = FirecrawlClient::new("bad-key", server.uri(), None).unwrap();
        let resp = client.scrape("https://example.com/", &FORMATS).await.unwrap();

        assert!(!resp.success);
        assert_eq!(resp.error.as_deref(), Some("Unauthorized: Invalid token"));
    }

    #[tokio::test]
    async fn test_scrape_non_json_error_is_remote_failure() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
            .mount(&server)
            .await;

        let client = FirecrawlClient::new("fc-test-key", server.uri(), None).unwrap();
        let err = client
            .scrape("https://example.com/", &FORMATS)
            .await
            .unwrap_err();

        assert!(err.is_remote());
        let msg = err.to_string();
        assert!(msg.contains("502"), "unexpected message: {msg}");
        assert!(msg.contains("Bad Gateway"));
    }

    #[tokio::test]
    async fn test_scrape_is_not_retried() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .expect(1)
            .mount(&server)
            .await;

        let client = FirecrawlClient::new("fc-test-key", server.uri(), None).unwrap();
        assert!(client.scrape("https://example.com/", &FORMATS).await.is_err());
    }

    #[test]
    fn test_error_status_with_success_envelope_is_downgraded() {
        let resp =
            interpret_response(StatusCode::TOO_MANY_REQUESTS, r#"{"success": true}"#).unwrap();
        assert!(!resp.success);
        assert_eq!(resp.error.as_deref(), Some("HTTP 429 Too Many Requests"));
    }

    #[test]
    fn test_malformed_success_body_is_remote_failure() {
        let err = interpret_response(StatusCode::OK, "<html>oops</html>").unwrap_err();
        assert!(err.is_remote());
        assert!(err.to_string().starts_with("malformed response"));
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let client = FirecrawlClient::new("fc-secret-123", DEFAULT_API_URL, None).unwrap();
        let rendered = format!("{client:?}");
        assert!(!rendered.contains("fc-secret-123"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn test_endpoint_tolerates_trailing_slash() {
        let client = FirecrawlClient::new("k", "http://localhost:3002/", None).unwrap();
        assert_eq!(client.endpoint(), "http://localhost:3002/v1/scrape");
    }
}
