//! GitHub API HTTP client.

use std::time::Duration;

use log::debug;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use serde::Deserialize;

use crate::domain::{AccountProfile, AccountSummary, GithubError};

/// GitHub client configuration.
#[derive(Debug, Clone)]
pub struct GithubConfig {
    /// Base URL for the API, without a trailing slash.
    pub api_base: String,
    /// Optional bearer token for authenticated requests.
    pub token: Option<String>,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            api_base: "https://api.github.com".to_string(),
            token: None,
            timeout: Duration::from_secs(10),
        }
    }
}

/// Response envelope of the search endpoint.
#[derive(Debug, Deserialize)]
struct SearchResponse {
    items: Vec<AccountSummary>,
}

/// HTTP client for the GitHub REST API.
///
/// Cheap to clone; clones share the underlying connection pool, so one
/// client serves every concurrently spawned fetch task.
#[derive(Clone)]
pub struct GithubClient {
    http: reqwest::Client,
    api_base: String,
}

impl GithubClient {
    /// Create a client with the standard GitHub headers preconfigured.
    ///
    /// # Errors
    /// Fails if the token is not a valid header value or the underlying
    /// HTTP client cannot be constructed.
    pub fn new(config: &GithubConfig) -> Result<Self, GithubError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"))),
        );
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));

        if let Some(token) = &config.token {
            let value = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|_| GithubError::InvalidToken)?;
            headers.insert(AUTHORIZATION, value);
        }

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()?;

        Ok(Self { http, api_base: config.api_base.trim_end_matches('/').to_string() })
    }

    /// Search accounts matching a phrase, in the order the API ranks them.
    ///
    /// # Errors
    /// Returns an error on transport failure, a non-success status, or a
    /// payload that does not decode.
    pub async fn search_accounts(&self, phrase: &str) -> Result<Vec<AccountSummary>, GithubError> {
        let url = self.search_url(phrase);
        debug!("GET {url}");
        let response = check_status(self.http.get(&url).send().await?).await?;
        let search: SearchResponse = response.json().await?;
        debug!("search \"{phrase}\" returned {} accounts", search.items.len());
        Ok(search.items)
    }

    /// Fetch the profile of a single account.
    ///
    /// # Errors
    /// Returns an error on transport failure, a non-success status, or a
    /// payload that does not decode.
    pub async fn fetch_profile(&self, login: &str) -> Result<AccountProfile, GithubError> {
        let url = self.profile_url(login);
        debug!("GET {url}");
        let response = check_status(self.http.get(&url).send().await?).await?;
        Ok(response.json().await?)
    }

    fn search_url(&self, phrase: &str) -> String {
        format!("{}/search/users?q={}", self.api_base, percent_encode(phrase))
    }

    fn profile_url(&self, login: &str) -> String {
        format!("{}/users/{}", self.api_base, percent_encode(login))
    }
}

/// Turn non-success statuses into a structured error carrying the body.
///
/// GitHub wraps errors as `{"message": "...", ...}`; the message alone
/// reads better in the status bar, so it is pulled out when present and
/// the raw body kept otherwise.
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, GithubError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(ToString::to_string))
        .unwrap_or(body);
    Err(GithubError::Status { status: status.as_u16(), message })
}

/// Percent-encoding for a query value or path segment.
///
/// The unreserved set (RFC 3986) passes through; everything else is
/// encoded byte-wise, which keeps multi-byte UTF-8 intact.
fn percent_encode(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for byte in s.bytes() {
        if byte.is_ascii_alphanumeric() || b"-._~".contains(&byte) {
            out.push(byte as char);
        } else {
            out.push_str(&format!("%{byte:02X}"));
        }
    }
    out
}
