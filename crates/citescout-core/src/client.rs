//! HTTP client for the remote bibliographic search service.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Paper, Researcher};

/// Which search endpoint a query is issued against. The collection view has
/// no search, so it is not a `SearchMode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    Papers,
    Researchers,
}

impl SearchMode {
    /// Path of the endpoint bound to this mode.
    pub fn endpoint_path(self) -> &'static str {
        match self {
            Self::Papers => "/search",
            Self::Researchers => "/search/authors",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Papers => "Papers",
            Self::Researchers => "Researchers",
        }
    }
}

/// The result list of one executed search.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SearchResults {
    Papers(Vec<Paper>),
    Researchers(Vec<Researcher>),
}

impl SearchResults {
    pub fn mode(&self) -> SearchMode {
        match self {
            Self::Papers(_) => SearchMode::Papers,
            Self::Researchers(_) => SearchMode::Researchers,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Papers(v) => v.len(),
            Self::Researchers(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn papers(&self) -> Option<&[Paper]> {
        match self {
            Self::Papers(v) => Some(v),
            Self::Researchers(_) => None,
        }
    }

    pub fn researchers(&self) -> Option<&[Researcher]> {
        match self {
            Self::Researchers(v) => Some(v),
            Self::Papers(_) => None,
        }
    }
}

/// Why a search failed. Empty queries never reach the client; a well-formed
/// response with zero results is a success, not an error.
#[derive(Error, Debug)]
pub enum SearchError {
    /// The request never reached the server (unreachable host, timeout).
    #[error("could not reach the search service: {0}")]
    Transport(#[from] reqwest::Error),
    /// Non-2xx response. The server's `detail` text takes precedence over
    /// the generic status-code message.
    #[error("{}", detail.clone().unwrap_or_else(|| format!("server error ({status})")))]
    Server { status: u16, detail: Option<String> },
    /// 2xx response whose body was not the expected shape.
    #[error("unexpected response from the search service: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Successful response envelope. `results` missing or null normalizes to an
/// empty list, never an error.
#[derive(Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
struct ResponseEnvelope<T> {
    #[serde(default)]
    results: Option<Vec<T>>,
}

fn parse_success_body<T: for<'de> Deserialize<'de>>(body: &[u8]) -> Result<Vec<T>, SearchError> {
    let envelope: ResponseEnvelope<T> = serde_json::from_slice(body)?;
    Ok(envelope.results.unwrap_or_default())
}

/// Extract the structured `detail` message from an error body, if any.
fn error_detail(body: &[u8]) -> Option<String> {
    let value: serde_json::Value = serde_json::from_slice(body).ok()?;
    value
        .get("detail")
        .and_then(|d| d.as_str())
        .map(String::from)
}

/// Issues queries against the search service, one endpoint per mode.
pub struct SearchClient {
    http: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl SearchClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request_url(&self, mode: SearchMode, query: &str) -> String {
        format!(
            "{}{}?q={}",
            self.base_url,
            mode.endpoint_path(),
            urlencoding::encode(query)
        )
    }

    /// Run one search against the endpoint bound to `mode`.
    pub async fn query(&self, mode: SearchMode, text: &str) -> Result<SearchResults, SearchError> {
        let url = self.request_url(mode, text);
        tracing::debug!(%url, "search request");

        let resp = self
            .http
            .get(&url)
            .header("User-Agent", "citescout")
            .timeout(self.timeout)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.bytes().await.unwrap_or_default();
            let detail = error_detail(&body);
            tracing::warn!(status = status.as_u16(), ?detail, "search request failed");
            return Err(SearchError::Server {
                status: status.as_u16(),
                detail,
            });
        }

        let body = resp.bytes().await?;
        let results = match mode {
            SearchMode::Papers => SearchResults::Papers(parse_success_body(&body)?),
            SearchMode::Researchers => SearchResults::Researchers(parse_success_body(&body)?),
        };
        tracing::debug!(count = results.len(), "search response");
        Ok(results)
    }
}
