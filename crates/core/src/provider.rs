//! Outbound search against the stock-photo provider.
//!
//! One endpoint: `GET <api_base>/search/photos?query=..&client_id=..`. The
//! response body is decoded into [`SearchResult`] entries; fields beyond the
//! documented shape are ignored. Failures are classified but never retried —
//! the shell maps them all to an empty result list.

use std::time::Duration;

use serde::Deserialize;
use tracing::debug;

use crate::types::{Attribution, SearchResult};
use crate::Config;

/// Request timeout. A hung request would otherwise pin the loading state
/// forever, since settlements are the only thing that clears it.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Ways a provider search can fail. None of these reach the UI as anything
/// other than an empty result list; see the command executor.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("provider returned HTTP {0}")]
    Status(reqwest::StatusCode),
    #[error("malformed provider response: {0}")]
    Decode(#[source] serde_json::Error),
}

// ---------------------------------------------------------------------------
// Response DTOs (provider wire shape)
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct SearchResponse {
    results: Vec<PhotoDto>,
}

#[derive(Deserialize)]
struct PhotoDto {
    id: String,
    urls: UrlsDto,
    alt_description: Option<String>,
    user: UserDto,
    likes: u64,
}

#[derive(Deserialize)]
struct UrlsDto {
    regular: String,
    thumb: String,
}

#[derive(Deserialize)]
struct UserDto {
    name: String,
    username: String,
}

impl From<PhotoDto> for SearchResult {
    fn from(dto: PhotoDto) -> Self {
        SearchResult {
            id: dto.id,
            regular_url: dto.urls.regular,
            thumb_url: dto.urls.thumb,
            description: dto.alt_description,
            attribution: Attribution { name: dto.user.name, username: dto.user.username },
            likes: dto.likes,
        }
    }
}

/// Decode a provider response body into result entries.
fn decode_results(body: &str) -> Result<Vec<SearchResult>, ProviderError> {
    let response: SearchResponse =
        serde_json::from_str(body).map_err(ProviderError::Decode)?;
    Ok(response.results.into_iter().map(SearchResult::from).collect())
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// Shared HTTP client plus the resolved provider endpoint and credential.
#[derive(Clone)]
pub struct ProviderClient {
    http: reqwest::Client,
    api_base: String,
    access_key: String,
}

impl ProviderClient {
    /// Build a client from resolved configuration.
    pub fn new(config: &Config) -> Result<Self, ProviderError> {
        let http = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            http,
            api_base: config.api_base.clone(),
            access_key: config.access_key.clone(),
        })
    }

    /// Search the provider for `query`. A blank trimmed query resolves to an
    /// empty list without touching the network.
    pub async fn search(&self, query: &str) -> Result<Vec<SearchResult>, ProviderError> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return Ok(Vec::new());
        }

        debug!(query = %trimmed, "issuing provider search");
        let response = self
            .http
            .get(format!("{}/search/photos", self.api_base))
            .query(&[("query", trimmed), ("client_id", self.access_key.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status(status));
        }

        let body = response.text().await?;
        decode_results(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"{
        "total": 2,
        "total_pages": 1,
        "results": [
            {
                "id": "abc123",
                "created_at": "2024-03-01T09:00:00Z",
                "urls": {
                    "raw": "https://images.test/abc123/raw",
                    "regular": "https://images.test/abc123/regular",
                    "thumb": "https://images.test/abc123/thumb"
                },
                "alt_description": "a tabby cat on a windowsill",
                "user": { "name": "Ada Lovelace", "username": "ada" },
                "likes": 42
            },
            {
                "id": "def456",
                "urls": {
                    "regular": "https://images.test/def456/regular",
                    "thumb": "https://images.test/def456/thumb"
                },
                "alt_description": null,
                "user": { "name": "Grace Hopper", "username": "grace" },
                "likes": 0
            }
        ]
    }"#;

    #[test]
    fn decode_maps_the_documented_shape() {
        let results = decode_results(FIXTURE).expect("fixture should decode");
        assert_eq!(results.len(), 2);

        let first = &results[0];
        assert_eq!(first.id, "abc123");
        assert_eq!(first.regular_url, "https://images.test/abc123/regular");
        assert_eq!(first.thumb_url, "https://images.test/abc123/thumb");
        assert_eq!(first.description.as_deref(), Some("a tabby cat on a windowsill"));
        assert_eq!(first.attribution.name, "Ada Lovelace");
        assert_eq!(first.attribution.username, "ada");
        assert_eq!(first.likes, 42);
    }

    #[test]
    fn decode_maps_null_description_to_none() {
        let results = decode_results(FIXTURE).expect("fixture should decode");
        assert_eq!(results[1].description, None);
        assert_eq!(results[1].likes, 0);
    }

    #[test]
    fn decode_ignores_unknown_fields() {
        // The fixture carries total/total_pages/created_at/raw, none of which
        // exist in the mapped shape.
        assert!(decode_results(FIXTURE).is_ok());
    }

    #[test]
    fn decode_rejects_malformed_json() {
        let err = decode_results("{ not json").expect_err("garbage should not decode");
        assert!(matches!(err, ProviderError::Decode(_)), "got {err:?}");
    }

    #[test]
    fn decode_rejects_wrong_shape() {
        let err = decode_results(r#"{"results": "nope"}"#).expect_err("shape mismatch");
        assert!(matches!(err, ProviderError::Decode(_)), "got {err:?}");
    }

    #[test]
    fn decode_accepts_empty_result_set() {
        let results = decode_results(r#"{"results": []}"#).expect("empty set decodes");
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn blank_query_resolves_without_a_request() {
        // api_base points at a closed port; if search tried the network this
        // would fail rather than return cleanly.
        let config = Config {
            access_key: "test-key".into(),
            api_base: "http://127.0.0.1:9".into(),
        };
        let client = ProviderClient::new(&config).expect("client should build");

        let results = client.search("   ").await.expect("blank query is a local no-op");
        assert!(results.is_empty());
    }
}
