use reqwest::StatusCode;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Embedding file the remote search service loads.
pub const NPZ_FILE: &str = "books_emb.npz";
pub const META_FILE: &str = "books_meta.csv";
pub const SOURCE_CSV_FILE: &str = "book.csv";

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("book search request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("book search service answered {0}")]
    Status(StatusCode),

    #[error("book search response is not valid JSON: {0}")]
    Decode(#[source] reqwest::Error),

    #[error("book search service returned an empty (null) body")]
    Empty,
}

#[derive(Debug, Serialize)]
struct RemoteSearchRequest<'a> {
    npz: &'static str,
    meta: &'static str,
    query: &'a str,
    top_k: u32,
    source_csv: &'static str,
    randomize: bool,
}

/// Client for the remote embedding search service. One POST per call, no
/// retries; the caller picks the fallback.
pub struct BookSearchClient {
    client: reqwest::Client,
    search_endpoint: String,
}

impl BookSearchClient {
    pub fn new(base_url: &str, timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(BookSearchClient {
            client,
            search_endpoint: format!("{}/search", base_url.trim_end_matches('/')),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.search_endpoint
    }

    pub async fn search(
        &self,
        query: &str,
        top_k: u32,
        randomize: bool,
    ) -> Result<Value, SearchError> {
        let payload = RemoteSearchRequest {
            npz: NPZ_FILE,
            meta: META_FILE,
            query,
            top_k,
            source_csv: SOURCE_CSV_FILE,
            randomize,
        };

        info!(query, top_k, randomize, "searching books");

        let response = self
            .client
            .post(&self.search_endpoint)
            .header("Content-Type", "application/json")
            .json(&payload)
            .send()
            .await
            .map_err(|err| {
                warn!(error = %err, "book search transport error");
                SearchError::Transport(err)
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, "book search service returned an error status");
            return Err(SearchError::Status(status));
        }

        let body = response.json::<Value>().await.map_err(|err| {
            warn!(error = %err, "book search response could not be parsed");
            SearchError::Decode(err)
        })?;

        if body.is_null() {
            warn!("book search service returned null");
            return Err(SearchError::Empty);
        }

        debug!("book search succeeded");
        Ok(body)
    }
}
