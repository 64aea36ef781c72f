use serde::{Deserialize, Serialize};

fn default_randomize() -> bool {
    true
}

/// Body of `POST /search`.
///
/// `npz`, `meta` and `source_csv` are required for compatibility with the
/// front end, but the outbound search always uses the fixed resource names
/// from [`crate::services::book_search`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    pub npz: String,
    pub meta: String,
    pub query: String,
    pub top_k: u32,
    pub source_csv: String,
    #[serde(default = "default_randomize")]
    pub randomize: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookStatus {
    Available,
    Borrowed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookRecord {
    pub title: String,
    pub author: String,
    pub status: BookStatus,
    pub description: String,
    pub publisher: String,
    pub year: String,
    pub category: String,
    pub location: String,
    pub isbn: String,
    pub pages: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<BookRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub reply: String,
}
