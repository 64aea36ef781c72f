use crate::services::{book_search::BookSearchClient, llm::LLMClient};
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, warn};

pub const NO_CREDENTIAL_REPLY: &str =
    "AI 채팅 기능을 사용하려면 GEMINI_API_KEY를 설정해주세요. 현재는 기본 응답 모드로 동작 중입니다.";
pub const MODEL_FAILURE_REPLY: &str = "죄송합니다. AI 응답을 생성하는 중 오류가 발생했습니다.";
pub const NO_RESULTS_MARKER: &str = "검색 결과가 없습니다.";

/// Number of books fetched to enrich a book-related prompt.
pub const CONTEXT_TOP_K: u32 = 3;

/// Literal substrings; no tokenizing or case folding.
pub const BOOK_KEYWORDS: [&str; 6] = ["책", "도서", "검색", "추천", "책 찾기", "도서 찾기"];

pub fn is_book_related(message: &str) -> bool {
    BOOK_KEYWORDS.iter().any(|keyword| message.contains(keyword))
}

/// `null`, `{}` and `[]` carry nothing worth putting in a prompt.
fn has_content(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Object(map) => !map.is_empty(),
        Value::Array(items) => !items.is_empty(),
        _ => true,
    }
}

pub fn augmented_prompt(message: &str, search_results: Option<&Value>) -> String {
    let context = search_results
        .filter(|results| has_content(results))
        .and_then(|results| serde_json::to_string_pretty(results).ok())
        .unwrap_or_else(|| NO_RESULTS_MARKER.to_string());

    format!(
        "사용자 질문: {message}\n\n\
         관련 도서 검색 결과:\n{context}\n\n\
         위 도서 정보를 참고하여 도움이 되는 답변을 해주세요. \
         도서 추천이나 관련 질문에 대해서는 구체적인 도서 정보를 포함하여 답변해주세요."
    )
}

pub struct ChatService {
    llm: Option<LLMClient>,
    search: Arc<BookSearchClient>,
}

impl ChatService {
    pub fn new(llm: Option<LLMClient>, search: Arc<BookSearchClient>) -> Self {
        Self { llm, search }
    }

    pub fn is_enabled(&self) -> bool {
        self.llm.is_some()
    }

    /// Always produces a reply; model failures become [`MODEL_FAILURE_REPLY`].
    pub async fn reply(&self, message: &str) -> String {
        let Some(llm) = &self.llm else {
            return NO_CREDENTIAL_REPLY.to_string();
        };

        let book_related = is_book_related(message);
        info!(book_related, "handling chat message");

        let prompt = if book_related {
            let results = match self.search.search(message, CONTEXT_TOP_K, true).await {
                Ok(results) => Some(results),
                Err(err) => {
                    warn!(error = %err, "chat context search failed, prompting without results");
                    None
                }
            };
            augmented_prompt(message, results.as_ref())
        } else {
            message.to_string()
        };

        match llm.generate(&prompt).await {
            Ok(text) => text,
            Err(err) => {
                warn!(error = %err, model = llm.model(), "model call failed");
                MODEL_FAILURE_REPLY.to_string()
            }
        }
    }
}
