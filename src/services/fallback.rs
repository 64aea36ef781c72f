//! Degraded-mode search results.
//!
//! When the remote search fails the gateway still answers `/search` with a
//! plausible result list built from a fixed sample pool. [`SearchOutcome`]
//! keeps the distinction between live and synthetic data visible to code
//! and logs even though the JSON shape is the same.

use crate::{
    models::{BookRecord, BookStatus, SearchResponse},
    services::book_search::SearchError,
};
use serde_json::Value;

/// Upper bound on synthesized results, whatever `top_k` asks for.
pub const MAX_FALLBACK_RESULTS: usize = 10;

pub enum SearchOutcome {
    Live(Value),
    Degraded {
        results: Vec<BookRecord>,
        cause: SearchError,
    },
}

impl SearchOutcome {
    pub fn from_search(result: Result<Value, SearchError>, top_k: u32) -> Self {
        match result {
            Ok(body) => SearchOutcome::Live(body),
            Err(cause) => SearchOutcome::Degraded {
                results: fallback_results(top_k),
                cause,
            },
        }
    }

    /// Value for the `x-search-source` response header.
    pub fn source(&self) -> &'static str {
        match self {
            SearchOutcome::Live(_) => "live",
            SearchOutcome::Degraded { .. } => "fallback",
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, SearchOutcome::Degraded { .. })
    }

    pub fn into_body(self) -> serde_json::Result<Value> {
        match self {
            SearchOutcome::Live(body) => Ok(body),
            SearchOutcome::Degraded { results, .. } => {
                serde_json::to_value(SearchResponse { results })
            }
        }
    }
}

/// Cycles through the sample pool; titles past the first cycle get a
/// volume suffix with their 1-based position so no two titles collide.
pub fn fallback_results(top_k: u32) -> Vec<BookRecord> {
    let pool = sample_books();
    let count = (top_k as usize).min(MAX_FALLBACK_RESULTS);

    (0..count)
        .map(|i| {
            let mut book = pool[i % pool.len()].clone();
            if i >= pool.len() {
                book.title = format!("{} 제{}권", book.title, i + 1);
            }
            book
        })
        .collect()
}

pub fn sample_books() -> [BookRecord; 3] {
    [
        BookRecord {
            title: "컴퓨터 과학과 수학의 만남".to_string(),
            author: "김철수".to_string(),
            status: BookStatus::Available,
            description: "컴퓨터 과학의 기초가 되는 수학적 개념들을 쉽게 설명한 입문서입니다. 알고리즘의 복잡도 분석부터 암호학의 수학적 원리까지 다룹니다.".to_string(),
            publisher: "한빛미디어".to_string(),
            year: "2023".to_string(),
            category: "컴퓨터공학".to_string(),
            location: "공학도서관 2층".to_string(),
            isbn: "978-89-123-4567-8".to_string(),
            pages: "320".to_string(),
        },
        BookRecord {
            title: "알고리즘과 이산수학".to_string(),
            author: "이영호".to_string(),
            status: BookStatus::Borrowed,
            description: "프로그래밍 알고리즘에 필요한 이산수학의 핵심 개념을 다룹니다. 그래프 이론, 조합론, 논리학 등을 포함합니다.".to_string(),
            publisher: "생록출판".to_string(),
            year: "2022".to_string(),
            category: "수학".to_string(),
            location: "과학도서관 3층".to_string(),
            isbn: "978-89-234-5678-9".to_string(),
            pages: "280".to_string(),
        },
        BookRecord {
            title: "수학으로 이해하는 인공지능".to_string(),
            author: "박민수".to_string(),
            status: BookStatus::Available,
            description: "AI와 머신러닝의 수학적 원리를 고등학생도 이해할 수 있게 설명합니다. 선형대수, 미적분, 확률론의 기초부터 시작합니다.".to_string(),
            publisher: "에이콘출판".to_string(),
            year: "2024".to_string(),
            category: "인공지능".to_string(),
            location: "전산도서관 1층".to_string(),
            isbn: "978-89-345-6789-0".to_string(),
            pages: "400".to_string(),
        },
    ]
}
