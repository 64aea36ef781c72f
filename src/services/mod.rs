pub mod assets;
pub mod book_search;
pub mod chat;
pub mod fallback;
pub mod llm;
