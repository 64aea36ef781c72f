pub mod config;
pub mod error;
pub mod extract;
pub mod models;
pub mod pages;
pub mod routes;
pub mod services;
pub mod startup;

pub use config::Config;
pub use error::{AppError, AppResult};

use services::{
    assets::AssetResolver, book_search::BookSearchClient, chat::ChatService, llm::LLMClient,
};
use std::sync::Arc;

/// Shared, read-only state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub search: Arc<BookSearchClient>,
    pub chat: Arc<ChatService>,
    pub assets: Arc<AssetResolver>,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let search = Arc::new(BookSearchClient::new(
            &config.book_search_url,
            config.search_timeout(),
        )?);
        let llm = LLMClient::from_config(&config)?;
        let chat = Arc::new(ChatService::new(llm, search.clone()));
        let assets = Arc::new(AssetResolver::new(
            config.asset_root.clone(),
            !config.no_recursive_assets,
        ));

        Ok(AppState {
            config: Arc::new(config),
            search,
            chat,
            assets,
        })
    }
}
