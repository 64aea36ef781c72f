use crate::{AppState, config::PLACEHOLDER_API_KEY};
use std::path::Path;
use tracing::{info, warn};

/// Logs what the gateway will run with. Nothing here is fatal: a missing
/// `.env` or model key only degrades chat.
pub fn report(state: &AppState) {
    let config = &state.config;

    info!("starting book search and AI chat gateway");

    if !Path::new(".env").exists() {
        warn!(".env file not found; copy .env.example to .env to configure GEMINI_API_KEY");
    }

    if state.chat.is_enabled() {
        info!(model = %config.gemini_model, "Gemini chat enabled");
    } else {
        warn!(
            "GEMINI_API_KEY is not set (or still {}); /chat answers with a fixed message. \
             Get a key at https://makersuite.google.com/app/apikey. Book search works without it",
            PLACEHOLDER_API_KEY
        );
    }

    info!(
        endpoint = state.search.endpoint(),
        timeout_secs = config.search_timeout_secs,
        "book search service"
    );

    let root = state.assets.root();
    let files = state.assets.list_root_files();
    info!("{} files in asset root {}", files.len(), root.display());
    for file in &files {
        info!("  - {}", file);
    }
    if state.assets.public_dir().is_none() {
        info!("no public/ directory, /static is not mounted");
    }

    info!("open http://localhost:{} in a browser", config.port);
}
