use clap::Parser;
use std::{path::PathBuf, time::Duration};

/// Value shipped in `.env.example`; treated the same as an unset key.
pub const PLACEHOLDER_API_KEY: &str = "your_gemini_api_key_here";

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-pro";
pub const DEFAULT_GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_BOOK_SEARCH_URL: &str = "http://144.24.70.176:8000";

/// Process-wide settings, read once at startup from flags, the environment
/// and `.env`.
#[derive(Debug, Clone, Parser)]
#[command(name = "bookgate", version, about = "Book search and AI chat gateway")]
pub struct Config {
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub gemini_api_key: Option<String>,

    #[arg(long, env = "GEMINI_MODEL", default_value = DEFAULT_GEMINI_MODEL)]
    pub gemini_model: String,

    #[arg(long, env = "GEMINI_API_URL", default_value = DEFAULT_GEMINI_API_URL)]
    pub gemini_api_url: String,

    #[arg(long, env = "CHAT_TIMEOUT_SECS", default_value_t = 60)]
    pub chat_timeout_secs: u64,

    #[arg(long, env = "BOOK_SEARCH_URL", default_value = DEFAULT_BOOK_SEARCH_URL)]
    pub book_search_url: String,

    #[arg(long, env = "SEARCH_TIMEOUT_SECS", default_value_t = 30)]
    pub search_timeout_secs: u64,

    /// Directory probed for index.html, script.js and style.css.
    #[arg(long, env = "ASSET_ROOT", default_value = ".")]
    pub asset_root: PathBuf,

    /// Only look at the asset root and its public/ directory.
    #[arg(long, env = "NO_RECURSIVE_ASSETS")]
    pub no_recursive_assets: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            gemini_api_key: None,
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            gemini_api_url: DEFAULT_GEMINI_API_URL.to_string(),
            chat_timeout_secs: 60,
            book_search_url: DEFAULT_BOOK_SEARCH_URL.to_string(),
            search_timeout_secs: 30,
            asset_root: PathBuf::from("."),
            no_recursive_assets: false,
        }
    }
}

impl Config {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// The model credential, if one is actually configured.
    pub fn gemini_credential(&self) -> Option<&str> {
        self.gemini_api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty() && *key != PLACEHOLDER_API_KEY)
    }

    pub fn chat_timeout(&self) -> Duration {
        Duration::from_secs(self.chat_timeout_secs)
    }

    pub fn search_timeout(&self) -> Duration {
        Duration::from_secs(self.search_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_key(key: Option<&str>) -> Config {
        Config {
            gemini_api_key: key.map(str::to_string),
            ..Config::default()
        }
    }

    #[test]
    fn placeholder_and_blank_keys_disable_chat() {
        assert_eq!(with_key(None).gemini_credential(), None);
        assert_eq!(with_key(Some("")).gemini_credential(), None);
        assert_eq!(with_key(Some("   ")).gemini_credential(), None);
        assert_eq!(with_key(Some(PLACEHOLDER_API_KEY)).gemini_credential(), None);
    }

    #[test]
    fn real_key_is_trimmed() {
        assert_eq!(with_key(Some(" abc123 \n")).gemini_credential(), Some("abc123"));
    }

    #[test]
    fn flags_override_defaults() {
        let config = Config::try_parse_from([
            "bookgate",
            "--port",
            "8080",
            "--book-search-url",
            "http://localhost:9000",
            "--no-recursive-assets",
        ])
        .unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.book_search_url, "http://localhost:9000");
        assert!(config.no_recursive_assets);
    }
}
