use crate::config::Config;
use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

/// Client for the Gemini `generateContent` REST call.
pub struct LLMClient {
    client: reqwest::Client,
    api_url: String,
    model: String,
    api_key: String,
}

impl LLMClient {
    /// Builds a client when a usable credential is configured.
    pub fn from_config(config: &Config) -> Result<Option<Self>> {
        let Some(api_key) = config.gemini_credential() else {
            return Ok(None);
        };

        let client = reqwest::Client::builder()
            .timeout(config.chat_timeout())
            .build()
            .context("failed to build the model HTTP client")?;

        Ok(Some(LLMClient {
            client,
            api_url: config.gemini_api_url.trim_end_matches('/').to_string(),
            model: config.gemini_model.clone(),
            api_key: api_key.to_string(),
        }))
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub async fn generate(&self, prompt: &str) -> Result<String> {
        let url = format!("{}/models/{}:generateContent", self.api_url, self.model);

        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        let parsed: GenerateContentResponse = response.json().await?;

        extract_text(parsed).ok_or_else(|| anyhow!("model response contained no text"))
    }
}

fn extract_text(response: GenerateContentResponse) -> Option<String> {
    let content = response.candidates.into_iter().next()?.content?;
    let text: String = content
        .parts
        .into_iter()
        .filter_map(|part| part.text)
        .collect();

    (!text.is_empty()).then_some(text)
}
