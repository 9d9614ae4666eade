use std::env;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::ExplainError;

//
// ─── CONFIG ────────────────────────────────────────────────────────────────────
//

#[derive(Clone, Debug)]
pub struct ExplainerConfig {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
}

impl ExplainerConfig {
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let api_key = env::var("VOCAB_AI_API_KEY").ok()?;
        if api_key.trim().is_empty() {
            return None;
        }
        let base_url = env::var("VOCAB_AI_BASE_URL")
            .unwrap_or_else(|_| "https://generativelanguage.googleapis.com/v1beta".into());
        let model = env::var("VOCAB_AI_MODEL").unwrap_or_else(|_| "gemini-2.5-flash".into());
        Some(Self {
            base_url,
            api_key,
            model,
        })
    }
}

//
// ─── EXPLAINER SERVICE ─────────────────────────────────────────────────────────
//

/// Asks a generative model for a short spelling tip after a correct
/// syllable split.
///
/// The service is strictly optional: a missing key and a failed call look
/// identical to `explain` callers, so the games never depend on it.
#[derive(Clone)]
pub struct ExplainerService {
    client: Client,
    config: Option<ExplainerConfig>,
}

impl ExplainerService {
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(ExplainerConfig::from_env())
    }

    #[must_use]
    pub fn new(config: Option<ExplainerConfig>) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    #[must_use]
    pub fn enabled(&self) -> bool {
        self.config.is_some()
    }

    /// Explains why `word` takes its -able or -ible suffix, in a sentence a
    /// young student can follow. Returns None when the service is disabled
    /// or the call fails for any reason.
    pub async fn explain(&self, word: &str) -> Option<String> {
        let prompt = format!(
            "Explain to a 4th grade student why the word '{word}' is spelled with its \
             specific suffix (-able or -ible). Keep it encouraging and brief (under 30 words)."
        );
        self.generate(&prompt).await.ok()
    }

    /// Generate text from a prompt.
    ///
    /// # Errors
    ///
    /// Returns `ExplainError` when the service is disabled, the request fails,
    /// or the response is empty.
    pub async fn generate(&self, prompt: &str) -> Result<String, ExplainError> {
        let config = self.config.as_ref().ok_or(ExplainError::Disabled)?;

        let url = format!(
            "{}/models/{}:generateContent",
            config.base_url.trim_end_matches('/'),
            config.model
        );
        let payload = GenerateRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationConfig { temperature: 0.2 },
        };

        let response = self
            .client
            .post(url)
            .header("x-goog-api-key", &config.api_key)
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ExplainError::HttpStatus(response.status()));
        }

        let body: GenerateResponse = response.json().await?;
        let text = body
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content.parts.into_iter().next())
            .and_then(|part| part.text)
            .ok_or(ExplainError::EmptyResponse)?;

        Ok(text.trim().to_string())
    }
}

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<RequestContent>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct RequestContent {
    parts: Vec<RequestPart>,
}

#[derive(Debug, Serialize)]
struct RequestPart {
    text: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
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

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
