//! Gemini API client used to summarize transcripts.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::{Value, json};
use std::time::Duration;
use tracing::{debug, info};

use super::{TransformClient, build_http_client};
use crate::errors::ClientError;
use crate::prompt::build_summary_prompt;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

pub struct GeminiClient {
    http: Client,
    base_url: String,
    model_name: String,
}

impl GeminiClient {
    #[must_use]
    pub fn new(model_name: String) -> Self {
        Self {
            http: build_http_client(Duration::from_secs(120)),
            base_url: DEFAULT_BASE_URL.to_string(),
            model_name,
        }
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

/// Joins the text parts of the first candidate.
fn extract_candidate_text(response_json: &Value) -> Option<String> {
    let parts = response_json
        .get("candidates")?
        .as_array()?
        .first()?
        .get("content")?
        .get("parts")?
        .as_array()?;

    let collected: Vec<&str> = parts
        .iter()
        .filter_map(|p| p.get("text").and_then(Value::as_str))
        .collect();

    let text = collected.join("");
    if text.trim().is_empty() { None } else { Some(text) }
}

#[async_trait]
impl TransformClient for GeminiClient {
    async fn transform(&self, content: &str, credential: &str) -> Result<String, ClientError> {
        #[cfg(feature = "debug-logs")]
        debug!("Gemini prompt:\n{}", build_summary_prompt(content));

        info!(
            "Summarizing {} chars with model {}",
            content.chars().count(),
            self.model_name
        );

        let request_body = json!({
            "contents": [
                { "parts": [ { "text": build_summary_prompt(content) } ] }
            ]
        });

        let response = self
            .http
            .post(format!(
                "{}/v1beta/models/{}:generateContent",
                self.base_url, self.model_name
            ))
            .header("x-goog-api-key", credential)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|e| {
                format!("Failed to read error response body (status {status}): {e}")
            });
            return Err(match status {
                StatusCode::TOO_MANY_REQUESTS => {
                    ClientError::Quota(format!("Gemini API status {status}: {error_text}"))
                }
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                    ClientError::Auth(format!("Gemini API status {status}: {error_text}"))
                }
                _ => ClientError::Transport(format!("Gemini API status {status}: {error_text}")),
            });
        }

        let response_json: Value = response.json().await?;
        let text = extract_candidate_text(&response_json).ok_or_else(|| {
            ClientError::InvalidResponse("Gemini response contained no text".to_string())
        })?;
        debug!("Gemini returned {} chars", text.chars().count());
        Ok(text)
    }
}
