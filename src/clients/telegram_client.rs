//! Telegram Bot API client used for delivery.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;

use super::{DeliveryClient, build_http_client};
use crate::errors::ClientError;

const DEFAULT_BASE_URL: &str = "https://api.telegram.org";

#[derive(Debug, Deserialize)]
struct ApiResponse {
    ok: bool,
    description: Option<String>,
    parameters: Option<ResponseParameters>,
}

#[derive(Debug, Deserialize)]
struct ResponseParameters {
    retry_after: Option<u64>,
}

pub struct TelegramClient {
    http: Client,
    base_url: String,
}

impl TelegramClient {
    #[must_use]
    pub fn new() -> Self {
        Self {
            http: build_http_client(Duration::from_secs(30)),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

impl Default for TelegramClient {
    fn default() -> Self {
        Self::new()
    }
}

fn classify_failure(status: StatusCode, body: Option<ApiResponse>) -> ClientError {
    let description = body
        .as_ref()
        .and_then(|b| b.description.clone())
        .unwrap_or_else(|| "no description".to_string());

    match status {
        StatusCode::TOO_MANY_REQUESTS => {
            let retry_after = body
                .and_then(|b| b.parameters)
                .and_then(|p| p.retry_after);
            match retry_after {
                Some(secs) => {
                    ClientError::RateLimit(format!("{description} (retry after {secs}s)"))
                }
                None => ClientError::RateLimit(description),
            }
        }
        StatusCode::UNAUTHORIZED => ClientError::Auth(description),
        _ => ClientError::Transport(format!("Telegram API status {status}: {description}")),
    }
}

#[async_trait]
impl DeliveryClient for TelegramClient {
    async fn send(&self, target: &str, credential: &str, chunk: &str) -> Result<(), ClientError> {
        let body = json!({
            "chat_id": target,
            "text": chunk,
            "disable_web_page_preview": true,
        });

        let response = self
            .http
            .post(format!("{}/bot{}/sendMessage", self.base_url, credential))
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let parsed: Option<ApiResponse> = response.json().await.ok();

        match parsed {
            Some(api) if status.is_success() && api.ok => Ok(()),
            other => Err(classify_failure(status, other)),
        }
    }
}
