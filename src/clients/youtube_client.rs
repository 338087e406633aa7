//! YouTube Data API client used for item discovery.

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, TimeDelta, Utc};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use super::{SourceDiscoveryClient, build_http_client};
use crate::core::models::{Item, Source};
use crate::errors::ClientError;

const DEFAULT_BASE_URL: &str = "https://www.googleapis.com";
const MAX_RESULTS: u32 = 50;

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    id: SearchItemId,
    snippet: Snippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchItemId {
    video_id: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Snippet {
    title: String,
    channel_title: String,
    published_at: DateTime<Utc>,
}

pub struct YouTubeClient {
    http: Client,
    base_url: String,
    lookback_hours: i64,
}

impl YouTubeClient {
    #[must_use]
    pub fn new(lookback_hours: i64) -> Self {
        Self {
            http: build_http_client(Duration::from_secs(30)),
            base_url: DEFAULT_BASE_URL.to_string(),
            lookback_hours,
        }
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

/// RFC 3339 start of the discovery window ending at `now`.
fn published_after(now: DateTime<Utc>, lookback_hours: i64) -> Result<String, ClientError> {
    TimeDelta::try_hours(lookback_hours)
        .and_then(|window| now.checked_sub_signed(window))
        .map(|start| start.to_rfc3339_opts(SecondsFormat::Secs, true))
        .ok_or_else(|| {
            ClientError::InvalidResponse(format!(
                "lookback of {} hours is out of range",
                lookback_hours
            ))
        })
}

fn items_from_response(response: SearchResponse) -> Vec<Item> {
    response
        .items
        .into_iter()
        .filter_map(|entry| {
            let id = entry.id.video_id?;
            Some(Item {
                id,
                title: entry.snippet.title,
                origin: entry.snippet.channel_title,
                published_at: entry.snippet.published_at,
            })
        })
        .collect()
}

#[async_trait]
impl SourceDiscoveryClient for YouTubeClient {
    async fn list_recent_items(
        &self,
        source: &Source,
        credential: &str,
    ) -> Result<Vec<Item>, ClientError> {
        let window_start = published_after(Utc::now(), self.lookback_hours)?;
        let max_results = MAX_RESULTS.to_string();

        let response = self
            .http
            .get(format!("{}/youtube/v3/search", self.base_url))
            .query(&[
                ("part", "snippet"),
                ("channelId", source.id()),
                ("order", "date"),
                ("type", "video"),
                ("maxResults", max_results.as_str()),
                ("publishedAfter", window_start.as_str()),
                ("key", credential),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<failed to read body>".to_string());
            return Err(match status {
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                    ClientError::Auth(format!("YouTube API status {}: {}", status, body))
                }
                _ => ClientError::Transport(format!("YouTube API status {}: {}", status, body)),
            });
        }

        let parsed: SearchResponse = response.json().await?;
        let items = items_from_response(parsed);
        debug!("YouTube returned {} videos for channel {}", items.len(), source);
        Ok(items)
    }
}
