//! Client modules for external API interactions
//!
//! The run pipeline only sees the traits below. Credentials are passed per
//! call so a client never holds secrets of its own.

pub mod gemini_client;
pub mod telegram_client;
pub mod transcript_client;
pub mod youtube_client;

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use crate::core::models::{Item, Source};
use crate::errors::ClientError;

pub use gemini_client::GeminiClient;
pub use telegram_client::TelegramClient;
pub use transcript_client::SampleTranscriptClient;
pub use youtube_client::YouTubeClient;

/// Lists the recent items published by one source.
#[async_trait]
pub trait SourceDiscoveryClient: Send + Sync {
    async fn list_recent_items(
        &self,
        source: &Source,
        credential: &str,
    ) -> Result<Vec<Item>, ClientError>;
}

/// Fetches the raw content (e.g. a transcript) of an item. `Ok(None)` means
/// the item has no content available.
#[async_trait]
pub trait ContentClient: Send + Sync {
    async fn fetch(&self, item_id: &str) -> Result<Option<String>, ClientError>;
}

/// Turns raw content into the text that gets delivered.
#[async_trait]
pub trait TransformClient: Send + Sync {
    async fn transform(&self, content: &str, credential: &str) -> Result<String, ClientError>;
}

/// Sends one message chunk to a destination.
#[async_trait]
pub trait DeliveryClient: Send + Sync {
    async fn send(&self, target: &str, credential: &str, chunk: &str) -> Result<(), ClientError>;
}

pub(crate) fn build_http_client(timeout: Duration) -> Client {
    Client::builder()
        .timeout(timeout)
        .build()
        .unwrap_or_else(|_| Client::new())
}
