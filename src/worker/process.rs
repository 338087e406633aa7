//! Per-item pipeline: fetch content, summarize, compose, chunk, deliver.

use chrono::Utc;
use chrono_tz::Tz;

use super::deliver::deliver_chunks;
use crate::clients::{ContentClient, DeliveryClient, TransformClient};
use crate::core::events::EventSink;
use crate::core::models::{Destination, Item, Outcome};
use crate::errors::ItemFailure;
use crate::messages::format_item_message;
use crate::utils::{Throttle, split_message};

pub struct ItemProcessor<'a> {
    pub content: &'a dyn ContentClient,
    pub transform: &'a dyn TransformClient,
    pub delivery: &'a dyn DeliveryClient,
    pub sink: &'a EventSink,
    pub max_chunk_chars: usize,
    pub timezone: Tz,
}

impl ItemProcessor<'_> {
    /// Runs the whole pipeline for one item. Any failing step ends the item
    /// with exactly one error log naming its title.
    pub async fn process(
        &self,
        item: Item,
        transform_key: &str,
        destination: Destination<'_>,
        throttle: &mut Throttle,
    ) -> Outcome {
        self.sink.info(format!("Processing: {}", item.title));

        match self
            .run_steps(&item, transform_key, destination, throttle)
            .await
        {
            Ok(()) => Outcome::Success,
            Err(failure) => {
                self.sink.error(format!(
                    "Failed to process video {}: {}",
                    item.title, failure
                ));
                Outcome::Failure(failure)
            }
        }
    }

    async fn run_steps(
        &self,
        item: &Item,
        transform_key: &str,
        destination: Destination<'_>,
        throttle: &mut Throttle,
    ) -> Result<(), ItemFailure> {
        self.sink.system("Fetching transcript...");
        let content = self
            .content
            .fetch(&item.id)
            .await
            .map_err(ItemFailure::ContentFetch)?
            .filter(|c| !c.trim().is_empty())
            .ok_or(ItemFailure::ContentUnavailable)?;
        self.sink.success(format!(
            "Transcript found. Length: {} chars.",
            content.chars().count()
        ));

        self.sink.system("Summarizing transcript...");
        let summary = self
            .transform
            .transform(&content, transform_key)
            .await
            .map_err(ItemFailure::Transform)?;
        self.sink.success("Summary generated.");

        let message = format_item_message(item, &summary, Utc::now(), self.timezone);
        let chunks = split_message(&message, self.max_chunk_chars);

        self.sink
            .system(format!("Sending {} message(s) to Telegram...", chunks.len()));
        deliver_chunks(self.delivery, destination, &chunks, throttle)
            .await
            .map_err(ItemFailure::Delivery)?;
        self.sink.success("Message sent successfully.");

        Ok(())
    }
}
