use crate::clients::SourceDiscoveryClient;
use crate::core::events::EventSink;
use crate::core::models::{Item, Source};
use crate::core::report::ReportAccumulator;

/// Upper bound on items handed to the item pipeline in one run.
pub const ITEM_CAP: usize = 100;

/// Pulls recent items from each source in order until `cap` items are queued.
///
/// A failing source is logged and skipped. A source that returns more than
/// the remaining room contributes a truncated prefix, but its full count goes
/// into the discovered total. Sources after the cap is reached are not queried.
pub async fn discover_items(
    client: &dyn SourceDiscoveryClient,
    sources: &[Source],
    credential: &str,
    cap: usize,
    report: &mut ReportAccumulator,
    sink: &EventSink,
) -> Vec<Item> {
    let mut queue: Vec<Item> = Vec::new();

    sink.info(format!(
        "Scanning {} channels for recent videos...",
        sources.len()
    ));

    for source in sources {
        if queue.len() >= cap {
            break;
        }
        report.record_source_scanned();
        sink.system(format!("Fetching videos for channel: {}", source));

        match client.list_recent_items(source, credential).await {
            Ok(items) => {
                let found = items.len();
                let room = cap - queue.len();
                queue.extend(items.into_iter().take(room));
                report.record_discovered(found);
                sink.success(format!(
                    "Found {} videos. Added {} to the queue.",
                    found,
                    found.min(room)
                ));
            }
            Err(e) => {
                sink.error(format!(
                    "Failed to fetch videos for channel {}: {}",
                    source, e
                ));
            }
        }
    }

    sink.info(format!(
        "Total videos to process: {}. Capped at {}.",
        queue.len(),
        cap
    ));
    queue
}
