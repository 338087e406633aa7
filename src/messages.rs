//! Outbound message text for items and the end-of-run report.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use url::form_urlencoded;

use crate::core::models::{Item, RunReport};
use crate::utils::formatting::format_timestamp;

/// Canonical watch link for an item id.
#[must_use]
pub fn watch_url(item_id: &str) -> String {
    let encoded: String = form_urlencoded::byte_serialize(item_id.as_bytes()).collect();
    format!("https://www.youtube.com/watch?v={encoded}")
}

#[must_use]
pub fn format_item_message(
    item: &Item,
    summary: &str,
    completed_at: DateTime<Utc>,
    tz: Tz,
) -> String {
    format!(
        "🎬 **{title}**\n\n📺 Channel: {origin}\n🔗 Link: {link}\n\n---\n\n{summary}\n\n---\n⏱️ Processed: {ts}",
        title = item.title,
        origin = item.origin,
        link = watch_url(&item.id),
        ts = format_timestamp(completed_at, tz),
    )
}

#[must_use]
pub fn format_report_message(report: &RunReport, tz: Tz) -> String {
    let finished_at = report.end_time.unwrap_or(report.start_time);
    format!(
        "📊 **DAILY SUMMARY REPORT**\n\n✅ Items processed: {}\n❌ Failed: {}\n📹 Items discovered: {}\n📺 Sources scanned: {}\n\n⏱️ {}",
        report.processed,
        report.failed,
        report.total_discovered,
        report.scanned_sources,
        format_timestamp(finished_at, tz),
    )
}
