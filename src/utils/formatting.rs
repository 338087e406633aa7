use chrono::{DateTime, Utc};
use chrono_tz::Tz;

/// Day-first timestamp used in outbound messages, e.g. `05.03.2025 14:07:09`.
#[must_use]
pub fn format_timestamp(ts: DateTime<Utc>, tz: Tz) -> String {
    ts.with_timezone(&tz).format("%d.%m.%Y %H:%M:%S").to_string()
}
