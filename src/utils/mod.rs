//! Message chunking, delivery pacing and timestamp formatting

pub mod chunking;
pub mod formatting;
pub mod throttle;

pub use chunking::{MAX_MESSAGE_CHARS, split_message};
pub use throttle::{DELIVERY_INTERVAL, Throttle};
