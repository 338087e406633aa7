//! Splitting outbound messages to fit a destination's size limit.
//!
//! Sizes are counted in `char`s. Chunks concatenate back to the original text.

/// Telegram rejects `sendMessage` text longer than this.
pub const MAX_MESSAGE_CHARS: usize = 4096;

/// Removes the next chunk from the front of `buffer`.
///
/// Prefers a paragraph break, then a line break, then any whitespace in the
/// back half of the allowed window; falls back to a hard cut at `max_chars`.
/// Breaks in the front half are ignored so a short header does not end up as
/// a message of its own.
#[must_use]
fn take_chunk(buffer: &mut String, max_chars: usize) -> Option<String> {
    if buffer.is_empty() {
        return None;
    }

    if buffer.chars().count() <= max_chars {
        return Some(std::mem::take(buffer));
    }

    // Byte offset of the first char past the window.
    let byte_end = buffer
        .char_indices()
        .nth(max_chars)
        .map_or(buffer.len(), |(idx, _)| idx);
    let prefix = &buffer[..byte_end];

    let min_split = (byte_end / 2).max(1);

    let mut split_idx = prefix
        .rfind("\n\n")
        .map(|p| p + 2)
        .filter(|&p| p >= min_split)
        .or_else(|| prefix.rfind('\n').map(|p| p + 1).filter(|&p| p >= min_split));

    if split_idx.is_none() {
        let mut last_ws: Option<usize> = None;
        for (idx, ch) in prefix.char_indices() {
            if ch.is_whitespace() {
                last_ws = Some(idx + ch.len_utf8());
            }
        }
        split_idx = last_ws.filter(|&p| p >= min_split);
    }

    let split_idx = split_idx.unwrap_or(byte_end);
    Some(buffer.drain(..split_idx).collect())
}

/// Splits `text` into chunks of at most `max_chars` characters each.
///
/// Text that already fits comes back as a single unchanged chunk, including
/// the empty string. A `max_chars` of zero is treated as one.
#[must_use]
pub fn split_message(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    if text.chars().count() <= max_chars {
        return vec![text.to_string()];
    }

    let mut buffer = text.to_string();
    let mut chunks = Vec::new();
    while let Some(chunk) = take_chunk(&mut buffer, max_chars) {
        chunks.push(chunk);
    }
    chunks
}
