/// Instructions sent ahead of every transcript.
pub const SUMMARY_PROMPT: &str = "\
## Goal
Turn the transcript of a video into a distilled, structured text for a reader who knows the \
topic but is not an expert. Surface the expert-level essentials and the insights that make a \
difference.

## Principle: amplify the signal, remove the noise
This is distillation, not summarization. Remove filler words, repetition and intro/outro chatter. \
Keep the main ideas, critical details, expert advice and strategies. Prefer practical, \
high-value information over generic statements.

## Rules
1. Formatting: write Markdown only. Use `##` for main topics and `-` bullets for sub-points. \
Bold important concepts, tool names, technical terms and proper names with `**`.
2. Cleanup: drop greetings, channel plugs and calls to like or subscribe. Merge sentences that \
say the same thing into one clear statement.
3. Tone: active, clear, professional sentences of roughly 15-20 words. Readability wins over \
the speaker's casual tone, but never split a sentence in a way that changes its meaning.
4. Names: keep every tool, software, technology, channel and person mentioned, in bold.
5. Stories and examples: reduce each to its lesson, ideally as problem -> action -> result in \
one or two sentences.
6. Order: follow the speaker's original logical order. Do not regroup ideas by theme.
7. Technical and visual references: keep standard technical terms as they are. Remove \
references to on-screen visuals or sounds (\"as you can see here\").
8. Multiple speakers: separate them as `**Speaker Name:**`.

Transcript:
";

/// Full request text for one transcript.
#[must_use]
pub fn build_summary_prompt(transcript: &str) -> String {
    format!("{SUMMARY_PROMPT}{}", transcript.trim())
}
