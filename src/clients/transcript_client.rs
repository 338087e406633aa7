//! Stand-in transcript source.
//!
//! The YouTube Data API has no public transcript endpoint, so the binary
//! runs with this fixture until a real [`ContentClient`] is plugged in.

use async_trait::async_trait;

use super::ContentClient;
use crate::errors::ClientError;

const SAMPLE_TRANSCRIPT: &str = "\
Hi everyone, welcome back to the channel, don't forget to subscribe. \
So today we are talking about how to keep a side project alive. \
The first thing is you need a single place for tasks, I use Notion for this, \
and honestly the biggest mistake I made was having filters set up wrong so half my tasks were hidden. \
Once I rebuilt the filters around due dates everything was visible again. \
Second, ship small. Every week I pick one feature I can finish in two evenings. \
Third, automate the boring parts, for example I use GitHub Actions to deploy on every push. \
That's it for today, see you next week.";

#[derive(Debug, Clone, Default)]
pub struct SampleTranscriptClient;

impl SampleTranscriptClient {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ContentClient for SampleTranscriptClient {
    async fn fetch(&self, _item_id: &str) -> Result<Option<String>, ClientError> {
        Ok(Some(SAMPLE_TRANSCRIPT.to_string()))
    }
}
