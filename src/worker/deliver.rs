use tracing::debug;

use crate::clients::DeliveryClient;
use crate::core::models::Destination;
use crate::errors::ClientError;
use crate::utils::Throttle;

/// Sends `chunks` in order, pacing every call through `throttle`.
///
/// Stops at the first failed chunk; the remaining chunks are not sent.
pub async fn deliver_chunks(
    delivery: &dyn DeliveryClient,
    destination: Destination<'_>,
    chunks: &[String],
    throttle: &mut Throttle,
) -> Result<(), ClientError> {
    for (index, chunk) in chunks.iter().enumerate() {
        throttle.wait().await;
        let result = delivery
            .send(destination.target, destination.credential, chunk)
            .await;
        throttle.record();
        result?;
        debug!(
            "Delivered chunk {}/{} ({} chars)",
            index + 1,
            chunks.len(),
            chunk.chars().count()
        );
    }
    Ok(())
}
