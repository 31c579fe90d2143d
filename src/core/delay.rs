use crate::utils::error::{DrillError, Result};
use std::time::Duration;
use tokio::time::sleep;

/// How long every call suspends before producing its outcome.
pub const SQUARE_DELAY: Duration = Duration::from_secs(1);

/// Squares `n` after [`SQUARE_DELAY`] has elapsed.
///
/// The timer always runs to completion first; the argument is only checked
/// once the delay is over. Negative input then fails with the message
/// "Negative number not allowed". No cancellation, no retry.
pub async fn delayed_square(n: f64) -> Result<f64> {
    sleep(SQUARE_DELAY).await;

    if n < 0.0 {
        return Err(DrillError::InvalidArgument {
            message: "Negative number not allowed".to_string(),
        });
    }

    let squared = n * n;
    tracing::debug!("squared {} to {} after {:?}", n, squared, SQUARE_DELAY);
    Ok(squared)
}
