//! Fixed-delay retry for fallible async operations

use std::future::Future;
use std::time::Duration;

/// Runs `op` up to `attempts` times with `delay` between failures,
/// returning the first success or the last error. No delay follows the
/// final attempt.
pub async fn run_with_retry<T, E, F, Fut>(attempts: u32, delay: Duration, mut op: F) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    let mut last = op().await;
    for _ in 1..attempts {
        if last.is_ok() {
            return last;
        }
        tokio::time::sleep(delay).await;
        last = op().await;
    }
    last
}
