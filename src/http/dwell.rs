//! Minimum-dwell enforcement
//!
//! Holds a successful result back until a caller-supplied floor has elapsed
//! since the request was issued. A request that already took longer than the
//! floor is delivered immediately, and errors are never held. This is the
//! piece that keeps a loading indicator on screen long enough to read without
//! delaying anything longer than required.

use std::future::Future;
use std::time::Duration;

use tokio::time::Instant;
use tracing::debug;

/// Time left on the floor once `elapsed` has already passed.
pub fn remaining_after(floor: Duration, elapsed: Duration) -> Duration {
    floor.saturating_sub(elapsed)
}

/// Issue a request and hold its success back until `floor` has elapsed.
///
/// `issue` is invoked immediately; the clock starts at the moment of
/// invocation. Once the future settles, the remainder of the floor is
/// computed exactly once:
///
/// - settled `Ok` before the floor: sleep out the remainder, then deliver
/// - settled `Ok` at or past the floor: deliver with no added delay
/// - settled `Err`: deliver immediately, the floor never applies
///
/// A `floor` of [`Duration::ZERO`] delivers on settlement. Each call owns its
/// own clock; overlapping calls are fully independent.
pub async fn with_min_dwell<F, Fut, T, E>(floor: Duration, issue: F) -> Result<T, E>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    let started = Instant::now();
    let result = issue().await;

    if result.is_ok() {
        let remaining = remaining_after(floor, started.elapsed());
        if !remaining.is_zero() {
            debug!(?remaining, "holding result until the dwell floor elapses");
            tokio::time::sleep(remaining).await;
        }
    }

    result
}
