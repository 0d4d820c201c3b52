//! Wall-clock instrumentation for public operations.

use std::time::{Duration, Instant};

use log::{debug, warn};

/// Calls slower than this are logged at `warn` level.
pub const SLOW_CALL_THRESHOLD: Duration = Duration::from_millis(100);

/// Runs `f`, logging how long it took under `name`.
///
/// Durations above [`SLOW_CALL_THRESHOLD`] are reported with `warn!`,
/// everything else with `debug!`. The return value passes through untouched.
///
/// # Examples
/// ```
/// use u_statkit::monitor::timed;
/// assert_eq!(timed("answer", || 42), 42);
/// ```
pub fn timed<T>(name: &str, f: impl FnOnce() -> T) -> T {
    let start = Instant::now();
    let result = f();
    let elapsed = start.elapsed();
    if elapsed > SLOW_CALL_THRESHOLD {
        warn!("{name} took {:.4} seconds to execute", elapsed.as_secs_f64());
    } else {
        debug!("{name} executed in {:.4} seconds", elapsed.as_secs_f64());
    }
    result
}
