//! Scalar operations: the short-lived sum and its deliberately slow twin.

use std::time::Duration;

/// Sum of two integers.
///
/// Pure and total: wrapping two's-complement addition, because the boundary
/// contract has no overflow signaling. Completes in negligible bounded time,
/// so it is safe to call from a thread whose responsiveness matters.
pub fn sum(a: i32, b: i32) -> i32 {
    a.wrapping_add(b)
}

/// Sum of two integers after blocking the calling thread for `delay`.
///
/// Identical result contract to [`sum`]. The sleep stands in for real work:
/// the calling thread is occupied for the full duration and there is no
/// cancellation. Callers that must stay responsive invoke this from a worker
/// context.
pub fn slow_sum(a: i32, b: i32, delay: Duration) -> i32 {
    std::thread::sleep(delay);
    a.wrapping_add(b)
}
