//! Scalar exports: `sum` and `sum_long_running`.

use std::time::Duration;

/// Wall-clock delay consumed by [`sum_long_running`] before it returns.
///
/// The delay always runs to completion; there is no cancellation and no
/// timeout parameter.
pub const SUM_LONG_RUNNING_DELAY: Duration = Duration::from_millis(2000);

/// A very short-lived native call.
///
/// Fine to invoke on the caller's main/UI thread: it never blocks and
/// completes in negligible time. Returns the wrapping sum of `a` and `b`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn sum(a: i32, b: i32) -> i32 {
    ffi_guard!(0, { uibridge_core::ops::sum(a, b) })
}

/// A long-running native call that occupies the calling thread.
///
/// Blocks for [`SUM_LONG_RUNNING_DELAY`] before returning the same wrapping
/// sum as [`sum`]. Never invoke this from a thread whose responsiveness
/// matters (a UI thread, a main isolate): the thread is occupied for the
/// full delay with no opportunity to do other work. Call it from a worker
/// execution context instead.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn sum_long_running(a: i32, b: i32) -> i32 {
    ffi_guard!(0, {
        uibridge_core::ops::slow_sum(a, b, SUM_LONG_RUNNING_DELAY)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::time::Instant;

    #[test]
    fn sum_adds() {
        assert_eq!(sum(2, 3), 5);
        assert_eq!(sum(-1, 1), 0);
    }

    #[test]
    fn sum_wraps_instead_of_overflowing() {
        assert_eq!(sum(i32::MAX, 1), i32::MIN);
    }

    #[test]
    fn sum_long_running_blocks_for_at_least_the_fixed_delay() {
        let start = Instant::now();
        let result = sum_long_running(20, 22);
        assert!(start.elapsed() >= SUM_LONG_RUNNING_DELAY);
        assert_eq!(result, 42);
    }

    proptest! {
        #[test]
        fn sum_agrees_with_core(a in any::<i32>(), b in any::<i32>()) {
            prop_assert_eq!(sum(a, b), uibridge_core::ops::sum(a, b));
        }
    }
}
