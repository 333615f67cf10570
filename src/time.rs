//! Time abstraction traits for platform-agnostic timing.

/// Fixed interval between two iterations of the cycle loop.
pub const TICK_PERIOD_MS: u64 = 500;

/// Trait abstraction for duration types.
pub trait TimeDuration: Copy + PartialEq {
    /// Zero duration constant.
    const ZERO: Self;

    /// Converts duration to milliseconds.
    fn as_millis(&self) -> u64;

    /// Creates duration from milliseconds.
    fn from_millis(millis: u64) -> Self;
}

/// Trait for suspending the main loop between iterations.
///
/// Implement this with whatever the platform offers: a busy-wait delay,
/// a timer-backed sleep, or `wfi` until a tick counter has advanced.
pub trait Delay<D: TimeDuration> {
    /// Blocks the caller for at least `duration`.
    fn delay(&mut self, duration: D);
}

/// Returns the loop period expressed in the caller's duration type.
#[inline]
pub fn tick_period<D: TimeDuration>() -> D {
    D::from_millis(TICK_PERIOD_MS)
}
