//! Monotonic time source

/// Monotonic clock used for render slice budgets and gesture timing
pub trait Clock {
    /// Microseconds since an arbitrary fixed epoch
    fn now_us(&self) -> u64;

    /// Milliseconds since the same epoch, wrapping at `u32::MAX`
    fn now_ms(&self) -> u32 {
        (self.now_us() / 1_000) as u32
    }
}
