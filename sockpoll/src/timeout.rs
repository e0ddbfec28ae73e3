//! Poll timeouts.
//!
//! The wait syscalls take a signed millisecond count where `0` means
//! "do not block" and any negative value means "block indefinitely".
//! [`Timeout`] keeps that convention and adds lossless-enough
//! conversions from [`Duration`].

use std::time::Duration;

/// A poll timeout in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Timeout(i32);

impl Timeout {
    /// Block until a descriptor is ready.
    pub const INFINITE: Timeout = Timeout(-1);

    /// Check readiness and return immediately.
    pub const IMMEDIATE: Timeout = Timeout(0);

    /// Creates a timeout from a raw millisecond count.
    ///
    /// Negative values are passed to the OS as-is and block indefinitely.
    pub const fn from_millis(ms: i32) -> Self {
        Self(ms)
    }

    /// Returns the raw millisecond count handed to the OS.
    pub const fn as_millis(self) -> i32 {
        self.0
    }

    pub const fn is_infinite(self) -> bool {
        self.0 < 0
    }
}

impl Default for Timeout {
    fn default() -> Self {
        Timeout::INFINITE
    }
}

impl From<i32> for Timeout {
    fn from(ms: i32) -> Self {
        Timeout(ms)
    }
}

impl From<Duration> for Timeout {
    /// Converts a duration, rounding sub-millisecond remainders up so a
    /// non-zero duration never turns into a non-blocking poll.
    ///
    /// Durations longer than `i32::MAX` milliseconds are clamped.
    fn from(duration: Duration) -> Self {
        let mut ms = duration.as_millis();
        if duration.subsec_nanos() % 1_000_000 != 0 {
            ms += 1;
        }

        Timeout(ms.min(i32::MAX as u128) as i32)
    }
}

impl From<Option<Duration>> for Timeout {
    /// `None` blocks indefinitely.
    fn from(duration: Option<Duration>) -> Self {
        duration.map(Timeout::from).unwrap_or(Timeout::INFINITE)
    }
}
