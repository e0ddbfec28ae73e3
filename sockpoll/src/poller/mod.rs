//! Platform-specific wait syscall.
//!
//! This module hides the native poll-request record and the blocking
//! call behind one small interface:
//! - `POLL_*` constants backing [`Events`](crate::Events),
//! - `request()` building a native record for a descriptor,
//! - `revents()` reading back what the OS observed,
//! - `sys_poll()` issuing the wait.
//!
//! The concrete implementation is selected at compile time
//! depending on the target operating system.

#[cfg(unix)]
pub(crate) mod unix;

#[cfg(unix)]
pub(crate) use unix as platform;

#[cfg(windows)]
pub(crate) mod windows;

#[cfg(windows)]
pub(crate) use windows as platform;
