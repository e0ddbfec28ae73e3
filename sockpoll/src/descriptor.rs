//! Portable descriptor type.
//!
//! This is the only place where the native handle representation
//! differs between targets:
//! - Unix: a signed 32-bit file descriptor (`RawFd`)
//! - Windows: an unsigned 64-bit socket handle (`RawSocket`)
//!
//! Everything above this module works with [`Descriptor`] and never
//! looks at the target.

#[cfg(unix)]
use std::os::fd::{AsRawFd, RawFd};

#[cfg(windows)]
use std::os::windows::io::{AsRawSocket, RawSocket};

/// Native handle type of the current target.
#[cfg(unix)]
pub type RawDescriptor = RawFd;

/// Native handle type of the current target.
#[cfg(windows)]
pub type RawDescriptor = RawSocket;

/// An opaque, caller-owned socket or file handle.
///
/// A `Descriptor` is only a copy of the raw value: it does not own the
/// handle and never closes it. The handle must stay open for as long as
/// a poll call that uses it is running.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Descriptor(RawDescriptor);

impl Descriptor {
    /// Wraps a raw native handle.
    pub const fn from_raw(raw: RawDescriptor) -> Self {
        Self(raw)
    }

    /// Returns the raw native handle.
    pub const fn as_raw(self) -> RawDescriptor {
        self.0
    }
}

impl From<RawDescriptor> for Descriptor {
    fn from(raw: RawDescriptor) -> Self {
        Self(raw)
    }
}

#[cfg(unix)]
impl AsRawFd for Descriptor {
    fn as_raw_fd(&self) -> RawFd {
        self.0
    }
}

#[cfg(windows)]
impl AsRawSocket for Descriptor {
    fn as_raw_socket(&self) -> RawSocket {
        self.0
    }
}

/// Anything that can be polled.
///
/// Implemented for every type exposing a raw handle, so
/// `std::net::TcpStream`, `TcpListener`, `UdpSocket` and `Descriptor`
/// itself can be passed straight to the poll functions.
pub trait AsDescriptor {
    /// Returns the descriptor to watch.
    fn as_descriptor(&self) -> Descriptor;
}

#[cfg(unix)]
impl<T: AsRawFd + ?Sized> AsDescriptor for T {
    fn as_descriptor(&self) -> Descriptor {
        Descriptor(self.as_raw_fd())
    }
}

#[cfg(windows)]
impl<T: AsRawSocket + ?Sized> AsDescriptor for T {
    fn as_descriptor(&self) -> Descriptor {
        Descriptor(self.as_raw_socket())
    }
}
