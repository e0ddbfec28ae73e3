//! Native event bitmasks.
//!
//! An [`Events`] value is both the mask handed to the OS and the raw
//! result it hands back. The named constants are resolved at compile
//! time from the target's poll header and never change at runtime.

use crate::interest::Interest;
use crate::poller::platform;

use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign};

/// A set of native poll event bits.
///
/// Results returned by [`poll_one`](crate::poll_one) are passed through
/// unfiltered, so they may hold bits that were never requested, such as
/// [`Events::HANGUP`] or [`Events::ERROR`].
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Events(i16);

impl Events {
    /// No events.
    pub const EMPTY: Events = Events(0);

    /// Data can be read without blocking (`POLLIN` / `POLLRDNORM`).
    pub const READABLE: Events = Events(platform::POLL_READABLE);

    /// Data can be written without blocking (`POLLOUT` / `POLLWRNORM`).
    pub const WRITABLE: Events = Events(platform::POLL_WRITABLE);

    /// An error condition is pending (`POLLERR`). Reported, never requested.
    pub const ERROR: Events = Events(platform::POLL_ERROR);

    /// The peer hung up (`POLLHUP`). Reported, never requested.
    pub const HANGUP: Events = Events(platform::POLL_HANGUP);

    /// The descriptor is not open (`POLLNVAL`). Reported, never requested.
    pub const INVALID: Events = Events(platform::POLL_INVALID);

    /// Wraps a raw native bitmask.
    pub const fn from_raw(bits: i16) -> Self {
        Self(bits)
    }

    /// Returns the raw native bitmask.
    pub const fn bits(self) -> i16 {
        self.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if every bit of `other` is set in `self`.
    pub const fn contains(self, other: Events) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns `true` if `self` and `other` share at least one bit.
    ///
    /// This is the readiness test used by [`poll_many`](crate::poll_many):
    /// extra bits reported next to the requested one never hide a match.
    pub const fn intersects(self, other: Events) -> bool {
        self.0 & other.0 != 0
    }

    pub const fn is_readable(self) -> bool {
        self.intersects(Events::READABLE)
    }

    pub const fn is_writable(self) -> bool {
        self.intersects(Events::WRITABLE)
    }

    pub const fn is_error(self) -> bool {
        self.intersects(Events::ERROR)
    }

    pub const fn is_hangup(self) -> bool {
        self.intersects(Events::HANGUP)
    }

    pub const fn is_invalid(self) -> bool {
        self.intersects(Events::INVALID)
    }
}

impl BitOr for Events {
    type Output = Events;

    fn bitor(self, rhs: Events) -> Events {
        Events(self.0 | rhs.0)
    }
}

impl BitOrAssign for Events {
    fn bitor_assign(&mut self, rhs: Events) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for Events {
    type Output = Events;

    fn bitand(self, rhs: Events) -> Events {
        Events(self.0 & rhs.0)
    }
}

impl From<Interest> for Events {
    /// Translates portable interest flags to native bits.
    fn from(interest: Interest) -> Events {
        let mut events = Events::EMPTY;
        if interest.is_readable() {
            events |= Events::READABLE;
        }
        if interest.is_writable() {
            events |= Events::WRITABLE;
        }
        events
    }
}

impl fmt::Debug for Events {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const NAMES: [(Events, &str); 5] = [
            (Events::READABLE, "READABLE"),
            (Events::WRITABLE, "WRITABLE"),
            (Events::ERROR, "ERROR"),
            (Events::HANGUP, "HANGUP"),
            (Events::INVALID, "INVALID"),
        ];

        let mut rest = self.0;
        let mut first = true;

        f.write_str("Events(")?;
        for (flag, name) in NAMES {
            if self.contains(flag) {
                if !first {
                    f.write_str(" | ")?;
                }
                f.write_str(name)?;
                rest &= !flag.0;
                first = false;
            }
        }
        if rest != 0 {
            if !first {
                f.write_str(" | ")?;
            }
            write!(f, "{:#x}", rest)?;
            first = false;
        }
        if first {
            f.write_str("EMPTY")?;
        }
        f.write_str(")")
    }
}
