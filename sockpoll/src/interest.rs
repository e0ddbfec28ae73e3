use std::ops::BitOr;

/// Portable readiness interest.
///
/// Unlike [`Events`](crate::Events), an `Interest` carries no native bits;
/// it is translated to the target's constants when converted into
/// `Events`. Every poll function accepts either type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Interest {
    read: bool,
    write: bool,
}

impl Interest {
    /// Interest in readability.
    pub const READABLE: Interest = Interest {
        read: true,
        write: false,
    };

    /// Interest in writability.
    pub const WRITABLE: Interest = Interest {
        read: false,
        write: true,
    };

    pub const fn is_readable(self) -> bool {
        self.read
    }

    pub const fn is_writable(self) -> bool {
        self.write
    }

    /// Combines two interests.
    pub const fn union(self, other: Interest) -> Interest {
        Interest {
            read: self.read || other.read,
            write: self.write || other.write,
        }
    }
}

impl BitOr for Interest {
    type Output = Interest;

    fn bitor(self, rhs: Interest) -> Interest {
        self.union(rhs)
    }
}
