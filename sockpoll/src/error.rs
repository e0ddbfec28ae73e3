use std::io;

/// A `sockpoll` error.
///
/// A timeout or an empty descriptor set is **not** an error: both are
/// reported as "nothing ready" by the poll functions. Only a failure of
/// the wait syscall itself ends up here.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The native wait call (`poll` / `WSAPoll`) failed.
    ///
    /// Carries the OS error, e.g. `EINTR` when a signal interrupted the
    /// wait or `EINVAL` when the descriptor count exceeds the process limit.
    #[error("poll failed: {0}")]
    Os(#[from] io::Error),

    /// The descriptor slice is longer than the native count type allows.
    #[error("too many descriptors for a single poll: {0}")]
    TooManyDescriptors(usize),

    /// Winsock could not be initialized (Windows only).
    #[error("WSAStartup failed with code {0}")]
    WinsockInit(i32),
}

impl Error {
    /// Returns `true` if the wait was cut short by a signal.
    ///
    /// The poll functions never retry on their own; callers that want
    /// to resume waiting can check this and call again.
    pub fn is_interrupted(&self) -> bool {
        matches!(self, Error::Os(e) if e.kind() == io::ErrorKind::Interrupted)
    }
}

impl From<Error> for io::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::Os(e) => e,
            other => io::Error::other(other),
        }
    }
}

/// Short for `std::result::Result<T, sockpoll::Error>`
pub type Result<T> = std::result::Result<T, Error>;
