use crate::descriptor::AsDescriptor;
use crate::error::Result;
use crate::event::Events;
use crate::poll::{poll_many, poll_one, wait_timeout};
use crate::timeout::Timeout;

/// Builder for a reusable poll configuration.
///
/// `PollBuilder` fixes the event mask and timeout once so the same
/// settings can be applied to many calls.
///
/// # Examples
///
/// ```rust,ignore
/// let poll = PollBuilder::new()
///     .interest(Interest::READABLE)
///     .timeout(Duration::from_millis(500))
///     .build();
///
/// if let Some(index) = poll.many(&clients)? {
///     handle(&clients[index]);
/// }
/// ```
pub struct PollBuilder {
    /// Events every descriptor is watched for.
    events: Events,

    /// How long a call may block.
    timeout: Timeout,
}

impl PollBuilder {
    /// Creates a new `PollBuilder` with default configuration.
    ///
    /// By default, descriptors are watched for readability and calls
    /// block until something is ready.
    pub fn new() -> Self {
        Self {
            events: Events::READABLE,
            timeout: Timeout::INFINITE,
        }
    }

    /// Sets the event mask, from either [`Interest`](crate::Interest)
    /// or native [`Events`].
    pub fn interest(mut self, mask: impl Into<Events>) -> Self {
        self.events = mask.into();
        self
    }

    /// Sets the timeout, from milliseconds, a `Duration`, or
    /// an `Option<Duration>` where `None` blocks indefinitely.
    pub fn timeout(mut self, timeout: impl Into<Timeout>) -> Self {
        self.timeout = timeout.into();
        self
    }

    /// Builds the poll configuration.
    pub fn build(self) -> Poll {
        Poll {
            events: self.events,
            timeout: self.timeout,
        }
    }
}

impl Default for PollBuilder {
    /// Creates a default `PollBuilder`.
    fn default() -> Self {
        Self::new()
    }
}

/// A fixed event mask and timeout, applied on every call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Poll {
    events: Events,
    timeout: Timeout,
}

impl Poll {
    pub fn events(&self) -> Events {
        self.events
    }

    pub fn timeout(&self) -> Timeout {
        self.timeout
    }

    /// See [`poll_one`].
    pub fn one<D>(&self, source: &D) -> Result<Events>
    where
        D: AsDescriptor + ?Sized,
    {
        poll_one(source, self.events, self.timeout)
    }

    /// See [`poll_many`].
    pub fn many<D>(&self, sources: &[D]) -> Result<Option<usize>>
    where
        D: AsDescriptor,
    {
        poll_many(sources, self.events, self.timeout)
    }

    /// See [`wait_timeout`].
    pub fn ready<D>(&self, source: &D) -> Result<bool>
    where
        D: AsDescriptor + ?Sized,
    {
        wait_timeout(source, self.events, self.timeout)
    }
}
