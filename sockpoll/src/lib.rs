//! # sockpoll
//!
//! **sockpoll** is a blocking readiness poll for sockets and file handles
//! that behaves the same on top of POSIX `poll()` and Windows `WSAPoll()`.
//!
//! It is not a reactor: there is no registration, no background thread and
//! no state kept between calls. A call builds the native request records,
//! blocks until something is ready or the timeout elapses, and reports
//! the answer:
//!
//! - [`poll_one`] returns the raw events observed on one descriptor
//! - [`poll_many`] returns the index of the first ready descriptor in a slice
//! - [`wait`] / [`wait_timeout`] answer "is this socket ready?" as a `bool`
//!
//! A descriptor counts as ready when the OS reports **any** of the requested
//! bits, even if it also reports extra ones such as hang-up. With several
//! descriptors ready at once, the lowest index wins.
//!
//! Descriptors are never owned, opened or closed here. Anything implementing
//! `AsRawFd` (Unix) or `AsRawSocket` (Windows) can be polled directly.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use sockpoll::{Events, poll_many};
//! use std::net::TcpStream;
//!
//! let clients: Vec<TcpStream> = connect_all()?;
//!
//! match poll_many(&clients, Events::READABLE, 1000)? {
//!     Some(index) => serve(&clients[index]),
//!     None => println!("nothing to read within a second"),
//! }
//! ```
//!
//! ## Errors
//!
//! Timeouts and empty descriptor sets are normal results. Only a failure
//! of the wait call itself (interrupted by a signal, invalid arguments, …)
//! is returned as an [`Error`].
//!
//! ## Logging
//!
//! Every wait is traced through the [`log`] facade; no logger is installed.

mod builder;
mod descriptor;
mod error;
mod event;
mod interest;
mod poll;
mod poller;
mod timeout;

pub use builder::{Poll, PollBuilder};
pub use descriptor::{AsDescriptor, Descriptor, RawDescriptor};
pub use error::{Error, Result};
pub use event::Events;
pub use interest::Interest;
pub use poll::{poll_many, poll_one, wait, wait_timeout};
pub use timeout::Timeout;
