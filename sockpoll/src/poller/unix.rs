//! POSIX `poll(2)` backend.

use crate::descriptor::Descriptor;
use crate::error::{Error, Result};
use crate::timeout::Timeout;

use libc::{POLLERR, POLLHUP, POLLIN, POLLNVAL, POLLOUT, c_short, nfds_t, poll, pollfd};
use std::io;

/// Native "readable" bit.
pub(crate) const POLL_READABLE: c_short = POLLIN;

/// Native "writable" bit.
pub(crate) const POLL_WRITABLE: c_short = POLLOUT;

/// Error condition reported on the descriptor.
pub(crate) const POLL_ERROR: c_short = POLLERR;

/// Peer hung up.
pub(crate) const POLL_HANGUP: c_short = POLLHUP;

/// Descriptor is not open.
pub(crate) const POLL_INVALID: c_short = POLLNVAL;

/// Native poll-request record.
pub(crate) type PollFd = pollfd;

/// Builds a request watching `descriptor` for `events`.
pub(crate) fn request(descriptor: Descriptor, events: c_short) -> PollFd {
    pollfd {
        fd: descriptor.as_raw(),
        events,
        revents: 0,
    }
}

/// Returns the events the OS reported for a request.
pub(crate) fn revents(fd: &PollFd) -> c_short {
    fd.revents
}

/// Blocks in `poll(2)` until a request is satisfied or the timeout elapses.
///
/// Returns the number of records with a non-zero `revents`.
pub(crate) fn sys_poll(fds: &mut [PollFd], timeout: Timeout) -> Result<usize> {
    let nfds = nfds_t::try_from(fds.len()).map_err(|_| Error::TooManyDescriptors(fds.len()))?;

    let rc = unsafe { poll(fds.as_mut_ptr(), nfds, timeout.as_millis()) };
    if rc < 0 {
        return Err(io::Error::last_os_error().into());
    }

    Ok(rc as usize)
}
