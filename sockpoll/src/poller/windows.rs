//! Windows `WSAPoll` backend.
//!
//! `WSAPoll` only accepts sockets and requires Winsock to be started
//! once per process before the first call.

use crate::descriptor::Descriptor;
use crate::error::{Error, Result};
use crate::timeout::Timeout;

use std::io;
use std::mem;
use std::sync::OnceLock;

use windows_sys::Win32::Networking::WinSock::{
    POLLERR, POLLHUP, POLLNVAL, POLLRDNORM, POLLWRNORM, SOCKET, SOCKET_ERROR, WSADATA, WSAPOLLFD,
    WSAPoll, WSAStartup,
};

/// Native "readable" bit.
pub(crate) const POLL_READABLE: i16 = POLLRDNORM as i16;

/// Native "writable" bit.
pub(crate) const POLL_WRITABLE: i16 = POLLWRNORM as i16;

/// Error condition reported on the socket.
pub(crate) const POLL_ERROR: i16 = POLLERR as i16;

/// Peer hung up.
pub(crate) const POLL_HANGUP: i16 = POLLHUP as i16;

/// Handle is not a valid socket.
pub(crate) const POLL_INVALID: i16 = POLLNVAL as i16;

/// Native poll-request record.
pub(crate) type PollFd = WSAPOLLFD;

/// Creates a MAKEWORD value for Winsock version.
#[inline]
const fn makeword(low: u8, high: u8) -> u16 {
    ((high as u16) << 8) | (low as u16)
}

/// Result of the one-time `WSAStartup` call.
static WINSOCK_INIT: OnceLock<i32> = OnceLock::new();

/// Initialize Winsock if not already initialized.
fn ensure_winsock() -> Result<()> {
    let rc = *WINSOCK_INIT.get_or_init(|| {
        let mut data: WSADATA = unsafe { mem::zeroed() };
        let rc = unsafe { WSAStartup(makeword(2, 2), &mut data as *mut _) };
        if rc != 0 {
            log::warn!("WSAStartup failed, code={}", rc);
        }
        rc
    });

    if rc != 0 {
        return Err(Error::WinsockInit(rc));
    }

    Ok(())
}

/// Builds a request watching `descriptor` for `events`.
pub(crate) fn request(descriptor: Descriptor, events: i16) -> PollFd {
    WSAPOLLFD {
        fd: descriptor.as_raw() as SOCKET,
        events: events as _,
        revents: 0,
    }
}

/// Returns the events the OS reported for a request.
pub(crate) fn revents(fd: &PollFd) -> i16 {
    fd.revents as i16
}

/// Blocks in `WSAPoll` until a request is satisfied or the timeout elapses.
///
/// Returns the number of records with a non-zero `revents`.
pub(crate) fn sys_poll(fds: &mut [PollFd], timeout: Timeout) -> Result<usize> {
    ensure_winsock()?;

    let nfds = u32::try_from(fds.len()).map_err(|_| Error::TooManyDescriptors(fds.len()))?;

    let rc = unsafe { WSAPoll(fds.as_mut_ptr(), nfds, timeout.as_millis()) };
    if rc == SOCKET_ERROR {
        return Err(io::Error::last_os_error().into());
    }

    Ok(rc as usize)
}
