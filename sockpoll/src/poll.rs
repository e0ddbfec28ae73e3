//! Blocking readiness polls.
//!
//! Each call is a single transaction: build the native requests, block
//! in the OS wait call, read the results back. Nothing is kept between
//! calls, so independent threads may poll concurrently without any
//! coordination.

use crate::descriptor::AsDescriptor;
use crate::error::Result;
use crate::event::Events;
use crate::poller::platform;
use crate::timeout::Timeout;

/// Waits for a single descriptor to become ready.
///
/// Returns the events observed by the OS, unfiltered. The result is
/// empty if the timeout elapsed, and may contain bits beyond `mask`
/// (hang-up, error, invalid descriptor) that the caller has to
/// interpret.
///
/// # Errors
///
/// Returns [`Error::Os`](crate::Error::Os) if the wait call itself fails,
/// including when it is interrupted by a signal.
pub fn poll_one<D>(
    source: &D,
    mask: impl Into<Events>,
    timeout: impl Into<Timeout>,
) -> Result<Events>
where
    D: AsDescriptor + ?Sized,
{
    let mask = mask.into();
    let timeout = timeout.into();
    let descriptor = source.as_descriptor();

    let mut fds = [platform::request(descriptor, mask.bits())];
    let ready = sys_poll(&mut fds, mask, timeout)?;

    let observed = Events::from_raw(platform::revents(&fds[0]));
    log::trace!(
        "poll one, fd={:?}, ready={}, revents={:?}",
        descriptor,
        ready,
        observed
    );

    Ok(observed)
}

/// Waits for the first of several descriptors to become ready.
///
/// Every descriptor is watched for the same `mask`. After the wait
/// returns, results are scanned in slice order and the index of the
/// first descriptor whose observed events share at least one bit with
/// `mask` is returned. When several are ready at once the lowest index
/// wins; callers wanting fairness across repeated polls must rotate
/// the slice themselves.
///
/// Returns `Ok(None)` if the timeout elapsed with nothing ready, or
/// immediately (without any syscall) if `sources` is empty.
///
/// # Errors
///
/// Returns [`Error::Os`](crate::Error::Os) if the wait call fails and
/// [`Error::TooManyDescriptors`](crate::Error::TooManyDescriptors) if
/// `sources` does not fit in a single native call.
pub fn poll_many<D>(
    sources: &[D],
    mask: impl Into<Events>,
    timeout: impl Into<Timeout>,
) -> Result<Option<usize>>
where
    D: AsDescriptor,
{
    let mask = mask.into();
    let timeout = timeout.into();

    if sources.is_empty() {
        log::trace!("poll many, no descriptors");
        return Ok(None);
    }

    let mut fds: Vec<platform::PollFd> = sources
        .iter()
        .map(|source| platform::request(source.as_descriptor(), mask.bits()))
        .collect();

    let ready = sys_poll(&mut fds, mask, timeout)?;
    if ready == 0 {
        return Ok(None);
    }

    let found = first_match(
        fds.iter().map(|fd| Events::from_raw(platform::revents(fd))),
        mask,
    );
    log::trace!("poll many, ready={}, first={:?}", ready, found);

    Ok(found)
}

/// Blocks until `source` is ready for `mask`.
///
/// Returns `true` once any requested bit is reported. A descriptor that
/// only reports error or hang-up bits yields `false`.
pub fn wait<D>(source: &D, mask: impl Into<Events>) -> Result<bool>
where
    D: AsDescriptor + ?Sized,
{
    wait_timeout(source, mask, Timeout::INFINITE)
}

/// Waits up to `timeout` for `source` to be ready for `mask`.
///
/// Returns `false` if the timeout elapsed first.
pub fn wait_timeout<D>(
    source: &D,
    mask: impl Into<Events>,
    timeout: impl Into<Timeout>,
) -> Result<bool>
where
    D: AsDescriptor + ?Sized,
{
    let mask = mask.into();
    Ok(poll_one(source, mask, timeout)?.intersects(mask))
}

fn sys_poll(fds: &mut [platform::PollFd], mask: Events, timeout: Timeout) -> Result<usize> {
    let count = fds.len();
    log::trace!(
        "poll, count={}, mask={:?}, timeout_ms={}",
        count,
        mask,
        timeout.as_millis()
    );

    platform::sys_poll(fds, timeout).inspect_err(|err| {
        log::debug!("poll failed, count={}, err={}", count, err);
    })
}

/// Index of the first observed set sharing a bit with `mask`.
fn first_match<I>(observed: I, mask: Events) -> Option<usize>
where
    I: IntoIterator<Item = Events>,
{
    observed.into_iter().position(|events| events.intersects(mask))
}
