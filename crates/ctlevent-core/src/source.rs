//! The OS seam under an event channel.
//!
//! An `EventSource` performs the three primitive operations on one
//! handle and reports raw results. It does not retry and does not
//! classify: the channel decides what an `Interrupted` poll or a
//! hangup means.
//!
//! # Implementors
//!
//! - `ControlFd` (default, `ctlevent` crate): ioctl / poll / read on a
//!   raw file descriptor.
//! - Scripted doubles in tests.

use crate::outcome::{PollResult, WaitTimeout};

/// Primitive operations on a single event-capable handle.
///
/// **Contract:**
/// - `poll_once` performs exactly one readiness check with interest in
///   read, write, error and invalid-handle conditions.
/// - errno values are reported unchanged.
/// - None of the methods may close the handle.
pub trait EventSource {
    /// Whether the handle is set. Unset sources are never asked to act.
    fn is_set(&self) -> bool;

    /// Toggle kernel-side event delivery. `Err(errno)` on rejection.
    fn set_subscription(&self, enable: bool) -> Result<(), i32>;

    /// One readiness check, blocking for at most `timeout`.
    fn poll_once(&self, timeout: WaitTimeout) -> PollResult;

    /// One read into `buf`. `Ok(n)` bytes, `Err(errno)` on failure.
    fn read_record(&self, buf: &mut [u8]) -> Result<usize, i32>;
}

impl<S: EventSource + ?Sized> EventSource for &S {
    fn is_set(&self) -> bool {
        (**self).is_set()
    }

    fn set_subscription(&self, enable: bool) -> Result<(), i32> {
        (**self).set_subscription(enable)
    }

    fn poll_once(&self, timeout: WaitTimeout) -> PollResult {
        (**self).poll_once(timeout)
    }

    fn read_record(&self, buf: &mut [u8]) -> Result<usize, i32> {
        (**self).read_record(buf)
    }
}
