//! `ControlFd` — default `EventSource` implementation.
//!
//! Issues the raw syscalls on a borrowed file descriptor:
//! `SNDRV_CTL_IOCTL_SUBSCRIBE_EVENTS` for subscription, a single-entry
//! `poll(2)` for readiness, `read(2)` for consumption.
//!
//! The fd is never closed here. Whoever opened it closes it.

use ctlevent_core::outcome::{PollResult, ReadyFlags, WaitTimeout};
use ctlevent_core::source::EventSource;

use nix::errno::Errno;
use std::os::unix::io::RawFd;

use crate::sys;

/// Interest set for every readiness check.
const POLL_INTEREST: libc::c_short = libc::POLLIN | libc::POLLOUT | libc::POLLERR | libc::POLLNVAL;

/// A borrowed control-device descriptor. `-1` is unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlFd {
    fd: RawFd,
}

impl ControlFd {
    /// Wrap an fd opened elsewhere. Negative values produce an unset handle.
    pub fn new(fd: RawFd) -> Self {
        Self { fd: if fd < 0 { -1 } else { fd } }
    }

    pub const fn unset() -> Self {
        Self { fd: -1 }
    }

    /// The raw descriptor, `-1` when unset.
    pub fn raw(&self) -> RawFd {
        self.fd
    }
}

impl Default for ControlFd {
    fn default() -> Self {
        Self::unset()
    }
}

fn ready_flags(revents: libc::c_short) -> ReadyFlags {
    ReadyFlags {
        readable: revents & libc::POLLIN != 0,
        writable: revents & libc::POLLOUT != 0,
        error: revents & libc::POLLERR != 0,
        invalid: revents & libc::POLLNVAL != 0,
        hangup: revents & libc::POLLHUP != 0,
    }
}

impl EventSource for ControlFd {
    fn is_set(&self) -> bool {
        self.fd >= 0
    }

    fn set_subscription(&self, enable: bool) -> Result<(), i32> {
        let mut arg: libc::c_int = if enable { 1 } else { 0 };
        unsafe { sys::snd_ctl_subscribe_events(self.fd, &mut arg) }
            .map(|_| ())
            .map_err(|e| e as i32)
    }

    fn poll_once(&self, timeout: WaitTimeout) -> PollResult {
        let mut pfd = libc::pollfd {
            fd: self.fd,
            events: POLL_INTEREST,
            revents: 0,
        };
        let ret = unsafe { libc::poll(&mut pfd, 1, timeout.as_poll_millis()) };
        if ret < 0 {
            return match Errno::last() {
                Errno::EINTR => PollResult::Interrupted,
                e => PollResult::Failed(e as i32),
            };
        }
        if ret == 0 {
            return PollResult::TimedOut;
        }
        PollResult::Ready(ready_flags(pfd.revents))
    }

    fn read_record(&self, buf: &mut [u8]) -> Result<usize, i32> {
        let n = unsafe {
            libc::read(self.fd, buf.as_mut_ptr() as *mut libc::c_void, buf.len())
        };
        if n < 0 {
            return Err(Errno::last() as i32);
        }
        Ok(n as usize)
    }
}
