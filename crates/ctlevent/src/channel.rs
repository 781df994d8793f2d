//! `EventChannel` — subscribe, wait, consume on one control handle.
//!
//! ```text
//!   Unsubscribed ──subscribe(true)──▶ Subscribed ──subscribe(false)──▶ Unsubscribed
//!                                       │    ▲
//!                          wait_for_event    consume_event
//!                                       ▼    │
//!                                     (Ready)
//! ```
//!
//! The event record read by `consume_event` is discarded. Callers learn
//! THAT a control changed, then read the values they care about.
//!
//! One waiter per channel: the blocking calls take `&mut self`.
//! Concurrent use of the same handle from several channels needs
//! external locking.

use std::os::unix::io::RawFd;
use std::time::Instant;

use ctlevent_core::errno::{EBADF, EIO};
use ctlevent_core::error::{ChannelError, ChannelResult};
use ctlevent_core::outcome::{EventOutcome, PollResult, WaitTimeout};
use ctlevent_core::source::EventSource;
use ctlevent_core::{kdebug, kerror, ktrace, kwarn};

use crate::control_fd::ControlFd;
use crate::sys::SND_CTL_EVENT_SIZE;

pub struct EventChannel<S: EventSource = ControlFd> {
    source: S,
    /// Last subscribe flag the device accepted.
    subscribed: bool,
}

impl EventChannel<ControlFd> {
    /// Channel over an fd opened by the caller. The fd is NOT closed on drop.
    pub fn from_raw_fd(fd: RawFd) -> Self {
        Self::new(ControlFd::new(fd))
    }

    /// A closed channel: every operation fails with `DeviceError(EBADF)`.
    pub fn unset() -> Self {
        Self::new(ControlFd::unset())
    }

    pub fn raw_fd(&self) -> RawFd {
        self.source.raw()
    }

    /// Hand the handle back and leave the channel unset.
    pub fn detach(&mut self) -> ControlFd {
        self.subscribed = false;
        std::mem::take(&mut self.source)
    }
}

impl<S: EventSource> EventChannel<S> {
    pub fn new(source: S) -> Self {
        Self { source, subscribed: false }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn into_source(self) -> S {
        self.source
    }

    /// Whether the last accepted `subscribe` call enabled delivery.
    pub fn is_subscribed(&self) -> bool {
        self.subscribed
    }

    fn ensure_set(&self) -> ChannelResult<()> {
        if self.source.is_set() {
            Ok(())
        } else {
            Err(ChannelError::DeviceError(EBADF))
        }
    }

    /// Turn kernel-side event delivery on (`true`) or off (`false`).
    pub fn subscribe(&mut self, enable: bool) -> ChannelResult<()> {
        self.ensure_set()?;
        match self.source.set_subscription(enable) {
            Ok(()) => {
                self.subscribed = enable;
                kdebug!("subscription {}", if enable { "enabled" } else { "disabled" });
                Ok(())
            }
            Err(errno) => {
                kwarn!("subscribe({}) rejected: errno {}", enable, errno);
                Err(ChannelError::DeviceError(errno))
            }
        }
    }

    /// Block until the handle is ready, the budget elapses, or the
    /// handle reports a fault.
    ///
    /// Accepts a `WaitTimeout`, a `Duration`, or classic `i32`
    /// milliseconds (negative = wait indefinitely).
    ///
    /// Interrupted checks are retried with whatever budget remains; once
    /// the budget is spent a retry becomes `TimedOut`. The caller only
    /// ever sees `Ready`, `TimedOut`, or an error.
    pub fn wait_for_event(&mut self, timeout: impl Into<WaitTimeout>) -> ChannelResult<EventOutcome> {
        self.ensure_set()?;

        let timeout = timeout.into();
        let deadline = timeout.as_duration().map(|d| Instant::now() + d);
        let mut budget = timeout;

        loop {
            match self.source.poll_once(budget) {
                PollResult::TimedOut => return Ok(EventOutcome::TimedOut),
                PollResult::Failed(errno) => {
                    kerror!("readiness check failed: errno {}", errno);
                    return Err(ChannelError::SystemError(errno));
                }
                PollResult::Ready(flags) if flags.is_fault() => {
                    kdebug!("handle fault: {:?}", flags);
                    return Err(ChannelError::DeviceError(EIO));
                }
                PollResult::Ready(flags) if flags.is_io_ready() => {
                    return Ok(EventOutcome::Ready);
                }
                PollResult::Ready(_) => ktrace!("empty revents, re-polling"),
                PollResult::Interrupted => ktrace!("poll interrupted, re-polling"),
            }

            if let Some(deadline) = deadline {
                let now = Instant::now();
                if now >= deadline {
                    return Ok(EventOutcome::TimedOut);
                }
                budget = WaitTimeout::from_remaining(deadline - now);
            }
        }
    }

    /// Read and discard one event record so the next wait sees new events.
    ///
    /// A zero-length read counts as success.
    pub fn consume_event(&mut self) -> ChannelResult<()> {
        self.ensure_set()?;
        let mut record = [0u8; SND_CTL_EVENT_SIZE];
        match self.source.read_record(&mut record) {
            Ok(n) => {
                ktrace!("consumed {} byte event record", n);
                Ok(())
            }
            Err(errno) => {
                kdebug!("event read failed: errno {}", errno);
                Err(ChannelError::DeviceError(errno))
            }
        }
    }
}
