//! Wait budgets and outcomes.
//!
//! Two layers:
//! - `PollResult` is what ONE readiness check reports. It includes the
//!   non-terminal `Interrupted` case.
//! - `EventOutcome` is what `wait_for_event` hands back. Only terminal
//!   outcomes reach the caller; errors travel as `ChannelError`.

use std::time::Duration;

/// Terminal, non-error result of waiting on a channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    /// The handle is readable or writable.
    Ready,
    /// The wait budget elapsed with no activity.
    TimedOut,
}

/// How long a wait may block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitTimeout {
    /// Block for at most this many milliseconds. `Millis(0)` never blocks.
    Millis(u32),
    /// Block until the handle becomes ready or reports a condition.
    Infinite,
}

impl WaitTimeout {
    /// Non-blocking check.
    pub const IMMEDIATE: WaitTimeout = WaitTimeout::Millis(0);

    /// Map the classic `poll(2)` millisecond argument.
    ///
    /// Any negative value means "wait indefinitely".
    pub fn from_millis(ms: i32) -> Self {
        if ms < 0 {
            WaitTimeout::Infinite
        } else {
            WaitTimeout::Millis(ms as u32)
        }
    }

    /// Milliseconds as passed to `poll(2)`: `-1` for infinite,
    /// clamped to `i32::MAX` otherwise.
    pub fn as_poll_millis(self) -> i32 {
        match self {
            WaitTimeout::Millis(ms) => ms.min(i32::MAX as u32) as i32,
            WaitTimeout::Infinite => -1,
        }
    }

    /// `None` for infinite.
    pub fn as_duration(self) -> Option<Duration> {
        match self {
            WaitTimeout::Millis(ms) => Some(Duration::from_millis(ms as u64)),
            WaitTimeout::Infinite => None,
        }
    }

    /// Budget left over from `remaining`, rounded up to whole milliseconds
    /// so a sub-millisecond remainder still gets one more (zero-length) check.
    pub fn from_remaining(remaining: Duration) -> Self {
        let ms = remaining.as_millis();
        let ms = if Duration::from_millis(ms as u64) < remaining { ms + 1 } else { ms };
        WaitTimeout::Millis(ms.min(u32::MAX as u128) as u32)
    }
}

impl From<i32> for WaitTimeout {
    fn from(ms: i32) -> Self {
        WaitTimeout::from_millis(ms)
    }
}

impl From<Duration> for WaitTimeout {
    fn from(d: Duration) -> Self {
        WaitTimeout::from_remaining(d)
    }
}

/// Conditions reported by one readiness check.
///
/// `hangup` is reported by the OS whether or not it was asked for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReadyFlags {
    pub readable: bool,
    pub writable: bool,
    pub error: bool,
    pub invalid: bool,
    pub hangup: bool,
}

impl ReadyFlags {
    pub const READABLE: ReadyFlags = ReadyFlags {
        readable: true,
        writable: false,
        error: false,
        invalid: false,
        hangup: false,
    };

    pub const ERROR: ReadyFlags = ReadyFlags {
        readable: false,
        writable: false,
        error: true,
        invalid: false,
        hangup: false,
    };

    pub const INVALID: ReadyFlags = ReadyFlags {
        readable: false,
        writable: false,
        error: false,
        invalid: true,
        hangup: false,
    };

    /// The handle can no longer be used.
    ///
    /// A hangup with data still pending is not a fault: the pending
    /// event is delivered first, the next check reports the hangup.
    #[inline]
    pub fn is_fault(&self) -> bool {
        self.error || self.invalid || (self.hangup && !self.is_io_ready())
    }

    /// Read or write progress is possible.
    #[inline]
    pub fn is_io_ready(&self) -> bool {
        self.readable || self.writable
    }
}

/// Result of exactly one readiness check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollResult {
    /// The check returned with at least one reported condition.
    Ready(ReadyFlags),
    /// The budget elapsed.
    TimedOut,
    /// A signal interrupted the check (EINTR). Not terminal.
    Interrupted,
    /// The readiness primitive itself failed with this errno.
    Failed(i32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_millis_is_infinite() {
        assert_eq!(WaitTimeout::from_millis(-1), WaitTimeout::Infinite);
        assert_eq!(WaitTimeout::from_millis(-250), WaitTimeout::Infinite);
        assert_eq!(WaitTimeout::from(0), WaitTimeout::IMMEDIATE);
        assert_eq!(WaitTimeout::from_millis(1000), WaitTimeout::Millis(1000));
    }

    #[test]
    fn test_poll_millis() {
        assert_eq!(WaitTimeout::Infinite.as_poll_millis(), -1);
        assert_eq!(WaitTimeout::Millis(25).as_poll_millis(), 25);
        assert_eq!(WaitTimeout::Millis(u32::MAX).as_poll_millis(), i32::MAX);
    }

    #[test]
    fn test_remaining_rounds_up() {
        assert_eq!(WaitTimeout::from_remaining(Duration::ZERO), WaitTimeout::Millis(0));
        assert_eq!(WaitTimeout::from_remaining(Duration::from_micros(1)), WaitTimeout::Millis(1));
        assert_eq!(WaitTimeout::from_remaining(Duration::from_millis(40)), WaitTimeout::Millis(40));
        assert_eq!(
            WaitTimeout::from_remaining(Duration::from_micros(40_100)),
            WaitTimeout::Millis(41)
        );
    }

    #[test]
    fn test_ready_flags_classification() {
        assert!(ReadyFlags::READABLE.is_io_ready());
        assert!(!ReadyFlags::READABLE.is_fault());
        assert!(ReadyFlags::ERROR.is_fault());
        assert!(ReadyFlags::INVALID.is_fault());
        assert!(!ReadyFlags::default().is_fault());
        assert!(!ReadyFlags::default().is_io_ready());

        let hup = ReadyFlags { hangup: true, ..Default::default() };
        assert!(hup.is_fault());
    }

    #[test]
    fn test_hangup_with_pending_data_is_not_fault() {
        let flags = ReadyFlags { readable: true, hangup: true, ..Default::default() };
        assert!(!flags.is_fault());
        assert!(flags.is_io_ready());

        let flags = ReadyFlags { readable: true, hangup: true, error: true, ..Default::default() };
        assert!(flags.is_fault());
    }
}
