//! Error types for event channels

use core::fmt;

/// Result type for channel operations
pub type ChannelResult<T> = Result<T, ChannelError>;

/// Errors surfaced by an event channel.
///
/// Interrupted waits never appear here; they are retried inside the
/// channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelError {
    /// The device or its handle rejected a request or reported an
    /// unusable state. Carries the errno (EIO for poll error/invalid
    /// conditions, EBADF for an unset handle).
    DeviceError(i32),

    /// The readiness primitive itself failed with this errno.
    SystemError(i32),
}

impl ChannelError {
    /// The errno preserved as diagnostic context.
    pub fn errno(&self) -> i32 {
        match *self {
            ChannelError::DeviceError(e) | ChannelError::SystemError(e) => e,
        }
    }

    #[inline]
    pub fn is_device(&self) -> bool {
        matches!(self, ChannelError::DeviceError(_))
    }

    #[inline]
    pub fn is_system(&self) -> bool {
        matches!(self, ChannelError::SystemError(_))
    }
}

impl fmt::Display for ChannelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChannelError::DeviceError(e) => write!(f, "device error: errno {}", e),
            ChannelError::SystemError(e) => write!(f, "system error: errno {}", e),
        }
    }
}

impl std::error::Error for ChannelError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let e = ChannelError::DeviceError(5);
        assert_eq!(format!("{}", e), "device error: errno 5");

        let e = ChannelError::SystemError(22);
        assert_eq!(format!("{}", e), "system error: errno 22");
    }

    #[test]
    fn test_error_predicates() {
        let dev = ChannelError::DeviceError(9);
        assert!(dev.is_device());
        assert!(!dev.is_system());
        assert_eq!(dev.errno(), 9);

        let sys = ChannelError::SystemError(12);
        assert!(sys.is_system());
        assert_eq!(sys.errno(), 12);
    }
}
