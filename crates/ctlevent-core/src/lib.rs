//! # ctlevent-core — Types and traits for control-device event channels
//!
//! This crate defines the vocabulary shared by every event channel:
//! what a wait can return, what can go wrong, and the `EventSource`
//! trait that separates the subscribe → wait → consume protocol from
//! the OS calls that carry it out.
//!
//! It contains no OS-specific code. The default fd-backed source and
//! the `EventChannel` itself live in the `ctlevent` crate.
//!
//! ## Modules
//!
//! - `outcome` - `EventOutcome`, `WaitTimeout`, raw poll results
//! - `source` - the `EventSource` trait
//! - `error` - `ChannelError` and the `ChannelResult` alias
//! - `kprint` - Kernel-style debug printing macros
//! - `env` - Environment variable utilities

pub mod outcome;
pub mod source;
pub mod error;
pub mod kprint;
pub mod env;

// Re-exports for convenience
pub use outcome::{EventOutcome, PollResult, ReadyFlags, WaitTimeout};
pub use source::EventSource;
pub use error::{ChannelError, ChannelResult};
pub use env::{env_get, env_get_bool, env_get_opt};

/// errno values the channel produces itself (Linux numbering).
pub mod errno {
    /// Bad file descriptor: operation on an unset handle.
    pub const EBADF: i32 = 9;
    /// I/O error: the handle reported an error or invalid condition.
    pub const EIO: i32 = 5;
}
