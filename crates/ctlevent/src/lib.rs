//! # ctlevent — Event channels over kernel control devices
//!
//! Subscribe → wait → consume over one already-open control handle
//! (an ALSA `/dev/snd/controlC*` fd by default).
//!
//! ## Default stack
//!
//! | Piece          | Type           | Role                                   |
//! |----------------|----------------|----------------------------------------|
//! | EventSource    | `ControlFd`    | ioctl / poll / read on a raw fd        |
//! | Channel        | `EventChannel` | retry loop, outcome classification     |
//! | Loop           | `Watcher`      | subscribe, drive handler, unsubscribe  |
//! | Configuration  | `WatchConfig`  | device, timeout, event cap (`CTL_*`)   |
//!
//! Opening and closing the device is NOT the channel's job; `sys`
//! provides `open_control` / `close_control` for callers that need it.

pub mod sys;
pub mod control_fd;
pub mod channel;
pub mod watcher;
pub mod config;

#[cfg(test)]
pub(crate) mod testing;

pub use channel::EventChannel;
pub use config::WatchConfig;
pub use control_fd::ControlFd;
pub use watcher::{EventHandler, Flow, WatchStats, Watcher};

pub use ctlevent_core::{ChannelError, ChannelResult, EventOutcome, EventSource, WaitTimeout};
