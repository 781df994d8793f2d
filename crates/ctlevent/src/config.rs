//! Watch loop configuration

use std::path::PathBuf;

use ctlevent_core::env::{env_get, env_get_opt};
use ctlevent_core::outcome::WaitTimeout;

use crate::sys::control_path;

/// Default wait budget per loop iteration (ms).
pub const DEFAULT_TIMEOUT_MS: i32 = 1000;

/// Configuration for a `Watcher` and the device it watches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchConfig {
    /// Sound card index, used when `device` is not set.
    pub card: u32,

    /// Explicit control device path; overrides `card`.
    pub device: Option<PathBuf>,

    /// Budget for each wait. A timeout calls `EventHandler::on_idle`.
    pub timeout: WaitTimeout,

    /// Stop after this many consumed events. `None` = until the handler stops.
    pub max_events: Option<u64>,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            card: 0,
            device: None,
            timeout: WaitTimeout::from_millis(DEFAULT_TIMEOUT_MS),
            max_events: None,
        }
    }
}

impl WatchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read `CTL_CARD`, `CTL_DEVICE`, `CTL_TIMEOUT_MS`, `CTL_MAX_EVENTS`.
    ///
    /// Unset or unparsable variables keep their defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            card: env_get("CTL_CARD", defaults.card),
            device: env_get_opt::<String>("CTL_DEVICE")
                .filter(|p| !p.is_empty())
                .map(PathBuf::from),
            timeout: WaitTimeout::from_millis(env_get("CTL_TIMEOUT_MS", DEFAULT_TIMEOUT_MS)),
            max_events: env_get_opt("CTL_MAX_EVENTS"),
        }
    }

    pub fn card(mut self, card: u32) -> Self {
        self.card = card;
        self
    }

    pub fn device(mut self, path: impl Into<PathBuf>) -> Self {
        self.device = Some(path.into());
        self
    }

    pub fn timeout(mut self, timeout: impl Into<WaitTimeout>) -> Self {
        self.timeout = timeout.into();
        self
    }

    pub fn max_events(mut self, n: u64) -> Self {
        self.max_events = Some(n);
        self
    }

    /// The device to open: `device` if set, else `/dev/snd/controlC<card>`.
    pub fn device_path(&self) -> PathBuf {
        self.device.clone().unwrap_or_else(|| control_path(self.card))
    }
}
