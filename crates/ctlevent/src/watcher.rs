//! `Watcher` — drives the subscribe → wait → consume loop for a handler.
//!
//! The handler only learns that an event happened (and its sequence
//! number). What changed is for the handler to read from the device.

use ctlevent_core::error::ChannelResult;
use ctlevent_core::outcome::EventOutcome;
use ctlevent_core::source::EventSource;
use ctlevent_core::{kdebug, kwarn};

use crate::channel::EventChannel;
use crate::config::WatchConfig;
use crate::control_fd::ControlFd;

/// What the loop does after a callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

/// Receives notifications from a `Watcher`.
pub trait EventHandler {
    /// One event was consumed. `seq` starts at 1.
    fn on_event(&mut self, seq: u64) -> Flow;

    /// A wait timed out with no activity.
    fn on_idle(&mut self) -> Flow {
        Flow::Continue
    }
}

/// Counters for one `run`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WatchStats {
    pub events: u64,
    pub timeouts: u64,
}

pub struct Watcher<S: EventSource = ControlFd> {
    channel: EventChannel<S>,
    config: WatchConfig,
}

impl<S: EventSource> Watcher<S> {
    pub fn new(channel: EventChannel<S>, config: WatchConfig) -> Self {
        Self { channel, config }
    }

    pub fn channel(&self) -> &EventChannel<S> {
        &self.channel
    }

    pub fn config(&self) -> &WatchConfig {
        &self.config
    }

    pub fn into_channel(self) -> EventChannel<S> {
        self.channel
    }

    /// Subscribe, deliver events until the handler stops or `max_events`
    /// is reached, then unsubscribe.
    ///
    /// Unsubscribe runs on every exit path. If the loop itself failed,
    /// that error is returned and an unsubscribe failure is only logged.
    pub fn run<H: EventHandler + ?Sized>(&mut self, handler: &mut H) -> ChannelResult<WatchStats> {
        self.channel.subscribe(true)?;

        let result = self.drive(handler);
        let unsubscribed = self.channel.subscribe(false);

        match (result, unsubscribed) {
            (Ok(stats), Ok(())) => {
                kdebug!("watch finished: {} events, {} timeouts", stats.events, stats.timeouts);
                Ok(stats)
            }
            (Ok(_), Err(e)) => Err(e),
            (Err(e), Ok(())) => Err(e),
            (Err(e), Err(unsub)) => {
                kwarn!("unsubscribe after failure also failed: {}", unsub);
                Err(e)
            }
        }
    }

    fn drive<H: EventHandler + ?Sized>(&mut self, handler: &mut H) -> ChannelResult<WatchStats> {
        let mut stats = WatchStats::default();
        loop {
            if self.config.max_events.map_or(false, |max| stats.events >= max) {
                return Ok(stats);
            }

            let flow = match self.channel.wait_for_event(self.config.timeout)? {
                EventOutcome::Ready => {
                    self.channel.consume_event()?;
                    stats.events += 1;
                    handler.on_event(stats.events)
                }
                EventOutcome::TimedOut => {
                    stats.timeouts += 1;
                    handler.on_idle()
                }
            };

            if flow == Flow::Stop {
                return Ok(stats);
            }
        }
    }
}
