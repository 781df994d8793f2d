//! ctl-watch — log control-change events from a sound card.
//!
//! Opens the control device, subscribes, and prints one line per event
//! until `CTL_MAX_EVENTS` is reached or the device goes away.
//!
//! Environment:
//!   CTL_CARD=0            card index (/dev/snd/controlC<N>)
//!   CTL_DEVICE=<path>     explicit device path, overrides CTL_CARD
//!   CTL_TIMEOUT_MS=1000   wait budget per iteration, negative = forever
//!   CTL_MAX_EVENTS=<n>    stop after n events
//!   CTL_LOG_LEVEL=info    off|error|warn|info|debug|trace
//!
//! Run: CTL_CARD=0 CTL_MAX_EVENTS=10 ./target/release/ctl-watch

use ctlevent::sys::{close_control, open_control};
use ctlevent::{EventChannel, EventHandler, Flow, WatchConfig, Watcher};
use ctlevent_core::{kerror, kinfo, kprint, ktrace};

use std::process::ExitCode;
use std::time::Instant;

struct LogHandler {
    started: Instant,
    idle_ticks: u64,
}

impl EventHandler for LogHandler {
    fn on_event(&mut self, seq: u64) -> Flow {
        kinfo!("event #{} at +{:.3}s", seq, self.started.elapsed().as_secs_f64());
        Flow::Continue
    }

    fn on_idle(&mut self) -> Flow {
        self.idle_ticks += 1;
        ktrace!("idle tick {}", self.idle_ticks);
        Flow::Continue
    }
}

fn main() -> ExitCode {
    kprint::init();

    let config = WatchConfig::from_env();
    let path = config.device_path();

    let fd = match open_control(&path) {
        Ok(fd) => fd,
        Err(e) => {
            kerror!("cannot open {}: {}", path.display(), e);
            return ExitCode::FAILURE;
        }
    };
    kinfo!("watching {} (fd {}, timeout {:?})", path.display(), fd, config.timeout);

    let mut handler = LogHandler { started: Instant::now(), idle_ticks: 0 };
    let mut watcher = Watcher::new(EventChannel::from_raw_fd(fd), config);
    let result = watcher.run(&mut handler);

    if let Err(e) = close_control(fd) {
        kerror!("close {}: {}", path.display(), e);
    }

    match result {
        Ok(stats) => {
            kinfo!("done: {} events, {} idle timeouts", stats.events, stats.timeouts);
            ExitCode::SUCCESS
        }
        Err(e) => {
            kerror!("watch on {} failed: {}", path.display(), e);
            ExitCode::FAILURE
        }
    }
}
