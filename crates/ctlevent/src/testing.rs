//! Test doubles: real pipes for OS-level tests, `ScriptedSource` for
//! channel logic that a pipe cannot reproduce (EINTR, poll failures,
//! mid-wait invalidation).

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::os::unix::io::RawFd;

use ctlevent_core::outcome::{PollResult, WaitTimeout};
use ctlevent_core::source::EventSource;

/// `(read_end, write_end)`
pub(crate) fn pipe() -> (RawFd, RawFd) {
    let mut fds = [0 as libc::c_int; 2];
    let ret = unsafe { libc::pipe(fds.as_mut_ptr()) };
    assert_eq!(ret, 0, "pipe() failed");
    (fds[0], fds[1])
}

pub(crate) fn write_byte(fd: RawFd) {
    let b = [0xA5u8];
    let n = unsafe { libc::write(fd, b.as_ptr() as *const libc::c_void, 1) };
    assert_eq!(n, 1, "write() failed");
}

pub(crate) fn close(fd: RawFd) {
    unsafe { libc::close(fd) };
}

/// Replays a fixed sequence of poll results and records what it was asked.
///
/// Once the script runs out every poll reports `TimedOut`.
#[derive(Default)]
pub(crate) struct ScriptedSource {
    pub set: bool,
    pub polls: RefCell<VecDeque<PollResult>>,
    pub reads: RefCell<VecDeque<Result<usize, i32>>>,
    pub subscribe_errno: Option<i32>,
    pub subscribe_calls: RefCell<Vec<bool>>,
    pub seen_timeouts: RefCell<Vec<WaitTimeout>>,
    pub read_calls: Cell<usize>,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self { set: true, ..Default::default() }
    }

    pub fn with_polls(self, polls: impl IntoIterator<Item = PollResult>) -> Self {
        self.polls.borrow_mut().extend(polls);
        self
    }

    pub fn with_reads(self, reads: impl IntoIterator<Item = Result<usize, i32>>) -> Self {
        self.reads.borrow_mut().extend(reads);
        self
    }

    pub fn rejecting_subscribe(mut self, errno: i32) -> Self {
        self.subscribe_errno = Some(errno);
        self
    }

    pub fn poll_count(&self) -> usize {
        self.seen_timeouts.borrow().len()
    }
}

impl EventSource for ScriptedSource {
    fn is_set(&self) -> bool {
        self.set
    }

    fn set_subscription(&self, enable: bool) -> Result<(), i32> {
        self.subscribe_calls.borrow_mut().push(enable);
        match self.subscribe_errno {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    fn poll_once(&self, timeout: WaitTimeout) -> PollResult {
        self.seen_timeouts.borrow_mut().push(timeout);
        self.polls.borrow_mut().pop_front().unwrap_or(PollResult::TimedOut)
    }

    fn read_record(&self, buf: &mut [u8]) -> Result<usize, i32> {
        self.read_calls.set(self.read_calls.get() + 1);
        self.reads.borrow_mut().pop_front().unwrap_or(Ok(buf.len()))
    }
}
