//! One-shot timer that raises a shared "time is up" flag.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// A timer thread that sets a flag once after a fixed interval.
///
/// Dropping the `Deadline` disarms it: the thread wakes immediately and
/// exits without touching the flag.
///
/// # Examples
///
/// ```
/// use std::sync::atomic::{AtomicBool, Ordering};
/// use std::sync::Arc;
/// use std::time::{Duration, Instant};
/// use u_tsp_bnb::bnb::Deadline;
///
/// let flag = Arc::new(AtomicBool::new(false));
/// let deadline = Deadline::arm(Duration::from_millis(10), Arc::clone(&flag));
/// let start = Instant::now();
/// while !deadline.is_expired() && start.elapsed() < Duration::from_secs(10) {
///     std::thread::sleep(Duration::from_millis(1));
/// }
/// assert!(flag.load(Ordering::Relaxed));
/// ```
pub struct Deadline {
    flag: Arc<AtomicBool>,
    disarm: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl Deadline {
    /// Starts a timer that sets `flag` after `after` elapses.
    ///
    /// A zero interval sets the flag before returning and starts no thread.
    pub fn arm(after: Duration, flag: Arc<AtomicBool>) -> Self {
        if after.is_zero() {
            flag.store(true, Ordering::Relaxed);
            return Self::never(flag);
        }
        let (tx, rx) = mpsc::channel::<()>();
        let timer_flag = Arc::clone(&flag);
        let handle = thread::spawn(move || {
            if let Err(RecvTimeoutError::Timeout) = rx.recv_timeout(after) {
                timer_flag.store(true, Ordering::Relaxed);
            }
        });
        Self {
            flag,
            disarm: Some(tx),
            handle: Some(handle),
        }
    }

    /// A deadline that never fires on its own; only an external writer can
    /// set the flag.
    pub fn never(flag: Arc<AtomicBool>) -> Self {
        Self {
            flag,
            disarm: None,
            handle: None,
        }
    }

    /// Returns `true` once the flag is set.
    pub fn is_expired(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

impl Drop for Deadline {
    fn drop(&mut self) {
        // Dropping the sender wakes the timer with `Disconnected`.
        self.disarm.take();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}
