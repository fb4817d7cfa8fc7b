//! Background schedule enforcement.
//!
//! Requests are gated on their way in, but a light that was set during
//! the allowed window would otherwise stay lit after the window closes.
//! The enforcer re-checks the gate on a fixed cadence and forces a
//! full-strip off through the same lock-guarded write path.

use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use chrono::Local;
use crossbeam::channel::{Receiver, RecvTimeoutError};

use super::Dispatcher;

/// Start a thread that forces the strip off whenever the schedule
/// blocks, checking once per `interval`.
///
/// The first check happens immediately; the tick wait doubles as the
/// shutdown point, so sending on (or dropping) the `shutdown` channel's
/// sender ends the thread at the next boundary.
pub fn start_enforcer_thread(
    dispatcher: Arc<Dispatcher>,
    interval: Duration,
    shutdown: Receiver<()>,
) -> JoinHandle<()> {
    println!("[enforcer] Checking schedule every {}s", interval.as_secs());

    thread::spawn(move || loop {
        let now = Local::now().naive_local();
        if !dispatcher.schedule().allows(now) {
            if let Err(err) = dispatcher.force_off() {
                eprintln!("[enforcer] Forced off failed: {:?}", err);
            }
        }

        match shutdown.recv_timeout(interval) {
            Err(RecvTimeoutError::Timeout) => continue,
            Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
        }
    })
}
