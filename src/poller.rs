//! Repeating Task
//!
//! Cancellable fixed-period timer for the dashboard refresh.

use std::time::Duration;

use gloo_timers::callback::Interval;

/// Runs a callback every period until stopped or dropped
pub struct Poller {
    interval: Option<Interval>,
}

impl Poller {
    pub fn start<F>(period: Duration, tick: F) -> Self
    where
        F: FnMut() + 'static,
    {
        let millis = u32::try_from(period.as_millis()).unwrap_or(u32::MAX);
        log::debug!("poller started, every {} ms", millis);
        Self {
            interval: Some(Interval::new(millis, tick)),
        }
    }

    pub fn stop(&mut self) {
        if let Some(interval) = self.interval.take() {
            interval.cancel();
            log::debug!("poller stopped");
        }
    }
}

impl Drop for Poller {
    fn drop(&mut self) {
        self.stop();
    }
}
