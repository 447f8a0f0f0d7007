// SPDX-License-Identifier: MPL-2.0
//! Explicit handle for the notification polling timer.
//!
//! The subscription is gated on this state, so tests and teardown can
//! halt polling deterministically instead of relying on an orphaned
//! interval timer.

use std::time::Duration;

/// Start/stop handle for the poll subscription.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Poller {
    enabled: bool,
    interval: Duration,
}

impl Poller {
    #[must_use]
    pub fn new(interval: Duration, enabled: bool) -> Self {
        Self { enabled, interval }
    }

    /// Enables the poll subscription.
    pub fn start(&mut self) {
        self.enabled = true;
    }

    /// Disables the poll subscription.
    pub fn stop(&mut self) {
        self.enabled = false;
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_and_stop_toggle_the_gate() {
        let mut poller = Poller::new(Duration::from_secs(30), true);
        assert!(poller.is_enabled());

        poller.stop();
        assert!(!poller.is_enabled());

        poller.start();
        assert!(poller.is_enabled());
    }

    #[test]
    fn interval_is_preserved() {
        let poller = Poller::new(Duration::from_secs(30), false);
        assert_eq!(poller.interval(), Duration::from_secs(30));
    }
}
