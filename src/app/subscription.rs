// SPDX-License-Identifier: MPL-2.0
//! Timer subscriptions for the application.
//!
//! Both timers are gated: the animation tick only runs while something on
//! screen is actually moving, and the poll timer follows the explicit
//! [`Poller`] handle.

use super::poller::Poller;
use super::Message;
use iced::{time, Subscription};
use std::time::Duration;

/// Cadence of the animation tick while active.
const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Creates the periodic tick subscription for the busy overlay spinner,
/// toast auto-dismiss, and catalogue animations.
pub fn create_tick_subscription(
    overlay_active: bool,
    catalogue_animating: bool,
    has_toasts: bool,
) -> Subscription<Message> {
    if overlay_active || catalogue_animating || has_toasts {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

/// Creates the notification poll subscription while the poller is running.
pub fn create_poll_subscription(poller: &Poller) -> Subscription<Message> {
    if poller.is_enabled() {
        time::every(poller.interval()).map(Message::PollTick)
    } else {
        Subscription::none()
    }
}
