// SPDX-License-Identifier: MPL-2.0
//! Small reusable helpers: date/time rendering and call-rate limiting.
//!
//! [`Debouncer`] and [`Throttle`] are plain state machines over
//! caller-supplied [`Instant`]s so their timing behavior can be tested
//! without a runtime. The `*_at` methods take an explicit clock value;
//! the plain methods read `Instant::now()`.

use chrono::NaiveDateTime;
use std::time::{Duration, Instant};

/// Formats a date-like string ("2026-08-05T14:30:00", RFC 3339, or a bare
/// `YYYY-MM-DD`) as a long en-US date, e.g. "August 5, 2026".
///
/// Returns `None` when the input cannot be parsed.
#[must_use]
pub fn format_date(input: &str) -> Option<String> {
    let dt = parse_datetime(input)?;
    Some(dt.format("%B %-d, %Y").to_string())
}

/// Formats a date-like string as a 12-hour clock time, e.g. "02:30 PM".
///
/// Returns `None` when the input cannot be parsed. A bare date formats
/// as midnight.
#[must_use]
pub fn format_time(input: &str) -> Option<String> {
    let dt = parse_datetime(input)?;
    Some(dt.format("%I:%M %p").to_string())
}

/// Parses the date formats the EventHub server emits.
fn parse_datetime(input: &str) -> Option<NaiveDateTime> {
    let trimmed = input.trim();

    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.naive_local());
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(dt);
        }
    }
    if let Ok(date) = chrono::NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }

    None
}

/// Trailing-edge debouncer: repeated pushes within the delay window keep
/// re-arming the deadline, and only the last pushed value fires once the
/// burst goes quiet.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> Debouncer<T> {
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Records a value and re-arms the deadline at `now + delay`,
    /// discarding any previously pending value.
    pub fn push_at(&mut self, value: T, now: Instant) {
        self.pending = Some((value, now + self.delay));
    }

    /// Records a value against the current time.
    pub fn push(&mut self, value: T) {
        self.push_at(value, Instant::now());
    }

    /// Yields the pending value once its deadline has passed.
    pub fn poll_at(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some((_, deadline)) if now >= *deadline => {
                self.pending.take().map(|(value, _)| value)
            }
            _ => None,
        }
    }

    /// Polls against the current time.
    pub fn poll(&mut self) -> Option<T> {
        self.poll_at(Instant::now())
    }

    /// Returns whether a value is waiting for its quiet period to elapse.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Drops the pending value without firing it.
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

/// Leading-edge rate limiter: the first call fires immediately, then
/// further calls are ignored until the limit elapses. The next call after
/// the cooldown fires and re-arms it.
#[derive(Debug, Clone)]
pub struct Throttle {
    limit: Duration,
    last_fired: Option<Instant>,
}

impl Throttle {
    #[must_use]
    pub fn new(limit: Duration) -> Self {
        Self {
            limit,
            last_fired: None,
        }
    }

    /// Returns whether a call at `now` is allowed through, re-arming the
    /// cooldown when it is.
    pub fn try_fire_at(&mut self, now: Instant) -> bool {
        let allowed = match self.last_fired {
            None => true,
            Some(last) => now.duration_since(last) >= self.limit,
        };
        if allowed {
            self.last_fired = Some(now);
        }
        allowed
    }

    /// Checks a call against the current time.
    pub fn try_fire(&mut self) -> bool {
        self.try_fire_at(Instant::now())
    }

    /// Clears the cooldown so the next call fires immediately.
    pub fn reset(&mut self) {
        self.last_fired = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn format_date_renders_long_month() {
        assert_eq!(
            format_date("2026-08-05T14:30:00").as_deref(),
            Some("August 5, 2026")
        );
    }

    #[test]
    fn format_date_accepts_bare_dates_and_rfc3339() {
        assert_eq!(format_date("2026-01-09").as_deref(), Some("January 9, 2026"));
        assert_eq!(
            format_date("2026-08-05T14:30:00+02:00").as_deref(),
            Some("August 5, 2026")
        );
    }

    #[test]
    fn format_time_renders_twelve_hour_clock() {
        assert_eq!(format_time("2026-08-05T14:30:00").as_deref(), Some("02:30 PM"));
        assert_eq!(format_time("2026-08-05T07:05:00").as_deref(), Some("07:05 AM"));
    }

    #[test]
    fn formatters_reject_garbage() {
        assert!(format_date("not a date").is_none());
        assert!(format_time("05/08/2026").is_none());
    }

    #[test]
    fn debouncer_fires_once_after_quiet_period_with_last_value() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(ms(300));

        debouncer.push_at("a", start);
        debouncer.push_at("b", start + ms(100));
        debouncer.push_at("c", start + ms(200));

        // The burst keeps re-arming the deadline, so nothing fires before
        // the quiet period following the last push.
        assert_eq!(debouncer.poll_at(start + ms(300)), None);
        assert_eq!(debouncer.poll_at(start + ms(499)), None);
        assert_eq!(debouncer.poll_at(start + ms(500)), Some("c"));
        assert_eq!(debouncer.poll_at(start + ms(600)), None);
    }

    #[test]
    fn debouncer_cancel_discards_pending_value() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(ms(300));

        debouncer.push_at(42, start);
        assert!(debouncer.is_pending());
        debouncer.cancel();
        assert!(!debouncer.is_pending());
        assert_eq!(debouncer.poll_at(start + ms(400)), None);
    }

    #[test]
    fn throttle_ignores_calls_inside_the_cooldown() {
        let start = Instant::now();
        let mut throttle = Throttle::new(ms(200));

        assert!(throttle.try_fire_at(start));
        assert!(!throttle.try_fire_at(start + ms(50)));
        assert!(!throttle.try_fire_at(start + ms(150)));
        assert!(throttle.try_fire_at(start + ms(250)));
        // The call at 250ms re-armed the cooldown.
        assert!(!throttle.try_fire_at(start + ms(300)));
    }

    #[test]
    fn throttle_reset_allows_immediate_fire() {
        let start = Instant::now();
        let mut throttle = Throttle::new(ms(200));

        assert!(throttle.try_fire_at(start));
        throttle.reset();
        assert!(throttle.try_fire_at(start + ms(10)));
    }
}
