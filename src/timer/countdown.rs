//! One-second countdown for timed sessions.
//!
//! The timer holds no clock: an external scheduler (UI loop, tokio
//! interval, test harness) calls [`SessionTimer::tick`] once per second
//! and reacts to the returned event. That keeps expiry logic synchronous
//! and testable - a loop of `tick()` calls replays a whole session.

use serde::{Deserialize, Serialize};

/// Where the countdown is in its lifecycle.
///
/// Transitions: `Idle -> Running` via [`SessionTimer::start`],
/// `Running -> Expired` when a tick hits zero, `Running -> Stopped` via
/// [`SessionTimer::stop`]. The only way out of `Expired` or `Stopped` is a
/// fresh `start`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimerStatus {
    /// Never started (or endless mode, which never starts it).
    #[default]
    Idle,
    /// Counting down.
    Running,
    /// Reached zero; expiry has been signaled.
    Expired,
    /// Halted by the host before reaching zero.
    Stopped,
}

/// What a tick produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimerEvent {
    /// One second elapsed; this many remain.
    Tick {
        /// Seconds left after the tick.
        remaining: u32,
    },
    /// The countdown just hit zero. Signaled exactly once per run.
    Expired,
}

/// The session countdown.
///
/// ## Example
///
/// ```
/// use emoji_quiz::{SessionTimer, TimerEvent, TimerStatus};
///
/// let mut timer = SessionTimer::new();
/// timer.start(2);
///
/// assert_eq!(timer.tick(), Some(TimerEvent::Tick { remaining: 1 }));
/// assert_eq!(timer.tick(), Some(TimerEvent::Expired));
/// assert_eq!(timer.tick(), None);
/// assert_eq!(timer.status(), TimerStatus::Expired);
/// ```
#[derive(Clone, Debug, Default)]
pub struct SessionTimer {
    status: TimerStatus,
    remaining_seconds: u32,
}

impl SessionTimer {
    /// Create an idle timer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn status(&self) -> TimerStatus {
        self.status
    }

    /// Seconds left on the countdown.
    #[must_use]
    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    /// Whether the timer is counting down.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.status == TimerStatus::Running
    }

    /// Arm the countdown with this many seconds and start running.
    ///
    /// Valid from any state; starting over a previous run discards it.
    pub fn start(&mut self, seconds: u32) {
        self.status = TimerStatus::Running;
        self.remaining_seconds = seconds;
    }

    /// Advance the countdown by one second.
    ///
    /// Returns `None` unless running. While seconds remain, returns
    /// [`TimerEvent::Tick`]; the tick that reaches zero returns
    /// [`TimerEvent::Expired`] and moves the timer to `Expired`, so the
    /// expiry event fires exactly once.
    pub fn tick(&mut self) -> Option<TimerEvent> {
        if self.status != TimerStatus::Running {
            return None;
        }

        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
        if self.remaining_seconds == 0 {
            self.status = TimerStatus::Expired;
            Some(TimerEvent::Expired)
        } else {
            Some(TimerEvent::Tick {
                remaining: self.remaining_seconds,
            })
        }
    }

    /// Halt the countdown. Idempotent; does nothing unless running.
    pub fn stop(&mut self) {
        if self.status == TimerStatus::Running {
            self.status = TimerStatus::Stopped;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_timer_is_idle() {
        let timer = SessionTimer::new();
        assert_eq!(timer.status(), TimerStatus::Idle);
        assert_eq!(timer.remaining_seconds(), 0);
        assert!(!timer.is_running());
    }

    #[test]
    fn test_tick_before_start_is_ignored() {
        let mut timer = SessionTimer::new();
        assert_eq!(timer.tick(), None);
        assert_eq!(timer.status(), TimerStatus::Idle);
    }

    #[test]
    fn test_countdown_sequence() {
        let mut timer = SessionTimer::new();
        timer.start(3);
        assert!(timer.is_running());

        assert_eq!(timer.tick(), Some(TimerEvent::Tick { remaining: 2 }));
        assert_eq!(timer.tick(), Some(TimerEvent::Tick { remaining: 1 }));
        assert_eq!(timer.tick(), Some(TimerEvent::Expired));
        assert_eq!(timer.status(), TimerStatus::Expired);
        assert_eq!(timer.remaining_seconds(), 0);
    }

    #[test]
    fn test_forty_ticks_to_expiry() {
        let mut timer = SessionTimer::new();
        timer.start(40);

        let mut expiries = 0;
        for _ in 0..40 {
            match timer.tick() {
                Some(TimerEvent::Tick { .. }) => {}
                Some(TimerEvent::Expired) => expiries += 1,
                None => panic!("timer went silent before 40 ticks"),
            }
        }

        assert_eq!(expiries, 1);
        assert_eq!(timer.remaining_seconds(), 0);
        assert_eq!(timer.status(), TimerStatus::Expired);
    }

    #[test]
    fn test_ticks_after_expiry_do_nothing() {
        let mut timer = SessionTimer::new();
        timer.start(1);
        assert_eq!(timer.tick(), Some(TimerEvent::Expired));

        for _ in 0..5 {
            assert_eq!(timer.tick(), None);
        }
        assert_eq!(timer.remaining_seconds(), 0);
        assert_eq!(timer.status(), TimerStatus::Expired);
    }

    #[test]
    fn test_stop_halts_ticking() {
        let mut timer = SessionTimer::new();
        timer.start(10);
        let _ = timer.tick();
        let _ = timer.tick();

        timer.stop();
        assert_eq!(timer.status(), TimerStatus::Stopped);
        assert_eq!(timer.remaining_seconds(), 8);

        assert_eq!(timer.tick(), None);
        assert_eq!(timer.remaining_seconds(), 8);
    }

    #[test]
    fn test_stop_is_idempotent() {
        let mut timer = SessionTimer::new();

        // Stopping an idle timer is a no-op, not a transition.
        timer.stop();
        assert_eq!(timer.status(), TimerStatus::Idle);

        timer.start(5);
        timer.stop();
        timer.stop();
        assert_eq!(timer.status(), TimerStatus::Stopped);
    }

    #[test]
    fn test_stop_after_expiry_keeps_expired() {
        let mut timer = SessionTimer::new();
        timer.start(1);
        let _ = timer.tick();

        timer.stop();
        assert_eq!(timer.status(), TimerStatus::Expired);
    }

    #[test]
    fn test_restart_after_expiry() {
        let mut timer = SessionTimer::new();
        timer.start(1);
        let _ = timer.tick();
        assert_eq!(timer.status(), TimerStatus::Expired);

        timer.start(2);
        assert!(timer.is_running());
        assert_eq!(timer.remaining_seconds(), 2);
        assert_eq!(timer.tick(), Some(TimerEvent::Tick { remaining: 1 }));
    }

    #[test]
    fn test_start_zero_expires_on_first_tick() {
        let mut timer = SessionTimer::new();
        timer.start(0);
        assert!(timer.is_running());

        assert_eq!(timer.tick(), Some(TimerEvent::Expired));
        assert_eq!(timer.status(), TimerStatus::Expired);
    }

    #[test]
    fn test_status_serde() {
        let json = serde_json::to_string(&TimerStatus::Running).unwrap();
        let back: TimerStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(back, TimerStatus::Running);
    }
}
