use crate::error::{CoreError, CoreResult};
use std::time::Duration;

/// Bounded polling budget: probe at most `max_attempts` times, `interval` apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollPolicy {
    pub max_attempts: u32,
    pub interval: Duration,
}

impl PollPolicy {
    /// Publishable key injected into the page.
    pub const KEY: PollPolicy = PollPolicy::new(20, 100);
    /// Auth SDK global loaded.
    pub const SDK: PollPolicy = PollPolicy::new(50, 100);
    /// User record populated after the SDK reports loaded.
    pub const USER: PollPolicy = PollPolicy::new(10, 100);

    pub const fn new(max_attempts: u32, interval_ms: u64) -> Self {
        PollPolicy {
            max_attempts,
            interval: Duration::from_millis(interval_ms),
        }
    }

    /// A wall-clock budget expressed as attempts at `interval_ms`.
    pub fn with_timeout(timeout_ms: u64, interval_ms: u64) -> Self {
        let interval_ms = interval_ms.max(1);
        let attempts = (timeout_ms / interval_ms).max(1);
        PollPolicy::new(u32::try_from(attempts).unwrap_or(u32::MAX), interval_ms)
    }

    /// SDK wait used before mounting widgets from a click handler.
    pub fn ready_timeout() -> Self {
        Self::with_timeout(15_000, 100)
    }
}

pub trait Sleeper {
    fn sleep(&mut self, d: Duration);
}

pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&mut self, d: Duration) {
        std::thread::sleep(d);
    }
}

/// Probe until it reports ready. Returns the attempt number that succeeded.
pub fn poll_until<S, F>(
    what: &str,
    policy: PollPolicy,
    sleeper: &mut S,
    mut probe: F,
) -> CoreResult<u32>
where
    S: Sleeper + ?Sized,
    F: FnMut() -> bool,
{
    for attempt in 1..=policy.max_attempts {
        if probe() {
            log::debug!("[auth] {} ready after {} attempt(s)", what, attempt);
            return Ok(attempt);
        }
        if attempt < policy.max_attempts {
            sleeper.sleep(policy.interval);
        }
    }
    log::error!(
        "[auth] {} not ready after {} attempts",
        what,
        policy.max_attempts
    );
    Err(CoreError::NotReady(format!(
        "{} not available after {} attempts",
        what, policy.max_attempts
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingSleeper {
        slept: Vec<Duration>,
    }

    impl Sleeper for RecordingSleeper {
        fn sleep(&mut self, d: Duration) {
            self.slept.push(d);
        }
    }

    #[test]
    fn ready_on_first_probe_does_not_sleep() {
        let mut s = RecordingSleeper::default();
        assert_eq!(poll_until("sdk", PollPolicy::SDK, &mut s, || true).unwrap(), 1);
        assert!(s.slept.is_empty());
    }

    #[test]
    fn sleeps_between_attempts_until_ready() {
        let mut s = RecordingSleeper::default();
        let mut calls = 0;
        let n = poll_until("key", PollPolicy::KEY, &mut s, || {
            calls += 1;
            calls == 4
        })
        .unwrap();
        assert_eq!(n, 4);
        assert_eq!(s.slept, vec![Duration::from_millis(100); 3]);
    }

    #[test]
    fn gives_up_after_max_attempts() {
        let mut s = RecordingSleeper::default();
        let mut calls = 0;
        let err = poll_until("user", PollPolicy::USER, &mut s, || {
            calls += 1;
            false
        })
        .unwrap_err();
        assert!(matches!(err, CoreError::NotReady(_)));
        assert_eq!(calls, 10);
        assert_eq!(s.slept.len(), 9);
    }

    #[test]
    fn thread_sleeper_drives_real_polling() {
        let mut calls = 0;
        let n = poll_until("sdk", PollPolicy::new(3, 1), &mut ThreadSleeper, || {
            calls += 1;
            calls == 2
        })
        .unwrap();
        assert_eq!(n, 2);
    }

    #[test]
    fn timeout_becomes_attempts() {
        let p = PollPolicy::ready_timeout();
        assert_eq!(p.max_attempts, 150);
        assert_eq!(p.interval, Duration::from_millis(100));
        assert_eq!(PollPolicy::with_timeout(0, 0).max_attempts, 1);
    }
}
