use crate::auth::key::PublishableKey;
use crate::auth::readiness::{poll_until, PollPolicy, Sleeper};
use crate::auth::ui::AuthEvent;
use crate::error::{CoreError, CoreResult};

/// Wait for a usable publishable key, then for the SDK to load.
///
/// `key_source` is re-read on every attempt since the page may inject the
/// key after this starts.
pub fn await_auth_sdk<S, K, L>(
    sleeper: &mut S,
    mut key_source: K,
    sdk_loaded: L,
) -> CoreResult<PublishableKey>
where
    S: Sleeper + ?Sized,
    K: FnMut() -> Option<String>,
    L: FnMut() -> bool,
{
    let mut found = None;
    poll_until("publishable key", PollPolicy::KEY, sleeper, || {
        found = key_source().and_then(|raw| PublishableKey::parse(&raw).ok());
        found.is_some()
    })?;
    let key = found.ok_or_else(|| CoreError::NotReady("publishable key".to_string()))?;
    log::info!("[auth] key found: {}", key.masked());
    poll_until("auth SDK", PollPolicy::SDK, sleeper, sdk_loaded)?;
    Ok(key)
}

/// Map the bootstrap outcome plus the loaded user state onto a UI event.
pub fn readiness_event(outcome: &CoreResult<PublishableKey>, signed_in: bool) -> AuthEvent {
    match outcome {
        Ok(_) => AuthEvent::Ready { signed_in },
        Err(e) => AuthEvent::ReadinessFailed(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::key::PLACEHOLDER_KEY;
    use std::time::Duration;

    struct NoSleep(u32);

    impl Sleeper for NoSleep {
        fn sleep(&mut self, _d: Duration) {
            self.0 += 1;
        }
    }

    #[test]
    fn waits_for_key_then_sdk() {
        let mut s = NoSleep(0);
        let mut key_reads = 0;
        let mut sdk_checks = 0;
        let key = await_auth_sdk(
            &mut s,
            || {
                key_reads += 1;
                if key_reads < 3 {
                    Some(PLACEHOLDER_KEY.to_string())
                } else {
                    Some("pk_live_abc123".to_string())
                }
            },
            || {
                sdk_checks += 1;
                sdk_checks == 2
            },
        )
        .unwrap();
        assert_eq!(key.as_str(), "pk_live_abc123");
        assert_eq!(s.0, 3);
    }

    #[test]
    fn missing_key_is_not_ready() {
        let mut s = NoSleep(0);
        let err = await_auth_sdk(&mut s, || None, || true).unwrap_err();
        assert!(matches!(err, CoreError::NotReady(_)));
        assert_eq!(s.0, PollPolicy::KEY.max_attempts - 1);
    }

    #[test]
    fn outcome_maps_to_event() {
        let ok = Ok(PublishableKey::parse("pk_test_abc").unwrap());
        assert_eq!(readiness_event(&ok, true), AuthEvent::Ready { signed_in: true });
        let err = Err(CoreError::NotReady("auth SDK".to_string()));
        assert!(matches!(readiness_event(&err, false), AuthEvent::ReadinessFailed(_)));
    }
}
