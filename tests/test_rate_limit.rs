use cyberfit_pro::rate_limit::{Clock, ManualClock, SubmissionLimiter, SystemClock};
use std::sync::Arc;
use std::time::Duration;

#[test]
fn test_invite_window_with_manual_clock() {
    let clock = Arc::new(ManualClock::new());
    let limiter = SubmissionLimiter::new(Duration::from_secs(60), clock.clone());
    let gym = "academia@example.com".to_string();

    limiter.try_acquire(gym.clone()).unwrap();

    clock.advance(Duration::from_millis(100));
    let err = limiter.try_acquire(gym.clone()).unwrap_err();
    assert_eq!(err.retry_after_secs(), 60);
    assert_eq!(
        err.to_string(),
        "Too many attempts: wait 60 seconds before trying again"
    );

    clock.advance(Duration::from_millis(59_900));
    assert!(limiter.try_acquire(gym).is_ok());
}

#[test]
fn test_limiter_accepts_any_clock_implementation() {
    struct FrozenClock(std::time::Instant);

    impl Clock for FrozenClock {
        fn now(&self) -> std::time::Instant {
            self.0
        }
    }

    let limiter = SubmissionLimiter::new(
        Duration::from_secs(1),
        Arc::new(FrozenClock(std::time::Instant::now())),
    );
    assert!(limiter.try_acquire(1u32).is_ok());
    // Time never moves, so the key stays blocked.
    assert!(limiter.try_acquire(1u32).is_err());
    assert!(limiter.try_acquire(2u32).is_ok());
}

#[test]
fn test_system_clock_limiter() {
    let limiter = SubmissionLimiter::new(Duration::from_secs(60), Arc::new(SystemClock));
    assert!(limiter.try_acquire("k").is_ok());
    assert!(limiter.check(&"k").is_err());
    assert_eq!(limiter.cooldown(), Duration::from_secs(60));
}
