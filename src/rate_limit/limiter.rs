//! Per-key submission cooldowns.
//!
//! This module provides a thread-safe limiter that accepts at most one submission
//! per key within a cooldown window. Time comes from an injected [`Clock`].

use super::clock::Clock;
use crate::error::RateLimited;
use std::collections::HashMap;
use std::hash::Hash;
use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};

/// A thread-safe cooldown tracker keyed by `K`.
///
/// Each key remembers the instant of its last accepted submission. A new
/// submission for the same key is refused until `cooldown` has passed. The
/// limiter can be cloned cheaply; clones share state.
///
/// # Example
///
/// ```
/// use cyberfit_pro::rate_limit::{ManualClock, SubmissionLimiter};
/// use std::sync::Arc;
/// use std::time::Duration;
///
/// let clock = Arc::new(ManualClock::new());
/// let limiter = SubmissionLimiter::new(Duration::from_secs(60), clock.clone());
///
/// assert!(limiter.try_acquire("gym@example.com").is_ok());
/// assert!(limiter.try_acquire("gym@example.com").is_err());
///
/// clock.advance(Duration::from_secs(60));
/// assert!(limiter.try_acquire("gym@example.com").is_ok());
/// ```
#[derive(Clone)]
pub struct SubmissionLimiter<K>
where
    K: Eq + Hash + Clone,
{
    last_accepted: Arc<RwLock<HashMap<K, Instant>>>,
    cooldown: Duration,
    clock: Arc<dyn Clock>,
}

impl<K> SubmissionLimiter<K>
where
    K: Eq + Hash + Clone,
{
    /// Create a limiter that allows one submission per key every `cooldown`.
    pub fn new(cooldown: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            last_accepted: Arc::new(RwLock::new(HashMap::new())),
            cooldown,
            clock,
        }
    }

    /// Check whether `key` may submit now, without recording anything.
    ///
    /// # Errors
    ///
    /// Returns `RateLimited` with the remaining wait while the key is cooling down.
    pub fn check(&self, key: &K) -> Result<(), RateLimited> {
        let now = self.clock.now();

        if let Ok(map) = self.last_accepted.read() {
            if let Some(&last) = map.get(key) {
                return self.remaining(last, now);
            }
        }

        Ok(())
    }

    /// Record an accepted submission for `key` at the current instant.
    pub fn record(&self, key: K) {
        let now = self.clock.now();

        if let Ok(mut map) = self.last_accepted.write() {
            self.insert(&mut map, key, now);
        }
    }

    /// Check and record in one step, under a single write lock.
    ///
    /// # Errors
    ///
    /// Returns `RateLimited` (and records nothing) while the key is cooling down.
    pub fn try_acquire(&self, key: K) -> Result<(), RateLimited> {
        let now = self.clock.now();

        if let Ok(mut map) = self.last_accepted.write() {
            if let Some(&last) = map.get(&key) {
                self.remaining(last, now)?;
            }
            self.insert(&mut map, key, now);
        }

        Ok(())
    }

    /// Forget the last submission for `key`.
    pub fn reset(&self, key: &K) {
        if let Ok(mut map) = self.last_accepted.write() {
            map.remove(key);
        }
    }

    /// Forget every key.
    pub fn clear(&self) {
        if let Ok(mut map) = self.last_accepted.write() {
            map.clear();
        }
    }

    /// Drop keys whose cooldown has already elapsed.
    ///
    /// New keys already trigger this on the write path.
    pub fn cleanup_expired(&self) {
        let now = self.clock.now();

        if let Ok(mut map) = self.last_accepted.write() {
            self.retain_live(&mut map, now);
        }
    }

    /// Number of tracked keys (including expired ones not yet pruned).
    pub fn len(&self) -> usize {
        self.last_accepted.read().map(|map| map.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn cooldown(&self) -> Duration {
        self.cooldown
    }

    /// Insert `key`, pruning expired keys first when it is new so the map
    /// only grows with keys that are still cooling down.
    fn insert(&self, map: &mut HashMap<K, Instant>, key: K, now: Instant) {
        if !map.contains_key(&key) {
            self.retain_live(map, now);
        }
        map.insert(key, now);
    }

    fn retain_live(&self, map: &mut HashMap<K, Instant>, now: Instant) {
        let before = map.len();
        map.retain(|_, last| now.saturating_duration_since(*last) < self.cooldown);

        let pruned = before - map.len();
        if pruned > 0 {
            tracing::trace!(pruned = pruned, remaining = map.len(), "Pruned expired cooldowns");
        }
    }

    fn remaining(&self, last: Instant, now: Instant) -> Result<(), RateLimited> {
        let elapsed = now.saturating_duration_since(last);
        if elapsed < self.cooldown {
            let retry_after = self.cooldown - elapsed;
            tracing::debug!(
                retry_after_ms = retry_after.as_millis() as u64,
                "Submission refused during cooldown"
            );
            return Err(RateLimited { retry_after });
        }
        Ok(())
    }
}

impl<K> std::fmt::Debug for SubmissionLimiter<K>
where
    K: Eq + Hash + Clone,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubmissionLimiter")
            .field("cooldown", &self.cooldown)
            .field("keys", &self.len())
            .finish()
    }
}
