/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Client-side throttling of outgoing requests
//!
//! Spreads requests out with a `governor` token bucket so that bulk dashboard
//! operations (mass status updates, media imports) do not hammer the backend.

use crate::application::config::RateLimiterConfig;
use governor::{DefaultDirectRateLimiter, Quota};
use std::num::NonZeroU32;
use std::time::Duration;
use tracing::trace;

/// Token bucket in front of every network attempt
pub struct RateLimiter {
    limiter: Option<DefaultDirectRateLimiter>,
}

impl RateLimiter {
    /// Creates a limiter from configuration
    ///
    /// The bucket refills one cell every `period_seconds / max_requests` and
    /// holds up to `burst_size` cells. Zero values fall back to one request
    /// per second with a burst of one; `enabled = false` disables waiting.
    #[must_use]
    pub fn new(config: &RateLimiterConfig) -> Self {
        if !config.enabled {
            return Self::unlimited();
        }

        let max_requests = config.max_requests.max(1);
        let interval = Duration::from_secs(config.period_seconds) / max_requests;
        let burst = NonZeroU32::new(config.burst_size).unwrap_or(NonZeroU32::MIN);

        let quota = Quota::with_period(interval)
            .unwrap_or_else(|| Quota::per_second(NonZeroU32::MIN))
            .allow_burst(burst);

        Self {
            limiter: Some(DefaultDirectRateLimiter::direct(quota)),
        }
    }

    /// Limiter that never waits
    #[must_use]
    pub fn unlimited() -> Self {
        Self { limiter: None }
    }

    /// Waits until a request may be sent
    pub async fn wait(&self) {
        if let Some(limiter) = &self.limiter {
            trace!("waiting for a rate limiter slot");
            limiter.until_ready().await;
        }
    }

    /// Returns true if a request could be sent right now, consuming the slot
    #[must_use]
    pub fn check(&self) -> bool {
        match &self.limiter {
            Some(limiter) => limiter.check().is_ok(),
            None => true,
        }
    }
}

impl std::fmt::Debug for RateLimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RateLimiter")
            .field("enabled", &self.limiter.is_some())
            .finish()
    }
}
