use edu_cms_client::application::rate_limiter::RateLimiter;
use edu_cms_client::config::RateLimiterConfig;
use std::time::{Duration, Instant};

#[test]
fn test_unlimited_limiter_always_allows() {
    let limiter = RateLimiter::unlimited();
    for _ in 0..1000 {
        assert!(limiter.check());
    }
}

#[test]
fn test_zero_values_fall_back_to_a_working_quota() {
    let limiter = RateLimiter::new(&RateLimiterConfig {
        enabled: true,
        max_requests: 0,
        period_seconds: 0,
        burst_size: 0,
    });
    assert!(limiter.check());
}

#[test]
fn test_wait_returns_immediately_within_burst() {
    let limiter = RateLimiter::new(&RateLimiterConfig {
        enabled: true,
        max_requests: 1,
        period_seconds: 60,
        burst_size: 5,
    });
    let start = Instant::now();
    tokio_test::block_on(async {
        for _ in 0..5 {
            limiter.wait().await;
        }
    });
    assert!(start.elapsed() < Duration::from_secs(1));
}
