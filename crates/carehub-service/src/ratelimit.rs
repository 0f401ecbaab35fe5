//! Per-partner rate limiting for the medications sync route.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};

use carehub_core::config::sync::SyncConfig;
use carehub_core::error::AppError;
use carehub_core::result::AppResult;
use carehub_database::repositories::rate_limit::RateLimitRepository;
use carehub_entity::partner::RateLimitWindow;
use uuid::Uuid;

/// Outcome of evaluating a counted request against the ceiling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RateDecision {
    /// The request fits within the window budget.
    Allowed,
    /// The ceiling is exceeded; the caller should retry after the window
    /// rolls over.
    Limited {
        /// Seconds until the window expires, never zero.
        retry_after_seconds: u64,
    },
}

/// Evaluate a window state against the ceiling.
///
/// The window's count already includes the current request, so the
/// boundary request (count == ceiling) is allowed and the one after it is
/// rejected.
pub fn evaluate(
    window: &RateLimitWindow,
    max_requests: i32,
    window_seconds: i64,
    now: DateTime<Utc>,
) -> RateDecision {
    if window.request_count <= max_requests {
        return RateDecision::Allowed;
    }

    let expires_at = window.window_start + Duration::seconds(window_seconds);
    let remaining = (expires_at - now).num_seconds().max(1);
    RateDecision::Limited {
        retry_after_seconds: remaining as u64,
    }
}

/// Counts requests against the per-partner window and rejects beyond the
/// ceiling.
///
/// The count happens on every authenticated request, successful or not —
/// the caller invokes [`RateLimiter::check`] before validating the body.
#[derive(Debug, Clone)]
pub struct RateLimiter {
    repo: Arc<RateLimitRepository>,
    max_requests: i32,
    window_seconds: i64,
}

impl RateLimiter {
    /// Create a new rate limiter from configuration.
    pub fn new(repo: Arc<RateLimitRepository>, config: &SyncConfig) -> Self {
        Self {
            repo,
            max_requests: config.rate_limit_max_requests,
            window_seconds: config.rate_limit_window_seconds,
        }
    }

    /// Count the request and enforce the ceiling.
    pub async fn check(&self, partner_id: Uuid) -> AppResult<()> {
        let window = self.repo.increment(partner_id, self.window_seconds).await?;

        match evaluate(&window, self.max_requests, self.window_seconds, Utc::now()) {
            RateDecision::Allowed => Ok(()),
            RateDecision::Limited {
                retry_after_seconds,
            } => Err(AppError::rate_limited(format!(
                "Rate limit of {} requests per {}s exceeded",
                self.max_requests, self.window_seconds
            ))
            .with_retry_after(retry_after_seconds)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window(count: i32, opened_secs_ago: i64, now: DateTime<Utc>) -> RateLimitWindow {
        RateLimitWindow {
            partner_id: Uuid::new_v4(),
            window_start: now - Duration::seconds(opened_secs_ago),
            request_count: count,
        }
    }

    #[test]
    fn boundary_request_is_allowed() {
        let now = Utc::now();
        let decision = evaluate(&window(100, 10, now), 100, 60, now);
        assert_eq!(decision, RateDecision::Allowed);
    }

    #[test]
    fn request_beyond_ceiling_is_limited_with_positive_retry() {
        let now = Utc::now();
        match evaluate(&window(101, 10, now), 100, 60, now) {
            RateDecision::Limited {
                retry_after_seconds,
            } => {
                assert!(retry_after_seconds > 0);
                assert!(retry_after_seconds <= 60);
            }
            RateDecision::Allowed => panic!("expected rejection"),
        }
    }

    #[test]
    fn retry_after_never_reports_zero() {
        // Window about to expire: the database would have reset it on the
        // next increment, but a rejection computed at the edge still tells
        // the caller to wait at least a second.
        let now = Utc::now();
        match evaluate(&window(101, 60, now), 100, 60, now) {
            RateDecision::Limited {
                retry_after_seconds,
            } => assert_eq!(retry_after_seconds, 1),
            RateDecision::Allowed => panic!("expected rejection"),
        }
    }

    #[test]
    fn fresh_window_resets_effective_count() {
        // After the window rolls over the increment statement restarts the
        // count at 1; evaluation sees a small count and allows.
        let now = Utc::now();
        let decision = evaluate(&window(1, 0, now), 100, 60, now);
        assert_eq!(decision, RateDecision::Allowed);
    }
}
