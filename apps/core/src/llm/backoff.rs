//! Retry arithmetic and per-attempt outcomes for the completion client.

use std::time::Duration;

use super::types::{Completion, CompletionError};

/// How the delay grows with the number of failed attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackoffPolicy {
    /// `base * n`; used after timeouts.
    Linear,
    /// `base * 2^(n-1)`; used after 429/503.
    Exponential,
}

/// Delay before the next attempt, after `failed_attempts` (1-based) failures.
pub fn backoff_delay(policy: BackoffPolicy, base: Duration, failed_attempts: u32) -> Duration {
    let n = failed_attempts.max(1);
    let factor = match policy {
        BackoffPolicy::Linear => n,
        BackoffPolicy::Exponential => 1u32.checked_shl(n - 1).unwrap_or(u32::MAX),
    };
    base.saturating_mul(factor)
}

/// Classified result of a single HTTP attempt.
#[derive(Debug)]
pub enum AttemptOutcome {
    Succeeded(Completion),
    /// Retryable; `exhausted` is what to return if no attempts remain.
    Retry {
        policy: BackoffPolicy,
        exhausted: CompletionError,
    },
    FailFast(CompletionError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_grows_with_attempts() {
        let base = Duration::from_millis(500);
        assert_eq!(backoff_delay(BackoffPolicy::Linear, base, 1), Duration::from_millis(500));
        assert_eq!(backoff_delay(BackoffPolicy::Linear, base, 3), Duration::from_millis(1500));
    }

    #[test]
    fn exponential_doubles() {
        let base = Duration::from_secs(1);
        let delays: Vec<u64> = (1..=4)
            .map(|n| backoff_delay(BackoffPolicy::Exponential, base, n).as_secs())
            .collect();
        assert_eq!(delays, vec![1, 2, 4, 8]);
    }

    #[test]
    fn large_attempt_counts_saturate() {
        let d = backoff_delay(BackoffPolicy::Exponential, Duration::from_secs(1), 200);
        assert_eq!(d, Duration::from_secs(u32::MAX as u64));
        assert_eq!(
            backoff_delay(BackoffPolicy::Linear, Duration::ZERO, 7),
            Duration::ZERO
        );
    }
}
