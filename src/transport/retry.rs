//! # Delivery Retry
//!
//! Exponential backoff with jitter. Only errors the transport marks as
//! retryable are retried; validation never reaches this layer.
//!
//! ```text
//! attempt n waits  min(base × multiplier^(n-1), max_delay) × (1 ± jitter)
//! ```

use std::thread;
use std::time::Duration;

use rand::Rng;
use tracing::{debug, warn};

use super::Transport;
use crate::command::JobBuffer;
use crate::error::TransportError;

/// Backoff parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RetryPolicy {
    /// Delay before the first retry
    pub base_delay: Duration,
    /// Growth factor per retry (values below 1.0 act as 1.0)
    pub multiplier: f64,
    /// Retries after the first attempt
    pub max_retries: u32,
    /// Random spread as a fraction of the delay, 0.0..=1.0
    pub jitter: f64,
    /// Upper bound for any single delay
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            base_delay: Duration::from_millis(200),
            multiplier: 2.0,
            max_retries: 3,
            jitter: 0.1,
            max_delay: Duration::from_secs(5),
        }
    }
}

impl RetryPolicy {
    /// A single attempt, no retries.
    pub fn none() -> Self {
        Self {
            max_retries: 0,
            ..Self::default()
        }
    }

    /// `max_retries` retries without waiting. Meant for tests.
    pub fn immediate(max_retries: u32) -> Self {
        Self {
            base_delay: Duration::ZERO,
            max_retries,
            jitter: 0.0,
            ..Self::default()
        }
    }

    /// Delay before retry `attempt` (1-based), without jitter.
    pub fn nominal_delay(&self, attempt: u32) -> Duration {
        let exp = attempt.saturating_sub(1).min(i32::MAX as u32) as i32;
        let secs = self.base_delay.as_secs_f64() * self.multiplier.max(1.0).powi(exp);
        self.cap(secs)
    }

    /// Delay before retry `attempt`, with jitter applied.
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let nominal = self.nominal_delay(attempt);
        let jitter = self.jitter.clamp(0.0, 1.0);
        if jitter == 0.0 || nominal.is_zero() {
            return nominal;
        }
        let factor = 1.0 + rand::rng().random_range(-jitter..=jitter);
        self.cap(nominal.as_secs_f64() * factor)
    }

    fn cap(&self, secs: f64) -> Duration {
        if secs.is_finite() && secs < self.max_delay.as_secs_f64() {
            Duration::from_secs_f64(secs.max(0.0))
        } else {
            self.max_delay
        }
    }
}

/// Deliver `job`, retrying retryable failures per `policy`.
///
/// Returns the last error once retries are exhausted, or the first
/// non-retryable error immediately.
pub fn deliver_with_retry<T: Transport + ?Sized>(
    transport: &mut T,
    job: &JobBuffer,
    policy: &RetryPolicy,
) -> Result<(), TransportError> {
    let mut retries = 0;
    loop {
        match transport.deliver(job.as_bytes()) {
            Ok(()) => {
                debug!(
                    job = %job.id(),
                    bytes = job.len(),
                    attempts = retries + 1,
                    "Job delivered"
                );
                return Ok(());
            }
            Err(err) if err.is_retryable() && retries < policy.max_retries => {
                retries += 1;
                let delay = policy.delay_for(retries);
                warn!(
                    job = %job.id(),
                    retry = retries,
                    ?delay,
                    error = %err,
                    "Delivery failed, retrying"
                );
                thread::sleep(delay);
            }
            Err(err) => {
                warn!(
                    job = %job.id(),
                    attempts = retries + 1,
                    error = %err,
                    "Delivery failed"
                );
                return Err(err);
            }
        }
    }
}
