//! Simulated thinking latency
//!
//! The widget waits a little before each canned reply so it reads like a
//! person typing. The delay is a strategy so tests can run without waiting.

use rand::Rng;
use std::time::Duration;

/// Produces the wait before the next bot reply.
pub trait ReplyDelay: Send + Sync {
    fn next_delay(&self) -> Duration;
}

/// Uniformly sampled delay in `[min, max)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UniformDelay {
    min: Duration,
    max: Duration,
}

impl UniformDelay {
    /// Bounds are reordered if given backwards.
    pub fn new(min: Duration, max: Duration) -> Self {
        if max < min {
            Self { min: max, max: min }
        } else {
            Self { min, max }
        }
    }
}

impl Default for UniformDelay {
    fn default() -> Self {
        Self::new(Duration::from_millis(1000), Duration::from_millis(2000))
    }
}

impl ReplyDelay for UniformDelay {
    fn next_delay(&self) -> Duration {
        if self.min == self.max {
            return self.min;
        }
        rand::rng().random_range(self.min..self.max)
    }
}

/// Always the same delay. `FixedDelay(Duration::ZERO)` replies on the next tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FixedDelay(pub Duration);

impl ReplyDelay for FixedDelay {
    fn next_delay(&self) -> Duration {
        self.0
    }
}
