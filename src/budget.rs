//! Optional limits on how much work one search or verification may do.
//!
//! Worst-case search is combinatorial (dense dictionaries, big boards), so callers
//! can cap a call by steps, by wall-clock time, or both. A capped call stops where
//! it is and hands back what it found so far together with a [`SearchStatus`]
//! saying why it stopped.

use instant::Instant;
use std::time::Duration;

// Sample the clock once every this many steps
const CLOCK_SAMPLE_INTERVAL: u64 = 256;

/// Limits for a single call. The default is unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchLimits {
    /// Maximum wall-clock time for the call.
    pub time_limit: Option<Duration>,
    /// Maximum number of steps (cells entered during the depth-first walk).
    pub max_steps: Option<u64>,
}

impl SearchLimits {
    #[must_use]
    pub fn unbounded() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }

    #[must_use]
    pub fn with_max_steps(mut self, steps: u64) -> Self {
        self.max_steps = Some(steps);
        self
    }
}

/// How a search or verification ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStatus {
    /// The whole search space was covered (or, for verification, a path was found
    /// or shown not to exist).
    Complete,

    /// Stopped after the configured number of steps.
    StepLimitReached { steps: u64 },

    /// Stopped because the time limit expired. Contains the elapsed time.
    TimedOut { elapsed: Duration },
}

impl SearchStatus {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        matches!(self, SearchStatus::Complete)
    }
}

/// Running step/time account for one call.
///
/// Usage:
/// ```ignore
///  let mut budget = Budget::new(&limits);
///  while !budget.tick() {
///    // do one step of work
///  }
/// ```
#[derive(Debug)]
pub(crate) struct Budget {
    start: Instant,
    limits: SearchLimits,
    steps: u64,
    stopped: Option<SearchStatus>,
}

impl Budget {
    pub(crate) fn new(limits: &SearchLimits) -> Self {
        Self { start: Instant::now(), limits: *limits, steps: 0, stopped: None }
    }

    /// Count one step. Returns true if the budget is used up, in which case the
    /// caller must stop; once exhausted it stays exhausted.
    pub(crate) fn tick(&mut self) -> bool {
        if self.stopped.is_some() {
            return true;
        }

        if let Some(max) = self.limits.max_steps {
            if self.steps >= max {
                self.stopped = Some(SearchStatus::StepLimitReached { steps: self.steps });
                return true;
            }
        }

        if let Some(limit) = self.limits.time_limit {
            if self.steps % CLOCK_SAMPLE_INTERVAL == 0 {
                let elapsed = self.start.elapsed();
                if elapsed >= limit {
                    self.stopped = Some(SearchStatus::TimedOut { elapsed });
                    return true;
                }
            }
        }

        self.steps += 1;
        false
    }

    pub(crate) fn steps(&self) -> u64 {
        self.steps
    }

    pub(crate) fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    pub(crate) fn status(&self) -> SearchStatus {
        self.stopped.unwrap_or(SearchStatus::Complete)
    }
}

/// Bail out of a depth-first step with `ControlFlow::Break` once the budget is spent.
macro_rules! budget_stop {
    // For steps that return ControlFlow<()>
    ($budget:expr) => {
        if $budget.tick() {
            return std::ops::ControlFlow::Break(());
        }
    };
    // For steps that return ControlFlow<B>; caller passes the break value
    ($budget:expr, $brk:expr) => {
        if $budget.tick() {
            return std::ops::ControlFlow::Break($brk);
        }
    };
}
pub(crate) use budget_stop;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unbounded_never_stops() {
        let mut budget = Budget::new(&SearchLimits::unbounded());
        for _ in 0..10_000 {
            assert!(!budget.tick());
        }
        assert_eq!(budget.steps(), 10_000);
        assert_eq!(budget.status(), SearchStatus::Complete);
    }

    #[test]
    fn test_step_limit() {
        let mut budget = Budget::new(&SearchLimits::default().with_max_steps(3));
        assert!(!budget.tick());
        assert!(!budget.tick());
        assert!(!budget.tick());
        assert!(budget.tick());
        // sticky
        assert!(budget.tick());
        assert_eq!(budget.status(), SearchStatus::StepLimitReached { steps: 3 });
        assert!(!budget.status().is_complete());
    }

    #[test]
    fn test_zero_time_limit_stops_on_first_step() {
        let mut budget = Budget::new(&SearchLimits::default().with_time_limit(Duration::ZERO));
        assert!(budget.tick());
        assert!(matches!(budget.status(), SearchStatus::TimedOut { .. }));
    }

    #[test]
    fn test_generous_time_limit_does_not_stop() {
        let mut budget = Budget::new(&SearchLimits::default().with_time_limit(Duration::from_secs(3600)));
        for _ in 0..1000 {
            assert!(!budget.tick());
        }
        assert!(budget.status().is_complete());
        assert!(budget.elapsed() < Duration::from_secs(3600));
    }
}
