//! Cancellation and timeout hook for the grid search.
//!
//! The search polls `SearchControl::check` once per angle row, so an abort
//! takes effect within one row of intercept evaluations.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use crate::error::FitError;

#[derive(Debug, Clone)]
pub struct SearchControl {
    cancelled: Arc<AtomicBool>,
    started: Instant,
    timeout: Option<Duration>,
}

/// Cloneable handle that cancels the search it was taken from.
#[derive(Debug, Clone)]
pub struct CancelHandle {
    cancelled: Arc<AtomicBool>,
}

impl CancelHandle {
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }
}

impl SearchControl {
    /// No deadline; the clock starts now.
    pub fn new() -> Self {
        Self {
            cancelled: Arc::new(AtomicBool::new(false)),
            started: Instant::now(),
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn handle(&self) -> CancelHandle {
        CancelHandle {
            cancelled: Arc::clone(&self.cancelled),
        }
    }

    /// `Err` once cancelled or past the deadline.
    pub fn check(&self) -> Result<(), FitError> {
        if self.cancelled.load(Ordering::Relaxed) {
            return Err(FitError::Cancelled);
        }
        if let Some(timeout) = self.timeout {
            let elapsed = self.started.elapsed();
            if elapsed >= timeout {
                return Err(FitError::TimedOut { elapsed });
            }
        }
        Ok(())
    }
}

impl Default for SearchControl {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_control_passes() {
        let control = SearchControl::new().with_timeout(Some(Duration::from_secs(3600)));
        assert!(control.check().is_ok());
    }

    #[test]
    fn handle_cancels_every_clone() {
        let control = SearchControl::new();
        let clone = control.clone();
        control.handle().cancel();
        assert_eq!(clone.check(), Err(FitError::Cancelled));
    }

    #[test]
    fn zero_timeout_expires_immediately() {
        let control = SearchControl::new().with_timeout(Some(Duration::ZERO));
        assert!(matches!(control.check(), Err(FitError::TimedOut { .. })));
    }
}
