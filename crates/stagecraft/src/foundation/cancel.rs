//! Cooperative cancellation

use crate::error::EngineError;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Shared cancellation flag
///
/// Clones observe the same flag, so a token handed to a Ctrl-C handler or
/// another thread stops a loop running on the main thread. The engine
/// checks the token at every layer render, scene update, and loop
/// iteration, and sleeps through it so shutdown is never delayed by a
/// full sleep interval.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    /// Granularity of cancellable sleeps
    const SLEEP_SLICE: Duration = Duration::from_millis(10);

    /// Create a token in the not-cancelled state
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation
    ///
    /// Idempotent; there is no way to reset a token.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    /// Whether cancellation has been requested
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }

    /// Error if cancellation has been requested
    pub fn check(&self) -> Result<(), EngineError> {
        if self.is_cancelled() {
            Err(EngineError::Cancelled)
        } else {
            Ok(())
        }
    }

    /// Sleep for `duration`, waking early if cancelled
    pub fn sleep(&self, duration: Duration) {
        let deadline = Instant::now() + duration;
        while !self.is_cancelled() {
            let now = Instant::now();
            if now >= deadline {
                break;
            }
            std::thread::sleep((deadline - now).min(Self::SLEEP_SLICE));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_starts_clear() {
        let token = CancelToken::new();
        assert!(!token.is_cancelled());
        assert!(token.check().is_ok());
    }

    #[test]
    fn test_cancel_is_observed() {
        let token = CancelToken::new();
        token.cancel();

        assert!(token.is_cancelled());
        assert!(matches!(token.check(), Err(EngineError::Cancelled)));
    }

    #[test]
    fn test_clones_share_state() {
        let token = CancelToken::new();
        let clone = token.clone();

        clone.cancel();

        assert!(token.is_cancelled());
    }

    #[test]
    fn test_sleep_returns_early_when_cancelled() {
        let token = CancelToken::new();
        token.cancel();

        let start = Instant::now();
        token.sleep(Duration::from_secs(10));

        assert!(start.elapsed() < Duration::from_secs(1));
    }

    #[test]
    fn test_sleep_waits_without_cancellation() {
        let token = CancelToken::new();

        let start = Instant::now();
        token.sleep(Duration::from_millis(30));

        assert!(start.elapsed() >= Duration::from_millis(30));
    }
}
