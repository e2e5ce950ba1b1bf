//! Cooperative cancellation for long searches

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use thiserror::Error;

/// Shared abort flag. Clones observe the same flag, so a UI thread can keep one
/// and hand another to the search.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request that any running search stops
    #[inline]
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }

    /// Clear a previous request before starting a new search
    #[inline]
    pub fn reset(&self) {
        self.flag.store(false, Ordering::Relaxed);
    }
}

/// A search stopped by its [`CancelToken`] before producing a result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("search cancelled")]
pub struct Cancelled;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_flag() {
        let token = CancelToken::new();
        let ui_side = token.clone();
        assert!(!token.is_cancelled());

        ui_side.cancel();
        assert!(token.is_cancelled());

        token.reset();
        assert!(!ui_side.is_cancelled());
    }

    #[test]
    fn test_cancel_from_other_thread() {
        let token = CancelToken::new();
        let remote = token.clone();
        std::thread::spawn(move || remote.cancel()).join().unwrap();
        assert!(token.is_cancelled());
    }
}
