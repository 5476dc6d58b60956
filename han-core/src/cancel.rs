//! External cancellation of a running episode.
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

/// Stops an episode if [`CancellationToken::cancel`] is called.
///
/// Clones share the same flag, so a clone can be moved to another thread and
/// fired while the episode runs. The engine checks the flag once per loop
/// iteration.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    /// Constructs a token that has not fired.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fires the token.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    /// Returns `true` if the token has fired.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}
