//! Cancellation tokens tying in-flight requests to their caller's lifetime.

use std::sync::Arc;

use tokio::sync::watch;

/// Clonable cancellation signal. All clones observe the same state.
#[derive(Clone, Debug)]
pub struct CancelToken {
    sender: Arc<watch::Sender<bool>>,
}

impl Default for CancelToken {
    fn default() -> Self {
        Self::new()
    }
}

impl CancelToken {
    pub fn new() -> Self {
        let (sender, _) = watch::channel(false);
        Self {
            sender: Arc::new(sender),
        }
    }

    /// Signals cancellation. Idempotent.
    pub fn cancel(&self) {
        self.sender.send_replace(true);
    }

    pub fn is_cancelled(&self) -> bool {
        *self.sender.borrow()
    }

    /// Resolves once [`Self::cancel`] has been called on any clone.
    pub async fn cancelled(&self) {
        let mut receiver = self.sender.subscribe();
        // the sender lives as long as `self`, so this only returns on cancel
        let _ = receiver.wait_for(|cancelled| *cancelled).await;
    }

    /// Returns a guard that cancels this token when dropped.
    pub fn drop_guard(&self) -> DropGuard {
        DropGuard {
            token: Some(self.clone()),
        }
    }
}

/// Cancels its token on drop unless [`DropGuard::disarm`] was called.
#[derive(Debug)]
pub struct DropGuard {
    token: Option<CancelToken>,
}

impl DropGuard {
    /// Releases the token without cancelling it.
    pub fn disarm(mut self) -> CancelToken {
        self.token.take().unwrap_or_default()
    }
}

impl Drop for DropGuard {
    fn drop(&mut self) {
        if let Some(token) = self.token.take() {
            token.cancel();
        }
    }
}
