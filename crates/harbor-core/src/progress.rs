use crate::cancel::{CancellationToken, Cancelled};

/// Progress/cancellation context threaded through operations that can block.
///
/// Interactive callers construct one with their own [`CancellationToken`] so
/// in-flight work can be abandoned. Background work (event-driven reloads,
/// maintenance tasks) uses [`Progress::background`], which is never cancelled
/// and reports through `tracing` instead of a UI.
#[derive(Debug, Clone)]
pub struct Progress {
    token: CancellationToken,
    background: bool,
}

impl Progress {
    pub fn new(token: CancellationToken) -> Self {
        Self {
            token,
            background: false,
        }
    }

    /// Non-interactive context for work that nobody is watching.
    pub fn background() -> Self {
        Self {
            token: CancellationToken::new(),
            background: true,
        }
    }

    pub fn token(&self) -> &CancellationToken {
        &self.token
    }

    pub fn is_background(&self) -> bool {
        self.background
    }

    /// Reports a human-readable status line.
    pub fn report(&self, message: &str) {
        tracing::debug!(target: "harbor.progress", background = self.background, "{message}");
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    pub fn check_cancelled(&self) -> Result<(), Cancelled> {
        self.token.check()
    }
}

impl Default for Progress {
    fn default() -> Self {
        Self::new(CancellationToken::new())
    }
}
