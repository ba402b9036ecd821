//! Session configuration for the reconciler.

use std::time::Duration;

/// Default bound on any single remote call.
const DEFAULT_CALL_TIMEOUT: Duration = Duration::from_secs(10);

/// Tunables for one reconciler session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncConfig {
    call_timeout: Duration,
}

impl SyncConfig {
    /// Creates the default configuration.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            call_timeout: DEFAULT_CALL_TIMEOUT,
        }
    }

    /// Sets the bound applied to every remote call.
    #[must_use]
    pub const fn with_call_timeout(mut self, timeout: Duration) -> Self {
        self.call_timeout = timeout;
        self
    }

    /// Returns the bound applied to every remote call.
    #[must_use]
    pub const fn call_timeout(&self) -> Duration {
        self.call_timeout
    }
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self::new()
    }
}
