use std::time::Duration;

/// Controls how the system-backed resolvers are built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MxLookupOptions {
    /// Per-query timeout.
    pub timeout: Duration,
    /// Query attempts before the lookup is reported as failed.
    pub attempts: usize,
    /// Read `/etc/resolv.conf` (or the platform equivalent). When `false`
    /// the resolver's built-in upstream configuration is used.
    pub use_system_conf: bool,
}

impl Default for MxLookupOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(5),
            attempts: 2,
            use_system_conf: true,
        }
    }
}

impl MxLookupOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_attempts(mut self, attempts: usize) -> Self {
        self.attempts = attempts.max(1);
        self
    }

    pub fn use_system_conf(mut self, value: bool) -> Self {
        self.use_system_conf = value;
        self
    }
}
