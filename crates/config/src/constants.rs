//! Centralized default values
//!
//! Single source of truth for defaults referenced by [`crate::Settings`]
//! and by callers that build components without a settings file.

/// Session controller defaults
pub mod session {
    /// Delay between accepting a message and appending the assistant reply
    pub const DEFAULT_REPLY_DELAY_MS: u64 = 600;

    /// Longest accepted reply delay
    pub const MAX_REPLY_DELAY_MS: u64 = 10_000;

    /// Capacity of the per-session event channel
    pub const EVENT_CHANNEL_CAPACITY: usize = 100;
}

/// HTTP server defaults
pub mod server {
    pub const DEFAULT_HOST: &str = "0.0.0.0";
    pub const DEFAULT_PORT: u16 = 8080;
    pub const DEFAULT_MAX_SESSIONS: usize = 1000;
    pub const DEFAULT_SESSION_TIMEOUT_SECS: u64 = 1800;
    pub const DEFAULT_CLEANUP_INTERVAL_SECS: u64 = 300;
    pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
}

/// Configuration sources
pub mod sources {
    /// Prefix for environment overrides, e.g. `ASSISTANT__SERVER__PORT`
    pub const ENV_PREFIX: &str = "ASSISTANT";

    /// Environment variable selecting `config/{env}.yaml`
    pub const ENV_SELECTOR: &str = "ASSISTANT_ENV";

    pub const DEFAULT_FILE: &str = "config/default";
}
