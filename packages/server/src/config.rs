//! Server configuration.
//!
//! Built from command-line arguments in the `huddle-server` binary; tests
//! construct it directly with short intervals.

use std::time::Duration;

/// Default port of the voting TCP listener
pub const DEFAULT_PORT: u16 = 9000;
/// Default fallback interval between completion checks
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(2);
/// Default interval between "Missing voters" warnings
pub const DEFAULT_STRAGGLER_INTERVAL: Duration = Duration::from_secs(10);

/// Timing of the round coordinator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundTiming {
    /// Upper bound between two completion checks when no room signal arrives
    pub poll_interval: Duration,
    /// Interval between stragglers notifications to a waiting voter
    pub straggler_interval: Duration,
}

impl Default for RoundTiming {
    fn default() -> Self {
        Self {
            poll_interval: DEFAULT_POLL_INTERVAL,
            straggler_interval: DEFAULT_STRAGGLER_INTERVAL,
        }
    }
}

/// Listener addresses and round timing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Port of the read-only HTTP status API (disabled when `None`)
    pub http_port: Option<u16>,
    pub timing: RoundTiming,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            http_port: None,
            timing: RoundTiming::default(),
        }
    }
}

impl ServerConfig {
    pub fn tcp_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn http_addr(&self) -> Option<String> {
        self.http_port.map(|port| format!("{}:{}", self.host, port))
    }
}
