//! # Printer Configuration
//!
//! Endpoint and retry settings for a network label printer. Both types
//! are plain data: validated up front, then treated as immutable for
//! the duration of a send.

use std::net::Ipv4Addr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::PrintError;

/// Default raw-socket print port (the conventional JetDirect port).
pub const DEFAULT_PORT: u16 = 9100;

/// Default connect timeout in milliseconds.
pub const DEFAULT_CONNECT_TIMEOUT_MS: u64 = 30_000;

/// Default idle timeout in milliseconds.
pub const DEFAULT_IDLE_TIMEOUT_MS: u64 = 30_000;

/// A printer's network address and per-attempt timeouts.
///
/// Validated with [`validate`](PrinterEndpoint::validate) before any
/// connection is attempted; a malformed endpoint never reaches the
/// socket layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrinterEndpoint {
    /// Printer IPv4 address in dotted-quad form.
    pub host: String,
    /// TCP port, conventionally 9100.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Max time to wait for the TCP connection to establish.
    #[serde(default = "default_connect_timeout_ms")]
    pub connect_timeout_ms: u64,
    /// Max time to wait on the established socket without any byte flow.
    #[serde(default = "default_idle_timeout_ms")]
    pub idle_timeout_ms: u64,
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_connect_timeout_ms() -> u64 {
    DEFAULT_CONNECT_TIMEOUT_MS
}

fn default_idle_timeout_ms() -> u64 {
    DEFAULT_IDLE_TIMEOUT_MS
}

impl PrinterEndpoint {
    /// An endpoint at `host:9100` with default timeouts.
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: DEFAULT_PORT,
            connect_timeout_ms: DEFAULT_CONNECT_TIMEOUT_MS,
            idle_timeout_ms: DEFAULT_IDLE_TIMEOUT_MS,
        }
    }

    /// Set a non-default port.
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// The `host:port` string used in log lines and error messages.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Connect timeout as a [`Duration`].
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }

    /// Idle timeout as a [`Duration`].
    pub fn idle_timeout(&self) -> Duration {
        Duration::from_millis(self.idle_timeout_ms)
    }

    /// Check that the host is dotted-quad IPv4 and the port is non-zero.
    pub fn validate(&self) -> Result<(), PrintError> {
        if self.host.parse::<Ipv4Addr>().is_err() {
            return Err(PrintError::Validation(format!(
                "host {:?} is not a valid IPv4 address",
                self.host
            )));
        }
        if self.port == 0 {
            return Err(PrintError::Validation("port must be in 1..=65535".into()));
        }
        Ok(())
    }
}

/// How many attempts a send gets, and how long to wait between them.
///
/// Stateless and reusable across jobs. Backoffs are per failure class:
/// a connect-timeout already spent the full connect window waiting, so
/// it gets a shorter pause than an immediate refusal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryPolicy {
    /// Total attempts, including the first. Must be at least 1.
    pub max_attempts: u32,
    /// Pause after a connect-timeout failure, in milliseconds.
    pub connect_timeout_backoff_ms: u64,
    /// Pause after any other retryable failure, in milliseconds.
    pub error_backoff_ms: u64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 4,
            connect_timeout_backoff_ms: 2_000,
            error_backoff_ms: 3_000,
        }
    }
}

impl RetryPolicy {
    /// The pause to take before retrying after `error`.
    pub fn backoff_for(&self, error: &PrintError) -> Duration {
        match error {
            PrintError::ConnectTimeout { .. } => {
                Duration::from_millis(self.connect_timeout_backoff_ms)
            }
            _ => Duration::from_millis(self.error_backoff_ms),
        }
    }
}
