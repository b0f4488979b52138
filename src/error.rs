//! # Error Types
//!
//! This module defines the error taxonomy used throughout the etiqueta
//! library.
//!
//! Errors fall into three groups:
//!
//! - **Pre-flight** ([`PrintError::Validation`], [`PrintError::Compose`]):
//!   rejected before any socket is opened. Never retried.
//! - **Connection-stage** (refused, timeouts, unreachable, not-found,
//!   unknown): classified from the underlying transport error and retried
//!   under the configured [`RetryPolicy`](crate::printer::RetryPolicy).
//! - **Write-stage** ([`PrintError::Write`]): failure after a successful
//!   connect, while streaming the composed bytes. Surfaced immediately,
//!   never retried.
//!
//! Use [`PrintError::is_retryable()`] to distinguish transient connection
//! failures from terminal ones.

use std::io;
use std::time::Duration;

use thiserror::Error;

/// Main error type for etiqueta operations.
#[derive(Debug, Error)]
pub enum PrintError {
    /// Malformed printer configuration (bad IPv4 host, out-of-range port).
    /// Rejected before any I/O.
    #[error("invalid printer configuration: {0}")]
    Validation(String),

    /// Label layout precondition violated (e.g. missing product code).
    /// Rejected before any command byte is emitted.
    #[error("cannot compose label: {0}")]
    Compose(String),

    /// No connection established within the connect timeout.
    #[error("connection to {addr} timed out after {timeout:?}")]
    ConnectTimeout {
        /// The endpoint that was attempted.
        addr: String,
        /// The configured timeout that elapsed.
        timeout: Duration,
    },

    /// No byte exchange within the idle timeout after connecting.
    #[error("connection to {addr} went idle (no data within {timeout:?})")]
    IdleTimeout {
        /// The endpoint that was attempted.
        addr: String,
        /// The configured timeout that elapsed.
        timeout: Duration,
    },

    /// The printer actively refused the connection (port not open).
    #[error("connection refused by {addr}")]
    Refused {
        /// The endpoint that was attempted.
        addr: String,
        /// The underlying OS error.
        #[source]
        source: io::Error,
    },

    /// No route to the printer host.
    #[error("host {addr} is unreachable")]
    HostUnreachable {
        /// The endpoint that was attempted.
        addr: String,
        /// The underlying OS error.
        #[source]
        source: io::Error,
    },

    /// The network containing the printer is unreachable.
    #[error("network unreachable trying to reach {addr}")]
    NetworkUnreachable {
        /// The endpoint that was attempted.
        addr: String,
        /// The underlying OS error.
        #[source]
        source: io::Error,
    },

    /// The printer address could not be found.
    #[error("printer at {addr} not found")]
    NotFound {
        /// The endpoint that was attempted.
        addr: String,
        /// The underlying OS error.
        #[source]
        source: io::Error,
    },

    /// Writing the composed bytes failed after a successful connect.
    #[error("write to {addr} failed: {source}")]
    Write {
        /// The endpoint the stream was connected to.
        addr: String,
        /// The underlying OS error.
        #[source]
        source: io::Error,
    },

    /// A connection failure that fits no other classification.
    #[error("connection to {addr} failed: {source}")]
    Unknown {
        /// The endpoint that was attempted.
        addr: String,
        /// The underlying OS error.
        #[source]
        source: io::Error,
    },

    /// Every attempt allowed by the retry policy failed.
    #[error("printer at {addr} unreachable after {attempts} attempts")]
    RetriesExhausted {
        /// The endpoint that was attempted.
        addr: String,
        /// Total number of attempts made.
        attempts: u32,
        /// The error from the final attempt.
        #[source]
        last_error: Box<PrintError>,
    },
}

impl PrintError {
    /// Returns `true` if another connection attempt is worth scheduling.
    ///
    /// Every connection-stage classification is retried under the same
    /// policy, including host-unreachable and not-found: the printers this
    /// library targets are frequently powered off or mid-DHCP, and those
    /// conditions clear without operator action. Validation, compose, and
    /// write-stage errors are never retried.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            PrintError::ConnectTimeout { .. }
                | PrintError::IdleTimeout { .. }
                | PrintError::Refused { .. }
                | PrintError::HostUnreachable { .. }
                | PrintError::NetworkUnreachable { .. }
                | PrintError::NotFound { .. }
                | PrintError::Unknown { .. }
        )
    }

    /// A short remediation checklist for connectivity failures.
    ///
    /// Embedded in user-visible failure messages by the orchestrator.
    pub fn remediation(&self) -> Option<&'static str> {
        match self {
            PrintError::ConnectTimeout { .. }
            | PrintError::IdleTimeout { .. }
            | PrintError::Refused { .. }
            | PrintError::HostUnreachable { .. }
            | PrintError::NetworkUnreachable { .. }
            | PrintError::NotFound { .. }
            | PrintError::Unknown { .. }
            | PrintError::RetriesExhausted { .. } => Some(
                "Check that the printer is powered on, the IP address and \
                 port are correct, and the printer is on the same network.",
            ),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn io_err(kind: io::ErrorKind) -> io::Error {
        io::Error::new(kind, "test")
    }

    #[test]
    fn test_connection_stage_errors_are_retryable() {
        let addr = || "192.168.1.50:9100".to_string();
        assert!(
            PrintError::ConnectTimeout {
                addr: addr(),
                timeout: Duration::from_secs(30),
            }
            .is_retryable()
        );
        assert!(
            PrintError::IdleTimeout {
                addr: addr(),
                timeout: Duration::from_secs(30),
            }
            .is_retryable()
        );
        assert!(
            PrintError::Refused {
                addr: addr(),
                source: io_err(io::ErrorKind::ConnectionRefused),
            }
            .is_retryable()
        );
        assert!(
            PrintError::HostUnreachable {
                addr: addr(),
                source: io_err(io::ErrorKind::HostUnreachable),
            }
            .is_retryable()
        );
        assert!(
            PrintError::NetworkUnreachable {
                addr: addr(),
                source: io_err(io::ErrorKind::NetworkUnreachable),
            }
            .is_retryable()
        );
        assert!(
            PrintError::NotFound {
                addr: addr(),
                source: io_err(io::ErrorKind::NotFound),
            }
            .is_retryable()
        );
        assert!(
            PrintError::Unknown {
                addr: addr(),
                source: io_err(io::ErrorKind::Other),
            }
            .is_retryable()
        );
    }

    #[test]
    fn test_preflight_and_write_errors_are_not_retryable() {
        assert!(!PrintError::Validation("bad host".into()).is_retryable());
        assert!(!PrintError::Compose("missing code".into()).is_retryable());
        assert!(
            !PrintError::Write {
                addr: "192.168.1.50:9100".into(),
                source: io_err(io::ErrorKind::BrokenPipe),
            }
            .is_retryable()
        );
        assert!(
            !PrintError::RetriesExhausted {
                addr: "192.168.1.50:9100".into(),
                attempts: 4,
                last_error: Box::new(PrintError::Validation("x".into())),
            }
            .is_retryable()
        );
    }

    #[test]
    fn test_exhaustion_message_names_endpoint_and_attempts() {
        let err = PrintError::RetriesExhausted {
            addr: "10.255.255.1:9100".into(),
            attempts: 4,
            last_error: Box::new(PrintError::ConnectTimeout {
                addr: "10.255.255.1:9100".into(),
                timeout: Duration::from_secs(30),
            }),
        };
        let msg = err.to_string();
        assert!(msg.contains("10.255.255.1:9100"));
        assert!(msg.contains("4 attempts"));
    }

    #[test]
    fn test_remediation_only_for_connectivity() {
        assert!(PrintError::Validation("x".into()).remediation().is_none());
        assert!(PrintError::Compose("x".into()).remediation().is_none());
        let err = PrintError::Refused {
            addr: "192.168.1.50:9100".into(),
            source: io_err(io::ErrorKind::ConnectionRefused),
        };
        assert!(err.remediation().unwrap().contains("powered on"));
    }
}
