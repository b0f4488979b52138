//! # Printer Transport Layer
//!
//! This module provides communication backends for sending composed
//! command streams to printers.
//!
//! ## Available Transports
//!
//! - [`tcp`]: raw-socket network printing (port 9100), with bounded
//!   retry-with-backoff
//!
//! Anything that can deliver bytes to a printer implements [`Transport`];
//! the orchestrator is written against the trait so tests can substitute
//! a scripted mock.

mod retry;
pub mod tcp;

pub use tcp::TcpTransport;

use crate::error::PrintError;
use crate::printer::PrinterEndpoint;

/// What a successful send reports back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendReceipt {
    /// Attempts used, counting the successful one. 1 on a clean send.
    pub attempts: u32,
    /// Bytes the printer sent back during the settle window. Advisory
    /// only; most printers send nothing.
    pub bytes_received: usize,
}

/// A byte channel to one printer.
pub trait Transport {
    /// Deliver `bytes` to the printer at `endpoint`, retrying transient
    /// connection failures per the transport's policy.
    fn send(&mut self, endpoint: &PrinterEndpoint, bytes: &[u8]) -> Result<SendReceipt, PrintError>;

    /// Liveness probe: connect and immediately disconnect, without
    /// retrying. Used by the orchestrator's connectivity checks.
    fn probe(&mut self, endpoint: &PrinterEndpoint) -> Result<(), PrintError>;
}
