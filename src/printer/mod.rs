//! # Print Orchestrator
//!
//! High-level printer operations: liveness probing, connection state,
//! and the print entry points that sequence composed label streams over
//! a [`Transport`](crate::transport::Transport).
//!
//! The orchestrator is a plain value owned by its caller; nothing here
//! is global. One [`PrinterService`] talks to one printer, and its
//! `&mut self` operations make concurrent jobs to the same printer
//! impossible by construction (interleaved writes from two senders
//! would corrupt the label).

mod config;
mod service;

pub use config::{
    DEFAULT_CONNECT_TIMEOUT_MS, DEFAULT_IDLE_TIMEOUT_MS, DEFAULT_PORT, PrinterEndpoint,
    RetryPolicy,
};
pub use service::{
    ConnectionReport, ConnectionState, PrintData, PrintOutcome, PrinterService, PrinterStatus,
    ProbeReport, StatusReport,
};
