//! # Printer Service
//!
//! The orchestrator behind the boundary operations: holds the endpoint
//! and connection state, probes liveness, and sequences print jobs copy
//! by copy.
//!
//! No operation here returns a raw `Err` to the boundary — every entry
//! point resolves to a descriptor struct with a `success` flag and a
//! human-readable message, so the calling layer never has to translate
//! a panic or an uncaught error.

use std::thread;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::PrintError;
use crate::label::{self, HorizontalRasters, LabelContent};
use crate::printer::{PrinterEndpoint, RetryPolicy};
use crate::transport::{TcpTransport, Transport};

/// Delay between copies of a multi-quantity job (milliseconds).
///
/// Printers need a moment to finish the cut before the next label's
/// data arrives.
const INTER_COPY_DELAY_MS: u64 = 500;

/// Liveness as last observed by a probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    /// No successful probe yet, or the last probe failed.
    Disconnected,
    /// A probe is in flight.
    Testing,
    /// The last probe reached the printer.
    Connected,
}

/// Result descriptor for `initialize` and `disconnect`.
#[derive(Debug, Clone, Serialize)]
pub struct ProbeReport {
    pub success: bool,
    pub message: String,
}

/// Result descriptor for `test_connection`.
#[derive(Debug, Clone, Serialize)]
pub struct ConnectionReport {
    pub is_connected: bool,
    pub host: String,
    pub port: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

/// Per-job counters attached to a successful (or partial) print outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrintData {
    /// Copies fully sent to the printer.
    pub labels_printed: u32,
    /// Barcodes across those copies.
    pub barcodes_printed: u32,
    /// Advisory bytes the printer sent back across the whole job.
    pub bytes_received: usize,
}

/// Result descriptor for the print operations.
#[derive(Debug, Clone, Serialize)]
pub struct PrintOutcome {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<PrintData>,
}

impl PrintOutcome {
    fn failure(message: String, data: Option<PrintData>) -> Self {
        Self {
            success: false,
            message,
            data,
        }
    }
}

/// Printer liveness for status reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PrinterStatus {
    Online,
    Offline,
}

/// Result descriptor for `status`.
#[derive(Debug, Clone, Serialize)]
pub struct StatusReport {
    pub is_connected: bool,
    pub host: String,
    pub port: u16,
    pub status: PrinterStatus,
    /// When the last probe ran; `None` before the first probe.
    pub last_checked: Option<DateTime<Utc>>,
}

/// # Printer Service
///
/// One service per printer. Holds the configured endpoint and the
/// connection state the last probe observed; all printing goes through
/// the [`Transport`] it was built with.
///
/// ## Example
///
/// ```no_run
/// use etiqueta::label::{LabelContent, ProductFacet};
/// use etiqueta::printer::{PrinterEndpoint, PrinterService};
///
/// let mut service = PrinterService::new(PrinterEndpoint::new("192.168.1.50"));
/// service.initialize();
///
/// let content = LabelContent::single(ProductFacet::new("ABC123", Some("Product 1")));
/// let outcome = service.print_barcode_label(&content, 2);
/// println!("{}", outcome.message);
/// ```
pub struct PrinterService<T: Transport = TcpTransport> {
    endpoint: PrinterEndpoint,
    transport: T,
    state: ConnectionState,
    initialized: bool,
    last_checked: Option<DateTime<Utc>>,
    copy_delay: Duration,
}

impl PrinterService<TcpTransport> {
    /// A service over TCP with the default retry policy.
    pub fn new(endpoint: PrinterEndpoint) -> Self {
        Self::with_transport(endpoint, TcpTransport::new(RetryPolicy::default()))
    }

    /// A service over TCP with a custom retry policy.
    pub fn with_policy(endpoint: PrinterEndpoint, policy: RetryPolicy) -> Self {
        Self::with_transport(endpoint, TcpTransport::new(policy))
    }
}

impl<T: Transport> PrinterService<T> {
    /// A service over any transport. Tests substitute a scripted mock.
    pub fn with_transport(endpoint: PrinterEndpoint, transport: T) -> Self {
        Self {
            endpoint,
            transport,
            state: ConnectionState::Disconnected,
            initialized: false,
            last_checked: None,
            copy_delay: Duration::from_millis(INTER_COPY_DELAY_MS),
        }
    }

    /// The connection state the last probe observed.
    pub fn connection_state(&self) -> ConnectionState {
        self.state
    }

    /// The configured endpoint.
    pub fn endpoint(&self) -> &PrinterEndpoint {
        &self.endpoint
    }

    /// Access the underlying transport (test inspection).
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Shorten the inter-copy delay. Mainly for tests.
    pub fn set_copy_delay(&mut self, delay: Duration) {
        self.copy_delay = delay;
    }

    /// Probe the configured endpoint once and record the result.
    ///
    /// Never returns an error: a failed probe is a `success: false`
    /// report with the classified cause in the message.
    pub fn initialize(&mut self) -> ProbeReport {
        if let Err(e) = self.endpoint.validate() {
            self.state = ConnectionState::Disconnected;
            return ProbeReport {
                success: false,
                message: e.to_string(),
            };
        }

        self.initialized = true;
        match self.run_probe() {
            Ok(()) => ProbeReport {
                success: true,
                message: format!("Printer at {} is reachable", self.endpoint.addr()),
            },
            Err(e) => ProbeReport {
                success: false,
                message: describe_failure(&e),
            },
        }
    }

    /// Re-probe the printer, initializing first if needed. Always
    /// refreshes the connection state and the last-checked timestamp.
    pub fn test_connection(&mut self) -> ConnectionReport {
        if !self.initialized {
            let report = self.initialize();
            return ConnectionReport {
                is_connected: self.state == ConnectionState::Connected,
                host: self.endpoint.host.clone(),
                port: self.endpoint.port,
                error_message: (!report.success).then_some(report.message),
            };
        }

        let error_message = self.run_probe().err().map(|e| describe_failure(&e));
        ConnectionReport {
            is_connected: self.state == ConnectionState::Connected,
            host: self.endpoint.host.clone(),
            port: self.endpoint.port,
            error_message,
        }
    }

    /// Print `quantity` copies of a single- or dual-layout label.
    ///
    /// Copies are sent strictly in order, one compose+send per copy,
    /// with a settle delay between them. A failure on copy *i* aborts
    /// the remaining copies and reports partial progress.
    pub fn print_barcode_label(&mut self, content: &LabelContent, quantity: u32) -> PrintOutcome {
        if quantity == 0 {
            return PrintOutcome::failure("quantity must be at least 1".into(), None);
        }

        // All validation happens before any socket is opened.
        let program = match self.preflight(content).and_then(|()| label::compose(content)) {
            Ok(program) => program,
            Err(e) => return PrintOutcome::failure(e.to_string(), None),
        };
        if let Err(e) = self.ensure_connected() {
            return PrintOutcome::failure(describe_failure(&e), None);
        }

        let bytes = program.to_bytes();
        let barcodes_per_label = content.barcode_count();
        let mut bytes_received = 0usize;

        for copy in 0..quantity {
            match self.transport.send(&self.endpoint, &bytes) {
                Ok(receipt) => bytes_received += receipt.bytes_received,
                Err(e) => {
                    log::warn!(
                        "print aborted on copy {}/{} to {}: {e}",
                        copy + 1,
                        quantity,
                        self.endpoint.addr()
                    );
                    return PrintOutcome::failure(
                        format!(
                            "Printed {copy} of {quantity} labels before a failure: {}",
                            describe_failure(&e)
                        ),
                        Some(PrintData {
                            labels_printed: copy,
                            barcodes_printed: copy * barcodes_per_label,
                            bytes_received,
                        }),
                    );
                }
            }
            if copy + 1 < quantity {
                thread::sleep(self.copy_delay);
            }
        }

        PrintOutcome {
            success: true,
            message: format!(
                "Printed {quantity} labels with {} barcode(s)",
                quantity * barcodes_per_label
            ),
            data: Some(PrintData {
                labels_printed: quantity,
                barcodes_printed: quantity * barcodes_per_label,
                bytes_received,
            }),
        }
    }

    /// Print `quantity` copies of one barcode, two per row, as raster
    /// rows.
    ///
    /// The barcode images are rendered once for the whole batch, then
    /// every row reuses them. Rows are sent strictly in order with a
    /// single cut after the last; a row failure aborts the rest.
    pub fn print_horizontal_barcodes(
        &mut self,
        content: &LabelContent,
        quantity: u32,
    ) -> PrintOutcome {
        let rows = match self.preflight(content).and_then(|()| {
            let code = content.primary.code.trim();
            let rasters = HorizontalRasters::render(code, quantity)?;
            label::compose_horizontal_rows(content, quantity, &rasters)
        }) {
            Ok(rows) => rows,
            Err(e) => return PrintOutcome::failure(e.to_string(), None),
        };
        if let Err(e) = self.ensure_connected() {
            return PrintOutcome::failure(describe_failure(&e), None);
        }

        // Rows go out strictly in order; a failure aborts the rest of
        // the batch. No inter-row delay: there is no cut until the
        // final row, and the chunked writes already pace the rasters.
        let mut barcodes_sent = 0u32;
        let mut bytes_received = 0usize;
        for (i, row) in rows.iter().enumerate() {
            match self.transport.send(&self.endpoint, &row.to_bytes()) {
                Ok(receipt) => {
                    bytes_received += receipt.bytes_received;
                    barcodes_sent = (barcodes_sent + 2).min(quantity);
                }
                Err(e) => {
                    log::warn!(
                        "horizontal batch aborted on row {}/{} to {}: {e}",
                        i + 1,
                        rows.len(),
                        self.endpoint.addr()
                    );
                    return PrintOutcome::failure(
                        format!(
                            "Printed {barcodes_sent} of {quantity} barcodes before a failure: {}",
                            describe_failure(&e)
                        ),
                        Some(PrintData {
                            labels_printed: barcodes_sent,
                            barcodes_printed: barcodes_sent,
                            bytes_received,
                        }),
                    );
                }
            }
        }

        PrintOutcome {
            success: true,
            message: format!("Printed {quantity} barcode(s) in {} row(s)", rows.len()),
            data: Some(PrintData {
                labels_printed: quantity,
                barcodes_printed: quantity,
                bytes_received,
            }),
        }
    }

    /// Current connection state and endpoint, without probing.
    pub fn status(&self) -> StatusReport {
        let is_connected = self.state == ConnectionState::Connected;
        StatusReport {
            is_connected,
            host: self.endpoint.host.clone(),
            port: self.endpoint.port,
            status: if is_connected {
                PrinterStatus::Online
            } else {
                PrinterStatus::Offline
            },
            last_checked: self.last_checked,
        }
    }

    /// Replace the configuration. Forces `Disconnected`; the next
    /// operation re-probes the new endpoint (no implicit reconnect).
    pub fn update_config(&mut self, endpoint: PrinterEndpoint) {
        self.endpoint = endpoint;
        self.state = ConnectionState::Disconnected;
        self.initialized = false;
    }

    /// Clear the held connection state. Idempotent; succeeds even when
    /// nothing was connected. Does not abort an attempt in flight.
    pub fn disconnect(&mut self) -> ProbeReport {
        self.state = ConnectionState::Disconnected;
        ProbeReport {
            success: true,
            message: "Disconnected".into(),
        }
    }

    /// Validation shared by both print entry points: endpoint syntax
    /// and label preconditions, checked before any socket I/O.
    fn preflight(&self, content: &LabelContent) -> Result<(), PrintError> {
        self.endpoint.validate()?;
        content.validate()
    }

    /// Probe and record state + timestamp.
    fn run_probe(&mut self) -> Result<(), PrintError> {
        self.state = ConnectionState::Testing;
        let result = self.transport.probe(&self.endpoint);
        self.state = match result {
            Ok(()) => ConnectionState::Connected,
            Err(_) => ConnectionState::Disconnected,
        };
        self.last_checked = Some(Utc::now());
        result
    }

    /// Fail fast if the printer is not reachable, re-testing once if
    /// the held state is stale.
    fn ensure_connected(&mut self) -> Result<(), PrintError> {
        if !self.initialized || self.state != ConnectionState::Connected {
            self.run_probe()?;
            self.initialized = true;
        }
        Ok(())
    }
}

/// Render a connectivity failure for the boundary: the classified cause
/// plus the remediation checklist.
fn describe_failure(e: &PrintError) -> String {
    match e.remediation() {
        Some(remedy) => format!("{e}. {remedy}"),
        None => e.to_string(),
    }
}

// ============================================================================
// TESTS
// ============================================================================
