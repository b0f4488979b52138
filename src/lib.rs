//! # Etiqueta - Network Label Printer Library
//!
//! Etiqueta is a Rust library for printing barcode labels on ESC/POS
//! thermal printers over the network (raw socket, port 9100). It
//! provides:
//!
//! - **Protocol implementation**: ESC/POS command builders
//! - **Label composition**: pure, deterministic layouts (single, dual,
//!   horizontal multi-copy)
//! - **Transport**: TCP with bounded retry-with-backoff
//! - **Orchestration**: a printer service with connection state and
//!   boundary-friendly result descriptors
//!
//! ## Quick Start
//!
//! ```no_run
//! use etiqueta::{
//!     label::{LabelContent, ProductFacet},
//!     printer::{PrinterEndpoint, PrinterService},
//! };
//!
//! // Configure and probe the printer
//! let mut service = PrinterService::new(PrinterEndpoint::new("192.168.1.50"));
//! let report = service.initialize();
//! println!("{}", report.message);
//!
//! // Print two copies of a dual side-by-side label
//! let content = LabelContent::dual(
//!     ProductFacet::new("ABC123", Some("Product 1")),
//!     ProductFacet::new("DEF456", Some("Product 2")),
//! );
//! let outcome = service.print_barcode_label(&content, 2);
//! println!("{}", outcome.message);
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`protocol`] | ESC/POS command builders |
//! | [`ir`] | Printer-op intermediate representation and codegen |
//! | [`label`] | Layout composition and text sanitization |
//! | [`transport`] | Communication backends |
//! | [`printer`] | Configuration and the print orchestrator |
//! | [`error`] | Error taxonomy and retry classification |

pub mod error;
pub mod ir;
pub mod label;
pub mod printer;
pub mod protocol;
pub mod transport;

// Re-exports for convenience
pub use error::PrintError;
pub use label::{LabelContent, ProductFacet};
pub use printer::{PrinterEndpoint, PrinterService, RetryPolicy};
pub use transport::TcpTransport;
