//! # ESC/POS Protocol Implementation
//!
//! This module provides low-level command builders for the ESC/POS
//! protocol spoken by networked thermal label printers (XPrinter, Gprinter,
//! Epson TM series, and compatibles listening on raw port 9100).
//!
//! ## Module Structure
//!
//! - [`commands`]: Basic printer commands (init, cut, feed, newline)
//! - [`text`]: Text styling (alignment, bold, character size, font)
//! - [`barcode`]: 1D barcode commands (Code128 and setup parameters)
//! - [`graphics`]: Raster bit-image command and 1bpp packing
//!
//! ## Usage Example
//!
//! ```
//! use etiqueta::protocol::{barcode, commands, text};
//! use etiqueta::protocol::text::Alignment;
//!
//! // Build a minimal label by hand
//! let mut data = Vec::new();
//! data.extend(commands::init());
//! data.extend(text::align(Alignment::Center));
//! data.extend(b"SKU-1001");
//! data.extend(commands::newline());
//! data.extend(barcode::height(80));
//! data.extend(barcode::code128("SKU-1001"));
//! data.extend(commands::cut_full());
//!
//! // Send `data` to the printer via transport...
//! ```
//!
//! Higher layers should not build byte streams by hand: the
//! [`ir`](crate::ir) module provides an inspectable command-stream
//! representation and the [`label`](crate::label) module composes the
//! supported layouts.
//!
//! ## Protocol Reference
//!
//! Based on the Epson "ESC/POS Application Programming Guide"; the subset
//! used here is implemented identically by the label printer clones this
//! library targets.

pub mod barcode;
pub mod commands;
pub mod graphics;
pub mod text;
