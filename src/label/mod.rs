//! # Label Layout Composer
//!
//! This module turns a [`LabelContent`] description into an inspectable,
//! deterministic command stream ([`Program`](crate::ir::Program)) for one
//! of the supported label layouts:
//!
//! | Layout | Selected by | Shape |
//! |--------|-------------|-------|
//! | Single | `secondary` absent | Centered name + code + one large barcode |
//! | Dual | `secondary` present | Two side-by-side name/code/barcode columns |
//! | Horizontal | explicit call | N copies of one barcode, two per row, raster-rendered |
//!
//! Composition is pure: no I/O, no clock, no hidden state. The same
//! content always composes to byte-identical streams.
//!
//! ## Example
//!
//! ```
//! use etiqueta::label::{compose, LabelContent, ProductFacet};
//!
//! let content = LabelContent {
//!     primary: ProductFacet::new("ABC123", Some("Product 1")),
//!     secondary: None,
//! };
//! let program = compose(&content).unwrap();
//! let bytes = program.to_bytes();
//! assert!(!bytes.is_empty());
//! ```

mod content;
mod horizontal;
mod layout;
pub mod raster;
pub mod sanitize;

pub use content::{LabelContent, ProductFacet};
pub use horizontal::{HorizontalRasters, compose_horizontal_rows};
pub use layout::{compose, compose_dual, compose_single};
