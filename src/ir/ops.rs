//! # IR Opcodes
//!
//! This module defines the intermediate representation for label
//! printing: one opcode per primitive printer operation. A composed
//! label is an ordered sequence of these ops with no further semantic
//! structure; once built, it is serialized byte-for-byte and sent to
//! the printer.

use crate::protocol::barcode::{HriPosition, WidthClass};
use crate::protocol::text::{Alignment, Font};

/// IR opcodes.
///
/// Each variant represents a single atomic operation. The IR can be:
/// - Inspected for debugging (`{:#?}`)
/// - Asserted on in layout tests
/// - Compiled to ESC/POS bytes via [`Program::to_bytes`]
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    // ========== Printer Control ==========
    /// Initialize printer (ESC @). Resets to default state.
    Init,

    /// Cut paper. `partial: true` leaves a small hinge.
    Cut { partial: bool },

    /// Print and feed `lines` blank lines (ESC d n).
    Feed { lines: u8 },

    // ========== Style Changes ==========
    /// Set text alignment. Also applies to barcodes and rasters.
    SetAlign(Alignment),

    /// Enable/disable bold.
    SetBold(bool),

    /// Set character size magnification (GS ! n). Each axis 1..=8.
    SetSize { width: u8, height: u8 },

    /// Select font A or B (ESC M n).
    SetFont(Font),

    // ========== Content ==========
    /// Raw text (no trailing newline).
    Text(String),

    /// Line feed (newline).
    Newline,

    /// Code128 barcode drawn by the printer's native barcode engine.
    Barcode {
        data: String,
        width_class: WidthClass,
        height: u8,
        hri: HriPosition,
    },

    /// Pre-rendered raster image (GS v 0). Data is 1bpp row-major,
    /// `data.len() == width_bytes * height`.
    Raster {
        width_bytes: u16,
        height: u16,
        data: Vec<u8>,
    },
}

/// A composed command stream.
///
/// An ordered sequence of ops that compiles to the exact bytes sent to
/// the printer. Composition is pure: the same content always produces
/// the same program and therefore the same bytes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    pub ops: Vec<Op>,
}

impl Program {
    /// Create an empty program.
    pub fn new() -> Self {
        Self { ops: Vec::new() }
    }

    /// Create a program starting with an [`Op::Init`].
    pub fn with_init() -> Self {
        Self {
            ops: vec![Op::Init],
        }
    }

    /// Add an op to the program.
    pub fn push(&mut self, op: Op) {
        self.ops.push(op);
    }

    /// Add multiple ops to the program.
    pub fn extend(&mut self, ops: impl IntoIterator<Item = Op>) {
        self.ops.extend(ops);
    }

    /// Get the number of ops in the program.
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Check if the program is empty.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Iterate over ops.
    pub fn iter(&self) -> impl Iterator<Item = &Op> {
        self.ops.iter()
    }
}

impl FromIterator<Op> for Program {
    fn from_iter<T: IntoIterator<Item = Op>>(iter: T) -> Self {
        Self {
            ops: iter.into_iter().collect(),
        }
    }
}
