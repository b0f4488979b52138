//! # Intermediate Representation (IR)
//!
//! This module provides the IR layer for label printing. The IR is the
//! "composed command stream" that sits between the layout composer and
//! raw ESC/POS bytes.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌──────────┐
//! │   Layouts   │ ──► │     IR      │ ──► │ Codegen  │
//! │ (label::*)  │     │  (Vec<Op>)  │     │ (bytes)  │
//! └─────────────┘     └─────────────┘     └──────────┘
//! ```
//!
//! ## Benefits of IR
//!
//! 1. **Inspectable**: Tests assert on ops instead of raw byte offsets
//! 2. **Deterministic**: Identical programs compile to identical bytes
//! 3. **Testable**: Layouts are verified without a printer attached
//!
//! ## Example
//!
//! ```
//! use etiqueta::ir::{Op, Program};
//! use etiqueta::protocol::text::Alignment;
//!
//! let mut program = Program::with_init();
//! program.push(Op::SetAlign(Alignment::Center));
//! program.push(Op::SetBold(true));
//! program.push(Op::Text("PRODUCT".into()));
//! program.push(Op::Newline);
//! program.push(Op::Cut { partial: false });
//!
//! let bytes = program.to_bytes();
//! assert_eq!(&bytes[0..2], &[0x1B, 0x40]); // ESC @
//! ```

mod codegen;
mod ops;

pub use ops::*;
