//! # ESC/POS Barcode Commands
//!
//! This module implements the 1D barcode subset used by label layouts.
//!
//! ## Barcode Printing Sequence
//!
//! A barcode is configured, then printed, with separate commands:
//!
//! 1. `GS h n` — bar height in dots
//! 2. `GS w n` — module (narrowest bar) width
//! 3. `GS H n` — HRI (human readable interpretation) position
//! 4. `GS k m len data` — print the barcode
//!
//! ```
//! use etiqueta::protocol::barcode::{self, WidthClass, HriPosition};
//!
//! let mut data = Vec::new();
//! data.extend(barcode::height(80));
//! data.extend(barcode::module_width(WidthClass::Large));
//! data.extend(barcode::hri_position(HriPosition::None));
//! data.extend(barcode::code128("SKU-1001"));
//! ```
//!
//! Only Code128 is emitted by the layout composer: it encodes full ASCII,
//! which the free-form product codes this library prints require.

use super::commands::GS;

// ============================================================================
// BARCODE SETUP PARAMETERS
// ============================================================================

/// Module width classes used by the layouts.
///
/// The label layouts only ever use two widths: `Small` for the dual
/// side-by-side layout (two barcodes must share the paper width) and
/// `Large` for the single centered layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum WidthClass {
    /// 2-dot module. Fits two barcodes side by side on 72mm paper.
    Small = 2,
    /// 3-dot module. Maximum reliable scan distance for a single barcode.
    Large = 3,
}

/// HRI (Human Readable Interpretation) position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HriPosition {
    /// No HRI text printed. The layouts print the code as a separate
    /// text line instead, so this is the only value they use.
    #[default]
    None = 0,
    /// HRI above barcode
    Above = 1,
    /// HRI below barcode
    Below = 2,
    /// HRI both above and below
    Both = 3,
}

/// # Set Barcode Height (GS h n)
///
/// Sets the bar height in dots for subsequent barcodes.
///
/// ## Protocol Details
///
/// | Format  | Bytes    |
/// |---------|----------|
/// | ASCII   | GS h n   |
/// | Hex     | 1D 68 n  |
/// | Decimal | 29 104 n |
///
/// ## Example
///
/// ```
/// use etiqueta::protocol::barcode;
///
/// assert_eq!(barcode::height(80), vec![0x1D, 0x68, 80]);
/// ```
#[inline]
pub fn height(dots: u8) -> Vec<u8> {
    vec![GS, b'h', dots]
}

/// # Set Barcode Module Width (GS w n)
///
/// Sets the width of the narrowest bar for subsequent barcodes.
///
/// ## Protocol Details
///
/// | Format  | Bytes    |
/// |---------|----------|
/// | ASCII   | GS w n   |
/// | Hex     | 1D 77 n  |
/// | Decimal | 29 119 n |
#[inline]
pub fn module_width(class: WidthClass) -> Vec<u8> {
    vec![GS, b'w', class as u8]
}

/// # Set HRI Position (GS H n)
///
/// Controls where the printer renders the barcode's text interpretation.
///
/// ## Protocol Details
///
/// | Format  | Bytes    |
/// |---------|----------|
/// | ASCII   | GS H n   |
/// | Hex     | 1D 48 n  |
/// | Decimal | 29 72 n  |
#[inline]
pub fn hri_position(position: HriPosition) -> Vec<u8> {
    vec![GS, b'H', position as u8]
}

// ============================================================================
// CODE128
// ============================================================================

/// Code128 symbology selector for `GS k` function 73.
const CODE128_SYMBOLOGY: u8 = 73;

/// # Print Code128 Barcode (GS k 73 n data)
///
/// Prints a Code128 barcode using the previously configured height,
/// module width, and HRI position.
///
/// ## Protocol Details
///
/// | Format  | Bytes                 |
/// |---------|-----------------------|
/// | ASCII   | GS k 73 n d1...dn     |
/// | Hex     | 1D 6B 49 n d1...dn    |
/// | Decimal | 29 107 73 n d1...dn   |
///
/// ## Code Set Prefix
///
/// ESC/POS Code128 data must begin with a code set selector. This
/// builder prepends `{B` (0x7B 0x42), selecting Code Set B: the full
/// printable ASCII range that product codes use. The prefix counts
/// toward the length byte `n`.
///
/// ## Length Limit
///
/// `n` is a single byte, so `data` is truncated to 253 characters
/// (255 minus the 2-byte prefix). Product codes are far shorter in
/// practice.
///
/// ## Example
///
/// ```
/// use etiqueta::protocol::barcode;
///
/// let cmd = barcode::code128("AB");
/// assert_eq!(cmd, vec![0x1D, 0x6B, 73, 4, 0x7B, 0x42, b'A', b'B']);
/// ```
pub fn code128(data: &str) -> Vec<u8> {
    let payload: &[u8] = data.as_bytes();
    let payload = &payload[..payload.len().min(253)];

    let mut cmd = Vec::with_capacity(6 + payload.len());
    cmd.push(GS);
    cmd.push(b'k');
    cmd.push(CODE128_SYMBOLOGY);
    cmd.push((payload.len() + 2) as u8);
    cmd.push(0x7B); // {
    cmd.push(0x42); // B -- Code Set B
    cmd.extend_from_slice(payload);
    cmd
}

// ============================================================================
// TESTS
// ============================================================================
