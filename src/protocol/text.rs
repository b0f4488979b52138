//! # ESC/POS Text Styling Commands
//!
//! This module implements the text formatting subset used by label layouts.
//!
//! | Style | Command | Effect |
//! |-------|---------|--------|
//! | Alignment | ESC a n | Left / center / right |
//! | Bold | ESC E n | Emphasized text |
//! | Character size | GS ! n | 1x-8x width/height magnification |
//! | Font | ESC M n | Font A (12x24) or Font B (9x17) |
//!
//! ## Text Alignment
//!
//! ```text
//! Left aligned (default)    |LEFT TEXT
//! Center aligned            |  CENTER TEXT
//! Right aligned             |      RIGHT TEXT
//! ```

use super::commands::{ESC, GS};

// ============================================================================
// TEXT ALIGNMENT
// ============================================================================

/// Text alignment options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left = 0,
    Center = 1,
    Right = 2,
}

/// # Set Text Alignment (ESC a n)
///
/// Sets the alignment for subsequent lines.
///
/// ## Protocol Details
///
/// | Format  | Bytes   |
/// |---------|---------|
/// | ASCII   | ESC a n |
/// | Hex     | 1B 61 n |
/// | Decimal | 27 97 n |
///
/// ## Parameters
///
/// - `n = 0`: Left alignment (default)
/// - `n = 1`: Center alignment
/// - `n = 2`: Right alignment
///
/// ## Behavior
///
/// - Affects all subsequent lines until changed
/// - Also applies to barcodes and raster images
/// - Reset by ESC @ (initialize)
///
/// ## Example
///
/// ```
/// use etiqueta::protocol::text::{align, Alignment};
///
/// assert_eq!(align(Alignment::Center), vec![0x1B, 0x61, 0x01]);
/// ```
pub fn align(alignment: Alignment) -> Vec<u8> {
    vec![ESC, b'a', alignment as u8]
}

// ============================================================================
// TEXT EMPHASIS (BOLD)
// ============================================================================

/// # Set Emphasis (ESC E n)
///
/// Enables or disables emphasized (bold) printing.
///
/// ## Protocol Details
///
/// | Format  | Bytes   |
/// |---------|---------|
/// | ASCII   | ESC E n |
/// | Hex     | 1B 45 n |
/// | Decimal | 27 69 n |
///
/// ## Example
///
/// ```
/// use etiqueta::protocol::text::bold;
///
/// let mut data = Vec::new();
/// data.extend(bold(true));
/// data.extend(b"PRODUCT NAME");
/// data.extend(bold(false));
/// ```
#[inline]
pub fn bold(on: bool) -> Vec<u8> {
    vec![ESC, b'E', on as u8]
}

// ============================================================================
// CHARACTER SIZE
// ============================================================================

/// # Set Character Size (GS ! n)
///
/// Sets the width and height magnification for subsequent text.
///
/// ## Protocol Details
///
/// | Format  | Bytes  |
/// |---------|--------|
/// | ASCII   | GS ! n |
/// | Hex     | 1D 21 n |
/// | Decimal | 29 33 n |
///
/// ## Parameter Encoding
///
/// `n` packs both magnifications into one byte:
///
/// ```text
/// n = (width_mag - 1) << 4 | (height_mag - 1)
///
/// 1x1 (normal)        → 0x00
/// 1x2 (double height) → 0x01
/// 2x1 (double width)  → 0x10
/// 2x2                 → 0x11
/// ```
///
/// Magnifications are clamped to 1..=8.
///
/// ## Example
///
/// ```
/// use etiqueta::protocol::text::size;
///
/// assert_eq!(size(1, 1), vec![0x1D, 0x21, 0x00]);
/// assert_eq!(size(1, 2), vec![0x1D, 0x21, 0x01]);
/// assert_eq!(size(2, 2), vec![0x1D, 0x21, 0x11]);
/// ```
pub fn size(width_mag: u8, height_mag: u8) -> Vec<u8> {
    let w = width_mag.clamp(1, 8) - 1;
    let h = height_mag.clamp(1, 8) - 1;
    vec![GS, b'!', (w << 4) | h]
}

// ============================================================================
// FONT SELECTION
// ============================================================================

/// Available fonts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Font {
    /// Font A: 12x24 dots. The default body font.
    #[default]
    A = 0,
    /// Font B: 9x17 dots. Compact; used for the dual-layout code row.
    B = 1,
}

/// # Select Font (ESC M n)
///
/// Selects the character font for subsequent text.
///
/// ## Protocol Details
///
/// | Format  | Bytes    |
/// |---------|----------|
/// | ASCII   | ESC M n  |
/// | Hex     | 1B 4D n  |
/// | Decimal | 27 77 n  |
///
/// ## Font Specifications
///
/// | Font | Char Size | Best For |
/// |------|-----------|----------|
/// | A | 12x24 dots | Names, codes |
/// | B | 9x17 dots | Fine print, dense rows |
///
/// ## Example
///
/// ```
/// use etiqueta::protocol::text::{font, Font};
///
/// assert_eq!(font(Font::B), vec![0x1B, 0x4D, 0x01]);
/// ```
pub fn font(f: Font) -> Vec<u8> {
    vec![ESC, b'M', f as u8]
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_align() {
        assert_eq!(align(Alignment::Left), vec![0x1B, 0x61, 0x00]);
        assert_eq!(align(Alignment::Center), vec![0x1B, 0x61, 0x01]);
        assert_eq!(align(Alignment::Right), vec![0x1B, 0x61, 0x02]);
    }

    #[test]
    fn test_bold() {
        assert_eq!(bold(true), vec![0x1B, 0x45, 0x01]);
        assert_eq!(bold(false), vec![0x1B, 0x45, 0x00]);
    }

    #[test]
    fn test_size_normal() {
        assert_eq!(size(1, 1), vec![0x1D, 0x21, 0x00]);
    }

    #[test]
    fn test_size_double_height() {
        assert_eq!(size(1, 2), vec![0x1D, 0x21, 0x01]);
    }

    #[test]
    fn test_size_double_both() {
        assert_eq!(size(2, 2), vec![0x1D, 0x21, 0x11]);
    }

    #[test]
    fn test_size_clamps() {
        // 0 clamps up to 1x, 9+ clamps down to 8x
        assert_eq!(size(0, 0), size(1, 1));
        assert_eq!(size(9, 9), size(8, 8));
        assert_eq!(size(8, 8), vec![0x1D, 0x21, 0x77]);
    }

    #[test]
    fn test_font() {
        assert_eq!(font(Font::A), vec![0x1B, 0x4D, 0x00]);
        assert_eq!(font(Font::B), vec![0x1B, 0x4D, 0x01]);
    }
}
