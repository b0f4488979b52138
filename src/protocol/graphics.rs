//! # ESC/POS Raster Graphics
//!
//! This module implements the raster bit-image command used to print
//! pre-rendered barcode images, plus the 1bpp packing that turns a
//! grayscale image into printer-ready bytes.
//!
//! ## Bit Packing
//!
//! Raster data is packed as bytes where each bit represents one dot:
//! - Bit 7 (MSB) = leftmost dot
//! - Bit 0 (LSB) = rightmost dot
//! - 1 = black (print), 0 = white (no print)
//!
//! ```text
//! Byte value 0xF0 = 11110000 = ████░░░░
//! Byte value 0x0F = 00001111 = ░░░░████
//! Byte value 0xAA = 10101010 = █░█░█░█░
//! ```

use image::GrayImage;

use super::commands::{GS, u16_le};

/// Luminance below this value is printed black.
///
/// Barcode rasters are pure black-on-white so any midpoint works; 128
/// keeps anti-aliased text edges from speckling.
const BLACK_THRESHOLD: u8 = 128;

// ============================================================================
// RASTER BIT IMAGE (GS v 0)
// ============================================================================

/// # Print Raster Bit Image (GS v 0 m xL xH yL yH d1...dk)
///
/// Prints a raster image of arbitrary height at the current position,
/// honoring the current alignment.
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | GS v 0 m xL xH yL yH d1...dk |
/// | Hex     | 1D 76 30 m xL xH yL yH d1...dk |
/// | Decimal | 29 118 48 m xL xH yL yH d1...dk |
///
/// ## Parameters
///
/// - `m`: Mode (0 = normal, no scaling)
/// - `xL, xH`: Width in **bytes**, little-endian
/// - `yL, yH`: Height in **dots**, little-endian
/// - `d1...dk`: Image data, k = width_bytes × height bytes, row-major
///
/// ## Example
///
/// ```
/// use etiqueta::protocol::graphics;
///
/// // A 16-dot-wide (2 byte), 4-row black block
/// let data = vec![0xFF; 2 * 4];
/// let cmd = graphics::raster(2, 4, &data);
/// assert_eq!(&cmd[0..8], &[0x1D, 0x76, 0x30, 0, 2, 0, 4, 0]);
/// assert_eq!(cmd.len(), 8 + 2 * 4);
/// ```
pub fn raster(width_bytes: u16, height: u16, data: &[u8]) -> Vec<u8> {
    debug_assert!(
        data.len() == width_bytes as usize * height as usize,
        "Raster data must be exactly width_bytes * height bytes. Expected {}, got {}",
        width_bytes as usize * height as usize,
        data.len()
    );

    let mut cmd = Vec::with_capacity(8 + data.len());
    cmd.push(GS);
    cmd.push(b'v');
    cmd.push(b'0');
    cmd.push(0); // m: normal scale
    cmd.extend(u16_le(width_bytes));
    cmd.extend(u16_le(height));
    cmd.extend_from_slice(data);
    cmd
}

// ============================================================================
// IMAGE PACKING
// ============================================================================

/// Pack a grayscale image into 1bpp row-major raster data.
///
/// Returns `(width_bytes, height, data)` ready for [`raster`]. The image
/// width is padded up to the next whole byte; padding bits are white.
///
/// ## Example
///
/// ```
/// use etiqueta::protocol::graphics::pack_image;
/// use image::{GrayImage, Luma};
///
/// // 10 dots wide → 2 bytes per row, 6 padding bits
/// let mut img = GrayImage::from_pixel(10, 1, Luma([255u8]));
/// img.put_pixel(0, 0, Luma([0u8]));
/// let (width_bytes, height, data) = pack_image(&img);
/// assert_eq!((width_bytes, height), (2, 1));
/// assert_eq!(data, vec![0x80, 0x00]);
/// ```
pub fn pack_image(img: &GrayImage) -> (u16, u16, Vec<u8>) {
    let width = img.width() as usize;
    let height = img.height() as usize;
    let width_bytes = width.div_ceil(8);

    let mut data = vec![0u8; width_bytes * height];
    for (y, row) in img.rows().enumerate() {
        for (x, pixel) in row.enumerate() {
            if pixel.0[0] < BLACK_THRESHOLD {
                data[y * width_bytes + x / 8] |= 0x80 >> (x % 8);
            }
        }
    }

    (width_bytes as u16, height as u16, data)
}

/// Pack a grayscale image and wrap it in a raster print command.
pub fn raster_from_image(img: &GrayImage) -> Vec<u8> {
    let (width_bytes, height, data) = pack_image(img);
    raster(width_bytes, height, &data)
}

// ============================================================================
// TESTS
// ============================================================================
