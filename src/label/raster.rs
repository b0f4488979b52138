//! # Barcode Raster Rendering
//!
//! Renders Code 128 barcodes into grayscale images for the horizontal
//! layout, which prints barcodes as raster graphics instead of with the
//! printer's native barcode command. Rastering sidesteps the firmware's
//! one-barcode-per-line restriction and makes two-per-row placement
//! exact to the dot.
//!
//! A pair image is built by blitting one rendered barcode twice, so the
//! two copies on a row are pixel-identical by construction.

use barcoders::sym::code128::Code128;
use image::{GrayImage, Luma};

use crate::error::PrintError;

/// Pixels per barcode module.
const MODULE_SCALE: u32 = 2;

/// Bar height in pixels (printer dots).
const BAR_HEIGHT: u32 = 80;

/// White margin on each side of a rendered barcode, in pixels.
///
/// Code 128 readers require a quiet zone of at least 10 modules.
const QUIET_ZONE: u32 = 20;

/// Horizontal gap between the two barcodes of a pair, in pixels.
const PAIR_GAP: u32 = 40;

const WHITE: Luma<u8> = Luma([255u8]);
const BLACK: Luma<u8> = Luma([0u8]);

/// Render one Code 128 barcode to a grayscale image.
///
/// Encodes in Character Set B (the widest printable-character coverage),
/// the same set the native barcode command selects. Returns a
/// [`PrintError::Compose`] if the data cannot be encoded.
pub fn render_code128(data: &str) -> Result<GrayImage, PrintError> {
    // barcoders selects the character set from a prefix code point:
    // U+0181 (Ɓ) = Character Set B.
    let prefixed = format!("\u{0181}{}", data);
    let barcode = Code128::new(&prefixed)
        .map_err(|e| PrintError::Compose(format!("cannot encode {:?} as Code 128: {}", data, e)))?;
    let modules = barcode.encode();

    let width = modules.len() as u32 * MODULE_SCALE + 2 * QUIET_ZONE;
    let mut img = GrayImage::from_pixel(width, BAR_HEIGHT, WHITE);

    for (i, &module) in modules.iter().enumerate() {
        if module != 1 {
            continue;
        }
        let x0 = QUIET_ZONE + i as u32 * MODULE_SCALE;
        for x in x0..x0 + MODULE_SCALE {
            for y in 0..BAR_HEIGHT {
                img.put_pixel(x, y, BLACK);
            }
        }
    }

    Ok(img)
}

/// Render a single-copy row image: one barcode, quiet zones included.
pub fn render_single(data: &str) -> Result<GrayImage, PrintError> {
    render_code128(data)
}

/// Render a pair row image: the same barcode twice, side by side.
///
/// Both halves are blits of one render, so every full row of a
/// horizontal batch is byte-identical after packing.
pub fn render_pair(data: &str) -> Result<GrayImage, PrintError> {
    let one = render_code128(data)?;
    let width = one.width() * 2 + PAIR_GAP;
    let mut img = GrayImage::from_pixel(width, one.height(), WHITE);

    for (x, y, pixel) in one.enumerate_pixels() {
        img.put_pixel(x, y, *pixel);
        img.put_pixel(x + one.width() + PAIR_GAP, y, *pixel);
    }

    Ok(img)
}
