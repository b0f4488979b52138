//! # Horizontal Multi-Copy Layout
//!
//! Prints N copies of one barcode, two per row, as raster images. The
//! native barcode command prints at most one symbol per line with
//! firmware-controlled spacing, so this layout pre-renders the barcodes
//! (see [`raster`](super::raster)) and ships them as bit images instead.
//!
//! Row structure:
//!
//! ```text
//! |      SANITIZED PRODUCT NAME       |  centered across the row
//! | |||||||||||||    ||||||||||||||  |  pair raster
//! |      SANITIZED PRODUCT NAME       |
//! | |||||||||||||    ||||||||||||||  |
//! | SANITIZED PRODUCT NAME            |  odd final row: left-aligned
//! | |||||||||||||                    |  single raster
//! ```
//!
//! Name text on this path goes through [`fold_ascii`] rather than the
//! ellipsis truncation of the text layouts: clipped with no `"..."`
//! marker, accents folded to base letters, anything else replaced by
//! `?`. The two sanitization strategies are deliberately distinct.

use image::GrayImage;

use crate::error::PrintError;
use crate::ir::{Op, Program};
use crate::protocol::graphics::pack_image;
use crate::protocol::text::Alignment;

use super::content::LabelContent;
use super::raster::{render_pair, render_single};
use super::sanitize::{clip_chars, fold_ascii};

/// Max name characters above a two-barcode row.
const PAIR_NAME_MAX: usize = 55;

/// Max name characters above a single-barcode (odd final) row.
const SINGLE_NAME_MAX: usize = 52;

/// Blank lines fed after the last row, before the cut.
const TRAILING_FEED_LINES: u8 = 3;

/// The barcode images for one horizontal batch, rendered once up front.
///
/// Rendering is the expensive step; a batch of any size reuses the same
/// pair image for every full row, which also makes all full rows
/// byte-identical after packing.
pub struct HorizontalRasters {
    pair: Option<GrayImage>,
    single: Option<GrayImage>,
}

impl HorizontalRasters {
    /// Render the images a batch of `quantity` copies will need: a pair
    /// image when any full row exists, a single image when the count is
    /// odd.
    pub fn render(code: &str, quantity: u32) -> Result<Self, PrintError> {
        let pair = if quantity >= 2 {
            Some(render_pair(code)?)
        } else {
            None
        };
        let single = if quantity % 2 == 1 {
            Some(render_single(code)?)
        } else {
            None
        };
        Ok(Self { pair, single })
    }
}

/// Compose the rows of a horizontal batch: `ceil(quantity / 2)` programs,
/// one per printed row, in print order.
///
/// The last row carries the trailing feed and the cut; earlier rows end
/// after their raster so the batch prints as one continuous label.
pub fn compose_horizontal_rows(
    content: &LabelContent,
    quantity: u32,
    rasters: &HorizontalRasters,
) -> Result<Vec<Program>, PrintError> {
    content.validate()?;
    if quantity == 0 {
        return Err(PrintError::Compose("quantity must be at least 1".into()));
    }

    let full_rows = quantity / 2;
    let has_odd_row = quantity % 2 == 1;
    let row_count = full_rows + has_odd_row as u32;
    let name = content.primary.display_name();

    let mut rows = Vec::with_capacity(row_count as usize);

    for _ in 0..full_rows {
        let pair = rasters.pair.as_ref().ok_or_else(|| {
            PrintError::Compose("pair raster missing for a full row".into())
        })?;
        rows.push(compose_row(name, pair, Alignment::Center, PAIR_NAME_MAX));
    }
    if has_odd_row {
        let single = rasters.single.as_ref().ok_or_else(|| {
            PrintError::Compose("single raster missing for an odd row".into())
        })?;
        rows.push(compose_row(name, single, Alignment::Left, SINGLE_NAME_MAX));
    }

    if let Some(last) = rows.last_mut() {
        last.push(Op::Feed {
            lines: TRAILING_FEED_LINES,
        });
        last.push(Op::Cut { partial: false });
    }

    Ok(rows)
}

fn compose_row(
    name: Option<&str>,
    img: &GrayImage,
    alignment: Alignment,
    name_max: usize,
) -> Program {
    let mut row = Program::with_init();
    row.push(Op::SetAlign(alignment));

    if let Some(name) = name {
        row.push(Op::Text(clip_chars(&fold_ascii(name), name_max)));
        row.push(Op::Newline);
    }

    let (width_bytes, height, data) = pack_image(img);
    row.push(Op::Raster {
        width_bytes,
        height,
        data,
    });
    row.push(Op::Newline);

    row
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::label::ProductFacet;
    use pretty_assertions::assert_eq;

    fn content(code: &str, name: Option<&str>) -> LabelContent {
        LabelContent::single(ProductFacet::new(code, name))
    }

    fn rows_for(code: &str, name: Option<&str>, quantity: u32) -> Vec<Program> {
        let rasters = HorizontalRasters::render(code, quantity).unwrap();
        compose_horizontal_rows(&content(code, name), quantity, &rasters).unwrap()
    }

    #[test]
    fn test_row_count_is_half_rounded_up() {
        assert_eq!(rows_for("ABC", None, 1).len(), 1);
        assert_eq!(rows_for("ABC", None, 2).len(), 1);
        assert_eq!(rows_for("ABC", None, 3).len(), 2);
        assert_eq!(rows_for("ABC", None, 4).len(), 2);
        assert_eq!(rows_for("ABC", None, 5).len(), 3);
    }

    #[test]
    fn test_zero_quantity_rejected() {
        let rasters = HorizontalRasters::render("ABC", 2).unwrap();
        let err = compose_horizontal_rows(&content("ABC", None), 0, &rasters).unwrap_err();
        assert!(matches!(err, PrintError::Compose(_)));
    }

    #[test]
    fn test_missing_code_rejected() {
        let rasters = HorizontalRasters::render("ABC", 1).unwrap();
        let err = compose_horizontal_rows(&content("  ", None), 1, &rasters).unwrap_err();
        assert!(matches!(err, PrintError::Compose(_)));
    }

    #[test]
    fn test_full_rows_identical_odd_row_differs() {
        let rows = rows_for("ABC123", Some("Product"), 5);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].to_bytes(), rows[1].to_bytes());

        // Full rows center, odd row is left-aligned with the single raster
        assert_eq!(rows[0].ops[1], Op::SetAlign(Alignment::Center));
        assert_eq!(rows[2].ops[1], Op::SetAlign(Alignment::Left));
        assert_ne!(rows[1].to_bytes(), rows[2].to_bytes());
    }

    #[test]
    fn test_only_last_row_cuts() {
        let rows = rows_for("ABC123", None, 4);
        assert!(!rows[0].iter().any(|op| matches!(op, Op::Cut { .. })));
        assert_eq!(rows[1].ops.last(), Some(&Op::Cut { partial: false }));
        assert_eq!(
            rows[1].ops[rows[1].len() - 2],
            Op::Feed { lines: 3 }
        );
    }

    #[test]
    fn test_name_is_folded_and_clipped() {
        let long_name = format!("Cà phê {}", "x".repeat(60));
        let rows = rows_for("ABC", Some(&long_name), 2);
        let text = rows[0]
            .iter()
            .find_map(|op| match op {
                Op::Text(s) => Some(s.clone()),
                _ => None,
            })
            .unwrap();
        assert!(text.starts_with("Ca phe "));
        assert_eq!(text.chars().count(), 55);

        // Odd row clips tighter
        let rows = rows_for("ABC", Some(&long_name), 1);
        let text = rows[0]
            .iter()
            .find_map(|op| match op {
                Op::Text(s) => Some(s.clone()),
                _ => None,
            })
            .unwrap();
        assert_eq!(text.chars().count(), 52);
    }

    #[test]
    fn test_absent_name_skips_text_line() {
        let rows = rows_for("ABC123", None, 2);
        assert!(!rows[0].iter().any(|op| matches!(op, Op::Text(_))));
        assert!(rows[0].iter().any(|op| matches!(op, Op::Raster { .. })));
    }
}
