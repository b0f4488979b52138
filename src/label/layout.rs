//! # Single and Dual Label Layouts
//!
//! Composition rules for the two text-based layouts. Both are pure
//! functions from [`LabelContent`] to a [`Program`]; preconditions are
//! checked before any op is emitted.
//!
//! ## Single layout (secondary absent)
//!
//! ```text
//! |      PRODUCT NAME       |  bold, double height, centered
//! |                         |
//! |        ABC123           |  medium
//! |                         |
//! |     ||||||||||||||      |  Code128, large module, height 80
//! ```
//!
//! ## Dual layout (secondary present)
//!
//! ```text
//! |Product 1...        Product 2...        |  bold names, 20-char fields
//! |ABC123              DEF456              |  small font codes
//! ||||||||||          ||||||||||           |  two small barcodes
//! ```
//!
//! The dual barcode row emits both barcodes on the same logical row with
//! a fixed 10-space gap. The barcode command set has no absolute
//! horizontal positioning for this symbology, so the padding-based
//! alignment is an approximation of two columns, not a guarantee.

use crate::error::PrintError;
use crate::ir::{Op, Program};
use crate::protocol::barcode::{HriPosition, WidthClass};
use crate::protocol::text::{Alignment, Font};

use super::content::LabelContent;
use super::sanitize::{empty_field, pad_field, truncate_visible};

/// Max visible name characters on the single layout before `"..."`.
const SINGLE_NAME_MAX: usize = 18;

/// Max visible name characters per slot on the dual layout before `"..."`.
const DUAL_NAME_MAX: usize = 14;

/// Barcode height for the single layout, in dots.
const SINGLE_BARCODE_HEIGHT: u8 = 80;

/// Barcode height for the dual layout, in dots.
const DUAL_BARCODE_HEIGHT: u8 = 40;

/// Gap between the two dual-layout barcodes, in characters.
const DUAL_BARCODE_GAP: usize = 10;

/// Blank lines fed after the content, before the cut.
const TRAILING_FEED_LINES: u8 = 3;

/// Compose the layout selected by the content.
///
/// An absent `secondary` selects [`compose_single`]; a present one
/// selects [`compose_dual`].
pub fn compose(content: &LabelContent) -> Result<Program, PrintError> {
    if content.secondary.is_some() {
        compose_dual(content)
    } else {
        compose_single(content)
    }
}

/// Compose the single-label layout: centered, one large barcode.
pub fn compose_single(content: &LabelContent) -> Result<Program, PrintError> {
    content.validate()?;
    let primary = &content.primary;

    let mut program = Program::with_init();
    program.push(Op::SetAlign(Alignment::Center));

    if let Some(name) = primary.display_name() {
        program.push(Op::SetBold(true));
        program.push(Op::SetSize {
            width: 1,
            height: 2,
        });
        program.push(Op::Text(truncate_visible(name, SINGLE_NAME_MAX)));
        program.push(Op::Newline);
        program.push(Op::Newline);
        program.push(Op::SetBold(false));
    }

    // Code line; the code is guaranteed non-blank by validate()
    program.push(Op::SetSize {
        width: 1,
        height: 1,
    });
    program.push(Op::Text(primary.code.trim().to_string()));
    program.push(Op::Newline);
    program.push(Op::Newline);

    program.push(Op::Barcode {
        data: primary.code.trim().to_string(),
        width_class: WidthClass::Large,
        height: SINGLE_BARCODE_HEIGHT,
        hri: HriPosition::None,
    });

    program.push(Op::SetAlign(Alignment::Left));
    program.push(Op::Feed {
        lines: TRAILING_FEED_LINES,
    });
    program.push(Op::Cut { partial: false });

    Ok(program)
}

/// Compose the dual side-by-side layout.
///
/// Requires a present secondary facet; both codes must be non-blank.
pub fn compose_dual(content: &LabelContent) -> Result<Program, PrintError> {
    content.validate()?;
    let Some(secondary) = &content.secondary else {
        return Err(PrintError::Compose(
            "dual layout requires a secondary product".into(),
        ));
    };
    let primary = &content.primary;

    let mut program = Program::with_init();
    program.push(Op::SetAlign(Alignment::Left));

    // Row 1: names, bold, fixed 20-char fields
    for facet in [primary, secondary] {
        match facet.display_name() {
            Some(name) => {
                program.push(Op::SetBold(true));
                program.push(Op::Text(pad_field(&truncate_visible(
                    name,
                    DUAL_NAME_MAX,
                ))));
                program.push(Op::SetBold(false));
            }
            None => program.push(Op::Text(empty_field())),
        }
    }
    program.push(Op::Newline);

    // Row 2: codes, small font, same field convention
    program.push(Op::SetFont(Font::B));
    program.push(Op::Text(pad_field(primary.code.trim())));
    program.push(Op::Text(pad_field(secondary.code.trim())));
    program.push(Op::Newline);
    program.push(Op::SetFont(Font::A));

    // Row 3: both barcodes on one logical row, gap-separated
    program.push(Op::Barcode {
        data: primary.code.trim().to_string(),
        width_class: WidthClass::Small,
        height: DUAL_BARCODE_HEIGHT,
        hri: HriPosition::None,
    });
    program.push(Op::Text(" ".repeat(DUAL_BARCODE_GAP)));
    program.push(Op::Barcode {
        data: secondary.code.trim().to_string(),
        width_class: WidthClass::Small,
        height: DUAL_BARCODE_HEIGHT,
        hri: HriPosition::None,
    });
    program.push(Op::Newline);

    program.push(Op::Feed {
        lines: TRAILING_FEED_LINES,
    });
    program.push(Op::Cut { partial: true });

    Ok(program)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::label::ProductFacet;
    use pretty_assertions::assert_eq;

    fn single(code: &str, name: Option<&str>) -> LabelContent {
        LabelContent::single(ProductFacet::new(code, name))
    }

    fn dual(primary: (&str, Option<&str>), secondary: (&str, Option<&str>)) -> LabelContent {
        LabelContent::dual(
            ProductFacet::new(primary.0, primary.1),
            ProductFacet::new(secondary.0, secondary.1),
        )
    }

    fn texts(program: &Program) -> Vec<&str> {
        program
            .iter()
            .filter_map(|op| match op {
                Op::Text(s) => Some(s.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_single_missing_code_emits_nothing() {
        let err = compose_single(&single("", Some("Widget"))).unwrap_err();
        assert!(matches!(err, PrintError::Compose(_)));
    }

    #[test]
    fn test_single_layout_shape() {
        let program = compose_single(&single("ABC123", Some("Product 1"))).unwrap();

        assert_eq!(program.ops[0], Op::Init);
        assert_eq!(program.ops[1], Op::SetAlign(Alignment::Center));
        assert!(program.iter().any(|op| matches!(
            op,
            Op::Barcode {
                width_class: WidthClass::Large,
                height: 80,
                hri: HriPosition::None,
                ..
            }
        )));
        // Ends with left reset, feed, full cut
        let n = program.len();
        assert_eq!(program.ops[n - 3], Op::SetAlign(Alignment::Left));
        assert_eq!(program.ops[n - 2], Op::Feed { lines: 3 });
        assert_eq!(program.ops[n - 1], Op::Cut { partial: false });
    }

    #[test]
    fn test_single_layout_without_name_skips_name_block() {
        let program = compose_single(&single("ABC123", None)).unwrap();
        assert!(!program.iter().any(|op| matches!(op, Op::SetBold(true))));
        assert_eq!(texts(&program), vec!["ABC123"]);
    }

    #[test]
    fn test_single_name_at_limit_not_truncated() {
        let name = "123456789012345678"; // exactly 18
        let program = compose_single(&single("C", Some(name))).unwrap();
        assert_eq!(texts(&program)[0], name);
    }

    #[test]
    fn test_single_name_over_limit_truncated() {
        let name = "1234567890123456789"; // 19
        let program = compose_single(&single("C", Some(name))).unwrap();
        assert_eq!(texts(&program)[0], "123456789012345678...");
    }

    #[test]
    fn test_dual_layout_field_widths_invariant() {
        let program = compose_dual(&dual(
            ("ABC123", Some("A very long product name")),
            ("DEF456", None),
        ))
        .unwrap();

        let texts = texts(&program);
        // Name row: truncated+padded primary, 20 spaces for absent secondary
        assert_eq!(texts[0].chars().count(), 20);
        assert_eq!(texts[0], "A very long pr...   ");
        assert_eq!(texts[1], " ".repeat(20));
        // Code row: both padded to 20
        assert_eq!(texts[2], "ABC123              ");
        assert_eq!(texts[3], "DEF456              ");
    }

    #[test]
    fn test_dual_layout_barcode_row() {
        let program = compose_dual(&dual(("ABC123", None), ("DEF456", None))).unwrap();

        let barcodes: Vec<_> = program
            .iter()
            .filter_map(|op| match op {
                Op::Barcode { data, width_class, height, .. } => {
                    Some((data.as_str(), *width_class, *height))
                }
                _ => None,
            })
            .collect();
        assert_eq!(
            barcodes,
            vec![
                ("ABC123", WidthClass::Small, 40),
                ("DEF456", WidthClass::Small, 40),
            ]
        );

        // Gap between the two barcodes is exactly 10 spaces
        let gap = program
            .iter()
            .filter_map(|op| match op {
                Op::Text(s) if s.chars().all(|c| c == ' ') && s.len() == 10 => Some(s),
                _ => None,
            })
            .count();
        assert_eq!(gap, 1);
    }

    #[test]
    fn test_dual_layout_ends_with_partial_cut() {
        let program = compose_dual(&dual(("A", None), ("B", None))).unwrap();
        assert_eq!(program.ops.last(), Some(&Op::Cut { partial: true }));
    }

    #[test]
    fn test_compose_dispatches_on_secondary() {
        let s = compose(&single("A", None)).unwrap();
        assert_eq!(s.ops.last(), Some(&Op::Cut { partial: false }));

        let d = compose(&dual(("A", None), ("B", None))).unwrap();
        assert_eq!(d.ops.last(), Some(&Op::Cut { partial: true }));
    }

    #[test]
    fn test_compose_is_deterministic() {
        let content = dual(("ABC123", Some("Product 1")), ("DEF456", Some("Product 2")));
        let a = compose(&content).unwrap().to_bytes();
        let b = compose(&content).unwrap().to_bytes();
        assert_eq!(a, b);
    }
}
