//! # Code Generation
//!
//! Converts IR programs to ESC/POS bytes.

use super::ops::{Op, Program};
use crate::protocol::{barcode, commands, graphics, text};

impl Program {
    /// Compile the program to ESC/POS bytes.
    ///
    /// Pure and deterministic: the same program always compiles to the
    /// same byte sequence.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::new();

        for op in &self.ops {
            match op {
                // ===== Printer Control =====
                Op::Init => {
                    out.extend(commands::init());
                }
                Op::Cut { partial } => {
                    if *partial {
                        out.extend(commands::cut_partial());
                    } else {
                        out.extend(commands::cut_full());
                    }
                }
                Op::Feed { lines } => {
                    out.extend(commands::feed_lines(*lines));
                }

                // ===== Style Changes =====
                Op::SetAlign(alignment) => {
                    out.extend(text::align(*alignment));
                }
                Op::SetBold(enabled) => {
                    out.extend(text::bold(*enabled));
                }
                Op::SetSize { width, height } => {
                    out.extend(text::size(*width, *height));
                }
                Op::SetFont(font) => {
                    out.extend(text::font(*font));
                }

                // ===== Content =====
                Op::Text(s) => {
                    out.extend(s.as_bytes());
                }
                Op::Newline => {
                    out.extend(commands::newline());
                }
                Op::Barcode {
                    data,
                    width_class,
                    height,
                    hri,
                } => {
                    out.extend(barcode::height(*height));
                    out.extend(barcode::module_width(*width_class));
                    out.extend(barcode::hri_position(*hri));
                    out.extend(barcode::code128(data));
                }
                Op::Raster {
                    width_bytes,
                    height,
                    data,
                } => {
                    out.extend(graphics::raster(*width_bytes, *height, data));
                }
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::barcode::{HriPosition, WidthClass};
    use crate::protocol::text::Alignment;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_text_program() {
        let mut program = Program::with_init();
        program.push(Op::SetAlign(Alignment::Center));
        program.push(Op::Text("HI".into()));
        program.push(Op::Newline);

        let bytes = program.to_bytes();
        assert_eq!(
            bytes,
            vec![0x1B, 0x40, 0x1B, 0x61, 0x01, b'H', b'I', 0x0A]
        );
    }

    #[test]
    fn test_barcode_emits_setup_then_print() {
        let program: Program = [Op::Barcode {
            data: "AB".into(),
            width_class: WidthClass::Large,
            height: 80,
            hri: HriPosition::None,
        }]
        .into_iter()
        .collect();

        let bytes = program.to_bytes();
        let mut expected = Vec::new();
        expected.extend([0x1D, 0x68, 80]); // GS h
        expected.extend([0x1D, 0x77, 3]); // GS w large
        expected.extend([0x1D, 0x48, 0]); // GS H none
        expected.extend([0x1D, 0x6B, 73, 4, 0x7B, 0x42, b'A', b'B']);
        assert_eq!(bytes, expected);
    }

    #[test]
    fn test_cut_variants() {
        let full: Program = [Op::Cut { partial: false }].into_iter().collect();
        let partial: Program = [Op::Cut { partial: true }].into_iter().collect();
        assert_eq!(full.to_bytes(), vec![0x1D, 0x56, 0x00]);
        assert_eq!(partial.to_bytes(), vec![0x1D, 0x56, 0x01]);
    }

    #[test]
    fn test_compilation_is_deterministic() {
        let mut program = Program::with_init();
        program.push(Op::SetBold(true));
        program.push(Op::Text("SKU-1".into()));
        program.push(Op::Feed { lines: 3 });
        program.push(Op::Cut { partial: false });

        assert_eq!(program.to_bytes(), program.to_bytes());
    }
}
