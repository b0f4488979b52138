//! # Label Content
//!
//! Input types for the layout composer: what goes on a label, independent
//! of how it is laid out.

use serde::{Deserialize, Serialize};

use crate::error::PrintError;

/// One product slot on a label: a required code and an optional name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductFacet {
    /// Product code, the barcode payload. Required and non-blank.
    pub code: String,
    /// Display name printed above the code. Optional; a blank or
    /// whitespace-only name is treated as absent.
    pub name: Option<String>,
}

impl ProductFacet {
    /// Create a facet from a code and optional name.
    pub fn new(code: impl Into<String>, name: Option<impl Into<String>>) -> Self {
        Self {
            code: code.into(),
            name: name.map(Into::into),
        }
    }

    /// The name, with blank and whitespace-only values treated as absent.
    pub fn display_name(&self) -> Option<&str> {
        self.name
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// Whether the code is present and non-blank.
    pub fn has_code(&self) -> bool {
        !self.code.trim().is_empty()
    }
}

/// The content of one label.
///
/// An absent `secondary` selects the single-label (centered, larger)
/// layout; a present `secondary` selects the dual side-by-side layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelContent {
    /// The main product. Its code is a hard precondition for composing.
    pub primary: ProductFacet,
    /// Optional second product for the dual side-by-side layout.
    pub secondary: Option<ProductFacet>,
}

impl LabelContent {
    /// Single-product content.
    pub fn single(primary: ProductFacet) -> Self {
        Self {
            primary,
            secondary: None,
        }
    }

    /// Two-product content for the dual layout.
    pub fn dual(primary: ProductFacet, secondary: ProductFacet) -> Self {
        Self {
            primary,
            secondary: Some(secondary),
        }
    }

    /// Number of barcodes one composed label will carry.
    pub fn barcode_count(&self) -> u32 {
        if self.secondary.is_some() { 2 } else { 1 }
    }

    /// Check layout preconditions.
    ///
    /// A missing or blank code on any present facet is a violation,
    /// rejected here before a single command byte is emitted — a label
    /// with a blank barcode must never reach the printer.
    pub fn validate(&self) -> Result<(), PrintError> {
        if !self.primary.has_code() {
            return Err(PrintError::Compose(
                "primary product code is required".into(),
            ));
        }
        if let Some(secondary) = &self.secondary
            && !secondary.has_code()
        {
            return Err(PrintError::Compose(
                "secondary product code is required".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_blank_is_absent() {
        assert_eq!(
            ProductFacet::new("A", Some("Widget")).display_name(),
            Some("Widget")
        );
        assert_eq!(ProductFacet::new("A", Some("   ")).display_name(), None);
        assert_eq!(ProductFacet::new("A", Some("")).display_name(), None);
        assert_eq!(ProductFacet::new("A", None::<String>).display_name(), None);
    }

    #[test]
    fn test_display_name_trims() {
        assert_eq!(
            ProductFacet::new("A", Some("  Widget  ")).display_name(),
            Some("Widget")
        );
    }

    #[test]
    fn test_validate_requires_primary_code() {
        let content = LabelContent::single(ProductFacet::new("", Some("Widget")));
        assert!(matches!(
            content.validate(),
            Err(PrintError::Compose(msg)) if msg.contains("primary")
        ));

        let content = LabelContent::single(ProductFacet::new("   ", None::<String>));
        assert!(content.validate().is_err());
    }

    #[test]
    fn test_validate_requires_secondary_code_when_present() {
        let content = LabelContent::dual(
            ProductFacet::new("ABC123", None::<String>),
            ProductFacet::new(" ", None::<String>),
        );
        assert!(matches!(
            content.validate(),
            Err(PrintError::Compose(msg)) if msg.contains("secondary")
        ));
    }

    #[test]
    fn test_validate_accepts_missing_name() {
        let content = LabelContent::single(ProductFacet::new("ABC123", None::<String>));
        assert!(content.validate().is_ok());
    }

    #[test]
    fn test_barcode_count() {
        let single = LabelContent::single(ProductFacet::new("A", None::<String>));
        let dual = LabelContent::dual(
            ProductFacet::new("A", None::<String>),
            ProductFacet::new("B", None::<String>),
        );
        assert_eq!(single.barcode_count(), 1);
        assert_eq!(dual.barcode_count(), 2);
    }
}
