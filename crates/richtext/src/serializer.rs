//! Serializer trait shared by all output formats.

use richtext_core::{validate, RichTextBlock, RichTextJson};

use crate::{Result, RichTextError};

/// A conversion from rich text documents to a string representation
///
/// Implementors always provide [`convert`](Serializer::convert). Formats that
/// can be read back also override [`parse`](Serializer::parse) and
/// [`supports_parsing`](Serializer::supports_parsing).
pub trait Serializer: Send + Sync {
    /// The name of this format (e.g., "html", "json")
    fn name(&self) -> &str;

    /// Whether [`parse`](Serializer::parse) is implemented
    fn supports_parsing(&self) -> bool {
        false
    }

    /// Convert a document to its string representation
    fn convert(&self, document: &[RichTextBlock]) -> Result<String>;

    /// Decode a string produced by [`convert`](Serializer::convert)
    ///
    /// Default implementation returns NotSupported error.
    fn parse(&self, _content: &str) -> Result<RichTextJson> {
        Err(RichTextError::NotSupported(format!(
            "format '{}' does not support parsing",
            self.name()
        )))
    }

    /// Validate the document shape, then convert it
    fn convert_checked(&self, document: &[RichTextBlock]) -> Result<String> {
        validate(document)?;
        self.convert(document)
    }
}
