//! JSON codec for rich text documents.
//!
//! The encoding is the document's own serde representation, so
//! `parse(convert(doc)) == doc` holds for every document `convert` accepts, including the
//! difference between a bare string leaf and a block wrapping a string.
//!
//! The decoder refuses input nested deeper than [`MAX_JSON_DEPTH`] arrays and
//! objects. Encoding enforces the same cap, so every string `convert` returns
//! can be parsed back. Each block adds one object, each child sequence one
//! array, and custom attribute values add their own nesting.

use richtext_core::{RichTextBlock, RichTextJson, TextContent};
use serde_json::Value;

use crate::serializer::Serializer;
use crate::tracing_macros::trace;
use crate::{Result, RichTextError};

/// Deepest container nesting `serde_json` decodes (its recursion limit is 128)
pub const MAX_JSON_DEPTH: usize = 127;

/// Number of nested JSON arrays and objects needed to encode a document
pub fn json_depth(document: &[RichTextBlock]) -> usize {
    1 + document.iter().map(block_depth).max().unwrap_or(0)
}

fn block_depth(block: &RichTextBlock) -> usize {
    match block {
        RichTextBlock::Text(_) => 0,
        RichTextBlock::Block(block) => {
            let text = match &block.text {
                TextContent::Single(child) => block_depth(child),
                TextContent::Sequence(children) => json_depth(children),
            };
            let attributes = block.attributes.values().map(value_depth).max().unwrap_or(0);
            1 + text.max(attributes)
        }
    }
}

fn value_depth(value: &Value) -> usize {
    match value {
        Value::Array(items) => 1 + items.iter().map(value_depth).max().unwrap_or(0),
        Value::Object(map) => 1 + map.values().map(value_depth).max().unwrap_or(0),
        _ => 0,
    }
}

fn check_depth(document: &[RichTextBlock]) -> Result<()> {
    let depth = json_depth(document);
    if depth > MAX_JSON_DEPTH {
        return Err(RichTextError::TooDeep {
            depth,
            limit: MAX_JSON_DEPTH,
        });
    }
    Ok(())
}

/// Serializer between rich text documents and JSON strings
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonSerializer;

impl JsonSerializer {
    pub fn new() -> Self {
        Self
    }

    /// Encode a document as indented JSON
    pub fn convert_pretty(&self, document: &[RichTextBlock]) -> Result<String> {
        check_depth(document)?;
        Ok(serde_json::to_string_pretty(document)?)
    }
}

impl Serializer for JsonSerializer {
    fn name(&self) -> &str {
        "json"
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn convert(&self, document: &[RichTextBlock]) -> Result<String> {
        trace!("encoding {} blocks as json", document.len());
        check_depth(document)?;
        Ok(serde_json::to_string(document)?)
    }

    fn parse(&self, content: &str) -> Result<RichTextJson> {
        trace!("decoding {} bytes of json", content.len());
        Ok(serde_json::from_str(content)?)
    }
}
