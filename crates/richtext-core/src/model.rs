//! Rich text document tree
//!
//! This module defines the recursive block structure consumed by every serializer.
//! The serde encoding mirrors the JSON shape documents are exchanged in, so that
//! decoding and re-encoding a document preserves its exact shape.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Attribute names with built-in meaning. They can never be used as custom attributes.
pub const RESERVED_ATTRIBUTES: [&str; 6] = ["text", "bold", "italic", "strike", "header", "line"];

/// A whole document: an ordered sequence of blocks
pub type RichTextJson = Vec<RichTextBlock>;

/// A node of the document tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RichTextBlock {
    /// Plain text leaf, carries no attributes
    Text(String),

    /// Formatted block wrapping nested content
    Block(TextBlock),
}

/// Content of a [`TextBlock`]
///
/// A single child and a one-element sequence are different shapes and are kept
/// apart, even though both render the same.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TextContent {
    /// Wrap exactly one child
    Single(Box<RichTextBlock>),

    /// Concatenate these children in order
    Sequence(Vec<RichTextBlock>),
}

/// A block with content and formatting attributes
///
/// An explicit `false` on a built-in flag is kept and re-encoded. A `null`
/// decodes the same as a missing key and is not written back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextBlock {
    pub text: TextContent,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub italic: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strike: Option<bool>,

    /// Header level (1 for the top level)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<u32>,

    /// Marks the block as a line (paragraph) wrapper
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<bool>,

    /// Additional attributes, consumed by custom serializers
    #[serde(flatten)]
    pub attributes: IndexMap<String, Value>,
}

impl TextBlock {
    /// Create a block without any attributes
    pub fn new(text: impl Into<TextContent>) -> Self {
        Self {
            text: text.into(),
            bold: None,
            italic: None,
            strike: None,
            header: None,
            line: None,
            attributes: IndexMap::new(),
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = Some(true);
        self
    }

    pub fn italic(mut self) -> Self {
        self.italic = Some(true);
        self
    }

    pub fn strike(mut self) -> Self {
        self.strike = Some(true);
        self
    }

    pub fn header(mut self, level: u32) -> Self {
        self.header = Some(level);
        self
    }

    pub fn line(mut self) -> Self {
        self.line = Some(true);
        self
    }

    /// Set an additional attribute
    ///
    /// Reserved names belong to the typed fields; storing one here makes the
    /// block fail [`validate`](crate::validate).
    pub fn attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn is_bold(&self) -> bool {
        self.bold.unwrap_or(false)
    }

    pub fn is_italic(&self) -> bool {
        self.italic.unwrap_or(false)
    }

    pub fn is_strike(&self) -> bool {
        self.strike.unwrap_or(false)
    }

    pub fn is_line(&self) -> bool {
        self.line.unwrap_or(false)
    }

    /// Header level, if the block is a header. A level of 0 counts as absent.
    pub fn header_level(&self) -> Option<u32> {
        self.header.filter(|level| *level > 0)
    }

    /// Look up an additional attribute
    pub fn get_attribute(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }
}

impl RichTextBlock {
    /// Check if this is a plain text leaf
    pub fn is_text(&self) -> bool {
        matches!(self, RichTextBlock::Text(_))
    }

    /// Nesting depth of this block. A text leaf has depth 1.
    ///
    /// Serializers recurse once per level, so this is also their stack depth.
    pub fn depth(&self) -> usize {
        match self {
            RichTextBlock::Text(_) => 1,
            RichTextBlock::Block(block) => 1 + block.text.depth(),
        }
    }
}

impl TextContent {
    /// Children as a slice, regardless of shape
    pub fn children(&self) -> &[RichTextBlock] {
        match self {
            TextContent::Single(child) => std::slice::from_ref(&**child),
            TextContent::Sequence(children) => children,
        }
    }

    fn depth(&self) -> usize {
        document_depth(self.children())
    }
}

/// Maximum nesting depth over a sequence of blocks (0 when empty)
pub fn document_depth(blocks: &[RichTextBlock]) -> usize {
    blocks.iter().map(RichTextBlock::depth).max().unwrap_or(0)
}

impl From<&str> for RichTextBlock {
    fn from(text: &str) -> Self {
        RichTextBlock::Text(text.to_string())
    }
}

impl From<String> for RichTextBlock {
    fn from(text: String) -> Self {
        RichTextBlock::Text(text)
    }
}

impl From<TextBlock> for RichTextBlock {
    fn from(block: TextBlock) -> Self {
        RichTextBlock::Block(block)
    }
}

impl From<RichTextBlock> for TextContent {
    fn from(block: RichTextBlock) -> Self {
        TextContent::Single(Box::new(block))
    }
}

impl From<TextBlock> for TextContent {
    fn from(block: TextBlock) -> Self {
        TextContent::Single(Box::new(RichTextBlock::Block(block)))
    }
}

impl From<&str> for TextContent {
    fn from(text: &str) -> Self {
        TextContent::Single(Box::new(RichTextBlock::from(text)))
    }
}

impl From<String> for TextContent {
    fn from(text: String) -> Self {
        TextContent::Single(Box::new(RichTextBlock::Text(text)))
    }
}

impl From<Vec<RichTextBlock>> for TextContent {
    fn from(children: Vec<RichTextBlock>) -> Self {
        TextContent::Sequence(children)
    }
}
