//! HtmlSerializer - converts rich text documents to HTML markup.
//!
//! Conversion runs in two passes. Attribute application turns each block into an
//! [`HtmlContent`] tree, then rendering flattens that tree into a string.
//!
//! Attributes are applied in a fixed order: bold, italic, strike, header, line,
//! then every configured custom serializer in registration order. Each step wraps
//! (or rewrites) the content produced so far, so bold ends up innermost.

mod config;
mod element;
mod rules;

pub use config::{DefaultSerializers, HtmlSerializerConfig};
pub use element::{HtmlContent, HtmlElement};
pub use rules::{
    Attribute, AttributeSerializer, CustomSerializeFn, HeaderSerializeFn, TransformFn,
};

use richtext_core::{RichTextBlock, TextBlock, TextContent, RESERVED_ATTRIBUTES};

use crate::serializer::Serializer;
use crate::tracing_macros::{debug, trace};
use crate::{Result, RichTextError};

const FLAG_ORDER_BEFORE_HEADER: [Attribute; 3] =
    [Attribute::Bold, Attribute::Italic, Attribute::Strike];

/// Serializer from rich text documents to HTML
///
/// Text is written verbatim; no escaping is performed.
#[derive(Debug, Default)]
pub struct HtmlSerializer {
    config: HtmlSerializerConfig,
}

impl HtmlSerializer {
    /// Create an HtmlSerializer with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an HtmlSerializer with custom options
    ///
    /// Fails if a custom serializer is registered under a reserved attribute name.
    pub fn with_config(config: HtmlSerializerConfig) -> Result<Self> {
        if let Some(name) = config
            .serializers
            .keys()
            .find(|name| RESERVED_ATTRIBUTES.contains(&name.as_str()))
        {
            return Err(RichTextError::ReservedAttribute(name.clone()));
        }

        debug!(
            "html serializer configured with {} custom serializers",
            config.serializers.len()
        );
        Ok(Self { config })
    }

    /// Get the current options
    pub fn config(&self) -> &HtmlSerializerConfig {
        &self.config
    }

    /// Convert a document to HTML
    pub fn to_html(&self, blocks: &[RichTextBlock]) -> String {
        let mut out = String::new();
        self.write_blocks(blocks, &mut out);
        out
    }

    /// Build the markup tree of one block without rendering it
    pub fn to_content(&self, block: &RichTextBlock) -> HtmlContent {
        match block {
            RichTextBlock::Text(text) => HtmlContent::Text(text.clone()),
            RichTextBlock::Block(block) => self.apply_attributes(block),
        }
    }

    /// Render a markup tree to a string
    pub fn render(&self, content: &HtmlContent) -> String {
        let mut out = String::new();
        self.write_content(content, &mut out);
        out
    }

    fn apply_attributes(&self, block: &TextBlock) -> HtmlContent {
        let mut content = match &block.text {
            TextContent::Sequence(children) => HtmlContent::Text(self.to_html(children)),
            TextContent::Single(child) => self.to_content(child),
        };

        let defaults = &self.config.default_serializers;

        for attribute in FLAG_ORDER_BEFORE_HEADER {
            if is_set(block, attribute) {
                content = attribute.serialize(content, defaults.get(attribute));
            }
        }

        if let Some(level) = block.header_level() {
            content = rules::serialize_header(level, content, defaults.header.as_ref());
        }

        if block.is_line() {
            content = Attribute::Line.serialize(content, defaults.get(Attribute::Line));
        }

        for (name, serialize) in &self.config.serializers {
            if let Some(value) = block.attributes.get(name) {
                trace!("applying custom serializer `{}`", name);
                content = serialize(content, value);
            }
        }

        content
    }

    fn write_blocks(&self, blocks: &[RichTextBlock], out: &mut String) {
        for (i, block) in blocks.iter().enumerate() {
            if i > 0 {
                out.push_str(self.config.separator());
            }
            let content = self.to_content(block);
            self.write_content(&content, out);
        }
    }

    fn write_content(&self, content: &HtmlContent, out: &mut String) {
        match content {
            HtmlContent::Text(text) => out.push_str(text),
            HtmlContent::Element(element) => self.write_element(element, out),
            HtmlContent::Sequence(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        out.push_str(self.config.separator());
                    }
                    self.write_content(item, out);
                }
            }
        }
    }

    fn write_element(&self, element: &HtmlElement, out: &mut String) {
        out.push('<');
        out.push_str(&element.name);
        if !element.classes.is_empty() {
            out.push_str(" class=\"");
            for (i, class) in element.classes.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                out.push_str(class);
            }
            out.push('"');
        }
        out.push('>');

        self.write_content(&element.content, out);

        out.push_str("</");
        out.push_str(&element.name);
        out.push('>');
    }
}

fn is_set(block: &TextBlock, attribute: Attribute) -> bool {
    match attribute {
        Attribute::Bold => block.is_bold(),
        Attribute::Italic => block.is_italic(),
        Attribute::Strike => block.is_strike(),
        Attribute::Line => block.is_line(),
    }
}

impl Serializer for HtmlSerializer {
    fn name(&self) -> &str {
        "html"
    }

    fn convert(&self, document: &[RichTextBlock]) -> Result<String> {
        trace!("converting {} blocks to html", document.len());
        Ok(self.to_html(document))
    }
}
