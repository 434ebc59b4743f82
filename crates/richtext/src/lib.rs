//! # richtext
//!
//! Serialize rich text documents to HTML and JSON.
//!
//! Documents are trees of blocks (see [`richtext_core`]). Each serializer
//! implements the [`Serializer`] trait:
//!
//! - [`HtmlSerializer`] renders markup. Built-in attributes map to elements
//!   (`bold` → `strong`, `italic` → `em`, `strike` → `del`, `header` → `h{n}`,
//!   `line` → `div`); each can be replaced by a class or a transform, and any
//!   other attribute can drive a custom serializer.
//! - [`JsonSerializer`] is a lossless codec that can parse its own output.
//!
//! ## Example
//!
//! ```rust
//! use richtext::{HtmlSerializer, HtmlSerializerConfig, RichTextJson, Serializer, TextBlock};
//!
//! let serializer =
//!     HtmlSerializer::with_config(HtmlSerializerConfig::new().space_between(true)).unwrap();
//!
//! let document: RichTextJson = vec![
//!     TextBlock::new("Hello").bold().header(1).into(),
//!     "world".into(),
//! ];
//!
//! let html = serializer.convert(&document).unwrap();
//! assert_eq!(html, "<h1><strong>Hello</strong></h1> world");
//! ```
//!
//! ## Custom attributes
//!
//! ```rust
//! use richtext::{
//!     HtmlElement, HtmlSerializer, HtmlSerializerConfig, RichTextJson, Serializer, TextBlock,
//! };
//!
//! let config = HtmlSerializerConfig::new().serializer("link", |content, href| {
//!     HtmlElement::with_classes("a", content, [href.as_str().unwrap_or_default()]).into()
//! });
//! let serializer = HtmlSerializer::with_config(config).unwrap();
//!
//! let document: RichTextJson = vec![TextBlock::new("docs").attribute("link", "external").into()];
//! let html = serializer.convert(&document).unwrap();
//! assert_eq!(html, r#"<a class="external">docs</a>"#);
//! ```
//!
//! ## Features
//!
//! - `tracing`: emit `tracing` events while configuring and converting.

pub mod html;
mod json;
mod serializer;
mod tracing_macros;

pub use html::{
    AttributeSerializer, HtmlContent, HtmlElement, HtmlSerializer, HtmlSerializerConfig,
};
pub use json::{json_depth, JsonSerializer, MAX_JSON_DEPTH};
pub use richtext_core::{
    document_depth, validate, RichTextBlock, RichTextJson, ShapeError, TextBlock, TextContent,
    RESERVED_ATTRIBUTES,
};
pub use serializer::Serializer;

/// Error type for richtext operations
#[derive(Debug, thiserror::Error)]
pub enum RichTextError {
    #[error("Reserved attribute name: {0}")]
    ReservedAttribute(String),

    #[error("Codec error: {0}")]
    Codec(#[from] serde_json::Error),

    #[error("Not supported: {0}")]
    NotSupported(String),

    #[error("Invalid shape: {0}")]
    Shape(#[from] ShapeError),

    #[error("Document nests {depth} levels deep, the JSON codec allows {limit}")]
    TooDeep { depth: usize, limit: usize },
}

pub type Result<T> = std::result::Result<T, RichTextError>;
