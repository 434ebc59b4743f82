//! richtext-core - Rich text document model
//!
//! This crate provides the recursive document tree shared by the serializers
//! in the `richtext` crate. It carries no rendering logic of its own.
//!
//! # Shape
//!
//! ```text
//! RichTextJson = [RichTextBlock, ...]
//!
//! RichTextBlock ─┬─ "plain text"
//!                └─ TextBlock { text, bold, italic, strike, header, line, ..attributes }
//!                                 │
//!                                 └─ RichTextBlock | [RichTextBlock, ...]
//! ```
//!
//! # Example
//!
//! ```rust
//! use richtext_core::{RichTextBlock, RichTextJson, TextBlock};
//!
//! let document: RichTextJson = vec![
//!     TextBlock::new("hello").bold().into(),
//!     RichTextBlock::from(" world"),
//! ];
//!
//! let decoded: RichTextJson =
//!     serde_json::from_str(r#"[{"text":"hello","bold":true}," world"]"#).unwrap();
//! assert_eq!(document, decoded);
//! ```

mod model;
mod validate;

pub use model::{
    document_depth, RichTextBlock, RichTextJson, TextBlock, TextContent, RESERVED_ATTRIBUTES,
};
pub use validate::{validate, BlockPath, ShapeError};
