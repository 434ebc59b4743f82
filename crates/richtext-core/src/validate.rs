//! Optional shape validation
//!
//! Serializers never call this. It is for callers that want a typed error up
//! front instead of relying on whatever the typed model already rules out.

use std::fmt;

use crate::model::{RichTextBlock, TextBlock, RESERVED_ATTRIBUTES};

/// Position of a block: indices from the document root down
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockPath(pub Vec<usize>);

impl fmt::Display for BlockPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, index) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{index}")?;
        }
        Ok(())
    }
}

/// A block that violates the document shape
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShapeError {
    #[error("header level must be positive (block {path})")]
    InvalidHeaderLevel { path: BlockPath },

    #[error("reserved attribute `{key}` stored as a custom attribute (block {path})")]
    ReservedAttribute { path: BlockPath, key: String },
}

/// Check every block of a document, stopping at the first violation
pub fn validate(blocks: &[RichTextBlock]) -> Result<(), ShapeError> {
    let mut path = Vec::new();
    validate_blocks(blocks, &mut path)
}

fn validate_blocks(blocks: &[RichTextBlock], path: &mut Vec<usize>) -> Result<(), ShapeError> {
    for (index, block) in blocks.iter().enumerate() {
        path.push(index);
        if let RichTextBlock::Block(block) = block {
            validate_block(block, path)?;
            validate_blocks(block.text.children(), path)?;
        }
        path.pop();
    }
    Ok(())
}

fn validate_block(block: &TextBlock, path: &[usize]) -> Result<(), ShapeError> {
    if block.header == Some(0) {
        return Err(ShapeError::InvalidHeaderLevel {
            path: BlockPath(path.to_vec()),
        });
    }

    if let Some(key) = block
        .attributes
        .keys()
        .find(|key| RESERVED_ATTRIBUTES.contains(&key.as_str()))
    {
        return Err(ShapeError::ReservedAttribute {
            path: BlockPath(path.to_vec()),
            key: key.clone(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RichTextJson;
    use serde_json::json;

    fn decode(value: serde_json::Value) -> RichTextJson {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_well_formed_document_passes() {
        let doc = decode(json!([
            "plain",
            { "text": [{ "text": "P", "bold": true }, "rague"], "line": true, "header": 1 },
            { "text": "card", "card": { "name": "x" } }
        ]));
        assert_eq!(validate(&doc), Ok(()));
    }

    #[test]
    fn test_empty_document_passes() {
        assert_eq!(validate(&[]), Ok(()));
    }

    #[test]
    fn test_header_zero_reports_nested_path() {
        let doc = decode(json!([
            "first",
            { "text": ["a", { "text": "b", "header": 0 }] }
        ]));
        let err = validate(&doc).unwrap_err();
        assert_eq!(
            err,
            ShapeError::InvalidHeaderLevel {
                path: BlockPath(vec![1, 1])
            }
        );
        assert_eq!(err.to_string(), "header level must be positive (block 1.1)");
    }

    #[test]
    fn test_reserved_attribute_rejected() {
        let doc: RichTextJson = vec![TextBlock::new("x").attribute("bold", true).into()];
        let err = validate(&doc).unwrap_err();
        assert_eq!(
            err,
            ShapeError::ReservedAttribute {
                path: BlockPath(vec![0]),
                key: "bold".to_string(),
            }
        );
    }

    #[test]
    fn test_single_child_path_uses_index_zero() {
        let doc: RichTextJson = vec![TextBlock::new(TextBlock::new("x").header(0)).into()];
        let err = validate(&doc).unwrap_err();
        assert_eq!(
            err,
            ShapeError::InvalidHeaderLevel {
                path: BlockPath(vec![0, 0])
            }
        );
    }
}
