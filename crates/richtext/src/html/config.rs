//! Configuration for the HTML serializer.

use std::fmt;

use indexmap::IndexMap;
use serde_json::Value;

use super::element::HtmlContent;
use super::rules::{Attribute, AttributeSerializer, CustomSerializeFn, HeaderSerializeFn};

/// Overrides for the built-in attributes
#[derive(Default)]
pub struct DefaultSerializers {
    pub bold: Option<AttributeSerializer>,
    pub italic: Option<AttributeSerializer>,
    pub strike: Option<AttributeSerializer>,
    pub header: Option<HeaderSerializeFn>,
    pub line: Option<AttributeSerializer>,
}

impl DefaultSerializers {
    /// Override configured for a flag attribute
    pub fn get(&self, attribute: Attribute) -> Option<&AttributeSerializer> {
        match attribute {
            Attribute::Bold => self.bold.as_ref(),
            Attribute::Italic => self.italic.as_ref(),
            Attribute::Strike => self.strike.as_ref(),
            Attribute::Line => self.line.as_ref(),
        }
    }
}

impl fmt::Debug for DefaultSerializers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DefaultSerializers")
            .field("bold", &self.bold)
            .field("italic", &self.italic)
            .field("strike", &self.strike)
            .field("header", &self.header.as_ref().map(|_| ".."))
            .field("line", &self.line)
            .finish()
    }
}

/// Options for HtmlSerializer
///
/// Custom serializers run in insertion order, after all built-in attributes.
#[derive(Default)]
pub struct HtmlSerializerConfig {
    /// Join sibling content with a single space
    pub space_between: bool,

    /// Overrides for bold, italic, strike, header and line
    pub default_serializers: DefaultSerializers,

    /// Serializers for custom attributes, keyed by attribute name
    pub serializers: IndexMap<String, CustomSerializeFn>,
}

impl HtmlSerializerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn space_between(mut self, space_between: bool) -> Self {
        self.space_between = space_between;
        self
    }

    pub fn bold(mut self, serializer: AttributeSerializer) -> Self {
        self.default_serializers.bold = Some(serializer);
        self
    }

    pub fn italic(mut self, serializer: AttributeSerializer) -> Self {
        self.default_serializers.italic = Some(serializer);
        self
    }

    pub fn strike(mut self, serializer: AttributeSerializer) -> Self {
        self.default_serializers.strike = Some(serializer);
        self
    }

    pub fn line(mut self, serializer: AttributeSerializer) -> Self {
        self.default_serializers.line = Some(serializer);
        self
    }

    /// Override the header serializer
    pub fn header<F>(mut self, f: F) -> Self
    where
        F: Fn(u32, HtmlContent) -> HtmlContent + Send + Sync + 'static,
    {
        self.default_serializers.header = Some(Box::new(f));
        self
    }

    /// Add a serializer for a custom attribute
    ///
    /// Registering the same name twice replaces the serializer but keeps its
    /// original position.
    pub fn serializer<F>(mut self, name: impl Into<String>, f: F) -> Self
    where
        F: Fn(HtmlContent, &Value) -> HtmlContent + Send + Sync + 'static,
    {
        self.serializers.insert(name.into(), Box::new(f));
        self
    }

    /// Separator placed between sibling content
    pub fn separator(&self) -> &'static str {
        if self.space_between {
            " "
        } else {
            ""
        }
    }
}

impl fmt::Debug for HtmlSerializerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HtmlSerializerConfig")
            .field("space_between", &self.space_between)
            .field("default_serializers", &self.default_serializers)
            .field("serializers", &self.serializers.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HtmlSerializerConfig::default();
        assert!(!config.space_between);
        assert_eq!(config.separator(), "");
        assert!(config.serializers.is_empty());
        assert!(config.default_serializers.get(Attribute::Bold).is_none());
    }

    #[test]
    fn test_builder_sets_overrides() {
        let config = HtmlSerializerConfig::new()
            .space_between(true)
            .bold(AttributeSerializer::class("text-bold"))
            .line(AttributeSerializer::class("container"))
            .header(|_, content| content);
        assert_eq!(config.separator(), " ");
        assert!(matches!(
            config.default_serializers.get(Attribute::Bold),
            Some(AttributeSerializer::ClassTag(class)) if class == "text-bold"
        ));
        assert!(config.default_serializers.get(Attribute::Italic).is_none());
        assert!(config.default_serializers.get(Attribute::Line).is_some());
        assert!(config.default_serializers.header.is_some());
    }

    #[test]
    fn test_serializers_keep_registration_order() {
        let config = HtmlSerializerConfig::new()
            .serializer("card", |content, _| content)
            .serializer("anchor", |content, _| content)
            .serializer("card", |content, _| content);
        let names: Vec<_> = config.serializers.keys().map(String::as_str).collect();
        assert_eq!(names, ["card", "anchor"]);
    }

    #[test]
    fn test_debug_lists_serializer_names() {
        let config = HtmlSerializerConfig::new().serializer("card", |content, _| content);
        let debug = format!("{config:?}");
        assert!(debug.contains("\"card\""));
        assert!(debug.contains("space_between: false"));
    }
}
