//! Attribute serializers for the built-in formatting attributes.

use std::fmt;

use serde_json::Value;

use super::element::{HtmlContent, HtmlElement};
use crate::tracing_macros::trace;

/// Type alias for content transforms of the flag attributes
pub type TransformFn = Box<dyn Fn(HtmlContent) -> HtmlContent + Send + Sync>;

/// Type alias for header transforms, which also receive the level
pub type HeaderSerializeFn = Box<dyn Fn(u32, HtmlContent) -> HtmlContent + Send + Sync>;

/// Type alias for custom attribute serializers, which receive the raw attribute value
pub type CustomSerializeFn = Box<dyn Fn(HtmlContent, &Value) -> HtmlContent + Send + Sync>;

/// Override for how a flag attribute rewrites content
pub enum AttributeSerializer {
    /// Mark content with a class instead of the default element
    ClassTag(String),
    /// Replace content with whatever the function returns
    Transform(TransformFn),
}

impl AttributeSerializer {
    /// Create a class override
    pub fn class(name: &str) -> Self {
        AttributeSerializer::ClassTag(name.to_string())
    }

    /// Create a transform override
    pub fn transform<F>(f: F) -> Self
    where
        F: Fn(HtmlContent) -> HtmlContent + Send + Sync + 'static,
    {
        AttributeSerializer::Transform(Box::new(f))
    }

    /// Apply this override to content
    ///
    /// A class lands on the content itself when it is an element. Anything else
    /// is wrapped in a `class_element` carrying the class.
    pub fn apply(&self, content: HtmlContent, class_element: &str) -> HtmlContent {
        match self {
            AttributeSerializer::ClassTag(class) => match content {
                HtmlContent::Element(mut element) => {
                    element.add_class(class.as_str());
                    HtmlContent::Element(element)
                }
                other => HtmlElement::with_classes(class_element, other, [class.as_str()]).into(),
            },
            AttributeSerializer::Transform(f) => f(content),
        }
    }
}

impl fmt::Debug for AttributeSerializer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeSerializer::ClassTag(class) => f.debug_tuple("ClassTag").field(class).finish(),
            AttributeSerializer::Transform(_) => f.write_str("Transform(..)"),
        }
    }
}

/// Built-in flag attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attribute {
    Bold,
    Italic,
    Strike,
    Line,
}

impl Attribute {
    /// Name of the attribute in documents
    pub fn name(self) -> &'static str {
        match self {
            Attribute::Bold => "bold",
            Attribute::Italic => "italic",
            Attribute::Strike => "strike",
            Attribute::Line => "line",
        }
    }

    /// Element wrapping content when no override is configured
    pub fn default_element(self) -> &'static str {
        match self {
            Attribute::Bold => "strong",
            Attribute::Italic => "em",
            Attribute::Strike => "del",
            Attribute::Line => "div",
        }
    }

    /// Element carrying a class override around non-element content
    pub fn class_element(self) -> &'static str {
        match self {
            Attribute::Line => "div",
            _ => "span",
        }
    }

    /// Rewrite content for this attribute, honoring an optional override
    pub fn serialize(
        self,
        content: HtmlContent,
        serializer: Option<&AttributeSerializer>,
    ) -> HtmlContent {
        trace!("applying `{}` (override: {})", self.name(), serializer.is_some());
        match serializer {
            Some(serializer) => serializer.apply(content, self.class_element()),
            None => HtmlElement::new(self.default_element(), content).into(),
        }
    }
}

/// Rewrite content for a header, honoring an optional override
pub fn serialize_header(
    level: u32,
    content: HtmlContent,
    serializer: Option<&HeaderSerializeFn>,
) -> HtmlContent {
    match serializer {
        Some(f) => f(level, content),
        None => HtmlElement::new(format!("h{level}"), content).into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use richtext_core::RESERVED_ATTRIBUTES;

    #[test]
    fn test_names_are_reserved() {
        let all = [Attribute::Bold, Attribute::Italic, Attribute::Strike, Attribute::Line];
        let names: Vec<_> = all.iter().map(|attribute| attribute.name()).collect();
        assert_eq!(names, ["bold", "italic", "strike", "line"]);
        assert!(names.iter().all(|name| RESERVED_ATTRIBUTES.contains(name)));
    }

    #[test]
    fn test_default_wraps_in_element() {
        let content = Attribute::Strike.serialize("x".into(), None);
        assert_eq!(content, HtmlContent::from(HtmlElement::new("del", "x")));
    }

    #[test]
    fn test_class_on_text_wraps_in_class_element() {
        let serializer = AttributeSerializer::class("text-bold");
        let content = Attribute::Bold.serialize("x".into(), Some(&serializer));
        assert_eq!(
            content,
            HtmlContent::from(HtmlElement::with_classes("span", "x", ["text-bold"]))
        );

        let serializer = AttributeSerializer::class("container");
        let content = Attribute::Line.serialize("x".into(), Some(&serializer));
        assert_eq!(
            content,
            HtmlContent::from(HtmlElement::with_classes("div", "x", ["container"]))
        );
    }

    #[test]
    fn test_class_on_element_keeps_tag() {
        let serializer = AttributeSerializer::class("text-italic");
        let inner: HtmlContent = HtmlElement::new("strong", "x").into();
        let content = Attribute::Italic.serialize(inner, Some(&serializer));
        assert_eq!(
            content,
            HtmlContent::from(HtmlElement::with_classes("strong", "x", ["text-italic"]))
        );
    }

    #[test]
    fn test_transform_result_used_verbatim() {
        let serializer = AttributeSerializer::transform(|content| {
            HtmlElement::with_classes("div", content, ["bold-div"]).into()
        });
        let content = Attribute::Bold.serialize("x".into(), Some(&serializer));
        assert_eq!(
            content,
            HtmlContent::from(HtmlElement::with_classes("div", "x", ["bold-div"]))
        );
    }

    #[test]
    fn test_header_default_and_override() {
        assert_eq!(
            serialize_header(3, "x".into(), None),
            HtmlContent::from(HtmlElement::new("h3", "x"))
        );

        let f: HeaderSerializeFn = Box::new(|level: u32, content: HtmlContent| -> HtmlContent {
            HtmlElement::with_classes("section", content, [format!("header-{level}")]).into()
        });
        assert_eq!(
            serialize_header(2, "x".into(), Some(&f)),
            HtmlContent::from(HtmlElement::with_classes("section", "x", ["header-2"]))
        );
    }

    #[test]
    fn test_debug_hides_closures() {
        assert_eq!(
            format!("{:?}", AttributeSerializer::class("a")),
            r#"ClassTag("a")"#
        );
        assert_eq!(
            format!("{:?}", AttributeSerializer::transform(|c| c)),
            "Transform(..)"
        );
    }
}
