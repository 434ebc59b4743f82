//! Intermediate markup tree built by the HTML serializer.
//!
//! Attribute application produces [`HtmlContent`] values, and custom serializers
//! receive and return them, so hooks can inject any element structure they like.
//! Rendering to a string happens in a separate pass.

use indexmap::IndexSet;

/// Content of an element, or a whole fragment
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlContent {
    /// Raw text (or markup already rendered), written verbatim
    Text(String),

    /// A single element
    Element(Box<HtmlElement>),

    /// Siblings rendered in order
    Sequence(Vec<HtmlContent>),
}

/// A single output element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlElement {
    /// Tag name, e.g. `strong`
    pub name: String,

    /// Class names; duplicates collapse, rendering keeps insertion order
    pub classes: IndexSet<String>,

    pub content: HtmlContent,
}

impl HtmlElement {
    /// Create an element without classes
    pub fn new(name: impl Into<String>, content: impl Into<HtmlContent>) -> Self {
        Self {
            name: name.into(),
            classes: IndexSet::new(),
            content: content.into(),
        }
    }

    /// Create an element carrying the given classes
    pub fn with_classes<I, S>(
        name: impl Into<String>,
        content: impl Into<HtmlContent>,
        classes: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            classes: classes.into_iter().map(Into::into).collect(),
            content: content.into(),
        }
    }

    /// Add a class, returning the element
    pub fn append_class(mut self, class: impl Into<String>) -> Self {
        self.add_class(class);
        self
    }

    /// Add a class in place
    pub fn add_class(&mut self, class: impl Into<String>) {
        self.classes.insert(class.into());
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }
}

impl HtmlContent {
    pub fn text(text: impl Into<String>) -> Self {
        HtmlContent::Text(text.into())
    }

    pub fn is_element(&self) -> bool {
        matches!(self, HtmlContent::Element(_))
    }

    /// The element, if this content is a single element
    pub fn as_element(&self) -> Option<&HtmlElement> {
        match self {
            HtmlContent::Element(element) => Some(&**element),
            _ => None,
        }
    }
}

impl From<HtmlElement> for HtmlContent {
    fn from(element: HtmlElement) -> Self {
        HtmlContent::Element(Box::new(element))
    }
}

impl From<&str> for HtmlContent {
    fn from(text: &str) -> Self {
        HtmlContent::Text(text.to_string())
    }
}

impl From<String> for HtmlContent {
    fn from(text: String) -> Self {
        HtmlContent::Text(text)
    }
}

impl From<Vec<HtmlContent>> for HtmlContent {
    fn from(items: Vec<HtmlContent>) -> Self {
        HtmlContent::Sequence(items)
    }
}
