use std::fmt;

use crate::value::{Encode, Value};

/// Conversion of an arbitrary value into an [`Element`].
///
/// This is the extension point for types that know their own XML
/// representation. A [`Content::Custom`] item is replaced during
/// serialization by the element this returns, and the serializer
/// recurses into that element under the same rules as a literal child
/// element, including further nested `ToElement` values.
pub trait ToElement: fmt::Debug {
    /// Produce the element representing this value.
    fn to_element(&self) -> Element;
}

/// A single content item of an element.
///
/// Exactly one branch applies to each item during serialization: a
/// nested element is recursed into, a `Custom` value is converted with
/// [`ToElement`] and recursed into, and a `Value` is escaped or
/// encoded in place. A `Custom` item is never additionally passed
/// through value escaping.
#[derive(Debug)]
pub enum Content {
    /// A nested element.
    Element(Element),
    /// A value serialized through its [`ToElement`] conversion.
    Custom(Box<dyn ToElement>),
    /// A scalar or structured value.
    Value(Value),
}

impl Content {
    /// Wrap a value that supplies its own element representation.
    pub fn custom(value: impl ToElement + 'static) -> Self {
        Content::Custom(Box::new(value))
    }

    /// Wrap a value that renders itself through the [`Encode`]
    /// fallback.
    pub fn structured(value: impl Encode + 'static) -> Self {
        Content::Value(Value::structured(value))
    }
}

impl From<Element> for Content {
    fn from(element: Element) -> Self {
        Content::Element(element)
    }
}

impl From<Value> for Content {
    fn from(value: Value) -> Self {
        Content::Value(value)
    }
}

macro_rules! content_from_value {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Content {
                fn from(value: $t) -> Self {
                    Content::Value(Value::from(value))
                }
            }
        )*
    };
}

content_from_value!(
    bool, &str, String, f32, f64, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize
);

/// The attributes of an element.
///
/// Iteration order is insertion order, which is also the order in
/// which attributes are emitted. Inserting a name that is already
/// present replaces its value but keeps its original position, so
/// output stays reproducible no matter how a tree was assembled.
#[derive(Debug, Default)]
pub struct Attributes {
    entries: Vec<(String, Value)>,
}

impl Attributes {
    /// Create an empty set of attributes.
    pub fn new() -> Self {
        Attributes::default()
    }

    /// Insert an attribute.
    ///
    /// If the name is already present, the previous value is returned
    /// and the attribute keeps its position.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        let name = name.into();
        let value = value.into();
        for entry in &mut self.entries {
            if entry.0 == name {
                return Some(std::mem::replace(&mut entry.1, value));
            }
        }
        self.entries.push((name, value));
        None
    }

    /// Return a reference to the value stored for `name`, if present.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(entry_name, _)| entry_name == name)
            .map(|(_, value)| value)
    }

    /// Return `true` if an attribute with this name exists.
    pub fn contains_name(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Returns the number of attributes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no attributes.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> + '_ {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attributes = Attributes::new();
        attributes.extend(iter);
        attributes
    }
}

impl<K: Into<String>, V: Into<Value>> Extend<(K, V)> for Attributes {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.insert(name, value);
        }
    }
}

/// An XML element: a name, attributes, and ordered contents.
///
/// An element tree is built once and then serialized with
/// [`Element::serialize`] or [`Element::serialize_to_string`];
/// serialization never mutates the tree.
///
/// ```
/// use xmlgen::Element;
///
/// let tree = Element::new("doc")
///     .attribute("id", "a1")
///     .content(Element::new("p").content("hello & goodbye"));
/// assert_eq!(
///     tree.serialize_to_string().unwrap(),
///     r#"<doc id="a1"><p>hello &amp; goodbye</p></doc>"#
/// );
/// ```
#[derive(Debug)]
pub struct Element {
    pub(crate) name: String,
    pub(crate) attributes: Attributes,
    pub(crate) contents: Vec<Content>,
}

impl Element {
    /// Create an element with no attributes and no contents.
    pub fn new(name: impl Into<String>) -> Self {
        Element {
            name: name.into(),
            attributes: Attributes::new(),
            contents: Vec::new(),
        }
    }

    /// Create an element from its parts in one call.
    pub fn with(
        name: impl Into<String>,
        attributes: Attributes,
        contents: impl IntoIterator<Item = Content>,
    ) -> Self {
        Element {
            name: name.into(),
            attributes,
            contents: contents.into_iter().collect(),
        }
    }

    /// Add an attribute, replacing any previous value for the same
    /// name.
    #[must_use]
    pub fn attribute(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(name, value);
        self
    }

    /// Append a single content item.
    #[must_use]
    pub fn content(mut self, content: impl Into<Content>) -> Self {
        self.contents.push(content.into());
        self
    }

    /// Append a sequence of content items.
    #[must_use]
    pub fn contents(mut self, contents: impl IntoIterator<Item = Content>) -> Self {
        self.contents.extend(contents);
        self
    }

    /// The element name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The element's attributes.
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// The element's content items, in document order.
    pub fn children(&self) -> &[Content] {
        &self.contents
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_returns_replaced_value() {
        let mut attributes = Attributes::new();
        assert!(attributes.insert("a", 1).is_none());
        let previous = attributes.insert("a", 2);
        assert!(matches!(previous, Some(Value::Int(1))));
        assert_eq!(attributes.len(), 1);
    }

    #[test]
    fn test_replace_keeps_position() {
        let mut attributes = Attributes::new();
        attributes.insert("a", 1);
        attributes.insert("b", 2);
        attributes.insert("a", 3);
        let names: Vec<_> = attributes.iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["a", "b"]);
    }

    #[test]
    fn test_from_iterator() {
        let attributes: Attributes = [("a", "x"), ("b", "y")].into_iter().collect();
        assert_eq!(attributes.len(), 2);
        assert!(attributes.contains_name("b"));
    }
}
