//! SVG element tree.
//!
//! Icon sources only need elements and their attributes: text nodes,
//! comments, processing instructions and namespace structure are dropped
//! at parse time.

/// An SVG element.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    /// Tag name as written in the source (e.g. "path", "clipPath")
    pub name: String,
    /// Attributes on this element, in document order
    pub attributes: Vec<Attribute>,
    /// Child elements, in document order
    pub children: Vec<Element>,
}

/// An attribute on an element.
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

impl Attribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Get an attribute value by name.
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    /// Set an attribute value.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        if let Some(attr) = self.attributes.iter_mut().find(|a| a.name == name) {
            attr.value = value.into();
        } else {
            self.attributes.push(Attribute::new(name, value));
        }
    }

    /// Check if this element has a specific tag name.
    pub fn is(&self, name: &str) -> bool {
        self.name == name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_and_set_attr() {
        let mut el = Element::new("rect");
        assert_eq!(el.get_attr("width"), None);
        el.set_attr("width", "4");
        assert_eq!(el.get_attr("width"), Some("4"));
        el.set_attr("width", "8");
        assert_eq!(el.get_attr("width"), Some("8"));
        assert_eq!(el.attributes.len(), 1);
    }

    #[test]
    fn test_is() {
        let el = Element::new("circle");
        assert!(el.is("circle"));
        assert!(!el.is("rect"));
    }
}
