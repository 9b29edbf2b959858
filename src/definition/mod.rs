//! Definitions: a named template plus the attributes it is rendered with
//!
//! A definition may extend a parent definition, name a preparer hook, and
//! carry two attribute maps: local attributes, visible only to the definition
//! itself, and cascaded attributes, inherited by nested definitions. The same
//! name may appear in both maps.

mod attribute;

use std::collections::HashMap;

pub use attribute::{Attribute, AttributeValue, Expression, TEMPLATE_RENDERER};

/// A composable view definition
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Definition {
    /// Definition name
    pub name: String,
    /// Name of the parent definition
    pub extends: Option<String>,
    /// Preparer hook identifier
    pub preparer: Option<String>,
    /// The template to render
    pub template_attribute: Option<Attribute>,
    /// Attributes visible only to this definition
    pub attributes: HashMap<String, Attribute>,
    /// Attributes inherited by nested definitions
    pub cascaded_attributes: HashMap<String, Attribute>,
}

impl Definition {
    /// Create an empty definition with a name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set the parent definition name
    pub fn with_extends(mut self, extends: impl Into<String>) -> Self {
        self.extends = Some(extends.into());
        self
    }

    /// Set the preparer
    pub fn with_preparer(mut self, preparer: impl Into<String>) -> Self {
        self.preparer = Some(preparer.into());
        self
    }

    /// Set the template attribute
    pub fn with_template_attribute(mut self, template: Attribute) -> Self {
        self.template_attribute = Some(template);
        self
    }

    /// Add a local attribute
    pub fn with_attribute(mut self, name: impl Into<String>, attribute: Attribute) -> Self {
        self.put_attribute(name, attribute);
        self
    }

    /// Add a cascaded attribute
    pub fn with_cascaded_attribute(mut self, name: impl Into<String>, attribute: Attribute) -> Self {
        self.put_cascaded_attribute(name, attribute);
        self
    }

    /// Insert a local attribute, replacing any local attribute with the same name
    pub fn put_attribute(&mut self, name: impl Into<String>, attribute: Attribute) {
        self.attributes.insert(name.into(), attribute);
    }

    /// Insert a cascaded attribute, replacing any cascaded attribute with the same name
    pub fn put_cascaded_attribute(&mut self, name: impl Into<String>, attribute: Attribute) {
        self.cascaded_attributes.insert(name.into(), attribute);
    }

    /// Get a local attribute
    pub fn local_attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.get(name)
    }

    /// Get a cascaded attribute
    pub fn cascaded_attribute(&self, name: &str) -> Option<&Attribute> {
        self.cascaded_attributes.get(name)
    }

    /// Get an attribute, looking in the local map before the cascaded one
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.local_attribute(name)
            .or_else(|| self.cascaded_attribute(name))
    }

    /// Names of all local attributes
    pub fn local_attribute_names(&self) -> impl Iterator<Item = &str> {
        self.attributes.keys().map(|s| s.as_str())
    }

    /// Names of all cascaded attributes
    pub fn cascaded_attribute_names(&self) -> impl Iterator<Item = &str> {
        self.cascaded_attributes.keys().map(|s| s.as_str())
    }

    /// Check if this definition extends another one
    pub fn is_extending(&self) -> bool {
        self.extends.is_some()
    }
}
