//! XML entity abstraction

use crate::error::{ParseError, Result};
use std::str::FromStr;

/// Read access to a launch frontend element
pub trait Entity {
    /// Get entity type name (e.g., "launch", "node")
    fn type_name(&self) -> &str;

    /// Get attribute as string
    fn get_attr_str(&self, name: &str, optional: bool) -> Result<Option<String>>;

    /// Get all attributes as key-value pairs
    fn attributes(&self) -> Vec<(&str, &str)>;
}

/// Extension trait for type-aware attribute access
pub trait EntityExt: Entity {
    /// Get attribute value with type coercion
    fn get_attr<T: FromStr>(&self, name: &str, optional: bool) -> Result<Option<T>> {
        match self.get_attr_str(name, optional)? {
            Some(value) => {
                let parsed = value.parse::<T>().map_err(|_| ParseError::TypeCoercion {
                    attribute: name.to_string(),
                    value: value.to_string(),
                    expected_type: std::any::type_name::<T>(),
                })?;
                Ok(Some(parsed))
            }
            None => Ok(None),
        }
    }
}

impl<T: Entity + ?Sized> EntityExt for T {}

/// XML entity implementation wrapping roxmltree::Node
pub struct XmlEntity<'a, 'input> {
    node: roxmltree::Node<'a, 'input>,
}

impl<'a, 'input> XmlEntity<'a, 'input> {
    pub fn new(node: roxmltree::Node<'a, 'input>) -> Self {
        Self { node }
    }

    /// Iterate over child elements, skipping text and comments
    pub fn children(&self) -> impl Iterator<Item = XmlEntity<'a, 'input>> {
        self.node
            .children()
            .filter(|n| n.is_element())
            .map(XmlEntity::new)
    }
}

impl<'a, 'input> Entity for XmlEntity<'a, 'input> {
    fn type_name(&self) -> &str {
        self.node.tag_name().name()
    }

    fn get_attr_str(&self, name: &str, optional: bool) -> Result<Option<String>> {
        match self.node.attribute(name) {
            Some(value) => Ok(Some(value.to_string())),
            None if optional => Ok(None),
            None => Err(ParseError::MissingAttribute {
                element: self.type_name().to_string(),
                attribute: name.to_string(),
            }),
        }
    }

    fn attributes(&self) -> Vec<(&str, &str)> {
        self.node
            .attributes()
            .map(|attr| (attr.name(), attr.value()))
            .collect()
    }
}
