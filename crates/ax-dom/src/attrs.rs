//! Element Attributes
//!
//! Attribute manipulation: get, set, remove, has.

use std::collections::HashMap;

/// Single attribute
#[derive(Debug, Clone)]
pub struct Attr {
    pub name: String,
    pub value: String,
}

impl Attr {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Ordered attribute collection
///
/// Preserves insertion order on enumeration; lookups go through a
/// name index.
#[derive(Debug, Clone, Default)]
pub struct AttrMap {
    attributes: Vec<Attr>,
    by_name: HashMap<String, usize>,
}

impl AttrMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get number of attributes
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// Check if the map is empty
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Get attribute value by name
    pub fn get(&self, name: &str) -> Option<&str> {
        self.by_name
            .get(name)
            .and_then(|&i| self.attributes.get(i))
            .map(|a| a.value.as_str())
    }

    /// Set attribute, replacing any existing value
    pub fn set(&mut self, name: &str, value: &str) {
        if let Some(&index) = self.by_name.get(name) {
            self.attributes[index].value = value.to_string();
        } else {
            let index = self.attributes.len();
            self.by_name.insert(name.to_string(), index);
            self.attributes.push(Attr::new(name, value));
        }
    }

    /// Remove attribute by name
    pub fn remove(&mut self, name: &str) -> Option<Attr> {
        if let Some(&index) = self.by_name.get(name) {
            self.by_name.remove(name);
            // Update indices for items after removed
            for (_, idx) in self.by_name.iter_mut() {
                if *idx > index {
                    *idx -= 1;
                }
            }
            Some(self.attributes.remove(index))
        } else {
            None
        }
    }

    /// Check if attribute exists
    pub fn has(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Attribute names in insertion order
    pub fn names(&self) -> Vec<&str> {
        self.attributes.iter().map(|a| a.name.as_str()).collect()
    }

    /// Iterate over attributes in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Attr> {
        self.attributes.iter()
    }
}
