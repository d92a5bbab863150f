//! Flat listing of the non-empty attribute values in a hierarchy.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::node::Hierarchy;

/// Attributes collected when the caller does not choose any.
pub const DEFAULT_ELEMENT_ATTRIBUTES: [&str; 4] =
    ["text", "resource-id", "content-desc", "accessibilityText"];

/// Non-empty attribute values of one node, in requested-attribute order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementInfo {
    fields: Vec<(String, String)>,
}

impl ElementInfo {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl Serialize for ElementInfo {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Collect, in document order, every node that has at least one of
/// `attributes` set to a value that is not blank.
///
/// Values are reported as-is; blankness is judged after trimming.
pub fn extract_elements(hierarchy: &Hierarchy, attributes: &[String]) -> Vec<ElementInfo> {
    hierarchy
        .descendants(hierarchy.root())
        .filter_map(|id| {
            let mut element = ElementInfo::default();
            for attr in attributes {
                if element.get(attr).is_some() {
                    continue;
                }
                if let Some(value) = hierarchy.attribute(id, attr) {
                    if !value.trim().is_empty() {
                        element.fields.push((attr.clone(), value.to_string()));
                    }
                }
            }
            (!element.is_empty()).then_some(element)
        })
        .collect()
}
