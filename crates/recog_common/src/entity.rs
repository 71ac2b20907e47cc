//! Structured form of an entity extraction result.

use serde::{Deserialize, Serialize};

/// One recognized or expected value instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValuePair {
    /// Literal text span as it appeared in the utterance.
    pub original_value: String,
    /// Canonical value the platform resolved the span to.
    pub resolved_value: String,
}

impl ValuePair {
    pub fn new(original: impl Into<String>, resolved: impl Into<String>) -> Self {
        Self {
            original_value: original.into(),
            resolved_value: resolved.into(),
        }
    }
}

/// One attribute's extraction result: a name plus one or more value pairs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub attribute_name: String,
    pub values: Vec<ValuePair>,
}

impl Entity {
    pub fn new(attribute_name: impl Into<String>, values: Vec<ValuePair>) -> Self {
        Self {
            attribute_name: attribute_name.into(),
            values,
        }
    }
}

/// The unit of comparison: a set of entities keyed by attribute name.
///
/// Iteration order is construction order; it only stops mattering
/// inside [`crate::compare::sets_equal`]. Entities live for a single
/// fixture row's evaluation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySet {
    pub entities: Vec<Entity>,
}

impl EntitySet {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entity> {
        self.entities.iter()
    }
}

impl From<Vec<Entity>> for EntitySet {
    fn from(entities: Vec<Entity>) -> Self {
        Self { entities }
    }
}
