//! Text codec for entity sets stored in a single fixture cell.
//!
//! The format packs a whole extraction result into one delimited
//! string so it fits a spreadsheet column:
//!
//! ```text
//! destination==Paris=>PAR-|-Lyon=>LYS-||-date==tomorrow=>2026-08-24
//! ```
//!
//! Four reserved tokens, outermost first: `-||-` separates entities,
//! `==` separates an attribute name from its values, `-|-` separates
//! value pairs, `=>` separates an original value from its resolved
//! value. The bare placeholder `--` means "no entities".

use std::collections::HashSet;

use thiserror::Error;

use crate::entity::{Entity, EntitySet, ValuePair};

pub const ENTITY_DELIMITER: &str = "-||-";
pub const ATTRIBUTE_VALUES_DELIMITER: &str = "==";
pub const VALUES_DELIMITER: &str = "-|-";
pub const ORIGINAL_RESOLVED_DELIMITER: &str = "=>";
pub const NO_ENTITIES_PLACEHOLDER: &str = "--";

/// Why an expected-entities cell failed to decode.
///
/// Always row-scoped: a bad cell marks that row invalid, it never
/// aborts the run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("entity chunk is not `name==values`: {0:?}")]
    MalformedEntity(String),

    #[error("value pair is not `original=>resolved`: {0:?}")]
    MalformedValuePair(String),

    #[error("attribute name appears more than once: {0:?}")]
    DuplicateAttribute(String),
}

/// Parse an entity-set cell into its structured form.
///
/// Whitespace around each entity chunk is trimmed; whitespace inside
/// attribute names and values is preserved verbatim. Any chunk that
/// does not split into exactly the expected arity fails the whole
/// decode; partial results are never returned.
pub fn decode(text: &str) -> Result<EntitySet, DecodeError> {
    let chunks: Vec<&str> = text.split(ENTITY_DELIMITER).map(str::trim).collect();
    if chunks.len() == 1 && chunks[0] == NO_ENTITIES_PLACEHOLDER {
        return Ok(EntitySet::empty());
    }

    let mut seen = HashSet::new();
    let mut entities = Vec::with_capacity(chunks.len());
    for chunk in chunks {
        let parts: Vec<&str> = chunk.split(ATTRIBUTE_VALUES_DELIMITER).collect();
        let (attribute_name, value_list) = match parts[..] {
            [name, values] => (name, values),
            _ => return Err(DecodeError::MalformedEntity(chunk.to_string())),
        };
        if !seen.insert(attribute_name.to_string()) {
            return Err(DecodeError::DuplicateAttribute(attribute_name.to_string()));
        }

        let mut values = Vec::new();
        for pair in value_list.split(VALUES_DELIMITER) {
            let parts: Vec<&str> = pair.split(ORIGINAL_RESOLVED_DELIMITER).collect();
            let (original, resolved) = match parts[..] {
                [original, resolved] => (original, resolved),
                _ => return Err(DecodeError::MalformedValuePair(pair.to_string())),
            };
            values.push(ValuePair::new(original, resolved));
        }
        entities.push(Entity::new(attribute_name, values));
    }

    Ok(EntitySet::from(entities))
}

/// Render an entity set back into the cell format.
///
/// Left inverse of [`decode`]: entities and values are emitted in the
/// set's own iteration order, never re-sorted or deduplicated. An
/// empty set becomes the placeholder token.
pub fn encode(set: &EntitySet) -> String {
    if set.is_empty() {
        return NO_ENTITIES_PLACEHOLDER.to_string();
    }

    set.iter()
        .map(|entity| {
            let values = entity
                .values
                .iter()
                .map(|pair| {
                    format!(
                        "{}{}{}",
                        pair.original_value, ORIGINAL_RESOLVED_DELIMITER, pair.resolved_value
                    )
                })
                .collect::<Vec<_>>()
                .join(VALUES_DELIMITER);
            format!(
                "{}{}{}",
                entity.attribute_name, ATTRIBUTE_VALUES_DELIMITER, values
            )
        })
        .collect::<Vec<_>>()
        .join(ENTITY_DELIMITER)
}
