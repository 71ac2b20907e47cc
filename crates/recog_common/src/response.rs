//! Adapter from the recognize endpoint's JSON body to the structured form.

use serde::Deserialize;
use serde_json::Value;

use crate::entity::{Entity, EntitySet, ValuePair};

/// Prefix the platform prepends to FAQ intent names in the response.
pub const FAQ_NAME_PREFIX: &str = "FAQ#&name=";

#[derive(Debug, Deserialize)]
struct EntityDto {
    attribute_name: String,
    values: Vec<ValuePairDto>,
}

#[derive(Debug, Deserialize)]
struct ValuePairDto {
    original_value: String,
    resolved_value: String,
}

impl From<EntityDto> for Entity {
    fn from(dto: EntityDto) -> Self {
        Entity::new(
            dto.attribute_name,
            dto.values
                .into_iter()
                .map(|v| ValuePair::new(v.original_value, v.resolved_value))
                .collect(),
        )
    }
}

/// Pull the recognized entities out of a raw response body.
///
/// A body that is not JSON, or is JSON without an `entities` key (or
/// with `entities: null`), counts as "no entities recognized" and
/// yields an empty set. `None` only when `entities` is present but
/// structurally malformed; the comparison then fails the row.
pub fn adapt_entities(body: &str) -> Option<EntitySet> {
    let value: Value = match serde_json::from_str(body) {
        Ok(v) => v,
        Err(_) => return Some(EntitySet::empty()),
    };
    match value.get("entities") {
        None | Some(Value::Null) => Some(EntitySet::empty()),
        Some(entities) => {
            let dtos: Vec<EntityDto> = serde_json::from_value(entities.clone()).ok()?;
            Some(EntitySet::from(
                dtos.into_iter().map(Entity::from).collect::<Vec<_>>(),
            ))
        }
    }
}

/// Pull the recognized intent name out of a raw response body,
/// stripping the FAQ prefix when present. `None` when the body is not
/// JSON or carries no string `name`.
pub fn extract_intent_name(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    let name = value.get("name")?.as_str()?;
    Some(
        name.strip_prefix(FAQ_NAME_PREFIX)
            .unwrap_or(name)
            .to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adapts_entities_from_response_body() {
        let body = r#"{"name":"book_flight","entities":[
            {"attribute_name":"destination","values":[
                {"original_value":"Paris","resolved_value":"PAR"}]}]}"#;
        let set = adapt_entities(body).unwrap();
        assert_eq!(set.len(), 1);
        assert_eq!(set.entities[0].attribute_name, "destination");
        assert_eq!(
            set.entities[0].values[0],
            ValuePair::new("Paris", "PAR")
        );
    }

    #[test]
    fn empty_entities_array_yields_empty_set() {
        let set = adapt_entities(r#"{"name":"x","entities":[]}"#).unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn missing_or_null_entities_yields_empty_set() {
        assert!(adapt_entities(r#"{"name":"x"}"#).unwrap().is_empty());
        assert!(adapt_entities(r#"{"name":"x","entities":null}"#)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn non_json_body_yields_empty_set() {
        assert!(adapt_entities("502 Bad Gateway").unwrap().is_empty());
    }

    #[test]
    fn malformed_entities_shape_yields_none() {
        assert!(adapt_entities(r#"{"entities":"not-a-list"}"#).is_none());
        assert!(adapt_entities(r#"{"entities":[{"attribute_name":"d"}]}"#).is_none());
    }

    #[test]
    fn extracts_intent_name() {
        assert_eq!(
            extract_intent_name(r#"{"name":"book_flight"}"#).as_deref(),
            Some("book_flight")
        );
    }

    #[test]
    fn strips_faq_prefix_from_intent_name() {
        assert_eq!(
            extract_intent_name(r#"{"name":"FAQ#&name=refund_policy"}"#).as_deref(),
            Some("refund_policy")
        );
    }

    #[test]
    fn intent_name_missing_or_non_json_yields_none() {
        assert!(extract_intent_name("plain text error").is_none());
        assert!(extract_intent_name(r#"{"entities":[]}"#).is_none());
        assert!(extract_intent_name(r#"{"name":42}"#).is_none());
    }
}
