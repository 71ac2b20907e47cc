//! Per-row evaluation: intent-name equality combined with entity
//! comparison, producing one verdict per fixture row.

use crate::codec::{decode, encode};
use crate::compare::sets_equal;
use crate::response::{adapt_entities, extract_intent_name};

/// Literal written to the `correct` column when the expected-entities
/// cell fails to decode. Coerced to a failure at aggregation time.
pub const INVALID_FORMAT_DIAGNOSTIC: &str = "Invalid expected entity format";

/// One fixture row's expectation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowCase {
    pub user_phrase: String,
    pub intent_name: String,
    /// Raw expected-entities cell. `None` when the fixture has no
    /// `entities` column or the cell is empty for this row.
    pub entities: Option<String>,
}

/// Raw outcome of one recognize request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceReply {
    /// Whether the call returned HTTP 200.
    pub success: bool,
    /// Response body verbatim. On failure this doubles as the
    /// diagnostic carried into the output artifact.
    pub body: String,
}

impl ServiceReply {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            success: true,
            body: body.into(),
        }
    }

    pub fn failed(body: impl Into<String>) -> Self {
        Self {
            success: false,
            body: body.into(),
        }
    }
}

/// Outcome of one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowVerdict {
    pub intent_match: bool,
    /// `None` when the row carried no entity expectation, or when the
    /// expected text failed to decode (no comparison was performed).
    pub entity_match: Option<bool>,
    /// The expected-entities cell did not parse.
    pub format_error: bool,
    pub recognized_intent_name: String,
    /// Encoded recognized entities, or the raw response body on a
    /// failed call. `None` when the row carried no entity expectation.
    pub recognized_entities_text: Option<String>,
}

impl RowVerdict {
    /// Whether the row counts as a pass when aggregating.
    pub fn passed(&self) -> bool {
        if self.format_error {
            return false;
        }
        match self.entity_match {
            Some(entity_match) => self.intent_match && entity_match,
            None => self.intent_match,
        }
    }

    /// Rendering for the `correct` output column: `true`, `false`, or
    /// the format diagnostic verbatim.
    pub fn correct_cell(&self) -> String {
        if self.format_error {
            INVALID_FORMAT_DIAGNOSTIC.to_string()
        } else {
            self.passed().to_string()
        }
    }
}

/// Judge one fixture row against the service's reply.
///
/// On a failed call the raw body stands in for both the intent name
/// and the entities text, so the failure stays visible in the output
/// artifact. A success body that is not JSON also leaves the raw body
/// as the recognized intent name; such a row can never match.
pub fn evaluate_row(case: &RowCase, reply: &ServiceReply) -> RowVerdict {
    let recognized_intent_name = if reply.success {
        extract_intent_name(&reply.body).unwrap_or_else(|| reply.body.clone())
    } else {
        reply.body.clone()
    };
    let intent_match = case.intent_name == recognized_intent_name;

    let Some(expected_text) = case.entities.as_deref() else {
        return RowVerdict {
            intent_match,
            entity_match: None,
            format_error: false,
            recognized_intent_name,
            recognized_entities_text: None,
        };
    };

    let actual = adapt_entities(&reply.body);
    let recognized_entities_text = Some(match (&actual, reply.success) {
        (Some(set), true) => encode(set),
        _ => reply.body.clone(),
    });

    match decode(expected_text) {
        Err(_) => RowVerdict {
            intent_match,
            entity_match: None,
            format_error: true,
            recognized_intent_name,
            recognized_entities_text,
        },
        Ok(expected) => {
            let entity_match = match &actual {
                Some(set) => sets_equal(&expected, set),
                None => false,
            };
            RowVerdict {
                intent_match,
                entity_match: Some(entity_match),
                format_error: false,
                recognized_intent_name,
                recognized_entities_text,
            }
        }
    }
}
