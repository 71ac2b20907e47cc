//! Order-independent structural comparison of entity sets.

use std::collections::HashMap;

use crate::entity::{EntitySet, ValuePair};

/// Decide whether two entity sets describe the same extraction result.
///
/// Entity order never matters: each side collapses to an
/// attribute-name-keyed map (last-seen wins on a duplicated name).
/// Value order only matters up to a stable sort by `resolved_value`;
/// pairs that tie on `resolved_value` keep their arrival order, so two
/// sets differing only in `original_value` across tied pairs compare
/// unequal unless the sorted positions line up. Fixture corpora were
/// graded with exactly this rule, so it is kept as-is.
///
/// Symmetric and reflexive. Operates on copies; the inputs are never
/// reordered.
pub fn sets_equal(expected: &EntitySet, actual: &EntitySet) -> bool {
    keyed_sorted(expected) == keyed_sorted(actual)
}

fn keyed_sorted(set: &EntitySet) -> HashMap<&str, Vec<&ValuePair>> {
    let mut map = HashMap::new();
    for entity in set.iter() {
        let mut values: Vec<&ValuePair> = entity.values.iter().collect();
        values.sort_by(|a, b| a.resolved_value.cmp(&b.resolved_value));
        map.insert(entity.attribute_name.as_str(), values);
    }
    map
}
