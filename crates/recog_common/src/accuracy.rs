//! Reduction of row verdicts to a single accuracy percentage.

use crate::evaluate::RowVerdict;

/// Aggregate all row verdicts into an accuracy percentage, rounded to
/// two decimals. Format-error rows count as failures. Returns `None`
/// for an empty verdict list so an empty fixture reads as "no rows"
/// instead of a division by zero.
pub fn aggregate(verdicts: &[RowVerdict]) -> Option<f64> {
    if verdicts.is_empty() {
        return None;
    }
    let passed = verdicts.iter().filter(|v| v.passed()).count();
    let percentage = 100.0 * passed as f64 / verdicts.len() as f64;
    Some((percentage * 100.0).round() / 100.0)
}
