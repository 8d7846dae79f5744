//! Category score computation.

use rust_decimal::Decimal;

use crate::models::tally::ActivityTally;
use crate::models::weights::{CategoryWeights, WeightKind};

/// Data-driven scorer: one implementation serves all four categories, which
/// differ only in their [`CategoryWeights`] configuration.
pub struct CategoryScorer;

impl CategoryScorer {
    /// Weighted sum of the tally values named by the weight schema.
    ///
    /// Percentage fields carry AI scores on a 0-100 magnitude and are
    /// renormalized before the multiply; direct fields are plain counts.
    /// Fields absent from the tally contribute zero. Pure and deterministic;
    /// summation follows schema order.
    pub fn score(weights: &CategoryWeights, tally: &ActivityTally) -> Decimal {
        weights
            .fields
            .iter()
            .map(|fw| {
                let value = tally.get(&fw.field);
                match fw.kind {
                    WeightKind::Percentage => fw.weight * value / Decimal::ONE_HUNDRED,
                    WeightKind::Direct => fw.weight * value,
                }
            })
            .sum()
    }
}
