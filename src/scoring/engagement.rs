//! Total engagement score aggregation.

use rust_decimal::Decimal;

use crate::models::leaderboard::EngagementScore;

pub struct EngagementAggregator;

impl EngagementAggregator {
    /// Combine the four category scores; TES is their arithmetic sum.
    pub fn aggregate(sec: Decimal, eec: Decimal, cec: Decimal, iec: Decimal) -> EngagementScore {
        EngagementScore {
            socialization: sec,
            externalization: eec,
            combination: cec,
            internalization: iec,
            total: sec + eec + cec + iec,
        }
    }

    /// Share of `total` held by `score`, on a 0-100 scale.
    ///
    /// A zero total reports 0% rather than dividing; zero engagement is a
    /// valid state, not an arithmetic error.
    pub fn percentage_of(score: Decimal, total: Decimal) -> Decimal {
        if total.is_zero() {
            Decimal::ZERO
        } else {
            score * Decimal::ONE_HUNDRED / total
        }
    }
}
