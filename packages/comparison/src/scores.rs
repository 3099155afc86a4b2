//! Score aggregation over the category scorecard.

use crate::types::bundle::CategoryResult;

/// Performance value used when no categories are available.
pub const NEUTRAL_SCORE: f64 = 50.0;

/// Winning reason used when no categories are available.
pub const NEUTRAL_REASON: &str = "Both methods have their unique advantages";

/// Aggregate performance for one pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Performance {
    pub item1: f64,
    pub item2: f64,
    pub overall: f64,
}

/// Mean per-side scores and the derived overall score.
///
/// The overall score centers at 50 and shifts by half the difference
/// between the two sides. An empty category list yields the neutral
/// 50/50/50. No clamping beyond the formula.
pub fn aggregate(categories: &[CategoryResult]) -> Performance {
    if categories.is_empty() {
        return Performance {
            item1: NEUTRAL_SCORE,
            item2: NEUTRAL_SCORE,
            overall: NEUTRAL_SCORE,
        };
    }

    let count = categories.len() as f64;
    let item1 = categories.iter().map(|c| c.item1_score).sum::<f64>() / count;
    let item2 = categories.iter().map(|c| c.item2_score).sum::<f64>() / count;
    let overall = 50.0 + (item1 - item2) / 2.0;

    Performance {
        item1,
        item2,
        overall,
    }
}
