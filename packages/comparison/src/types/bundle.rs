//! Structured comparison content for one pair.

use serde::{Deserialize, Serialize};

use crate::scores;

/// One scored category row.
///
/// Scores are nominally in `[0,100]`; the prompt instructs `[20,60]` but
/// the range is not enforced here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryResult {
    pub name: String,
    pub item1_details: String,
    pub item2_details: String,
    pub item1_score: f64,
    pub item2_score: f64,

    /// Winner label; always one of the pair's two items
    pub winner: String,
}

/// Wire shape of the scorecard generation response.
#[derive(Debug, Clone, Deserialize)]
pub struct ScorecardResponse {
    pub categories: Vec<CategoryResult>,
    pub overall_winner: String,
    pub winning_reason: String,
}

/// Aggregated comparison content for one pair: the category rows plus the
/// derived performance numbers.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonBundle {
    pub categories: Vec<CategoryResult>,
    pub item1_performance: f64,
    pub item2_performance: f64,
    pub overall_score: f64,

    /// Absent when the scorecard fell back to neutral content
    pub overall_winner: Option<String>,
    pub winning_reason: String,
}

impl ComparisonBundle {
    /// Neutral fallback used when the scorecard block fails: no category
    /// rows, both sides at 50, and the fixed generic reason.
    pub fn neutral() -> Self {
        Self {
            categories: Vec::new(),
            item1_performance: scores::NEUTRAL_SCORE,
            item2_performance: scores::NEUTRAL_SCORE,
            overall_score: scores::NEUTRAL_SCORE,
            overall_winner: None,
            winning_reason: scores::NEUTRAL_REASON.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neutral_bundle_has_no_rows_and_even_scores() {
        let bundle = ComparisonBundle::neutral();
        assert!(bundle.categories.is_empty());
        assert_eq!(bundle.item1_performance, 50.0);
        assert_eq!(bundle.item2_performance, 50.0);
        assert_eq!(bundle.overall_score, 50.0);
        assert!(bundle.overall_winner.is_none());
        assert_eq!(bundle.winning_reason, "Both methods have their unique advantages");
    }

    #[test]
    fn test_scorecard_response_deserializes() {
        let raw = r#"{
            "categories": [
                {
                    "name": "Scalability",
                    "item1_details": "Grows with client base",
                    "item2_details": "Grows with ad spend",
                    "item1_score": 45,
                    "item2_score": 52,
                    "winner": "Dropshipping"
                }
            ],
            "overall_winner": "Dropshipping",
            "winning_reason": "Lower ongoing time commitment for beginners"
        }"#;

        let parsed: ScorecardResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.categories.len(), 1);
        assert_eq!(parsed.categories[0].item1_score, 45.0);
        assert_eq!(parsed.overall_winner, "Dropshipping");
    }
}
