use serde::{Deserialize, Serialize};

use crate::ml::{BidRange, FEATURE_COUNT};

/// Input features for a waiver acquisition bid prediction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AcquisitionFeatures {
    /// Waiver value tier of the player being acquired
    pub waiver_value_tier: i64,
    /// Regular-season weeks left in the fantasy schedule
    pub fantasy_regular_season_weeks_remaining: i64,
    /// Percentage of the league acquisition budget still available
    pub league_budget_pct_remaining: i64,
}

impl AcquisitionFeatures {
    /// Fixed-order encoding shared by all three estimators.
    pub fn to_vector(&self) -> [i64; FEATURE_COUNT] {
        [
            self.waiver_value_tier,
            self.fantasy_regular_season_weeks_remaining,
            self.league_budget_pct_remaining,
        ]
    }

    /// Domain-range check applied before inference.
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.waiver_value_tier < 0 {
            return Err("waiver_value_tier must be non-negative".to_string());
        }
        if self.fantasy_regular_season_weeks_remaining < 0 {
            return Err("fantasy_regular_season_weeks_remaining must be non-negative".to_string());
        }
        if !(0..=100).contains(&self.league_budget_pct_remaining) {
            return Err("league_budget_pct_remaining must be between 0 and 100".to_string());
        }
        Ok(())
    }
}

/// Predicted winning-bid amounts per percentile, two-decimal rounded.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PredictionOutput {
    pub winning_bid_10th_percentile: f64,
    pub winning_bid_50th_percentile: f64,
    pub winning_bid_90th_percentile: f64,
}

impl From<BidRange> for PredictionOutput {
    fn from(range: BidRange) -> Self {
        Self {
            winning_bid_10th_percentile: range.p10,
            winning_bid_50th_percentile: range.p50,
            winning_bid_90th_percentile: range.p90,
        }
    }
}

/// Fixed liveness payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusMessage {
    pub message: String,
}
