//! Selection parameters for the recommender.

use serde::{Deserialize, Serialize};

use crate::error::{SegmentError, SegmentResult};

/// How many ranked candidates are kept and how much randomness is allowed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RecommendationConfig {
    /// Upper bound on labels per recommendation.
    #[serde(default = "default_max_selected")]
    pub max_selected: usize,

    /// Top-ranked labels always kept when enough candidates exist.
    #[serde(default = "default_top_fixed")]
    pub top_fixed: usize,

    /// Ranks after `top_fixed` eligible for random picks when the pool is large.
    #[serde(default = "default_random_window")]
    pub random_window: usize,

    #[serde(default = "default_separator")]
    pub separator: String,

    /// Seed for selection and label picks (None = entropy).
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_max_selected() -> usize {
    3
}

fn default_top_fixed() -> usize {
    2
}

fn default_random_window() -> usize {
    4
}

fn default_separator() -> String {
    " • ".to_string()
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            max_selected: default_max_selected(),
            top_fixed: default_top_fixed(),
            random_window: default_random_window(),
            separator: default_separator(),
            seed: None,
        }
    }
}

impl RecommendationConfig {
    pub fn validate(&self) -> SegmentResult<()> {
        if self.max_selected == 0 {
            return Err(SegmentError::invalid_parameter(
                "recommendation.max_selected must be > 0",
            ));
        }
        if self.top_fixed > self.max_selected {
            return Err(SegmentError::invalid_parameter(format!(
                "recommendation.top_fixed ({}) must be <= max_selected ({})",
                self.top_fixed, self.max_selected
            )));
        }
        if self.top_fixed < self.max_selected && self.random_window < self.max_selected - self.top_fixed
        {
            return Err(SegmentError::invalid_parameter(
                "recommendation.random_window must cover the random picks",
            ));
        }
        Ok(())
    }

    /// Labels picked at random on top of the fixed ones.
    pub fn random_picks(&self) -> usize {
        self.max_selected.saturating_sub(self.top_fixed)
    }
}
