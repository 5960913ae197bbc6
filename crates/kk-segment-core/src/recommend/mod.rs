//! Rule-based SDG program recommendations for group profiles.
//!
//! # Pipeline
//!
//! 1. Evaluate every [`catalog::CATALOG`] trigger against the profile
//! 2. Pool the labels of triggered entries, de-duplicated
//! 3. Score each label ([`score_candidate`])
//! 4. Stable-sort by score descending
//! 5. Keep the top two and pick one more at random from the next ranks
//! 6. Join with `" • "`, or return [`FALLBACK_RECOMMENDATION`] if nothing was selected
//!
//! All randomness comes from a caller-supplied [`RandomSource`].

pub mod catalog;
mod config;
pub mod random;
mod scorer;

pub use config::RecommendationConfig;
pub use random::{RandomSource, RngSource, ScriptedSource};
pub use scorer::{candidate_pool, is_sentinel, rank_candidates, score_candidate, ScoredRecommendation};

use serde::Serialize;

use crate::error::SegmentResult;
use crate::summary::{AgeGroup, GroupProfile};

/// Returned when no candidate is selected.
pub const FALLBACK_RECOMMENDATION: &str =
    "SDG 4: Quality Education Program • SDG 8: Decent Work Initiative • SDG 17: Partnership Building";

/// The profile fields the recommender reads.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationProfile {
    pub education: String,
    pub work_status: String,
    pub sex: String,
    pub age_group: AgeGroup,
    pub engagement_level: f64,
    pub mean_age: f64,
}

impl RecommendationProfile {
    pub fn from_group(profile: &GroupProfile) -> Self {
        Self {
            education: profile.top_education().to_string(),
            work_status: profile.top_work_status().to_string(),
            sex: profile.top_sex().to_string(),
            age_group: profile.age_group(),
            engagement_level: profile.engagement_level,
            mean_age: profile.mean_age,
        }
    }

    /// True when education, work status and sex are all placeholders and
    /// nobody in the group attended or voted.
    ///
    /// Such a profile carries no evidence at all and receives the fallback
    /// recommendation. Engaged groups still rank their engagement candidates.
    pub fn is_uninformative(&self) -> bool {
        is_sentinel(&self.education)
            && is_sentinel(&self.work_status)
            && is_sentinel(&self.sex)
            && self.engagement_level == 0.0
    }
}

/// Selected labels and their formatted form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub labels: Vec<String>,
    pub text: String,
}

impl Recommendation {
    fn fallback() -> Self {
        Self {
            labels: Vec::new(),
            text: FALLBACK_RECOMMENDATION.to_string(),
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Scores the catalog against profiles and selects a small varied set.
#[derive(Debug, Clone)]
pub struct Recommender {
    config: RecommendationConfig,
}

impl Default for Recommender {
    fn default() -> Self {
        Self {
            config: RecommendationConfig::default(),
        }
    }
}

impl Recommender {
    pub fn new(config: RecommendationConfig) -> SegmentResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &RecommendationConfig {
        &self.config
    }

    /// Recommend programs for one profile.
    pub fn recommend(
        &self,
        profile: &RecommendationProfile,
        source: &mut dyn RandomSource,
    ) -> Recommendation {
        if profile.is_uninformative() {
            tracing::debug!("Profile has no demographic or engagement evidence, using fallback recommendation");
            return Recommendation::fallback();
        }

        let ranked = rank_candidates(profile);
        let labels: Vec<String> = self
            .select(&ranked, source)
            .into_iter()
            .map(str::to_string)
            .collect();

        tracing::debug!(
            candidates = ranked.len(),
            selected = labels.len(),
            "Ranked recommendation candidates"
        );

        if labels.is_empty() {
            return Recommendation::fallback();
        }
        let text = labels.join(&self.config.separator);
        Recommendation { labels, text }
    }

    /// Recommend programs for a group profile.
    pub fn recommend_for_group(
        &self,
        profile: &GroupProfile,
        source: &mut dyn RandomSource,
    ) -> Recommendation {
        self.recommend(&RecommendationProfile::from_group(profile), source)
    }

    /// Bounded-random selection over a ranked list.
    ///
    /// With at least `top_fixed + random_window` candidates the random picks
    /// come from the window after the fixed ones; with at least
    /// `max_selected` they come from everything after the fixed ones;
    /// otherwise the top `max_selected` are taken as-is.
    pub fn select(
        &self,
        ranked: &[ScoredRecommendation],
        source: &mut dyn RandomSource,
    ) -> Vec<&'static str> {
        let fixed = self.config.top_fixed;
        let n = ranked.len();

        if n < self.config.max_selected {
            return ranked.iter().map(|r| r.label).collect();
        }

        let window_end = if n >= fixed + self.config.random_window {
            fixed + self.config.random_window
        } else {
            n
        };

        let mut selected: Vec<&'static str> = ranked[..fixed].iter().map(|r| r.label).collect();
        let mut window: Vec<&'static str> = ranked[fixed..window_end].iter().map(|r| r.label).collect();
        for _ in 0..self.config.random_picks() {
            if window.is_empty() {
                break;
            }
            let pick = source.pick_index(window.len());
            selected.push(window.remove(pick));
        }
        selected
    }
}
