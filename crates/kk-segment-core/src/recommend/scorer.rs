//! Candidate pooling, scoring and ranking.

use std::collections::HashSet;

use serde::Serialize;

use crate::record::UNKNOWN;
use crate::summary::NO_VALUE;

use super::catalog::triggered_entries;
use super::RecommendationProfile;

/// A candidate label with its relevance score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoredRecommendation {
    pub label: &'static str,
    pub score: u32,
}

/// Labels of every triggered entry, de-duplicated in first-seen order.
pub fn candidate_pool(profile: &RecommendationProfile) -> Vec<&'static str> {
    let mut seen = HashSet::new();
    triggered_entries(profile)
        .flat_map(|entry| entry.labels)
        .filter(|label| seen.insert(*label))
        .collect()
}

/// Additive relevance score of one label for a profile.
///
/// +3 education literal in label, +3 work status literal in label, +2 age
/// group name in label, +2 "outreach" when engagement < 0.5, +2 "leadership"
/// when engagement > 1.5. Matching is case-insensitive; sentinel literals
/// never match.
pub fn score_candidate(label: &str, profile: &RecommendationProfile) -> u32 {
    let label = label.to_lowercase();
    let mut score = 0;

    if literal_matches(&label, &profile.education) {
        score += 3;
    }
    if literal_matches(&label, &profile.work_status) {
        score += 3;
    }
    if label.contains(&profile.age_group.as_str().to_lowercase()) {
        score += 2;
    }
    if profile.engagement_level < 0.5 && label.contains("outreach") {
        score += 2;
    } else if profile.engagement_level > 1.5 && label.contains("leadership") {
        score += 2;
    }

    score
}

/// Score the pool and sort by score descending.
///
/// The sort is stable, so equal scores keep pool order.
pub fn rank_candidates(profile: &RecommendationProfile) -> Vec<ScoredRecommendation> {
    let mut ranked: Vec<ScoredRecommendation> = candidate_pool(profile)
        .into_iter()
        .map(|label| ScoredRecommendation {
            label,
            score: score_candidate(label, profile),
        })
        .collect();
    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked
}

fn literal_matches(label_lower: &str, literal: &str) -> bool {
    !is_sentinel(literal) && label_lower.contains(&literal.to_lowercase())
}

/// Whether a categorical value is a fallback placeholder.
pub fn is_sentinel(value: &str) -> bool {
    value.is_empty() || value == UNKNOWN || value == NO_VALUE
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::summary::AgeGroup;

    fn profile(
        education: &str,
        work: &str,
        sex: &str,
        age_group: AgeGroup,
        engagement: f64,
        mean_age: f64,
    ) -> RecommendationProfile {
        RecommendationProfile {
            education: education.into(),
            work_status: work.into(),
            sex: sex.into(),
            age_group,
            engagement_level: engagement,
            mean_age,
        }
    }

    #[test]
    fn test_pool_deduplicates_and_keeps_catalog_order() {
        // Unemployed young adult with high engagement: SDG 1, 8, 9, 11, 12, 13,
        // 14, 15, 16, 17 trigger
        let p = profile("Unknown", "Unemployed", "-", AgeGroup::YoungAdult, 1.8, 22.0);
        let pool = candidate_pool(&p);

        assert_eq!(pool.len(), 50);
        assert_eq!(pool[0], "SDG 1: Poverty Alleviation Workshop");
        assert!(pool.iter().all(|l| !l.starts_with("SDG 2:")));
        let unique: HashSet<_> = pool.iter().collect();
        assert_eq!(unique.len(), pool.len());
    }

    #[test]
    fn test_scoring_rules() {
        let p = profile("Unknown", "Unknown", "-", AgeGroup::Adult, 1.8, 30.0);
        assert_eq!(score_candidate("SDG 5: Women Leadership Program", &p), 2);
        assert_eq!(score_candidate("SDG 11: Urban Planning Workshop", &p), 0);
        assert_eq!(score_candidate("Adult Education Outreach", &p), 2);

        let low = profile("Unknown", "Unknown", "-", AgeGroup::Teen, 0.2, 15.0);
        assert_eq!(score_candidate("Teen Outreach Leadership Camp", &low), 4);

        let literal = profile("Vocational", "Employed", "-", AgeGroup::Adult, 1.0, 30.0);
        assert_eq!(score_candidate("vocational skills for the employed", &literal), 6);
    }

    #[test]
    fn test_sentinels_never_match() {
        assert!(is_sentinel("Unknown"));
        assert!(is_sentinel("-"));
        assert!(is_sentinel(""));
        assert!(!is_sentinel("Employed"));

        let p = profile("-", "Unknown", "-", AgeGroup::Adult, 1.0, 30.0);
        assert_eq!(score_candidate("Unknown - label", &p), 0);
    }

    #[test]
    fn test_rank_is_stable_for_ties() {
        let p = profile("Unknown", "Unemployed", "Female", AgeGroup::Teen, 1.0, 16.0);
        let pool = candidate_pool(&p);
        let ranked = rank_candidates(&p);

        // Female triggers SDG 5 leadership label but engagement is not > 1.5
        assert!(ranked.iter().all(|r| r.score == 0));
        let ranked_labels: Vec<&str> = ranked.iter().map(|r| r.label).collect();
        assert_eq!(ranked_labels, pool);
    }

    #[test]
    fn test_rank_orders_by_score() {
        let p = profile("Unknown", "Employed", "Female", AgeGroup::YoungAdult, 2.0, 21.0);
        let ranked = rank_candidates(&p);

        assert_eq!(ranked[0].label, "SDG 5: Women Leadership Program");
        assert_eq!(ranked[0].score, 2);
        assert!(ranked.windows(2).all(|w| w[0].score >= w[1].score));
    }
}
