//! Packaging of group profiles into cards and chart datasets.
//!
//! No decision logic lives here beyond display choices: label wording,
//! text formats, rounding, and colours. The only randomness (event cluster
//! labels) goes through a [`RandomSource`].

mod dtos;

pub use dtos::{
    ChartData, ChartDataset, ChartPoint, ClusterCard, DashboardReport, EventView, SupportGroupCard,
    SupportView,
};

use crate::clustering::{ClusteringResult, Partition};
use crate::encoder::FeatureMatrix;
use crate::error::{SegmentError, SegmentResult};
use crate::recommend::{RandomSource, Recommendation};
use crate::summary::{GroupProfile, SupportProfile};

/// Dataset colours of the event view, by group id.
pub const EVENT_COLORS: [&str; 3] = [
    "rgba(54, 162, 235, 0.7)",
    "rgba(255, 99, 132, 0.7)",
    "rgba(255, 206, 86, 0.7)",
];

/// Dataset colours of the needs-support view, by group id.
pub const SUPPORT_COLORS: [&str; 3] = [
    "rgba(255, 99, 132, 0.7)",
    "rgba(255, 206, 86, 0.7)",
    "rgba(75, 192, 192, 0.7)",
];

/// Needs-support group names, by group id.
pub const SUPPORT_LABELS: [&str; 3] = [
    "SDG Priority Group",
    "SDG Development Group",
    "SDG Empowerment Group",
];

const LEADERSHIP_LABELS: [&str; 3] = [
    "SDG Leadership Circle",
    "SDG Innovation Group",
    "SDG Empowerment Network",
];

const DEVELOPMENT_LABELS: [&str; 3] = [
    "SDG Development Cluster",
    "SDG Support Network",
    "SDG Growth Initiative",
];

const COMMUNITY_LABELS: [&str; 3] = [
    "SDG Community Group",
    "SDG Opportunity Circle",
    "SDG Partnership Network",
];

/// Focus shown when a group falls short on no goal.
pub const DEFAULT_FOCUS: &str = "SDG 17";

/// Label choices for an event cluster.
///
/// Highly engaged, well-educated groups get a leadership name; poorer,
/// less-educated groups a development name; everyone else a community name.
pub fn event_label_choices(profile: &GroupProfile) -> &'static [&'static str; 3] {
    if profile.engagement_level > 1.5 && profile.mean_education_level > 2.0 {
        &LEADERSHIP_LABELS
    } else if profile.mean_poverty < 0.5 && profile.mean_education_level < 2.0 {
        &DEVELOPMENT_LABELS
    } else {
        &COMMUNITY_LABELS
    }
}

/// Pick one event cluster label.
pub fn event_label(profile: &GroupProfile, source: &mut dyn RandomSource) -> &'static str {
    let choices = event_label_choices(profile);
    choices[source.pick_index(choices.len())]
}

/// `Avg Age: 16.0 • Female • Elementary graduate • Unemployed • Focus: SDG 1, SDG 4`
///
/// Education and work appear only when some member reported them; the focus
/// suffix lists at most two priorities and only when there are any.
pub fn demographic_summary(profile: &GroupProfile) -> String {
    let mut summary = format!("Avg Age: {:.1} • {}", profile.mean_age, profile.top_sex());
    if let Some(education) = &profile.mode_education {
        summary.push_str(" • ");
        summary.push_str(education);
    }
    if let Some(work) = &profile.mode_work_status {
        summary.push_str(" • ");
        summary.push_str(work);
    }

    let priorities = profile.sdg_priorities();
    if !priorities.is_empty() {
        let shown = &priorities[..priorities.len().min(2)];
        summary.push_str(&format!(" • Focus: {}", shown.join(", ")));
    }
    summary
}

pub fn engagement_summary(profile: &GroupProfile) -> String {
    format!(
        "Economic: {:.1} • Civic: {:.1}",
        profile.mean_economic_participation, profile.mean_civic_engagement
    )
}

/// Up to three priorities joined by ", ", or [`DEFAULT_FOCUS`].
pub fn sdg_focus(profile: &GroupProfile) -> String {
    let priorities = profile.sdg_priorities();
    if priorities.is_empty() {
        DEFAULT_FOCUS.to_string()
    } else {
        priorities[..priorities.len().min(3)].join(", ")
    }
}

pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Scatter datasets from the first two dimensions of each group's rows.
///
/// Dataset `i` is named by `label(i)` and coloured `colors[i % colors.len()]`.
pub fn chart_data<F>(
    matrix: &FeatureMatrix,
    partition: &Partition,
    colors: &[&str],
    label: F,
) -> SegmentResult<ChartData>
where
    F: Fn(usize) -> String,
{
    if matrix.len() != partition.len() {
        return Err(SegmentError::invalid_parameter(format!(
            "partition covers {} rows but matrix has {}",
            partition.len(),
            matrix.len()
        )));
    }
    if matrix.dimension() < 2 {
        return Err(SegmentError::DimensionMismatch {
            expected: 2,
            actual: matrix.dimension(),
        });
    }

    let datasets = (0..partition.k())
        .map(|group| ChartDataset {
            label: label(group),
            data: partition
                .members(group)
                .into_iter()
                .filter_map(|row| matrix.row(row))
                .map(|row| ChartPoint { x: row[0], y: row[1] })
                .collect(),
            background_color: colors
                .get(group % colors.len().max(1))
                .copied()
                .unwrap_or_default()
                .to_string(),
        })
        .collect();

    Ok(ChartData { datasets })
}

/// Builds the view structures from profiles and clustering output.
#[derive(Debug, Clone, Copy, Default)]
pub struct PresentationAdapter;

impl PresentationAdapter {
    pub fn new() -> Self {
        Self
    }

    pub fn cluster_card(
        &self,
        profile: &GroupProfile,
        recommendation: &Recommendation,
        source: &mut dyn RandomSource,
    ) -> ClusterCard {
        ClusterCard {
            label: event_label(profile, source).to_string(),
            count: profile.count,
            top_demo: demographic_summary(profile),
            top_engagement: engagement_summary(profile),
            recommended_event: recommendation.text.clone(),
            avg_age: round_to(profile.mean_age, 1),
            engagement_level: round_to(profile.engagement_level, 2),
            sdg_focus: sdg_focus(profile),
        }
    }

    pub fn support_card(&self, profile: &SupportProfile) -> SupportGroupCard {
        let name = SUPPORT_LABELS
            .get(profile.group_id)
            .copied()
            .map_or_else(|| format!("SDG Group {}", profile.group_id + 1), str::to_string);
        let focus = profile.primary_focus();

        SupportGroupCard {
            label: format!("{} ({})", name, focus),
            count: profile.count,
            avg_participation: round_to(profile.mean_economic_participation, 2),
            common_education: profile.education_summary().to_string(),
            common_employment: profile.work_status_summary().to_string(),
            sdg_focus: focus.to_string(),
        }
    }

    /// Package the event view.
    ///
    /// `recommendations` is index-aligned with `profiles`.
    pub fn event_view(
        &self,
        profiles: &[GroupProfile],
        recommendations: &[Recommendation],
        matrix: &FeatureMatrix,
        result: &ClusteringResult,
        source: &mut dyn RandomSource,
    ) -> SegmentResult<EventView> {
        if profiles.len() != recommendations.len() {
            return Err(SegmentError::invalid_parameter(format!(
                "{} profiles but {} recommendations",
                profiles.len(),
                recommendations.len()
            )));
        }

        let clusters = profiles
            .iter()
            .zip(recommendations)
            .map(|(profile, rec)| self.cluster_card(profile, rec, source))
            .collect();
        let chart = chart_data(matrix, &result.partition, &EVENT_COLORS, |group| {
            format!("Cluster {}", group + 1)
        })?;

        Ok(EventView {
            clusters,
            chart,
            quality: result.quality,
            seed: result.seed,
        })
    }

    /// Package the needs-support view.
    pub fn support_view(
        &self,
        profiles: &[SupportProfile],
        matrix: &FeatureMatrix,
        result: &ClusteringResult,
    ) -> SegmentResult<SupportView> {
        let groups = profiles.iter().map(|p| self.support_card(p)).collect();
        let chart = chart_data(matrix, &result.partition, &SUPPORT_COLORS, |group| {
            SUPPORT_LABELS
                .get(group)
                .map_or_else(|| format!("SDG Group {}", group + 1), |l| l.to_string())
        })?;

        Ok(SupportView {
            groups,
            chart,
            quality: result.quality,
            seed: result.seed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::FeatureView;
    use crate::recommend::ScriptedSource;

    fn profile() -> GroupProfile {
        GroupProfile {
            group_id: 0,
            count: 10,
            mean_age: 16.0,
            aged_members: 10,
            mean_poverty: 0.0,
            mean_education_level: 1.0,
            mean_gender_empowerment: 1.0,
            mean_economic_participation: 1.0,
            mean_civic_engagement: 1.0,
            engagement_level: 1.0,
            mode_sex: Some("Female".into()),
            mode_education: Some("Elementary graduate".into()),
            mode_work_status: Some("Unemployed".into()),
        }
    }

    #[test]
    fn test_demographic_summary_format() {
        assert_eq!(
            demographic_summary(&profile()),
            "Avg Age: 16.0 • Female • Elementary graduate • Unemployed • Focus: SDG 1, SDG 4"
        );

        let mut bare = profile();
        bare.mode_education = None;
        bare.mode_work_status = None;
        bare.mode_sex = None;
        assert!(demographic_summary(&bare).starts_with("Avg Age: 16.0 • - • Focus:"));
    }

    #[test]
    fn test_engagement_summary_and_focus() {
        let p = profile();
        assert_eq!(engagement_summary(&p), "Economic: 1.0 • Civic: 1.0");
        assert_eq!(sdg_focus(&p), "SDG 1, SDG 4, SDG 8");

        let mut strong = p;
        strong.mean_poverty = 1.0;
        strong.mean_education_level = 3.0;
        strong.mean_gender_empowerment = 0.6;
        strong.mean_economic_participation = 2.5;
        strong.mean_civic_engagement = 1.5;
        assert_eq!(sdg_focus(&strong), DEFAULT_FOCUS);
        assert!(!demographic_summary(&strong).contains("Focus"));
    }

    #[test]
    fn test_event_label_tiers() {
        let mut source = ScriptedSource::new([1, 2, 0]);

        let mut leaders = profile();
        leaders.engagement_level = 1.8;
        leaders.mean_education_level = 2.5;
        assert_eq!(event_label(&leaders, &mut source), "SDG Innovation Group");

        assert_eq!(event_label(&profile(), &mut source), "SDG Growth Initiative");

        let mut community = profile();
        community.mean_poverty = 1.0;
        assert_eq!(event_label(&community, &mut source), "SDG Community Group");
    }

    #[test]
    fn test_support_card() {
        let support = SupportProfile {
            group_id: 1,
            count: 4,
            mean_poverty: 1.0,
            mean_education_level: 3.0,
            mean_gender_empowerment: 0.25,
            mean_economic_participation: 2.333,
            mode_education: None,
            mode_work_status: Some("Employed".into()),
        };
        let card = PresentationAdapter::new().support_card(&support);

        assert_eq!(card.label, "SDG Development Group (SDG 5: Gender Equality)");
        assert_eq!(card.avg_participation, 2.33);
        assert_eq!(card.common_education, "-");
        assert_eq!(card.common_employment, "Employed");
    }

    #[test]
    fn test_chart_data_uses_first_two_dims() {
        let matrix = FeatureMatrix::new(
            FeatureView::Focused,
            vec![
                vec![0.0, 1.0, 1.0, 1.0],
                vec![1.0, 3.0, 0.0, 3.0],
                vec![1.0, 2.0, 0.0, 2.0],
            ],
        )
        .unwrap();
        let partition = Partition::new(vec![1, 0, 1], 3).unwrap();
        let chart = chart_data(&matrix, &partition, &SUPPORT_COLORS, |g| format!("G{}", g)).unwrap();

        assert_eq!(chart.datasets.len(), 3);
        assert_eq!(chart.point_count(), 3);
        assert_eq!(chart.datasets[0].data, vec![ChartPoint { x: 1.0, y: 3.0 }]);
        assert_eq!(chart.datasets[1].data.len(), 2);
        assert!(chart.datasets[2].data.is_empty());
        assert_eq!(chart.datasets[2].background_color, "rgba(75, 192, 192, 0.7)");
    }

    #[test]
    fn test_chart_data_rejects_misaligned_partition() {
        let matrix = FeatureMatrix::new(FeatureView::Focused, vec![vec![0.0; 4]]).unwrap();
        let partition = Partition::new(vec![0, 0], 3).unwrap();
        assert!(chart_data(&matrix, &partition, &EVENT_COLORS, |g| g.to_string()).is_err());
    }

    #[test]
    fn test_rounding() {
        assert_eq!(round_to(16.04, 1), 16.0);
        assert_eq!(round_to(1.666, 2), 1.67);
    }
}
