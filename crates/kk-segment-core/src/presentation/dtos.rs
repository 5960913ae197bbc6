//! Output structures handed to the presentation layer.
//!
//! Field names serialize in the camelCase the chart library expects where it
//! reads them directly (`backgroundColor`); card fields stay snake_case.

use serde::{Deserialize, Serialize};

use crate::clustering::QualityMetrics;
use crate::overview::DemographicOverview;

// ============================================================================
// CHART DATA
// ============================================================================

/// One scatter point: the first two feature dimensions of a row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub x: f64,
    pub y: f64,
}

/// Points of one cluster with its display colour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDataset {
    pub label: String,
    pub data: Vec<ChartPoint>,
    #[serde(rename = "backgroundColor")]
    pub background_color: String,
}

/// Scatter datasets, one per group id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub datasets: Vec<ChartDataset>,
}

impl ChartData {
    /// Total number of points across datasets.
    pub fn point_count(&self) -> usize {
        self.datasets.iter().map(|d| d.data.len()).sum()
    }
}

// ============================================================================
// CARDS
// ============================================================================

/// Summary card for one group of the event (full) view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterCard {
    pub label: String,
    pub count: usize,
    /// e.g. `Avg Age: 16.0 • Female • Elementary graduate • Unemployed • Focus: SDG 1, SDG 4`
    pub top_demo: String,
    /// e.g. `Economic: 1.0 • Civic: 1.0`
    pub top_engagement: String,
    pub recommended_event: String,
    /// Mean age rounded to one decimal.
    pub avg_age: f64,
    /// Engagement level rounded to two decimals.
    pub engagement_level: f64,
    /// Up to three SDG priorities joined by ", ", or "SDG 17".
    pub sdg_focus: String,
}

/// Summary card for one group of the needs-support (focused) view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupportGroupCard {
    /// `<group label> (<primary focus>)`
    pub label: String,
    pub count: usize,
    /// Mean economic participation rounded to two decimals.
    pub avg_participation: f64,
    pub common_education: String,
    pub common_employment: String,
    pub sdg_focus: String,
}

// ============================================================================
// VIEWS
// ============================================================================

/// Packaged output of the event (full-view) clustering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventView {
    pub clusters: Vec<ClusterCard>,
    pub chart: ChartData,
    pub quality: QualityMetrics,
    /// Seed of the clustering run, for reproducing this grouping.
    pub seed: u64,
}

/// Packaged output of the needs-support (focused-view) clustering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupportView {
    pub groups: Vec<SupportGroupCard>,
    pub chart: ChartData,
    pub quality: QualityMetrics,
    pub seed: u64,
}

/// Everything one dashboard request produces.
///
/// A view is `None` when its clustering was skipped for insufficient data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardReport {
    pub respondents: usize,
    pub event_view: Option<EventView>,
    pub support_view: Option<SupportView>,
    pub overview: DemographicOverview,
}
