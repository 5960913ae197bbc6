//! End-to-end segmentation scenarios over synthetic respondent batches.
//!
//! Every run fixes its seeds so groupings are reproducible.

use kk_segment_core::clustering::{KMeans, KMeansConfig, PartitionClusterer};
use kk_segment_core::encoder::{FeatureEncoder, FeatureView};
use kk_segment_core::recommend::{
    RecommendationProfile, Recommender, ScriptedSource, FALLBACK_RECOMMENDATION,
};
use kk_segment_core::summary::{AgeGroup, GroupSummarizer};
use kk_segment_core::{Config, RespondentRecord, SegmentError, SegmentationPipeline};

fn respondent(id: usize) -> RespondentRecord {
    RespondentRecord::new(format!("KK-{:03}", id))
}

fn identical_teens(n: usize) -> Vec<RespondentRecord> {
    (0..n)
        .map(|i| {
            respondent(i)
                .with_age("16")
                .with_education("Elementary graduate")
                .with_work_status("Unemployed")
                .with_sex("Female")
        })
        .collect()
}

fn varied_batch(n: usize) -> Vec<RespondentRecord> {
    let educations = [
        "Elementary graduate",
        "High school undergraduate",
        "College graduate",
        "",
    ];
    let works = ["Unemployed", "Employed", "Self-Employed", "Student"];
    let sexes = ["Female", "Male"];
    (0..n)
        .map(|i| {
            respondent(i)
                .with_age((15 + i % 16).to_string())
                .with_education(educations[i % educations.len()])
                .with_work_status(works[(i / 2) % works.len()])
                .with_sex(sexes[i % 2])
                .with_participation(i % 3 != 0, i % 4 == 0)
                .with_location(format!("Barangay {}", i % 5), "Region IV-A")
        })
        .collect()
}

fn seeded_pipeline(seed: u64) -> SegmentationPipeline {
    SegmentationPipeline::new(Config::default_config().with_seed(seed))
        .expect("default config is valid")
}

// =============================================================================
// Encoder shape and determinism
// =============================================================================

#[test]
fn test_encoder_rows_match_records_and_view_dimensions() {
    for n in [1, 7, 40] {
        let records = varied_batch(n);
        let batch = FeatureEncoder::new().encode(&records).unwrap();

        assert_eq!(batch.full.len(), n);
        assert_eq!(batch.focused.len(), n);
        assert!(batch.full.rows().iter().all(|r| r.len() == 13));
        assert!(batch.focused.rows().iter().all(|r| r.len() == 4));
        assert_eq!(batch.full.dimension(), FeatureView::Full.dimension());
    }
}

#[test]
fn test_encoder_is_deterministic_within_a_batch() {
    let records = varied_batch(25);
    let first = FeatureEncoder::new().encode(&records).unwrap();
    let second = FeatureEncoder::new().encode(&records).unwrap();

    assert_eq!(first.full.rows(), second.full.rows());
    assert_eq!(first.focused.rows(), second.focused.rows());
}

// =============================================================================
// Partition and summary invariants
// =============================================================================

#[test]
fn test_every_respondent_gets_exactly_one_group() {
    let records = varied_batch(30);
    let batch = FeatureEncoder::new().encode(&records).unwrap();
    let config = KMeansConfig::default().with_seed(21);

    for view in [FeatureView::Full, FeatureView::Focused] {
        let result = KMeans::new().partition(batch.matrix(view), &config).unwrap();
        let partition = &result.partition;

        assert_eq!(partition.len(), records.len());
        assert!(partition.labels().iter().all(|&g| g < 3));
        assert_eq!(partition.counts().iter().sum::<usize>(), records.len());

        let profiles = GroupSummarizer::new()
            .summarize(partition, &records, &batch.indicators)
            .unwrap();
        assert_eq!(profiles.len(), 3);
        assert_eq!(profiles.iter().map(|p| p.count).sum::<usize>(), records.len());
    }
}

#[test]
fn test_pipeline_counts_sum_to_batch_size() {
    let records = varied_batch(50);
    let report = seeded_pipeline(8).run(&records).unwrap();

    let event = report.event_view.expect("event view present");
    let support = report.support_view.expect("support view present");
    assert_eq!(event.clusters.iter().map(|c| c.count).sum::<usize>(), 50);
    assert_eq!(support.groups.iter().map(|g| g.count).sum::<usize>(), 50);
    assert_eq!(event.chart.point_count(), 50);
    assert_eq!(support.chart.point_count(), 50);
    assert_eq!(event.chart.datasets[0].label, "Cluster 1");
    assert_eq!(support.chart.datasets[0].label, "SDG Priority Group");
}

// =============================================================================
// Scenario: ten identical respondents
// =============================================================================

#[test]
fn test_identical_respondents_form_one_dominant_group() {
    let records = identical_teens(10);
    let batch = FeatureEncoder::new().encode(&records).unwrap();
    let result = KMeans::new()
        .partition(&batch.full, &KMeansConfig::default().with_seed(3))
        .unwrap();

    assert_eq!(result.partition.effective_groups(), 1);
    assert!(!result.quality.is_defined(), "metrics are undefined for one group");

    let profiles = GroupSummarizer::new()
        .summarize(&result.partition, &records, &batch.indicators)
        .unwrap();
    let dominant = profiles.iter().find(|p| p.count == 10).expect("dominant group");
    assert!(dominant.mean_poverty.abs() < 1e-12);
    assert!((dominant.mean_education_level - 1.0).abs() < 1e-12);
    assert_eq!(dominant.age_group(), AgeGroup::Teen);
}

#[test]
fn test_identical_respondents_get_poverty_or_education_programs() {
    let records = identical_teens(10);
    let report = seeded_pipeline(99).run(&records).unwrap();
    let event = report.event_view.expect("event view present");

    let card = event
        .clusters
        .iter()
        .find(|c| c.count == 10)
        .expect("dominant card");
    println!("recommended_event = {}", card.recommended_event);
    assert!(
        card.recommended_event.contains("SDG 1") || card.recommended_event.contains("SDG 4"),
        "got: {}",
        card.recommended_event
    );
    assert!(card.top_demo.starts_with("Avg Age: 16.0 • Female"));

    // Empty groups still get a card, with the fallback recommendation
    for empty in event.clusters.iter().filter(|c| c.count == 0) {
        assert_eq!(empty.recommended_event, FALLBACK_RECOMMENDATION);
    }
}

// =============================================================================
// Scenario: empty batch
// =============================================================================

#[test]
fn test_empty_batch_is_insufficient_data() {
    let batch = FeatureEncoder::new().encode(&[]).unwrap();
    let err = KMeans::new()
        .partition(&batch.full, &KMeansConfig::default())
        .unwrap_err();

    assert!(matches!(err, SegmentError::InsufficientData { rows: 0, .. }));
}

#[test]
fn test_empty_batch_produces_no_views() {
    let report = seeded_pipeline(1).run(&[]).unwrap();

    assert!(report.event_view.is_none());
    assert!(report.support_view.is_none());
    assert_eq!(report.overview.total_respondents, 0);
}

// =============================================================================
// Scenario: exactly three distinct rows
// =============================================================================

#[test]
fn test_three_distinct_rows_form_singleton_groups() {
    let records: Vec<RespondentRecord> = ["16", "22", "29"]
        .iter()
        .enumerate()
        .map(|(i, age)| respondent(i).with_age(*age))
        .collect();

    for seed in 0..5 {
        let report = seeded_pipeline(seed).run(&records).unwrap();
        let event = report.event_view.expect("event view present");

        let mut counts: Vec<usize> = event.clusters.iter().map(|c| c.count).collect();
        counts.sort_unstable();
        assert_eq!(counts, vec![1, 1, 1], "seed {}", seed);
        assert!(event.quality.silhouette.is_none());
    }
}

// =============================================================================
// Recommendation fallback
// =============================================================================

#[test]
fn test_all_sentinel_profile_gets_fallback() {
    let profile = RecommendationProfile {
        education: "Unknown".to_string(),
        work_status: "Unknown".to_string(),
        sex: "-".to_string(),
        age_group: AgeGroup::Teen,
        engagement_level: 0.0,
        mean_age: 0.0,
    };
    let rec = Recommender::default().recommend(&profile, &mut ScriptedSource::new([3, 1]));

    assert_eq!(rec.text, FALLBACK_RECOMMENDATION);
}

// =============================================================================
// JSON in, JSON out
// =============================================================================

#[test]
fn test_json_batch_round_trip() {
    let input = r#"[
        {"respondent_no": "1", "age": 17, "educational_background": "High school graduate",
         "work_status": "Student", "attended_kk_assembly": "Yes", "voted_last_sk_election": "No",
         "sex": "Male", "barangay": "Poblacion", "region": "IV-A"},
        {"respondent_no": "2", "age": "24", "work_status": "Unemployed", "sex": "Female"},
        {"respondent_no": "3", "age": null, "educational_background": "College graduate",
         "attended_kk_assembly": "yes"},
        {"respondent_no": "4", "age": "n/a", "sex": "Female", "barangay": "Poblacion"}
    ]"#;
    let records: Vec<RespondentRecord> = serde_json::from_str(input).unwrap();
    assert_eq!(records.len(), 4);
    assert!(!records[2].attended_assembly(), "affirmative match is case-sensitive");

    let report = seeded_pipeline(17).run(&records).unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["respondents"], 4);
    assert!(json["event_view"]["chart"]["datasets"][0]["backgroundColor"].is_string());
    assert_eq!(json["overview"]["total_barangays"], 2);
}
