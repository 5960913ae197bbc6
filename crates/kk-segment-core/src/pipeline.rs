//! End-to-end segmentation: encode, cluster twice, summarize, recommend, package.
//!
//! The two clustering views are independent. With `pipeline.parallel_views`
//! they run on the rayon pool via `rayon::join`; otherwise sequentially.
//! A view whose clustering reports insufficient data is omitted from the
//! report rather than failing the run.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::clustering::{ClusteringResult, KMeans, KMeansConfig, PartitionClusterer};
use crate::config::Config;
use crate::encoder::{EncodedBatch, FeatureEncoder, FeatureView};
use crate::error::SegmentResult;
use crate::overview::DemographicOverview;
use crate::presentation::{DashboardReport, EventView, PresentationAdapter, SupportView};
use crate::recommend::{RandomSource, Recommendation, Recommender, RngSource};
use crate::record::RespondentRecord;
use crate::summary::GroupSummarizer;

/// Seeds of the two clustering views for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewSeeds {
    pub full: u64,
    pub focused: u64,
}

impl ViewSeeds {
    /// Derive both seeds from a base seed, or from entropy when `None`.
    pub fn derive(base: Option<u64>) -> Self {
        let mut rng = match base {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            full: rng.gen(),
            focused: rng.gen(),
        }
    }
}

/// Runs the whole segmentation for one batch of respondents.
pub struct SegmentationPipeline<C = KMeans> {
    config: Config,
    clusterer: C,
    recommender: Recommender,
}

impl SegmentationPipeline<KMeans> {
    pub fn new(config: Config) -> SegmentResult<Self> {
        Self::with_clusterer(config, KMeans::new())
    }
}

impl<C: PartitionClusterer + Sync> SegmentationPipeline<C> {
    /// Pipeline over a custom clusterer.
    pub fn with_clusterer(config: Config, clusterer: C) -> SegmentResult<Self> {
        config.validate()?;
        let recommender = Recommender::new(config.recommendation.clone())?;
        Ok(Self {
            config,
            clusterer,
            recommender,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run with randomness seeded from the configuration.
    pub fn run(&self, records: &[RespondentRecord]) -> SegmentResult<DashboardReport> {
        let mut source = RngSource::from_seed_option(self.config.recommendation.seed);
        self.run_with_source(records, &mut source)
    }

    /// Run with a caller-supplied source for recommendation and label picks.
    pub fn run_with_source(
        &self,
        records: &[RespondentRecord],
        source: &mut dyn RandomSource,
    ) -> SegmentResult<DashboardReport> {
        tracing::info!(
            respondents = records.len(),
            parallel = self.config.pipeline.parallel_views,
            "Starting segmentation run"
        );

        let overview = DemographicOverview::from_records(records);
        let batch = FeatureEncoder::new().encode(records)?;
        let seeds = ViewSeeds::derive(self.config.clustering.seed);

        let (full, focused) = if self.config.pipeline.parallel_views {
            rayon::join(
                || self.cluster_view(&batch, FeatureView::Full, seeds.full),
                || self.cluster_view(&batch, FeatureView::Focused, seeds.focused),
            )
        } else {
            (
                self.cluster_view(&batch, FeatureView::Full, seeds.full),
                self.cluster_view(&batch, FeatureView::Focused, seeds.focused),
            )
        };

        let event_view = match skip_insufficient(full, FeatureView::Full)? {
            Some(result) => Some(self.build_event_view(records, &batch, &result, source)?),
            None => None,
        };
        let support_view = match skip_insufficient(focused, FeatureView::Focused)? {
            Some(result) => Some(self.build_support_view(records, &batch, &result)?),
            None => None,
        };

        tracing::info!(
            event_view = event_view.is_some(),
            support_view = support_view.is_some(),
            "Segmentation run completed"
        );

        Ok(DashboardReport {
            respondents: records.len(),
            event_view,
            support_view,
            overview,
        })
    }

    fn cluster_view(
        &self,
        batch: &EncodedBatch,
        view: FeatureView,
        seed: u64,
    ) -> SegmentResult<ClusteringResult> {
        let config = KMeansConfig {
            seed: Some(seed),
            ..self.config.clustering.clone()
        };
        self.clusterer.partition(batch.matrix(view), &config)
    }

    fn build_event_view(
        &self,
        records: &[RespondentRecord],
        batch: &EncodedBatch,
        result: &ClusteringResult,
        source: &mut dyn RandomSource,
    ) -> SegmentResult<EventView> {
        let profiles =
            GroupSummarizer::new().summarize(&result.partition, records, &batch.indicators)?;
        let recommendations: Vec<Recommendation> = profiles
            .iter()
            .map(|profile| self.recommender.recommend_for_group(profile, source))
            .collect();

        PresentationAdapter::new().event_view(
            &profiles,
            &recommendations,
            &batch.full,
            result,
            source,
        )
    }

    fn build_support_view(
        &self,
        records: &[RespondentRecord],
        batch: &EncodedBatch,
        result: &ClusteringResult,
    ) -> SegmentResult<SupportView> {
        let profiles = GroupSummarizer::new().summarize_support(
            &result.partition,
            records,
            &batch.indicators,
        )?;
        PresentationAdapter::new().support_view(&profiles, &batch.focused, result)
    }
}

fn skip_insufficient(
    result: SegmentResult<ClusteringResult>,
    view: FeatureView,
) -> SegmentResult<Option<ClusteringResult>> {
    match result {
        Ok(result) => Ok(Some(result)),
        Err(e) if e.is_insufficient_data() => {
            tracing::warn!(view = %view, error = %e, "Skipping view");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}
