//! KK Segment Core Library
//!
//! Segments survey respondents into groups and turns each group's profile
//! into SDG-themed program recommendations.
//!
//! # Architecture
//!
//! Data flows leaf-first through:
//! - [`encoder`]: respondent records to numeric feature matrices (full and focused views)
//! - [`clustering`]: k-means partitioning with optional quality metrics
//! - [`summary`]: per-group means and modes
//! - [`recommend`]: rule catalog scoring with bounded-random selection
//! - [`presentation`]: cards and chart datasets for the dashboard
//!
//! [`pipeline::SegmentationPipeline`] wires them together for one batch.
//!
//! # Example
//!
//! ```
//! use kk_segment_core::{Config, RespondentRecord, SegmentationPipeline};
//!
//! let records: Vec<RespondentRecord> = (0..6)
//!     .map(|i| {
//!         RespondentRecord::new(i.to_string())
//!             .with_age(if i < 3 { "16" } else { "27" })
//!             .with_work_status(if i < 3 { "Unemployed" } else { "Employed" })
//!     })
//!     .collect();
//!
//! let pipeline = SegmentationPipeline::new(Config::default_config().with_seed(7)).unwrap();
//! let report = pipeline.run(&records).unwrap();
//! assert_eq!(report.respondents, 6);
//! assert!(report.event_view.is_some());
//! ```

pub mod clustering;
pub mod config;
pub mod encoder;
pub mod error;
pub mod overview;
pub mod pipeline;
pub mod presentation;
pub mod recommend;
pub mod record;
pub mod summary;

// Re-exports for convenience
pub use config::Config;
pub use error::{SegmentError, SegmentResult};
pub use overview::DemographicOverview;
pub use pipeline::SegmentationPipeline;
pub use presentation::DashboardReport;
pub use recommend::{Recommendation, Recommender};
pub use record::RespondentRecord;
