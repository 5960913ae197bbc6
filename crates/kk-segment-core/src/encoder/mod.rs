//! Feature encoding for respondent batches.
//!
//! Turns [`RespondentRecord`]s into numeric feature rows for the clustering
//! engine. One call to [`FeatureEncoder::encode`] produces both views:
//!
//! - [`FeatureView::Full`]: 13 columns (age, categorical codes, participation
//!   flags, SDG indicators)
//! - [`FeatureView::Focused`]: 4 columns (poverty, education level, gender
//!   empowerment, economic participation)
//!
//! Category vocabularies are fitted on the batch being encoded and dropped
//! with the returned [`EncodedBatch`]. Codes are therefore only meaningful
//! within one call.

mod category;
mod indicators;

pub use category::CategoryEncoder;
pub use indicators::{
    education_tier, SdgIndicators, COLLEGE_TIER, ELEMENTARY_TIER, FEMALE, HIGH_SCHOOL_TIER,
    UNEMPLOYED,
};

use serde::Serialize;

use crate::error::{SegmentError, SegmentResult};
use crate::record::RespondentRecord;

/// Column names of the full view, in order.
pub const FULL_VIEW_COLUMNS: [&str; 13] = [
    "age",
    "education_code",
    "work_status_code",
    "attended",
    "voted",
    "sex_code",
    "barangay_code",
    "region_code",
    "poverty",
    "education_level",
    "gender_empowerment",
    "economic_participation",
    "civic_engagement",
];

/// Column names of the focused view, in order.
pub const FOCUSED_VIEW_COLUMNS: [&str; 4] = [
    "poverty",
    "education_level",
    "gender_empowerment",
    "economic_participation",
];

/// Which feature subset a matrix holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureView {
    /// General-purpose view over all encoded fields.
    Full,
    /// Need/support view over the SDG indicators only.
    Focused,
}

impl FeatureView {
    pub fn dimension(&self) -> usize {
        self.columns().len()
    }

    pub fn columns(&self) -> &'static [&'static str] {
        match self {
            FeatureView::Full => &FULL_VIEW_COLUMNS,
            FeatureView::Focused => &FOCUSED_VIEW_COLUMNS,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            FeatureView::Full => "full",
            FeatureView::Focused => "focused",
        }
    }
}

impl std::fmt::Display for FeatureView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Row-major feature matrix for one view.
///
/// Row `i` always belongs to record `i` of the encoded batch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureMatrix {
    view: FeatureView,
    rows: Vec<Vec<f64>>,
}

impl FeatureMatrix {
    /// Build a matrix, checking every row against the view's dimension.
    pub fn new(view: FeatureView, rows: Vec<Vec<f64>>) -> SegmentResult<Self> {
        let expected = view.dimension();
        if let Some(bad) = rows.iter().find(|row| row.len() != expected) {
            return Err(SegmentError::DimensionMismatch {
                expected,
                actual: bad.len(),
            });
        }
        Ok(Self { view, rows })
    }

    pub fn view(&self) -> FeatureView {
        self.view
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&[f64]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn dimension(&self) -> usize {
        self.view.dimension()
    }
}

/// Vocabularies fitted for one batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryEncoders {
    pub education: CategoryEncoder,
    pub work_status: CategoryEncoder,
    pub sex: CategoryEncoder,
    pub barangay: CategoryEncoder,
    pub region: CategoryEncoder,
}

impl CategoryEncoders {
    fn fit(records: &[RespondentRecord]) -> Self {
        Self {
            education: CategoryEncoder::fit(
                "educational_background",
                records.iter().map(RespondentRecord::education_or_unknown),
            ),
            work_status: CategoryEncoder::fit(
                "work_status",
                records.iter().map(RespondentRecord::work_status_or_unknown),
            ),
            sex: CategoryEncoder::fit("sex", records.iter().map(RespondentRecord::sex_or_unknown)),
            barangay: CategoryEncoder::fit(
                "barangay",
                records.iter().map(RespondentRecord::barangay_or_unknown),
            ),
            region: CategoryEncoder::fit(
                "region",
                records.iter().map(RespondentRecord::region_or_unknown),
            ),
        }
    }
}

/// Output of one encoding pass.
#[derive(Debug, Clone, Serialize)]
pub struct EncodedBatch {
    pub full: FeatureMatrix,
    pub focused: FeatureMatrix,
    /// Per-record indicators, index-aligned with both matrices.
    pub indicators: Vec<SdgIndicators>,
    pub encoders: CategoryEncoders,
}

impl EncodedBatch {
    pub fn matrix(&self, view: FeatureView) -> &FeatureMatrix {
        match view {
            FeatureView::Full => &self.full,
            FeatureView::Focused => &self.focused,
        }
    }

    pub fn len(&self) -> usize {
        self.indicators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indicators.is_empty()
    }
}

/// Stateless encoder from records to feature matrices.
#[derive(Debug, Clone, Copy, Default)]
pub struct FeatureEncoder;

impl FeatureEncoder {
    pub fn new() -> Self {
        Self
    }

    /// Encode a batch into both feature views.
    ///
    /// Never fails on malformed input: bad ages become 0 and missing
    /// categories become `"Unknown"`. An empty batch yields empty matrices.
    pub fn encode(&self, records: &[RespondentRecord]) -> SegmentResult<EncodedBatch> {
        let encoders = CategoryEncoders::fit(records);
        let indicators: Vec<SdgIndicators> =
            records.iter().map(SdgIndicators::from_record).collect();

        let full_rows = records
            .iter()
            .zip(&indicators)
            .map(|(record, ind)| full_row(record, ind, &encoders))
            .collect();
        let focused_rows = indicators.iter().map(|ind| ind.focused().to_vec()).collect();

        let batch = EncodedBatch {
            full: FeatureMatrix::new(FeatureView::Full, full_rows)?,
            focused: FeatureMatrix::new(FeatureView::Focused, focused_rows)?,
            indicators,
            encoders,
        };

        tracing::debug!(
            records = records.len(),
            education_vocab = batch.encoders.education.len(),
            work_vocab = batch.encoders.work_status.len(),
            region_vocab = batch.encoders.region.len(),
            "Encoded respondent batch"
        );

        Ok(batch)
    }
}

fn full_row(
    record: &RespondentRecord,
    ind: &SdgIndicators,
    encoders: &CategoryEncoders,
) -> Vec<f64> {
    // Every value was seen during fitting, so lookups always succeed.
    let code = |encoder: &CategoryEncoder, value: &str| encoder.code(value).unwrap_or(0) as f64;

    vec![
        f64::from(record.age_or_zero()),
        code(&encoders.education, record.education_or_unknown()),
        code(&encoders.work_status, record.work_status_or_unknown()),
        ind.attended,
        ind.voted,
        code(&encoders.sex, record.sex_or_unknown()),
        code(&encoders.barangay, record.barangay_or_unknown()),
        code(&encoders.region, record.region_or_unknown()),
        ind.poverty,
        ind.education_level,
        ind.gender_empowerment,
        ind.economic_participation,
        ind.civic_engagement,
    ]
}
