//! Batch-level demographic counts for the dashboard header and charts.

use serde::{Deserialize, Serialize};

use crate::record::RespondentRecord;
use crate::summary::ModeCounter;

/// Inclusive age brackets reported by the overview.
pub const AGE_BRACKETS: [(&str, u32, u32); 4] = [
    ("15-17", 15, 17),
    ("18-21", 18, 21),
    ("22-24", 22, 24),
    ("25-30", 25, 30),
];

/// A category value and how many respondents have it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub value: String,
    pub count: usize,
}

/// Counts over the whole batch, independent of any clustering.
///
/// Category counts keep first-encounter order; missing values are counted
/// under `"Unknown"`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DemographicOverview {
    pub total_respondents: usize,
    pub total_barangays: usize,
    pub by_barangay: Vec<CategoryCount>,
    pub by_sex: Vec<CategoryCount>,
    pub by_education: Vec<CategoryCount>,
    pub by_work_status: Vec<CategoryCount>,
    /// One entry per [`AGE_BRACKETS`] bracket, in bracket order. Invalid or
    /// out-of-bracket ages are not counted.
    pub by_age_bracket: Vec<CategoryCount>,
}

impl DemographicOverview {
    pub fn from_records(records: &[RespondentRecord]) -> Self {
        let by_barangay = count_by(records, RespondentRecord::barangay_or_unknown);

        let mut brackets = vec![0usize; AGE_BRACKETS.len()];
        for age in records.iter().filter_map(RespondentRecord::parsed_age) {
            if let Some(slot) = AGE_BRACKETS
                .iter()
                .position(|&(_, low, high)| (low..=high).contains(&age))
            {
                brackets[slot] += 1;
            }
        }

        Self {
            total_respondents: records.len(),
            total_barangays: by_barangay.len(),
            by_barangay,
            by_sex: count_by(records, RespondentRecord::sex_or_unknown),
            by_education: count_by(records, RespondentRecord::education_or_unknown),
            by_work_status: count_by(records, RespondentRecord::work_status_or_unknown),
            by_age_bracket: AGE_BRACKETS
                .iter()
                .zip(brackets)
                .map(|(&(name, _, _), count)| CategoryCount {
                    value: name.to_string(),
                    count,
                })
                .collect(),
        }
    }
}

fn count_by<F>(records: &[RespondentRecord], field: F) -> Vec<CategoryCount>
where
    F: Fn(&RespondentRecord) -> &str,
{
    let counter: ModeCounter = records.iter().map(|r| Some(field(r))).collect();
    counter
        .entries()
        .iter()
        .map(|(value, count)| CategoryCount {
            value: value.clone(),
            count: *count,
        })
        .collect()
}
