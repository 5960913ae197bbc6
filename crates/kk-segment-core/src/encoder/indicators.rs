//! SDG-aligned indicators derived from raw respondent fields.

use serde::Serialize;

use crate::record::RespondentRecord;

/// Work status literal that marks a respondent as unemployed.
pub const UNEMPLOYED: &str = "Unemployed";

/// Sex literal counted toward gender empowerment.
pub const FEMALE: &str = "Female";

pub const COLLEGE_TIER: [&str; 2] = ["College graduate", "College undergraduate"];
pub const HIGH_SCHOOL_TIER: [&str; 2] = ["High school graduate", "High school undergraduate"];
pub const ELEMENTARY_TIER: [&str; 2] = ["Elementary graduate", "Elementary undergraduate"];

/// Education tier of a literal: 3 college, 2 high school, 1 elementary, 0 other.
pub fn education_tier(education: &str) -> u8 {
    if COLLEGE_TIER.contains(&education) {
        3
    } else if HIGH_SCHOOL_TIER.contains(&education) {
        2
    } else if ELEMENTARY_TIER.contains(&education) {
        1
    } else {
        0
    }
}

/// Per-respondent indicator values.
///
/// All fields are small non-negative integers stored as `f64` so they can be
/// averaged and fed to the clustering engine without conversion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SdgIndicators {
    /// 1.0 if attended a KK assembly.
    pub attended: f64,
    /// 1.0 if voted in the last SK election.
    pub voted: f64,
    /// SDG 1: 0 if unemployed, else 1.
    pub poverty: f64,
    /// SDG 4: education tier, 0..=3.
    pub education_level: f64,
    /// SDG 5: 1 if female, else 0.
    pub gender_empowerment: f64,
    /// SDG 8: attended + voted + poverty, 0..=3.
    pub economic_participation: f64,
    /// SDG 16: attended + voted, 0..=2.
    pub civic_engagement: f64,
}

impl SdgIndicators {
    pub fn from_record(record: &RespondentRecord) -> Self {
        let attended = flag(record.attended_assembly());
        let voted = flag(record.voted_last_election());
        let poverty = flag(record.work_status_or_unknown() != UNEMPLOYED);

        Self {
            attended,
            voted,
            poverty,
            education_level: f64::from(education_tier(record.education_or_unknown())),
            gender_empowerment: flag(record.sex_or_unknown() == FEMALE),
            economic_participation: attended + voted + poverty,
            civic_engagement: attended + voted,
        }
    }

    /// Indicators in focused-view column order.
    pub fn focused(&self) -> [f64; 4] {
        [
            self.poverty,
            self.education_level,
            self.gender_empowerment,
            self.economic_participation,
        ]
    }
}

fn flag(value: bool) -> f64 {
    if value {
        1.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_education_tiers() {
        assert_eq!(education_tier("College graduate"), 3);
        assert_eq!(education_tier("College undergraduate"), 3);
        assert_eq!(education_tier("High school undergraduate"), 2);
        assert_eq!(education_tier("Elementary graduate"), 1);
        assert_eq!(education_tier("Vocational"), 0);
        assert_eq!(education_tier("college graduate"), 0);
        assert_eq!(education_tier("Unknown"), 0);
    }

    #[test]
    fn test_unemployed_female_engaged() {
        let record = RespondentRecord::new("r")
            .with_work_status("Unemployed")
            .with_sex("Female")
            .with_education("High school graduate")
            .with_participation(true, true);
        let ind = SdgIndicators::from_record(&record);

        assert_eq!(ind.poverty, 0.0);
        assert_eq!(ind.education_level, 2.0);
        assert_eq!(ind.gender_empowerment, 1.0);
        assert_eq!(ind.economic_participation, 2.0);
        assert_eq!(ind.civic_engagement, 2.0);
        assert_eq!(ind.focused(), [0.0, 2.0, 1.0, 2.0]);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let ind = SdgIndicators::from_record(&RespondentRecord::new("r"));

        // Unknown work status is not "Unemployed"
        assert_eq!(ind.poverty, 1.0);
        assert_eq!(ind.education_level, 0.0);
        assert_eq!(ind.gender_empowerment, 0.0);
        assert_eq!(ind.economic_participation, 1.0);
        assert_eq!(ind.civic_engagement, 0.0);
    }
}
