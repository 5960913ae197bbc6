//! Respondent records as supplied by the external record store.
//!
//! A [`RespondentRecord`] is the profile row joined with its demographics row.
//! Records are read-only input: nothing in this crate mutates them, and every
//! field except the identifier may be absent.

use serde::{Deserialize, Deserializer, Serialize};

/// Literal used by the survey for an affirmative yes/no answer.
pub const AFFIRMATIVE: &str = "Yes";

/// Category used in place of a missing or empty categorical value.
pub const UNKNOWN: &str = "Unknown";

/// One surveyed respondent with profile and demographic attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RespondentRecord {
    /// Unique respondent number.
    pub respondent_no: String,

    /// Raw age as stored. Numbers and strings are both accepted.
    #[serde(default, deserialize_with = "deserialize_age")]
    pub age: Option<String>,

    #[serde(default)]
    pub educational_background: Option<String>,

    #[serde(default)]
    pub work_status: Option<String>,

    /// Attended a KK assembly ("Yes"/"No").
    #[serde(default)]
    pub attended_kk_assembly: Option<String>,

    /// Voted in the last SK election ("Yes"/"No").
    #[serde(default)]
    pub voted_last_sk_election: Option<String>,

    /// Sex assigned at birth.
    #[serde(default)]
    pub sex: Option<String>,

    #[serde(default)]
    pub barangay: Option<String>,

    #[serde(default)]
    pub region: Option<String>,

    #[serde(default)]
    pub province: Option<String>,

    #[serde(default)]
    pub municipality: Option<String>,
}

impl RespondentRecord {
    /// Create a record with only an identifier set.
    pub fn new(respondent_no: impl Into<String>) -> Self {
        Self {
            respondent_no: respondent_no.into(),
            ..Self::default()
        }
    }

    /// Parse the age field.
    ///
    /// Only a non-empty run of ASCII digits is a valid age; signs, decimals
    /// and surrounding text are rejected.
    pub fn parsed_age(&self) -> Option<u32> {
        let raw = self.age.as_deref()?;
        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        raw.parse().ok()
    }

    /// Age as a feature value: parse failures and absence coerce to 0.
    pub fn age_or_zero(&self) -> u32 {
        self.parsed_age().unwrap_or(0)
    }

    pub fn attended_assembly(&self) -> bool {
        is_affirmative(self.attended_kk_assembly.as_deref())
    }

    pub fn voted_last_election(&self) -> bool {
        is_affirmative(self.voted_last_sk_election.as_deref())
    }

    pub fn education_or_unknown(&self) -> &str {
        or_unknown(self.educational_background.as_deref())
    }

    pub fn work_status_or_unknown(&self) -> &str {
        or_unknown(self.work_status.as_deref())
    }

    pub fn sex_or_unknown(&self) -> &str {
        or_unknown(self.sex.as_deref())
    }

    pub fn barangay_or_unknown(&self) -> &str {
        or_unknown(self.barangay.as_deref())
    }

    pub fn region_or_unknown(&self) -> &str {
        or_unknown(self.region.as_deref())
    }

    #[must_use]
    pub fn with_age(mut self, age: impl Into<String>) -> Self {
        self.age = Some(age.into());
        self
    }

    #[must_use]
    pub fn with_education(mut self, education: impl Into<String>) -> Self {
        self.educational_background = Some(education.into());
        self
    }

    #[must_use]
    pub fn with_work_status(mut self, work_status: impl Into<String>) -> Self {
        self.work_status = Some(work_status.into());
        self
    }

    #[must_use]
    pub fn with_sex(mut self, sex: impl Into<String>) -> Self {
        self.sex = Some(sex.into());
        self
    }

    #[must_use]
    pub fn with_participation(mut self, attended: bool, voted: bool) -> Self {
        self.attended_kk_assembly = Some(yes_no(attended).to_string());
        self.voted_last_sk_election = Some(yes_no(voted).to_string());
        self
    }

    #[must_use]
    pub fn with_location(
        mut self,
        barangay: impl Into<String>,
        region: impl Into<String>,
    ) -> Self {
        self.barangay = Some(barangay.into());
        self.region = Some(region.into());
        self
    }
}

/// Exact, case-sensitive match against [`AFFIRMATIVE`].
pub fn is_affirmative(value: Option<&str>) -> bool {
    value == Some(AFFIRMATIVE)
}

/// Non-empty value, if any.
pub fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn or_unknown(value: Option<&str>) -> &str {
    non_empty(value).unwrap_or(UNKNOWN)
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        AFFIRMATIVE
    } else {
        "No"
    }
}

fn deserialize_age<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawAge {
        Int(i64),
        Float(f64),
        Text(String),
    }

    Ok(match Option::<RawAge>::deserialize(deserializer)? {
        None => None,
        Some(RawAge::Int(n)) => Some(n.to_string()),
        Some(RawAge::Float(f)) => Some(format!("{f:?}")),
        Some(RawAge::Text(s)) => Some(s),
    })
}
