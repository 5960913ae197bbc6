//! Group profiles: descriptive statistics of one cluster's members.

use serde::Serialize;

use crate::record::UNKNOWN;

/// Placeholder shown when a categorical summary has no values.
pub const NO_VALUE: &str = "-";

/// Age bucket derived from a group's mean age.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AgeGroup {
    /// Mean age below 18.
    Teen,
    /// Mean age 18 to below 25.
    YoungAdult,
    /// Mean age 25 and over.
    Adult,
}

impl AgeGroup {
    pub fn from_mean_age(mean_age: f64) -> Self {
        if mean_age < 18.0 {
            AgeGroup::Teen
        } else if mean_age < 25.0 {
            AgeGroup::YoungAdult
        } else {
            AgeGroup::Adult
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AgeGroup::Teen => "Teen",
            AgeGroup::YoungAdult => "Young Adult",
            AgeGroup::Adult => "Adult",
        }
    }
}

impl std::fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Summary of one group of the full (event) view.
///
/// Derived solely from the group's members and recomputed on every run.
/// An empty group has count 0, zero means and no modes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupProfile {
    pub group_id: usize,
    pub count: usize,

    /// Mean over members with a valid age; 0.0 if none.
    pub mean_age: f64,
    /// Members that contributed to `mean_age`.
    pub aged_members: usize,

    pub mean_poverty: f64,
    pub mean_education_level: f64,
    pub mean_gender_empowerment: f64,
    pub mean_economic_participation: f64,
    pub mean_civic_engagement: f64,

    /// mean(attended) + mean(voted), in 0.0..=2.0.
    pub engagement_level: f64,

    pub mode_sex: Option<String>,
    pub mode_education: Option<String>,
    pub mode_work_status: Option<String>,
}

impl GroupProfile {
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn age_group(&self) -> AgeGroup {
        AgeGroup::from_mean_age(self.mean_age)
    }

    /// Most frequent sex, or `"-"`.
    pub fn top_sex(&self) -> &str {
        self.mode_sex.as_deref().unwrap_or(NO_VALUE)
    }

    /// Most frequent education for recommendations, or `"Unknown"`.
    pub fn top_education(&self) -> &str {
        self.mode_education.as_deref().unwrap_or(UNKNOWN)
    }

    /// Most frequent work status for recommendations, or `"Unknown"`.
    pub fn top_work_status(&self) -> &str {
        self.mode_work_status.as_deref().unwrap_or(UNKNOWN)
    }

    /// Most frequent education for display, or `"-"`.
    pub fn education_summary(&self) -> &str {
        self.mode_education.as_deref().unwrap_or(NO_VALUE)
    }

    /// Most frequent work status for display, or `"-"`.
    pub fn work_status_summary(&self) -> &str {
        self.mode_work_status.as_deref().unwrap_or(NO_VALUE)
    }

    /// SDG goals this group falls short on, in goal order.
    ///
    /// SDG 1 poverty < 0.5, SDG 4 education < 2, SDG 5 gender < 0.5,
    /// SDG 8 economic participation < 1.5, SDG 16 civic engagement < 1.
    pub fn sdg_priorities(&self) -> Vec<&'static str> {
        let checks = [
            (self.mean_poverty < 0.5, "SDG 1"),
            (self.mean_education_level < 2.0, "SDG 4"),
            (self.mean_gender_empowerment < 0.5, "SDG 5"),
            (self.mean_economic_participation < 1.5, "SDG 8"),
            (self.mean_civic_engagement < 1.0, "SDG 16"),
        ];
        checks
            .into_iter()
            .filter(|(short, _)| *short)
            .map(|(_, goal)| goal)
            .collect()
    }
}

/// Summary of one group of the focused (needs-support) view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SupportProfile {
    pub group_id: usize,
    pub count: usize,
    pub mean_poverty: f64,
    pub mean_education_level: f64,
    pub mean_gender_empowerment: f64,
    pub mean_economic_participation: f64,
    pub mode_education: Option<String>,
    pub mode_work_status: Option<String>,
}

impl SupportProfile {
    /// First SDG need of the group, or partnerships when none applies.
    pub fn primary_focus(&self) -> &'static str {
        if self.mean_poverty < 0.5 {
            "SDG 1: Poverty Alleviation"
        } else if self.mean_education_level < 2.0 {
            "SDG 4: Quality Education"
        } else if self.mean_gender_empowerment < 0.5 {
            "SDG 5: Gender Equality"
        } else if self.mean_economic_participation < 1.5 {
            "SDG 8: Decent Work"
        } else {
            "SDG 17: Partnerships"
        }
    }

    pub fn education_summary(&self) -> &str {
        self.mode_education.as_deref().unwrap_or(NO_VALUE)
    }

    pub fn work_status_summary(&self) -> &str {
        self.mode_work_status.as_deref().unwrap_or(NO_VALUE)
    }
}
