//! Group summaries over a partition.
//!
//! [`GroupSummarizer`] turns a [`Partition`] plus the index-aligned records and
//! indicators into one profile per group id `0..k`, including empty groups.

mod mode;
mod profile;

pub use mode::ModeCounter;
pub use profile::{AgeGroup, GroupProfile, SupportProfile, NO_VALUE};

use crate::clustering::Partition;
use crate::encoder::SdgIndicators;
use crate::error::{SegmentError, SegmentResult};
use crate::record::RespondentRecord;

/// Aggregates partition members into group profiles.
#[derive(Debug, Clone, Copy, Default)]
pub struct GroupSummarizer;

impl GroupSummarizer {
    pub fn new() -> Self {
        Self
    }

    /// One [`GroupProfile`] per group id, in id order.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` if records, indicators and partition differ in length.
    pub fn summarize(
        &self,
        partition: &Partition,
        records: &[RespondentRecord],
        indicators: &[SdgIndicators],
    ) -> SegmentResult<Vec<GroupProfile>> {
        check_aligned(partition, records, indicators)?;

        Ok((0..partition.k())
            .map(|group| {
                let members = partition.members(group);
                group_profile(group, &members, records, indicators)
            })
            .collect())
    }

    /// One [`SupportProfile`] per group id of a focused-view partition.
    pub fn summarize_support(
        &self,
        partition: &Partition,
        records: &[RespondentRecord],
        indicators: &[SdgIndicators],
    ) -> SegmentResult<Vec<SupportProfile>> {
        check_aligned(partition, records, indicators)?;

        Ok((0..partition.k())
            .map(|group| {
                let members = partition.members(group);
                let ind = |f: fn(&SdgIndicators) -> f64| {
                    mean(members.iter().map(|&i| f(&indicators[i])))
                };
                SupportProfile {
                    group_id: group,
                    count: members.len(),
                    mean_poverty: ind(|s| s.poverty),
                    mean_education_level: ind(|s| s.education_level),
                    mean_gender_empowerment: ind(|s| s.gender_empowerment),
                    mean_economic_participation: ind(|s| s.economic_participation),
                    mode_education: mode_of(&members, |i| {
                        records[i].educational_background.as_deref()
                    }),
                    mode_work_status: mode_of(&members, |i| records[i].work_status.as_deref()),
                }
            })
            .collect())
    }
}

fn group_profile(
    group: usize,
    members: &[usize],
    records: &[RespondentRecord],
    indicators: &[SdgIndicators],
) -> GroupProfile {
    let ages: Vec<f64> = members
        .iter()
        .filter_map(|&i| records[i].parsed_age())
        .map(f64::from)
        .collect();
    let ind = |f: fn(&SdgIndicators) -> f64| mean(members.iter().map(|&i| f(&indicators[i])));

    GroupProfile {
        group_id: group,
        count: members.len(),
        mean_age: mean(ages.iter().copied()),
        aged_members: ages.len(),
        mean_poverty: ind(|s| s.poverty),
        mean_education_level: ind(|s| s.education_level),
        mean_gender_empowerment: ind(|s| s.gender_empowerment),
        mean_economic_participation: ind(|s| s.economic_participation),
        mean_civic_engagement: ind(|s| s.civic_engagement),
        engagement_level: ind(|s| s.attended) + ind(|s| s.voted),
        mode_sex: mode_of(members, |i| records[i].sex.as_deref()),
        mode_education: mode_of(members, |i| records[i].educational_background.as_deref()),
        mode_work_status: mode_of(members, |i| records[i].work_status.as_deref()),
    }
}

fn check_aligned(
    partition: &Partition,
    records: &[RespondentRecord],
    indicators: &[SdgIndicators],
) -> SegmentResult<()> {
    if partition.len() != records.len() || indicators.len() != records.len() {
        return Err(SegmentError::invalid_parameter(format!(
            "partition ({}), records ({}) and indicators ({}) must be index-aligned",
            partition.len(),
            records.len(),
            indicators.len()
        )));
    }
    Ok(())
}

/// Arithmetic mean; 0.0 for no values.
fn mean<I: Iterator<Item = f64>>(values: I) -> f64 {
    let (sum, count) = values.fold((0.0, 0usize), |(s, c), v| (s + v, c + 1));
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

fn mode_of<'a, F>(members: &[usize], field: F) -> Option<String>
where
    F: Fn(usize) -> Option<&'a str>,
{
    let counter: ModeCounter = members.iter().map(|&i| field(i)).collect();
    counter.mode().map(str::to_string)
}
