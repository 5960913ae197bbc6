//! Static catalog of SDG-themed program candidates.
//!
//! Each [`CatalogEntry`] pairs a trigger predicate with five program labels.
//! A thematic category may have more than one entry when its label set
//! depends on the profile (SDG 4 by education tier, SDG 5 by sex); such
//! entries have mutually exclusive triggers.

use crate::encoder::{COLLEGE_TIER, ELEMENTARY_TIER, FEMALE, HIGH_SCHOOL_TIER, UNEMPLOYED};
use crate::summary::AgeGroup;

use super::RecommendationProfile;

/// Number of thematic categories covered by the catalog.
pub const CATEGORY_COUNT: usize = 17;

/// Candidates contributed by each triggered entry.
pub const LABELS_PER_ENTRY: usize = 5;

/// One (predicate, label set) pair of the catalog.
#[derive(Debug, Clone, Copy)]
pub struct CatalogEntry {
    /// SDG number, 1..=17.
    pub goal: u8,
    pub theme: &'static str,
    pub trigger: fn(&RecommendationProfile) -> bool,
    pub labels: [&'static str; LABELS_PER_ENTRY],
}

impl CatalogEntry {
    pub fn is_triggered(&self, profile: &RecommendationProfile) -> bool {
        (self.trigger)(profile)
    }
}

fn unemployed(p: &RecommendationProfile) -> bool {
    p.work_status == UNEMPLOYED
}

fn elementary(p: &RecommendationProfile) -> bool {
    ELEMENTARY_TIER.contains(&p.education.as_str())
}

fn high_school(p: &RecommendationProfile) -> bool {
    HIGH_SCHOOL_TIER.contains(&p.education.as_str())
}

fn college(p: &RecommendationProfile) -> bool {
    COLLEGE_TIER.contains(&p.education.as_str())
}

fn female(p: &RecommendationProfile) -> bool {
    p.sex == FEMALE
}

fn male(p: &RecommendationProfile) -> bool {
    p.sex == "Male"
}

fn is_age(p: &RecommendationProfile, group: AgeGroup) -> bool {
    p.age_group == group
}

/// The catalog, in goal order. Candidate pools are built in this order.
pub static CATALOG: &[CatalogEntry] = &[
    CatalogEntry {
        goal: 1,
        theme: "No Poverty",
        trigger: unemployed,
        labels: [
            "SDG 1: Poverty Alleviation Workshop",
            "SDG 1: Financial Literacy Training",
            "SDG 1: Micro-entrepreneurship Program",
            "SDG 1: Job Skills Development",
            "SDG 1: Economic Empowerment Initiative",
        ],
    },
    CatalogEntry {
        goal: 2,
        theme: "Zero Hunger",
        trigger: |p| elementary(p) || p.mean_age < 20.0,
        labels: [
            "SDG 2: Nutrition Education Program",
            "SDG 2: Community Garden Initiative",
            "SDG 2: Food Security Workshop",
            "SDG 2: Sustainable Agriculture Training",
            "SDG 2: Healthy Eating Campaign",
        ],
    },
    CatalogEntry {
        goal: 3,
        theme: "Good Health and Well-being",
        trigger: |p| female(p) || is_age(p, AgeGroup::Teen),
        labels: [
            "SDG 3: Mental Health Awareness",
            "SDG 3: Reproductive Health Education",
            "SDG 3: Physical Wellness Program",
            "SDG 3: Substance Abuse Prevention",
            "SDG 3: Healthcare Access Workshop",
        ],
    },
    CatalogEntry {
        goal: 4,
        theme: "Quality Education",
        trigger: high_school,
        labels: [
            "SDG 4: Digital Literacy Training",
            "SDG 4: STEM Education Program",
            "SDG 4: Life Skills Development",
            "SDG 4: Academic Excellence Support",
            "SDG 4: Vocational Skills Training",
        ],
    },
    CatalogEntry {
        goal: 4,
        theme: "Quality Education",
        trigger: elementary,
        labels: [
            "SDG 4: Basic Literacy Program",
            "SDG 4: Numeracy Skills Training",
            "SDG 4: Computer Basics Course",
            "SDG 4: Language Development",
            "SDG 4: Educational Support Program",
        ],
    },
    CatalogEntry {
        goal: 5,
        theme: "Gender Equality",
        trigger: female,
        labels: [
            "SDG 5: Women Leadership Program",
            "SDG 5: Gender Equality Workshop",
            "SDG 5: Women in STEM Initiative",
            "SDG 5: Economic Empowerment for Women",
            "SDG 5: Women's Rights Advocacy",
        ],
    },
    CatalogEntry {
        goal: 5,
        theme: "Gender Equality",
        trigger: male,
        labels: [
            "SDG 5: Men for Gender Equality",
            "SDG 5: Positive Masculinity Workshop",
            "SDG 5: Gender Sensitivity Training",
            "SDG 5: Allyship Development Program",
            "SDG 5: Gender Equality Advocacy",
        ],
    },
    CatalogEntry {
        goal: 6,
        theme: "Clean Water and Sanitation",
        trigger: |p| p.engagement_level < 0.5,
        labels: [
            "SDG 6: Water Conservation Workshop",
            "SDG 6: Sanitation Awareness Program",
            "SDG 6: Environmental Health Training",
            "SDG 6: Community Clean-up Initiative",
            "SDG 6: Water Safety Education",
        ],
    },
    CatalogEntry {
        goal: 7,
        theme: "Affordable and Clean Energy",
        trigger: college,
        labels: [
            "SDG 7: Renewable Energy Workshop",
            "SDG 7: Energy Conservation Training",
            "SDG 7: Green Technology Program",
            "SDG 7: Sustainable Energy Initiative",
            "SDG 7: Energy Efficiency Workshop",
        ],
    },
    CatalogEntry {
        goal: 8,
        theme: "Decent Work and Economic Growth",
        trigger: |p| unemployed(p) || is_age(p, AgeGroup::YoungAdult),
        labels: [
            "SDG 8: Career Development Program",
            "SDG 8: Entrepreneurship Training",
            "SDG 8: Professional Skills Workshop",
            "SDG 8: Job Market Preparation",
            "SDG 8: Economic Growth Initiative",
        ],
    },
    CatalogEntry {
        goal: 9,
        theme: "Industry, Innovation and Infrastructure",
        trigger: |p| college(p) || is_age(p, AgeGroup::YoungAdult),
        labels: [
            "SDG 9: Innovation Workshop",
            "SDG 9: Technology Skills Training",
            "SDG 9: Digital Infrastructure Program",
            "SDG 9: Industry 4.0 Awareness",
            "SDG 9: Innovation Hub Initiative",
        ],
    },
    CatalogEntry {
        goal: 10,
        theme: "Reduced Inequalities",
        trigger: |p| p.engagement_level < 0.5 || elementary(p),
        labels: [
            "SDG 10: Social Inclusion Program",
            "SDG 10: Diversity Training Workshop",
            "SDG 10: Equal Opportunity Initiative",
            "SDG 10: Community Integration Program",
            "SDG 10: Anti-Discrimination Workshop",
        ],
    },
    CatalogEntry {
        goal: 11,
        theme: "Sustainable Cities and Communities",
        trigger: |p| is_age(p, AgeGroup::YoungAdult) || is_age(p, AgeGroup::Adult),
        labels: [
            "SDG 11: Urban Planning Workshop",
            "SDG 11: Community Development Program",
            "SDG 11: Sustainable City Initiative",
            "SDG 11: Public Space Improvement",
            "SDG 11: Urban Innovation Program",
        ],
    },
    CatalogEntry {
        goal: 12,
        theme: "Responsible Consumption and Production",
        trigger: |p| p.engagement_level > 1.5,
        labels: [
            "SDG 12: Sustainable Living Workshop",
            "SDG 12: Circular Economy Training",
            "SDG 12: Waste Reduction Program",
            "SDG 12: Green Consumerism Initiative",
            "SDG 12: Sustainable Production Workshop",
        ],
    },
    CatalogEntry {
        goal: 13,
        theme: "Climate Action",
        trigger: |p| is_age(p, AgeGroup::Teen) || p.engagement_level > 1.0,
        labels: [
            "SDG 13: Climate Change Awareness",
            "SDG 13: Environmental Protection Program",
            "SDG 13: Carbon Footprint Workshop",
            "SDG 13: Climate Action Initiative",
            "SDG 13: Green Advocacy Training",
        ],
    },
    CatalogEntry {
        goal: 14,
        theme: "Life Below Water",
        trigger: |p| p.engagement_level > 0.5,
        labels: [
            "SDG 14: Marine Conservation Workshop",
            "SDG 14: Ocean Protection Program",
            "SDG 14: Coastal Clean-up Initiative",
            "SDG 14: Marine Life Awareness",
            "SDG 14: Ocean Sustainability Training",
        ],
    },
    CatalogEntry {
        goal: 15,
        theme: "Life on Land",
        trigger: |p| is_age(p, AgeGroup::Teen) || is_age(p, AgeGroup::YoungAdult),
        labels: [
            "SDG 15: Biodiversity Conservation",
            "SDG 15: Forest Protection Program",
            "SDG 15: Wildlife Awareness Workshop",
            "SDG 15: Land Restoration Initiative",
            "SDG 15: Ecosystem Protection Training",
        ],
    },
    CatalogEntry {
        goal: 16,
        theme: "Peace, Justice and Strong Institutions",
        trigger: |p| p.engagement_level > 1.5 || college(p),
        labels: [
            "SDG 16: Good Governance Workshop",
            "SDG 16: Human Rights Education",
            "SDG 16: Peace Building Program",
            "SDG 16: Justice System Awareness",
            "SDG 16: Civic Engagement Initiative",
        ],
    },
    CatalogEntry {
        goal: 17,
        theme: "Partnerships for the Goals",
        trigger: |p| p.engagement_level > 1.0,
        labels: [
            "SDG 17: Global Partnership Workshop",
            "SDG 17: International Cooperation Program",
            "SDG 17: Cross-cultural Exchange Initiative",
            "SDG 17: Partnership Building Training",
            "SDG 17: Collaborative Development Program",
        ],
    },
];

/// Entries whose trigger fires for the profile, in catalog order.
pub fn triggered_entries(
    profile: &RecommendationProfile,
) -> impl Iterator<Item = &'static CatalogEntry> + '_ {
    CATALOG.iter().filter(move |entry| entry.is_triggered(profile))
}
