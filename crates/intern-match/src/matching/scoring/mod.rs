mod reason;
mod rules;

pub use rules::{
    education_match, education_rank, location_match, metro_region, same_region, sector_match,
    skills_match, EDUCATION_LEVELS,
};

use super::domain::{CandidateProfile, InternshipRecord, ScoredInternship};
use reason::{explain, ReasonInputs};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Maximum number of recommendations returned by a ranking call.
pub const RECOMMENDATION_LIMIT: usize = 5;

/// Relative weight of each sub-score in the composite match score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub skills: f64,
    pub sector: f64,
    pub location: f64,
    pub education: f64,
}

impl ScoringWeights {
    pub fn sum(&self) -> f64 {
        self.skills + self.sector + self.location + self.education
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            skills: 0.4,
            sector: 0.3,
            location: 0.2,
            education: 0.1,
        }
    }
}

/// Per-factor detail behind a single match score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchBreakdown {
    pub skills: f64,
    pub sector: f64,
    pub location: f64,
    pub education: f64,
    pub score: u8,
    pub reason: String,
}

/// Stateless scorer that weighs a candidate against catalog entries.
#[derive(Debug, Clone, Default)]
pub struct Scorer {
    weights: ScoringWeights,
}

impl Scorer {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    pub fn evaluate(
        &self,
        profile: &CandidateProfile,
        internship: &InternshipRecord,
    ) -> MatchBreakdown {
        let skills = skills_match(&profile.skills, &internship.requirements);
        let sector = sector_match(&profile.interests, &internship.sector);
        let location = location_match(&profile.location, internship);
        let education = education_match(&profile.education, &internship.preferred_education);

        let mut composite = 0.0;
        composite += skills * self.weights.skills;
        composite += sector * self.weights.sector;
        composite += location * self.weights.location;
        composite += education * self.weights.education;

        let reason = explain(&ReasonInputs {
            skills,
            sector,
            sector_label: &internship.sector,
            location,
            education,
        });

        MatchBreakdown {
            skills,
            sector,
            location,
            education,
            score: clamp_score(composite),
            reason,
        }
    }

    /// Score every entry, drop zero scores, and keep the best
    /// [`RECOMMENDATION_LIMIT`] in descending order. Equal scores keep catalog order.
    pub fn rank(
        &self,
        profile: &CandidateProfile,
        catalog: &[InternshipRecord],
    ) -> Vec<ScoredInternship> {
        let mut scored: Vec<ScoredInternship> = catalog
            .iter()
            .filter_map(|internship| {
                let breakdown = self.evaluate(profile, internship);
                (breakdown.score > 0)
                    .then(|| internship.annotate(breakdown.score, breakdown.reason))
            })
            .collect();

        scored.sort_by(|left, right| right.match_score.cmp(&left.match_score));
        scored.truncate(RECOMMENDATION_LIMIT);

        debug!(
            catalog_size = catalog.len(),
            returned = scored.len(),
            top_score = scored.first().map(|entry| entry.match_score),
            "ranked internships"
        );

        scored
    }
}

fn clamp_score(composite: f64) -> u8 {
    // `as` saturates and maps NaN to zero.
    (composite.trunc() as i64).clamp(0, 100) as u8
}
