//! Candidate-to-internship matching: catalog snapshot, scorer, and the HTTP surface over them.
//!
//! The engine is built once at startup and shared behind an `Arc`; nothing in this module
//! mutates the catalog after it is loaded.

pub mod catalog;
pub mod domain;
pub mod intake;
pub mod router;
pub mod scoring;

#[cfg(test)]
mod tests;

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};

pub use catalog::{Catalog, CatalogError, CatalogSource, JsonFileCatalog};
pub use domain::{CandidateProfile, InternshipId, InternshipRecord, ScoredInternship};
pub use intake::{profile_from_request, ProfileValidationError, REQUIRED_PROFILE_FIELDS};
pub use router::recommendation_router;
pub use scoring::{MatchBreakdown, Scorer, ScoringWeights, RECOMMENDATION_LIMIT};

/// Owns the loaded catalog and answers recommendation and listing queries.
#[derive(Debug, Clone, Default)]
pub struct RecommendationEngine {
    catalog: Catalog,
    scorer: Scorer,
}

impl RecommendationEngine {
    pub fn new(catalog: Catalog) -> Self {
        Self::with_scorer(catalog, Scorer::default())
    }

    pub fn with_scorer(catalog: Catalog, scorer: Scorer) -> Self {
        Self { catalog, scorer }
    }

    /// Load the catalog from `source`, degrading to an empty engine when it is unavailable.
    pub fn from_source<S>(source: &S) -> Self
    where
        S: CatalogSource + ?Sized,
    {
        Self::new(Catalog::load_or_empty(source))
    }

    /// Top matches for `profile`, best first.
    pub fn recommend(&self, profile: &CandidateProfile) -> Vec<ScoredInternship> {
        self.scorer.rank(profile, self.catalog.records())
    }

    /// Ranked matches paired with their per-factor breakdown.
    pub fn recommend_with_breakdown(
        &self,
        profile: &CandidateProfile,
    ) -> Vec<(ScoredInternship, MatchBreakdown)> {
        self.recommend(profile)
            .into_iter()
            .map(|scored| {
                let breakdown = self.scorer.evaluate(profile, &scored.internship);
                (scored, breakdown)
            })
            .collect()
    }

    pub fn internships(&self) -> &[InternshipRecord] {
        self.catalog.records()
    }

    pub fn internship(&self, id: &str) -> Option<&InternshipRecord> {
        self.catalog
            .records()
            .iter()
            .find(|record| record.id.as_ref().is_some_and(|known| known.matches(id)))
    }

    /// Distinct non-empty sectors in ascending order.
    pub fn sectors(&self) -> Vec<String> {
        self.catalog
            .records()
            .iter()
            .filter(|record| !record.sector.is_empty())
            .map(|record| record.sector.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.catalog.loaded_at()
    }

    pub fn scorer(&self) -> &Scorer {
        &self.scorer
    }
}
