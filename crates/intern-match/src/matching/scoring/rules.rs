use super::super::domain::InternshipRecord;

/// Neutral skills score when a posting lists no requirements.
pub(crate) const UNSTATED_REQUIREMENTS_SCORE: f64 = 50.0;

pub(crate) const SECTOR_EXACT_SCORE: f64 = 100.0;
pub(crate) const SECTOR_PARTIAL_SCORE: f64 = 75.0;

pub(crate) const LOCATION_PERFECT_SCORE: f64 = 100.0;
pub(crate) const LOCATION_REMOTE_SCORE: f64 = 80.0;
pub(crate) const LOCATION_REGION_SCORE: f64 = 60.0;
pub(crate) const LOCATION_UNSTATED_SCORE: f64 = 50.0;
pub(crate) const LOCATION_DISTANT_SCORE: f64 = 20.0;

pub(crate) const EDUCATION_EXACT_SCORE: f64 = 100.0;
pub(crate) const EDUCATION_QUALIFIED_SCORE: f64 = 80.0;
pub(crate) const EDUCATION_UNKNOWN_SCORE: f64 = 50.0;
pub(crate) const EDUCATION_UNDERQUALIFIED_SCORE: f64 = 30.0;

/// Known education levels, lowest first.
pub const EDUCATION_LEVELS: [&str; 5] = [
    "10th",
    "12th",
    "diploma",
    "undergraduate",
    "postgraduate",
];

const METRO_REGIONS: [(&str, &str); 7] = [
    ("mumbai", "west"),
    ("pune", "west"),
    ("bangalore", "south"),
    ("chennai", "south"),
    ("hyderabad", "south"),
    ("delhi", "north"),
    ("kolkata", "east"),
];

fn related(left: &str, right: &str) -> bool {
    left.contains(right) || right.contains(left)
}

/// Share of required skills covered by the candidate, as a percentage.
pub fn skills_match(candidate_skills: &[String], requirements: &[String]) -> f64 {
    if requirements.is_empty() {
        return UNSTATED_REQUIREMENTS_SCORE;
    }
    if candidate_skills.is_empty() {
        return 0.0;
    }

    let candidate: Vec<String> = candidate_skills
        .iter()
        .map(|skill| skill.to_lowercase())
        .collect();

    let matched = requirements
        .iter()
        .map(|requirement| requirement.to_lowercase())
        .filter(|requirement| candidate.iter().any(|skill| related(skill, requirement)))
        .count();

    (matched as f64 / requirements.len() as f64) * 100.0
}

/// An exact interest anywhere in the list outranks a partial one earlier in it.
pub fn sector_match(interests: &[String], sector: &str) -> f64 {
    if interests.is_empty() || sector.is_empty() {
        return 0.0;
    }

    let sector = sector.to_lowercase();
    let interests: Vec<String> = interests
        .iter()
        .map(|interest| interest.to_lowercase())
        .collect();

    if interests.iter().any(|interest| *interest == sector) {
        SECTOR_EXACT_SCORE
    } else if interests.iter().any(|interest| related(interest, &sector)) {
        SECTOR_PARTIAL_SCORE
    } else {
        0.0
    }
}

pub fn location_match(candidate_location: &str, internship: &InternshipRecord) -> f64 {
    if candidate_location.is_empty() {
        return LOCATION_UNSTATED_SCORE;
    }

    let candidate = candidate_location.to_lowercase();
    let posting = internship.location.to_lowercase();

    if candidate == "any" {
        return LOCATION_PERFECT_SCORE;
    }
    if internship.is_remote && (candidate == "remote" || candidate == "any") {
        return LOCATION_PERFECT_SCORE;
    }
    if related(&candidate, &posting) {
        return LOCATION_PERFECT_SCORE;
    }
    if internship.is_remote {
        return LOCATION_REMOTE_SCORE;
    }
    if same_region(&candidate, &posting) {
        return LOCATION_REGION_SCORE;
    }

    LOCATION_DISTANT_SCORE
}

/// Coarse metro region for a lowercased city name.
pub fn metro_region(city: &str) -> Option<&'static str> {
    METRO_REGIONS
        .iter()
        .find(|(name, _)| *name == city)
        .map(|(_, region)| *region)
}

pub fn same_region(left: &str, right: &str) -> bool {
    match (metro_region(left), metro_region(right)) {
        (Some(left), Some(right)) => left == right,
        _ => false,
    }
}

/// Position of a lowercased label on [`EDUCATION_LEVELS`].
pub fn education_rank(level: &str) -> Option<usize> {
    EDUCATION_LEVELS.iter().position(|known| *known == level)
}

pub fn education_match(candidate_education: &str, preferred: &[String]) -> f64 {
    if preferred.is_empty() {
        return EDUCATION_EXACT_SCORE;
    }
    if candidate_education.is_empty() {
        return 0.0;
    }

    let candidate = candidate_education.to_lowercase();
    let preferred: Vec<String> = preferred.iter().map(|level| level.to_lowercase()).collect();

    if preferred.iter().any(|level| *level == candidate) {
        return EDUCATION_EXACT_SCORE;
    }

    let candidate_rank = education_rank(&candidate);
    let minimum_required = preferred.iter().filter_map(|level| education_rank(level)).min();

    match (candidate_rank, minimum_required) {
        (Some(candidate), Some(minimum)) if candidate >= minimum => EDUCATION_QUALIFIED_SCORE,
        (Some(_), Some(_)) => EDUCATION_UNDERQUALIFIED_SCORE,
        _ => EDUCATION_UNKNOWN_SCORE,
    }
}
