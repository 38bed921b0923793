use crate::infra::{catalog_path, load_engine};
use clap::Args;
use intern_match::config::AppConfig;
use intern_match::error::AppError;
use intern_match::matching::{
    profile_from_request, CandidateProfile, MatchBreakdown, RecommendationEngine,
    ScoredInternship,
};
use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Args, Debug, Default)]
pub(crate) struct RecommendArgs {
    /// JSON file holding the candidate profile (education, skills, interests, location)
    #[arg(long, conflicts_with_all = ["education", "skills", "interests", "location"])]
    pub(crate) profile: Option<PathBuf>,
    /// Education level, e.g. 12th, diploma, undergraduate
    #[arg(long)]
    pub(crate) education: Option<String>,
    /// Comma-separated skills
    #[arg(long, value_delimiter = ',')]
    pub(crate) skills: Vec<String>,
    /// Comma-separated sectors of interest
    #[arg(long, value_delimiter = ',')]
    pub(crate) interests: Vec<String>,
    /// Preferred city, or "any"/"remote"
    #[arg(long)]
    pub(crate) location: Option<String>,
    /// Override the configured internship catalog file
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
    /// Print the ranked list as JSON instead of a text summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct SectorsArgs {
    /// Override the configured internship catalog file
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
}

pub(crate) fn run_recommend(args: RecommendArgs) -> Result<(), AppError> {
    let RecommendArgs {
        profile,
        education,
        skills,
        interests,
        location,
        catalog,
        json,
    } = args;

    let candidate = match profile {
        Some(path) => read_profile(&path)?,
        None => CandidateProfile {
            education: education.unwrap_or_default(),
            skills,
            interests,
            location: location.unwrap_or_default(),
        },
    };

    let engine = open_catalog(catalog)?;
    let ranked = engine.recommend_with_breakdown(&candidate);

    if json {
        let recommendations: Vec<&ScoredInternship> =
            ranked.iter().map(|(scored, _)| scored).collect();
        let payload = json!({
            "success": true,
            "total": recommendations.len(),
            "recommendations": recommendations,
        });
        println!("{payload:#}");
    } else {
        render_recommendations(&candidate, &ranked);
    }

    Ok(())
}

pub(crate) fn run_sectors(args: SectorsArgs) -> Result<(), AppError> {
    let engine = open_catalog(args.catalog)?;
    for sector in engine.sectors() {
        println!("{sector}");
    }
    Ok(())
}

fn open_catalog(override_path: Option<PathBuf>) -> Result<RecommendationEngine, AppError> {
    let config = AppConfig::load()?;
    let path = catalog_path(override_path, &config.catalog);
    let engine = load_engine(&path);
    if engine.is_empty() {
        eprintln!(
            "note: catalog at {} is empty or unavailable; no internships to rank",
            path.display()
        );
    }
    Ok(engine)
}

pub(crate) fn read_profile(path: &Path) -> Result<CandidateProfile, AppError> {
    let raw = fs::read_to_string(path)?;
    let body: Value = serde_json::from_str(&raw)?;
    Ok(profile_from_request(body)?)
}

fn render_recommendations(
    candidate: &CandidateProfile,
    ranked: &[(ScoredInternship, MatchBreakdown)],
) {
    println!("Internship recommendations");
    println!(
        "Candidate: {} | skills: {} | interests: {} | location: {}",
        display_or_dash(&candidate.education),
        display_list(&candidate.skills),
        display_list(&candidate.interests),
        display_or_dash(&candidate.location),
    );

    if ranked.is_empty() {
        println!("\nNo matching internships found.");
        return;
    }

    for (position, (scored, breakdown)) in ranked.iter().enumerate() {
        let internship = &scored.internship;
        let title = internship
            .extra
            .get("title")
            .and_then(Value::as_str)
            .unwrap_or("Untitled internship");
        let company = internship
            .extra
            .get("company")
            .and_then(Value::as_str)
            .unwrap_or("-");
        let remote = if internship.is_remote { " (remote)" } else { "" };

        println!(
            "\n{}. {} @ {} [{}]",
            position + 1,
            title,
            company,
            display_or_dash(&internship.sector)
        );
        println!(
            "   Location: {}{} | Match score: {}",
            display_or_dash(&internship.location),
            remote,
            scored.match_score
        );
        println!("   Why: {}", scored.match_reason);
        println!(
            "   Factors: skills {:.0} | sector {:.0} | location {:.0} | education {:.0}",
            breakdown.skills, breakdown.sector, breakdown.location, breakdown.education
        );
    }
}

fn display_or_dash(value: &str) -> &str {
    if value.trim().is_empty() {
        "-"
    } else {
        value
    }
}

fn display_list(values: &[String]) -> String {
    if values.is_empty() {
        "-".to_string()
    } else {
        values.join(", ")
    }
}
