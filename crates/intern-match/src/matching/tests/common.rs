use std::sync::Arc;

use axum::body::to_bytes;
use axum::response::Response;
use serde_json::{json, Value};

use crate::matching::{CandidateProfile, Catalog, InternshipRecord, RecommendationEngine};

pub(super) fn record(value: Value) -> InternshipRecord {
    serde_json::from_value(value).expect("fixture record parses")
}

pub(super) fn labels(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

pub(super) fn candidate() -> CandidateProfile {
    CandidateProfile {
        education: "undergraduate".to_string(),
        skills: labels(&["Python", "SQL", "Excel"]),
        interests: labels(&["Technology", "Finance"]),
        location: "Mumbai".to_string(),
    }
}

pub(super) fn sample_catalog() -> Vec<InternshipRecord> {
    vec![
        record(json!({
            "id": 1,
            "title": "Data Science Intern",
            "company": "Analytics Hub",
            "sector": "Technology",
            "requirements": ["Python", "Machine Learning", "SQL"],
            "location": "Bangalore",
            "is_remote": false,
            "preferred_education": ["undergraduate", "postgraduate"]
        })),
        record(json!({
            "id": 2,
            "title": "Financial Analyst Intern",
            "company": "Capital Partners",
            "sector": "Finance",
            "requirements": ["Excel", "Financial modeling"],
            "location": "Mumbai",
            "is_remote": false,
            "preferred_education": ["undergraduate"]
        })),
        record(json!({
            "id": 3,
            "title": "Content Writer",
            "company": "Storyline Media",
            "sector": "Media",
            "requirements": ["Writing", "Communication"],
            "location": "Delhi",
            "is_remote": true,
            "preferred_education": []
        })),
        record(json!({
            "id": 4,
            "title": "Operations Intern",
            "company": "Swift Logistics",
            "sector": "Operations",
            "requirements": ["Logistics"],
            "location": "Pune",
            "is_remote": false,
            "preferred_education": ["postgraduate"]
        })),
        record(json!({
            "id": "fintech-5",
            "title": "FinTech Developer",
            "company": "PayLoop",
            "sector": "Financial Technology",
            "requirements": ["Python", "JavaScript"],
            "location": "Remote",
            "is_remote": true,
            "preferred_education": ["diploma"]
        })),
        record(json!({
            "id": 6,
            "title": "Healthcare Research Assistant",
            "company": "CareWell",
            "sector": "Healthcare",
            "requirements": ["Biology"],
            "location": "Chennai",
            "is_remote": false,
            "preferred_education": ["12th"]
        })),
        record(json!({
            "id": 7,
            "title": "Marketing Intern",
            "company": "BrandWorks",
            "sector": "Marketing",
            "requirements": [],
            "location": "Mumbai",
            "is_remote": false,
            "preferred_education": ["undergraduate"]
        })),
    ]
}

pub(super) fn sample_engine() -> RecommendationEngine {
    RecommendationEngine::new(Catalog::new(sample_catalog()))
}

pub(super) fn shared_engine() -> Arc<RecommendationEngine> {
    Arc::new(sample_engine())
}

pub(super) async fn json_body(response: Response) -> Value {
    let body = to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("body");
    serde_json::from_slice(&body).expect("json")
}
