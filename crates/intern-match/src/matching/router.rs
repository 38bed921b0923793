use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use serde_json::{json, Value};
use tracing::{info, warn};

use super::domain::{InternshipRecord, ScoredInternship};
use crate::error::AppError;
use super::intake::profile_from_request;
use super::RecommendationEngine;

/// Router exposing the recommendation and catalog endpoints.
pub fn recommendation_router(engine: Arc<RecommendationEngine>) -> Router {
    Router::new()
        .route("/", get(info_handler))
        .route("/api/recommend", post(recommend_handler))
        .route("/api/internships", get(internships_handler))
        .route("/api/internships/{internship_id}", get(internship_handler))
        .route("/api/sectors", get(sectors_handler))
        .with_state(engine)
}

#[derive(Debug, Serialize)]
pub struct RecommendationsView {
    pub success: bool,
    pub recommendations: Vec<ScoredInternship>,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct InternshipsView<'a> {
    pub success: bool,
    pub internships: &'a [InternshipRecord],
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct SectorsView {
    pub success: bool,
    pub sectors: Vec<String>,
}

pub(crate) async fn info_handler(State(engine): State<Arc<RecommendationEngine>>) -> Response {
    let payload = json!({
        "message": "PM Internship Recommender API",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "active",
        "internships": engine.len(),
        "catalog_loaded_at": engine.loaded_at().to_rfc3339(),
    });
    (StatusCode::OK, Json(payload)).into_response()
}

pub(crate) async fn recommend_handler(
    State(engine): State<Arc<RecommendationEngine>>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(body) = body.inspect_err(|rejection| {
        warn!(error = %rejection.body_text(), "rejected recommendation request body");
    })?;

    let profile = profile_from_request(body).inspect_err(|error| {
        warn!(%error, "invalid candidate profile");
    })?;

    let recommendations = engine.recommend(&profile);
    info!(
        skills = profile.skills.len(),
        interests = profile.interests.len(),
        returned = recommendations.len(),
        "served recommendations"
    );

    let view = RecommendationsView {
        success: true,
        total: recommendations.len(),
        recommendations,
    };
    Ok((StatusCode::OK, Json(view)).into_response())
}

pub(crate) async fn internships_handler(
    State(engine): State<Arc<RecommendationEngine>>,
) -> Response {
    let internships = engine.internships();
    let view = InternshipsView {
        success: true,
        internships,
        total: internships.len(),
    };
    (StatusCode::OK, Json(view)).into_response()
}

pub(crate) async fn internship_handler(
    State(engine): State<Arc<RecommendationEngine>>,
    Path(internship_id): Path<String>,
) -> Result<Response, AppError> {
    let internship = engine
        .internship(&internship_id)
        .ok_or_else(|| AppError::NotFound(format!("Internship not found: {internship_id}")))?;

    let payload = json!({ "success": true, "internship": internship });
    Ok((StatusCode::OK, Json(payload)).into_response())
}

pub(crate) async fn sectors_handler(State(engine): State<Arc<RecommendationEngine>>) -> Response {
    let view = SectorsView {
        success: true,
        sectors: engine.sectors(),
    };
    (StatusCode::OK, Json(view)).into_response()
}
