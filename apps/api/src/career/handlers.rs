//! Axum route handlers for career details, suggestions, and roadmaps.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Deserialize;

use crate::career::advisor::{career_details, career_roadmap, career_suggestions};
use crate::errors::AppError;
use crate::models::career::{
    CareerDetailsResponse, CareerPreferences, CareerRoadmapResponse, CareerSuggestionsResponse,
};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerDetailsRequest {
    #[serde(alias = "title", alias = "careerTitle")]
    pub career: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerRoadmapRequest {
    #[serde(default)]
    pub current_role: String,
    pub target_role: String,
    #[serde(default)]
    pub timeframe: Option<String>,
}

/// POST /api/career-details
pub async fn handle_career_details(
    State(state): State<AppState>,
    payload: Result<Json<CareerDetailsRequest>, JsonRejection>,
) -> Result<Json<CareerDetailsResponse>, AppError> {
    let Json(request) = payload?;
    let career = request.career.trim();
    if career.is_empty() {
        return Err(AppError::Validation("career cannot be empty".to_string()));
    }

    let (details, source) = career_details(state.llm.as_ref(), career).await;
    Ok(Json(CareerDetailsResponse { details, source }))
}

/// POST /api/career-suggestions
pub async fn handle_career_suggestions(
    State(state): State<AppState>,
    payload: Result<Json<CareerPreferences>, JsonRejection>,
) -> Result<Json<CareerSuggestionsResponse>, AppError> {
    let Json(prefs) = payload?;
    if prefs.is_blank() {
        return Err(AppError::Validation(
            "at least one preference field is required".to_string(),
        ));
    }

    let (suggestions, source) = career_suggestions(state.llm.as_ref(), &prefs).await;
    Ok(Json(CareerSuggestionsResponse {
        suggestions,
        source,
    }))
}

/// POST /api/career-roadmap
pub async fn handle_career_roadmap(
    State(state): State<AppState>,
    payload: Result<Json<CareerRoadmapRequest>, JsonRejection>,
) -> Result<Json<CareerRoadmapResponse>, AppError> {
    let Json(request) = payload?;
    let target_role = request.target_role.trim();
    if target_role.is_empty() {
        return Err(AppError::Validation("targetRole cannot be empty".to_string()));
    }
    let current_role = request.current_role.trim();

    let (steps, source) = career_roadmap(
        state.llm.as_ref(),
        current_role,
        target_role,
        request.timeframe.as_deref(),
    )
    .await;

    Ok(Json(CareerRoadmapResponse {
        current_role: current_role.to_string(),
        target_role: target_role.to_string(),
        steps,
        source,
    }))
}
