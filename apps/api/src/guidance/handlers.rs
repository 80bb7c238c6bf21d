//! Axum route handlers for the Guidance API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::guidance::profile::StudentProfile;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct GuidanceRequest {
    pub study_level: String,
    pub profile: StudentProfile,
}

#[derive(Debug, Serialize)]
pub struct GuidanceResponse {
    pub guidance: String,
}

/// POST /api/v1/guidance
///
/// Validates the form input, flattens it into the profile string, and runs
/// one guidance generation. Upstream failures surface as 502 with a
/// machine-readable code; nothing partial is ever returned.
pub async fn handle_generate_guidance(
    State(state): State<AppState>,
    Json(request): Json<GuidanceRequest>,
) -> Result<Json<GuidanceResponse>, AppError> {
    validate_request(&request)?;

    let profile_text = request.profile.assemble();
    let guidance = state
        .llm
        .generate(&profile_text, &request.study_level)
        .await?;

    Ok(Json(GuidanceResponse { guidance }))
}

/// Mirrors the form's own gate: subjects, interests, and strengths are the
/// inputs the counselor prompt cannot do without.
fn validate_request(request: &GuidanceRequest) -> Result<(), AppError> {
    if request.study_level.trim().is_empty() {
        return Err(AppError::Validation(
            "study_level cannot be empty".to_string(),
        ));
    }
    if request.profile.subjects_and_grades.trim().is_empty() {
        return Err(AppError::Validation(
            "subjects_and_grades cannot be empty".to_string(),
        ));
    }
    if request.profile.interests.is_empty() {
        return Err(AppError::Validation(
            "at least one interest is required".to_string(),
        ));
    }
    if request.profile.strengths.is_empty() {
        return Err(AppError::Validation(
            "at least one strength is required".to_string(),
        ));
    }
    Ok(())
}
