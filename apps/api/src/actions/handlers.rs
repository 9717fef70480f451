//! Axum route handlers for the Action API.
//!
//! Bodies arrive untyped and are schema-checked before an action runs, so a
//! malformed request reports every bad field at once.

use axum::{extract::State, Json};
use serde_json::Value;

use crate::actions;
use crate::errors::AppError;
use crate::pipeline::career_skills::{CareerSkillsInput, CareerSkillsResult};
use crate::schema::career::CareerSuggestionResult;
use crate::schema::chatbot::{ChatbotInput, ChatbotReply};
use crate::schema::profile::StudentProfile;
use crate::schema::roadmap::{RoadmapInput, RoadmapResult};
use crate::schema::skills_gap::{SkillsGapInput, SkillsGapResult};
use crate::schema::validate;
use crate::state::AppState;

/// POST /api/v1/actions/career-suggestions
pub async fn handle_career_suggestions(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<CareerSuggestionResult>, AppError> {
    let profile: StudentProfile = validate(body)?;
    let result = actions::get_career_suggestions(state.llm.as_ref(), &profile).await?;
    Ok(Json(result))
}

/// POST /api/v1/actions/career-skills
pub async fn handle_career_skills(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<CareerSkillsResult>, AppError> {
    let input: CareerSkillsInput = validate(body)?;
    let skills = actions::get_skills_for_career(state.llm.as_ref(), &input.career_name).await?;
    Ok(Json(CareerSkillsResult { skills }))
}

/// POST /api/v1/actions/skills-gap
pub async fn handle_skills_gap(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<SkillsGapResult>, AppError> {
    let input: SkillsGapInput = validate(body)?;
    let result = actions::get_skills_gap(state.llm.as_ref(), &input).await?;
    Ok(Json(result))
}

/// POST /api/v1/actions/roadmap
pub async fn handle_roadmap(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<RoadmapResult>, AppError> {
    let input: RoadmapInput = validate(body)?;
    let result = actions::get_personalized_roadmap(state.llm.as_ref(), &input).await?;
    Ok(Json(result))
}

/// POST /api/v1/actions/chatbot
pub async fn handle_chatbot(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<ChatbotReply>, AppError> {
    let input: ChatbotInput = validate(body)?;
    let reply = actions::get_chatbot_response(state.llm.as_ref(), &input).await?;
    Ok(Json(reply))
}
