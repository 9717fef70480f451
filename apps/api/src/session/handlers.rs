//! Axum route handlers for the Session API.
//!
//! A step request takes the session's lock without waiting. If another step
//! for the same session is still running the request is refused with 409.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::sync::OwnedMutexGuard;
use uuid::Uuid;

use super::store::SharedSession;
use super::{Session, SessionError, SessionSnapshot};
use crate::errors::AppError;
use crate::profile_form::SkillList;
use crate::schema::SchemaViolation;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct CareerSelection {
    pub career: String,
}

#[derive(Deserialize)]
pub struct SkillEntry {
    pub list: SkillList,
    pub skill: String,
}

#[derive(Deserialize)]
pub struct IndustryToggle {
    pub industry: String,
}

/// Snapshot of a session, or a bare marker while a step is in flight.
#[derive(Serialize)]
#[serde(untagged)]
pub enum SessionStatus {
    Ready(Box<SessionSnapshot>),
    Pending { id: Uuid, pending: bool },
}

fn find(state: &AppState, id: Uuid) -> Result<SharedSession, AppError> {
    state
        .sessions
        .get(id)
        .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))
}

fn lock_for_step(state: &AppState, id: Uuid) -> Result<OwnedMutexGuard<Session>, AppError> {
    find(state, id)?.try_lock_owned().map_err(|_| {
        AppError::Conflict("A request for this session is already in progress".to_string())
    })
}

/// POST /api/v1/sessions
pub async fn handle_create_session(
    State(state): State<AppState>,
) -> (StatusCode, Json<SessionSnapshot>) {
    let (_, session) = state.sessions.create();
    let snapshot = session.lock().await.snapshot();
    (StatusCode::CREATED, Json(snapshot))
}

/// GET /api/v1/sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionStatus>, AppError> {
    let session = find(&state, id)?;
    let status = match session.try_lock() {
        Ok(guard) => SessionStatus::Ready(Box::new(guard.snapshot())),
        Err(_) => SessionStatus::Pending { id, pending: true },
    };
    Ok(Json(status))
}

/// DELETE /api/v1/sessions/:id
pub async fn handle_delete_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if state.sessions.remove(id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("Session {id} not found")))
    }
}

/// PATCH /api/v1/sessions/:id/draft
pub async fn handle_update_draft(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<Value>,
) -> Result<Json<SessionSnapshot>, AppError> {
    let patch = body
        .as_object()
        .ok_or_else(|| SchemaViolation::single("$", "Expected a JSON object of draft fields"))?;
    let mut session = lock_for_step(&state, id)?;
    session.form_mut()?.apply_patch(patch).map_err(SessionError::from)?;
    Ok(Json(session.snapshot()))
}

/// POST /api/v1/sessions/:id/form/skills
pub async fn handle_add_skill(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<SkillEntry>,
) -> Result<Json<SessionSnapshot>, AppError> {
    let mut session = lock_for_step(&state, id)?;
    session.form_mut()?.add_skill(req.list, &req.skill);
    Ok(Json(session.snapshot()))
}

/// POST /api/v1/sessions/:id/form/skills/remove
pub async fn handle_remove_skill(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<SkillEntry>,
) -> Result<Json<SessionSnapshot>, AppError> {
    let mut session = lock_for_step(&state, id)?;
    session.form_mut()?.remove_skill(req.list, &req.skill);
    Ok(Json(session.snapshot()))
}

/// POST /api/v1/sessions/:id/form/industries
pub async fn handle_toggle_industry(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<IndustryToggle>,
) -> Result<Json<SessionSnapshot>, AppError> {
    let mut session = lock_for_step(&state, id)?;
    session.form_mut()?.toggle_industry(&req.industry);
    Ok(Json(session.snapshot()))
}

/// POST /api/v1/sessions/:id/form/next
pub async fn handle_form_next(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionSnapshot>, AppError> {
    let mut session = lock_for_step(&state, id)?;
    session.form_mut()?.next().map_err(SessionError::from)?;
    Ok(Json(session.snapshot()))
}

/// POST /api/v1/sessions/:id/form/back
pub async fn handle_form_back(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionSnapshot>, AppError> {
    let mut session = lock_for_step(&state, id)?;
    session.form_mut()?.back();
    Ok(Json(session.snapshot()))
}

/// POST /api/v1/sessions/:id/form/submit
pub async fn handle_form_submit(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionSnapshot>, AppError> {
    let mut session = lock_for_step(&state, id)?;
    session.submit_profile(state.llm.as_ref()).await?;
    Ok(Json(session.snapshot()))
}

/// POST /api/v1/sessions/:id/career
pub async fn handle_select_career(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<CareerSelection>,
) -> Result<Json<SessionSnapshot>, AppError> {
    let mut session = lock_for_step(&state, id)?;
    session.select_career(state.llm.as_ref(), &req.career).await?;
    Ok(Json(session.snapshot()))
}

/// POST /api/v1/sessions/:id/roadmap
pub async fn handle_generate_roadmap(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionSnapshot>, AppError> {
    let mut session = lock_for_step(&state, id)?;
    session.generate_roadmap(state.llm.as_ref()).await?;
    Ok(Json(session.snapshot()))
}

/// POST /api/v1/sessions/:id/restart
pub async fn handle_restart(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionSnapshot>, AppError> {
    let mut session = lock_for_step(&state, id)?;
    session.restart();
    Ok(Json(session.snapshot()))
}
