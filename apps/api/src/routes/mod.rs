pub mod health;

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::actions::handlers as actions;
use crate::session::handlers as sessions;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Action API
        .route(
            "/api/v1/actions/career-suggestions",
            post(actions::handle_career_suggestions),
        )
        .route(
            "/api/v1/actions/career-skills",
            post(actions::handle_career_skills),
        )
        .route("/api/v1/actions/skills-gap", post(actions::handle_skills_gap))
        .route("/api/v1/actions/roadmap", post(actions::handle_roadmap))
        .route("/api/v1/actions/chatbot", post(actions::handle_chatbot))
        // Session API
        .route("/api/v1/sessions", post(sessions::handle_create_session))
        .route(
            "/api/v1/sessions/:id",
            get(sessions::handle_get_session).delete(sessions::handle_delete_session),
        )
        .route(
            "/api/v1/sessions/:id/draft",
            patch(sessions::handle_update_draft),
        )
        .route(
            "/api/v1/sessions/:id/form/skills",
            post(sessions::handle_add_skill),
        )
        .route(
            "/api/v1/sessions/:id/form/skills/remove",
            post(sessions::handle_remove_skill),
        )
        .route(
            "/api/v1/sessions/:id/form/industries",
            post(sessions::handle_toggle_industry),
        )
        .route(
            "/api/v1/sessions/:id/form/next",
            post(sessions::handle_form_next),
        )
        .route(
            "/api/v1/sessions/:id/form/back",
            post(sessions::handle_form_back),
        )
        .route(
            "/api/v1/sessions/:id/form/submit",
            post(sessions::handle_form_submit),
        )
        .route(
            "/api/v1/sessions/:id/career",
            post(sessions::handle_select_career),
        )
        .route(
            "/api/v1/sessions/:id/roadmap",
            post(sessions::handle_generate_roadmap),
        )
        .route(
            "/api/v1/sessions/:id/restart",
            post(sessions::handle_restart),
        )
        .with_state(state)
}
