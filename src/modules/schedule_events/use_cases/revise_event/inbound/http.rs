use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;

use crate::modules::schedule_events::use_cases::revise_event::command::{EventPatch, ReviseEvent};
use crate::modules::schedule_events::use_cases::revise_event::handler::ReviseEventHandler;
use crate::shell::auth::AuthenticatedUser;
use crate::shell::responses::{application_error, json_rejection};
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    AuthenticatedUser(user_id): AuthenticatedUser,
    Path(event_id): Path<String>,
    body: Result<Json<EventPatch>, JsonRejection>,
) -> impl IntoResponse {
    let Json(patch) = match body {
        Ok(b) => b,
        Err(rejection) => return json_rejection(rejection),
    };

    let command = ReviseEvent {
        patch,
        revised_at: Utc::now(),
    };

    let handler = ReviseEventHandler::new(state.schedule_events.clone());
    match handler.handle(&event_id, user_id.as_str(), command).await {
        Ok(event) => (StatusCode::OK, Json(event)).into_response(),
        Err(e) => application_error(e, "Event", "Failed to update event"),
    }
}
