use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::modules::schedule_events::use_cases::list_events_by_user::handler::ListEventsHandler;
use crate::shell::auth::AuthenticatedUser;
use crate::shell::responses::application_error;
use crate::shell::state::AppState;

pub async fn handle_list(
    State(state): State<AppState>,
    AuthenticatedUser(user_id): AuthenticatedUser,
) -> impl IntoResponse {
    let handler = ListEventsHandler::new(state.schedule_events.clone());
    match handler.list(user_id.as_str()).await {
        Ok(events) => (StatusCode::OK, Json(events)).into_response(),
        Err(e) => application_error(e, "Event", "Failed to fetch events"),
    }
}

pub async fn handle_get(
    State(state): State<AppState>,
    AuthenticatedUser(user_id): AuthenticatedUser,
    Path(event_id): Path<String>,
) -> impl IntoResponse {
    let handler = ListEventsHandler::new(state.schedule_events.clone());
    match handler.get(&event_id, user_id.as_str()).await {
        Ok(event) => (StatusCode::OK, Json(event)).into_response(),
        Err(e) => application_error(e, "Event", "Failed to fetch event"),
    }
}
