use axum::{
    extract::{Path, State},
    response::IntoResponse,
};

use crate::modules::schedule_events::use_cases::remove_event::handler::RemoveEventHandler;
use crate::shell::auth::AuthenticatedUser;
use crate::shell::responses::{application_error, json_message};
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    AuthenticatedUser(user_id): AuthenticatedUser,
    Path(event_id): Path<String>,
) -> impl IntoResponse {
    let handler = RemoveEventHandler::new(state.schedule_events.clone());
    match handler.handle(&event_id, user_id.as_str()).await {
        Ok(()) => json_message("Event deleted successfully"),
        Err(e) => application_error(e, "Event", "Failed to delete event"),
    }
}
