use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;

use crate::modules::schedule_events::core::schedule_event::{
    DEFAULT_INTERVIEW_DURATION, EventKind,
};
use crate::modules::schedule_events::use_cases::register_event::command::RegisterEvent;
use crate::modules::schedule_events::use_cases::register_event::handler::RegisterEventHandler;
use crate::shared::core::time_slot::TimeSlot;
use crate::shell::auth::AuthenticatedUser;
use crate::shell::responses::{application_error, json_rejection};
use crate::shell::state::AppState;

fn default_interview_duration() -> i64 {
    DEFAULT_INTERVIEW_DURATION
}

#[derive(Deserialize)]
pub struct RegisterEventBody {
    pub company_id: String,
    pub company_name: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: EventKind,
    pub candidate_slots: Vec<TimeSlot>,
    #[serde(default = "default_interview_duration")]
    pub interview_duration: i64,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub is_online: bool,
    #[serde(default)]
    pub notes: String,
}

pub async fn handle(
    State(state): State<AppState>,
    AuthenticatedUser(user_id): AuthenticatedUser,
    body: Result<Json<RegisterEventBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return json_rejection(rejection),
    };

    let command = RegisterEvent {
        event_id: Uuid::now_v7().to_string(),
        user_id: user_id.0,
        company_id: body.company_id,
        company_name: body.company_name,
        title: body.title,
        kind: body.kind,
        candidate_slots: body.candidate_slots,
        interview_duration: body.interview_duration,
        location: body.location,
        is_online: body.is_online,
        notes: body.notes,
        created_at: Utc::now(),
    };

    let handler = RegisterEventHandler::new(state.schedule_events.clone());
    match handler.handle(command).await {
        Ok(event) => (StatusCode::CREATED, Json(event)).into_response(),
        Err(e) => application_error(e, "Event", "Failed to create event"),
    }
}
