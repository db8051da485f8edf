use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::modules::schedule_events::core::schedule_event::EventStatus;
use crate::modules::schedule_events::use_cases::confirm_slot::command::ConfirmSlot;
use crate::modules::schedule_events::use_cases::confirm_slot::decision::ConfirmError;
use crate::modules::schedule_events::use_cases::confirm_slot::handler::ConfirmSlotHandler;
use crate::shell::auth::AuthenticatedUser;
use crate::shell::responses::{application_error, json_error, json_rejection};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ConfirmSlotBody {
    #[serde(default)]
    pub confirmed_slot: Option<serde_json::Value>,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Deserialize)]
struct ProposedSlot {
    #[serde(default)]
    start_time: Option<DateTime<Utc>>,
    #[serde(default)]
    end_time: Option<DateTime<Utc>>,
}

fn malformed(message: &str) -> Response {
    json_error(
        StatusCode::BAD_REQUEST,
        ConfirmError::MalformedInput(message.into()).to_string(),
    )
}

fn to_command(body: ConfirmSlotBody) -> Result<ConfirmSlot, Response> {
    let proposed = match body.confirmed_slot {
        Some(raw) => serde_json::from_value::<ProposedSlot>(raw)
            .map_err(|_| malformed("Invalid confirmed_slot format"))?,
        None => ProposedSlot {
            start_time: None,
            end_time: None,
        },
    };
    let status = body
        .status
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<EventStatus>())
        .transpose()
        .map_err(|e| malformed(&e.to_string()))?;
    Ok(ConfirmSlot {
        start_time: proposed.start_time,
        end_time: proposed.end_time,
        status,
    })
}

pub async fn handle(
    State(state): State<AppState>,
    AuthenticatedUser(user_id): AuthenticatedUser,
    Path(event_id): Path<String>,
    body: Result<Json<ConfirmSlotBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return json_rejection(rejection),
    };
    let command = match to_command(body) {
        Ok(c) => c,
        Err(response) => return response,
    };

    let handler = ConfirmSlotHandler::new(state.schedule_events.clone());
    match handler.handle(&event_id, user_id.as_str(), command).await {
        Ok(event) => (StatusCode::OK, Json(event)).into_response(),
        Err(e) => application_error(e, "Event", "Failed to confirm event"),
    }
}
