use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::modules::schedule_events::use_cases::set_email_format::command::SetEmailFormat;
use crate::modules::schedule_events::use_cases::set_email_format::handler::SetEmailFormatHandler;
use crate::shell::auth::AuthenticatedUser;
use crate::shell::responses::{application_error, json_rejection};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct EmailFormatBody {
    pub custom_email_format: String,
}

#[derive(Serialize)]
struct EmailFormatUpdated {
    message: &'static str,
    custom_email_format: String,
}

pub async fn handle(
    State(state): State<AppState>,
    AuthenticatedUser(user_id): AuthenticatedUser,
    Path(event_id): Path<String>,
    body: Result<Json<EmailFormatBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return json_rejection(rejection),
    };

    let command = SetEmailFormat {
        custom_email_format: body.custom_email_format,
        set_at: Utc::now(),
    };

    let handler = SetEmailFormatHandler::new(state.schedule_events.clone());
    match handler.handle(&event_id, user_id.as_str(), command).await {
        Ok(event) => (
            StatusCode::OK,
            Json(EmailFormatUpdated {
                message: "Email format updated successfully",
                custom_email_format: event.custom_email_format,
            }),
        )
            .into_response(),
        Err(e) => application_error(e, "Event", "Failed to update email format"),
    }
}
