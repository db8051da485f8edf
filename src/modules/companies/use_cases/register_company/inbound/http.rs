use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;

use crate::modules::companies::core::company::SelectionStage;
use crate::modules::companies::use_cases::register_company::command::RegisterCompany;
use crate::modules::companies::use_cases::register_company::handler::RegisterCompanyHandler;
use crate::shell::auth::AuthenticatedUser;
use crate::shell::responses::{application_error, json_rejection};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct RegisterCompanyBody {
    pub name: String,
    #[serde(default)]
    pub industry: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub current_stage: SelectionStage,
    #[serde(default)]
    pub notes: String,
}

pub async fn handle(
    State(state): State<AppState>,
    AuthenticatedUser(user_id): AuthenticatedUser,
    body: Result<Json<RegisterCompanyBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return json_rejection(rejection),
    };

    let command = RegisterCompany {
        company_id: Uuid::now_v7().to_string(),
        user_id: user_id.0,
        name: body.name,
        industry: body.industry,
        position: body.position,
        current_stage: body.current_stage,
        notes: body.notes,
        created_at: Utc::now(),
    };

    let handler = RegisterCompanyHandler::new(state.companies.clone());
    match handler.handle(command).await {
        Ok(company) => (StatusCode::CREATED, Json(company)).into_response(),
        Err(e) => application_error(e, "Company", "Failed to create company"),
    }
}
