use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::modules::companies::use_cases::list_companies_by_user::handler::ListCompaniesHandler;
use crate::shell::auth::AuthenticatedUser;
use crate::shell::responses::application_error;
use crate::shell::state::AppState;

pub async fn handle_list(
    State(state): State<AppState>,
    AuthenticatedUser(user_id): AuthenticatedUser,
) -> impl IntoResponse {
    let handler = ListCompaniesHandler::new(state.companies.clone());
    match handler.list(user_id.as_str()).await {
        Ok(companies) => (StatusCode::OK, Json(companies)).into_response(),
        Err(e) => application_error(e, "Company", "Failed to fetch companies"),
    }
}

pub async fn handle_get(
    State(state): State<AppState>,
    AuthenticatedUser(user_id): AuthenticatedUser,
    Path(company_id): Path<String>,
) -> impl IntoResponse {
    let handler = ListCompaniesHandler::new(state.companies.clone());
    match handler.get(&company_id, user_id.as_str()).await {
        Ok(company) => (StatusCode::OK, Json(company)).into_response(),
        Err(e) => application_error(e, "Company", "Failed to fetch company"),
    }
}
