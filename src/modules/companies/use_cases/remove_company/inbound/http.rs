use axum::{
    extract::{Path, State},
    response::IntoResponse,
};

use crate::modules::companies::use_cases::remove_company::handler::RemoveCompanyHandler;
use crate::shell::auth::AuthenticatedUser;
use crate::shell::responses::{application_error, json_message};
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    AuthenticatedUser(user_id): AuthenticatedUser,
    Path(company_id): Path<String>,
) -> impl IntoResponse {
    let handler = RemoveCompanyHandler::new(state.companies.clone());
    match handler.handle(&company_id, user_id.as_str()).await {
        Ok(()) => json_message("Company deleted successfully"),
        Err(e) => application_error(e, "Company", "Failed to delete company"),
    }
}
