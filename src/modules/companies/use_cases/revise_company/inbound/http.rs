use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;

use crate::modules::companies::use_cases::revise_company::command::{CompanyPatch, ReviseCompany};
use crate::modules::companies::use_cases::revise_company::handler::ReviseCompanyHandler;
use crate::shell::auth::AuthenticatedUser;
use crate::shell::responses::{application_error, json_rejection};
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    AuthenticatedUser(user_id): AuthenticatedUser,
    Path(company_id): Path<String>,
    body: Result<Json<CompanyPatch>, JsonRejection>,
) -> impl IntoResponse {
    let Json(patch) = match body {
        Ok(b) => b,
        Err(rejection) => return json_rejection(rejection),
    };

    let command = ReviseCompany {
        patch,
        revised_at: Utc::now(),
    };

    let handler = ReviseCompanyHandler::new(state.companies.clone());
    match handler.handle(&company_id, user_id.as_str(), command).await {
        Ok(company) => (StatusCode::OK, Json(company)).into_response(),
        Err(e) => application_error(e, "Company", "Failed to update company"),
    }
}

#[cfg(test)]
mod revise_company_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode, header},
        routing::put,
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::shared::infrastructure::record_store::RecordStore;
    use crate::shell::state::AppState;
    use crate::tests::fixtures::companies::CompanyBuilder;
    use crate::tests::fixtures::state::make_test_state;
    use crate::tests::fixtures::tokens::bearer;

    use super::handle;

    fn app(state: AppState) -> Router {
        Router::new().route("/companies/{id}", put(handle)).with_state(state)
    }

    fn put_company(id: &str, body: &str) -> Request<Body> {
        Request::put(format!("/companies/{id}"))
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::AUTHORIZATION, bearer("user-fixed-0001"))
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn it_should_return_200_with_the_revised_company() {
        let state = make_test_state();
        let company = CompanyBuilder::new().build();
        state.companies.insert(&company).await.unwrap();

        let response = app(state)
            .oneshot(put_company(&company.id, r#"{"current_stage":"final_interview"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["current_stage"], "final_interview");
        assert_eq!(json["name"], company.name);
    }

    #[tokio::test]
    async fn it_should_return_400_for_an_unknown_stage() {
        let state = make_test_state();
        let company = CompanyBuilder::new().build();
        state.companies.insert(&company).await.unwrap();

        let response = app(state)
            .oneshot(put_company(&company.id, r#"{"current_stage":"ghosted"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn it_should_return_404_with_the_company_subject() {
        let response = app(make_test_state())
            .oneshot(put_company("missing", r#"{"name":"x"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["error"], "Company not found");
    }
}
