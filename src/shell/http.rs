use std::sync::Arc;

use axum::{
    Json, Router,
    routing::{get, put},
};
use serde_json::{Value, json};
use tower_http::trace::TraceLayer;

use crate::modules::companies::use_cases::list_companies_by_user::inbound::http as list_companies_http;
use crate::modules::companies::use_cases::register_company::inbound::http as register_company_http;
use crate::modules::companies::use_cases::remove_company::inbound::http as remove_company_http;
use crate::modules::companies::use_cases::revise_company::inbound::http as revise_company_http;
use crate::modules::schedule_events::use_cases::confirm_slot::inbound::http as confirm_slot_http;
use crate::modules::schedule_events::use_cases::list_events_by_user::inbound::http as list_events_http;
use crate::modules::schedule_events::use_cases::register_event::inbound::http as register_event_http;
use crate::modules::schedule_events::use_cases::remove_event::inbound::http as remove_event_http;
use crate::modules::schedule_events::use_cases::revise_event::inbound::http as revise_event_http;
use crate::modules::schedule_events::use_cases::set_email_format::inbound::http as email_format_http;
use crate::shell::middleware::{self, GlobalRateLimiter};
use crate::shell::state::AppState;

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok", "service": "career-schedule-api" }))
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/companies",
            get(list_companies_http::handle_list).post(register_company_http::handle),
        )
        .route(
            "/companies/{id}",
            get(list_companies_http::handle_get)
                .put(revise_company_http::handle)
                .delete(remove_company_http::handle),
        )
        .route(
            "/events",
            get(list_events_http::handle_list).post(register_event_http::handle),
        )
        .route(
            "/events/{id}",
            get(list_events_http::handle_get)
                .put(revise_event_http::handle)
                .delete(remove_event_http::handle),
        )
        .route("/events/{id}/confirm", put(confirm_slot_http::handle))
        .route("/events/{id}/email-format", put(email_format_http::handle))
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/api/v1", api_routes())
        .with_state(state)
}

/// The full application: routes, request middleware and request tracing.
pub fn app(state: AppState, limiter: Arc<GlobalRateLimiter>, origins: &[String]) -> Router {
    middleware::apply(router(state), limiter, origins).layer(TraceLayer::new_for_http())
}
