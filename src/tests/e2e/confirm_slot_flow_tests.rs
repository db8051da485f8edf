use crate::shell::http::app;
use crate::shell::middleware::rate_limiter;
use crate::tests::fixtures::state::make_test_state;
use crate::tests::fixtures::tokens::bearer;
use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use std::num::NonZeroU32;
use tower::ServiceExt;

async fn call(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, bearer("user-fixed-0001"));
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn confirms_a_slot_offered_for_a_new_interview() {
    let limiter = rate_limiter(NonZeroU32::new(1000).unwrap());
    let app = app(make_test_state(), limiter, &[]);

    let (status, company) = call(
        &app,
        Method::POST,
        "/api/v1/companies",
        Some(json!({ "name": "Acme", "position": "Backend engineer" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let company_id = company["id"].as_str().unwrap().to_string();

    let (status, event) = call(
        &app,
        Method::POST,
        "/api/v1/events",
        Some(json!({
            "company_id": company_id,
            "company_name": "Acme",
            "title": "First interview",
            "type": "interview",
            "interview_duration": 60,
            "candidate_slots": [
                { "start_time": "2024-05-01T10:00:00Z", "end_time": "2024-05-01T12:00:00Z" },
                { "start_time": "2024-05-02T14:00:00Z", "end_time": "2024-05-02T15:00:00Z" }
            ]
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let event_uri = format!("/api/v1/events/{}", event["id"].as_str().unwrap());

    let (status, body) = call(
        &app,
        Method::PUT,
        &format!("{event_uri}/confirm"),
        Some(json!({
            "confirmed_slot": {
                "start_time": "2024-05-01T12:30:00Z",
                "end_time": "2024-05-01T13:30:00Z"
            }
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        "Confirmed slot start must be within one of the candidate slots"
    );

    let (status, _) = call(
        &app,
        Method::PUT,
        &format!("{event_uri}/confirm"),
        Some(json!({
            "confirmed_slot": {
                "start_time": "2024-05-01T11:30:00Z",
                "end_time": "2024-05-01T12:30:00Z"
            }
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, stored) = call(&app, Method::GET, &event_uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stored["status"], "confirmed");
    assert_eq!(
        stored["confirmed_slot"],
        json!({ "start_time": "2024-05-01T11:30:00Z", "end_time": "2024-05-01T12:30:00Z" })
    );

    let (status, reopened) = call(
        &app,
        Method::PUT,
        &event_uri,
        Some(json!({ "status": "candidate" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(reopened["confirmed_slot"], Value::Null);

    let (status, body) = call(&app, Method::DELETE, &event_uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Event deleted successfully");

    let (status, events) = call(&app, Method::GET, "/api/v1/events", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(events, json!([]));
}
