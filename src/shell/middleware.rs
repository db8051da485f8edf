// Request-layer concerns shared by every route: global rate limiting, CORS
// and the security/no-cache response headers.

use std::num::NonZeroU32;
use std::sync::Arc;

use axum::{
    Router,
    extract::{Request, State},
    http::{HeaderName, HeaderValue, Method, StatusCode, header},
    middleware::{self, Next},
    response::Response,
};
use governor::{
    Quota, RateLimiter,
    clock::DefaultClock,
    state::{InMemoryState, NotKeyed},
};
use tower_http::{cors::CorsLayer, set_header::SetResponseHeaderLayer};

use crate::shell::responses::json_error;

pub type GlobalRateLimiter = RateLimiter<NotKeyed, InMemoryState, DefaultClock>;

pub fn rate_limiter(per_minute: NonZeroU32) -> Arc<GlobalRateLimiter> {
    Arc::new(RateLimiter::direct(Quota::per_minute(per_minute)))
}

async fn enforce_rate_limit(
    State(limiter): State<Arc<GlobalRateLimiter>>,
    request: Request,
    next: Next,
) -> Response {
    if limiter.check().is_err() {
        tracing::warn!(path = %request.uri().path(), "rate limit exceeded");
        return json_error(StatusCode::TOO_MANY_REQUESTS, "Rate limit exceeded");
    }
    next.run(request).await
}

/// Origins that fail to parse as header values are skipped with a warning.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring unusable CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::ORIGIN,
            header::CONTENT_LENGTH,
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::CACHE_CONTROL,
        ])
        .allow_credentials(true)
}

const SECURITY_HEADERS: [(HeaderName, &str); 7] = [
    (
        header::CACHE_CONTROL,
        "no-store, no-cache, must-revalidate, private",
    ),
    (header::PRAGMA, "no-cache"),
    (header::EXPIRES, "0"),
    (header::X_CONTENT_TYPE_OPTIONS, "nosniff"),
    (header::X_FRAME_OPTIONS, "DENY"),
    (header::X_XSS_PROTECTION, "1; mode=block"),
    (header::REFERRER_POLICY, "strict-origin-when-cross-origin"),
];

/// Wraps `router` with the rate limit, the response headers and CORS, CORS
/// outermost so preflight requests are answered before anything else.
pub fn apply(router: Router, limiter: Arc<GlobalRateLimiter>, origins: &[String]) -> Router {
    let router = router.layer(middleware::from_fn_with_state(limiter, enforce_rate_limit));
    let router = SECURITY_HEADERS
        .into_iter()
        .fold(router, |router, (name, value)| {
            router.layer(SetResponseHeaderLayer::overriding(
                name,
                HeaderValue::from_static(value),
            ))
        });
    router.layer(cors_layer(origins))
}

#[cfg(test)]
mod middleware_tests {
    use super::*;
    use axum::{body::Body, http::Request, routing::get};
    use http_body_util::BodyExt;
    use rstest::rstest;
    use tower::ServiceExt;

    fn app(per_minute: u32) -> Router {
        let limiter = rate_limiter(NonZeroU32::new(per_minute).unwrap());
        let origins = vec!["http://localhost:5173".to_string()];
        apply(Router::new().route("/ping", get(|| async { "pong" })), limiter, &origins)
    }

    fn ping() -> Request<Body> {
        Request::get("/ping").body(Body::empty()).unwrap()
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_set_the_security_headers() {
        let response = app(10).oneshot(ping()).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        for (name, value) in SECURITY_HEADERS {
            assert_eq!(response.headers()[&name], value);
        }
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_refuse_requests_over_the_quota() {
        let app = app(2);
        for _ in 0..2 {
            let response = app.clone().oneshot(ping()).await.unwrap();
            assert_eq!(response.status(), StatusCode::OK);
        }

        let response = app.oneshot(ping()).await.unwrap();
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json, serde_json::json!({ "error": "Rate limit exceeded" }));
    }

    #[rstest]
    #[case("http://localhost:5173", true)]
    #[case("https://evil.example.com", false)]
    #[tokio::test]
    async fn it_should_only_allow_configured_origins(#[case] origin: &str, #[case] allowed: bool) {
        let request = Request::get("/ping")
            .header(header::ORIGIN, origin)
            .body(Body::empty())
            .unwrap();
        let response = app(10).oneshot(request).await.unwrap();

        let echoed = response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN);
        assert_eq!(echoed.is_some(), allowed);
        if allowed {
            assert_eq!(
                response.headers()[header::ACCESS_CONTROL_ALLOW_CREDENTIALS],
                "true"
            );
        }
    }
}
