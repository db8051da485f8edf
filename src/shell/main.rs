use std::net::SocketAddr;
use std::num::NonZeroU32;
use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{EnvFilter, fmt};

use career_schedule::shared::infrastructure::identity::jwt::JwtIdentityResolver;
use career_schedule::shell::config::Config;
use career_schedule::shell::http;
use career_schedule::shell::middleware::rate_limiter;
use career_schedule::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    let config = Config::from_env().context("invalid configuration")?;

    let identity = Arc::new(JwtIdentityResolver::new(
        &config.jwt_secret,
        config.jwt_audience.as_deref(),
    ));
    let state = AppState::in_memory(identity);

    let per_minute = NonZeroU32::new(config.rate_limit_per_minute)
        .context("RATE_LIMIT_PER_MINUTE must be positive")?;
    let origins = config.allowed_origins();
    let app = http::app(state, rate_limiter(per_minute), &origins);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!(%addr, mode = ?config.mode, ?origins, "career schedule api listening");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(listener, app).await?;
    Ok(())
}
