use std::env;
use thiserror::Error;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_FRONTEND_URL: &str = "http://localhost:5173";
const LOCAL_FRONTEND_ORIGINS: [&str; 2] = ["http://localhost:5173", "http://localhost:5174"];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} has an invalid value: {value}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Debug,
    Release,
}

impl AppMode {
    fn default_rate_limit(self) -> u32 {
        match self {
            AppMode::Release => 100,
            AppMode::Debug => 1000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub mode: AppMode,
    pub jwt_secret: String,
    pub jwt_audience: Option<String>,
    pub frontend_url: String,
    pub production_frontend_url: Option<String>,
    pub rate_limit_per_minute: u32,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the config from any variable source. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let port = match get("PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::Invalid {
                name: "PORT",
                value: raw,
            })?,
            None => DEFAULT_PORT,
        };

        let mode = match get("APP_MODE").as_deref() {
            None | Some("debug") => AppMode::Debug,
            Some("release") => AppMode::Release,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    name: "APP_MODE",
                    value: other.to_string(),
                });
            }
        };

        let rate_limit_per_minute = match get("RATE_LIMIT_PER_MINUTE") {
            Some(raw) => match raw.parse::<u32>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::Invalid {
                        name: "RATE_LIMIT_PER_MINUTE",
                        value: raw,
                    });
                }
            },
            None => mode.default_rate_limit(),
        };

        Ok(Self {
            port,
            mode,
            jwt_secret: get("JWT_SECRET").ok_or(ConfigError::Missing("JWT_SECRET"))?,
            jwt_audience: get("JWT_AUDIENCE"),
            frontend_url: get("FRONTEND_URL").unwrap_or_else(|| DEFAULT_FRONTEND_URL.to_string()),
            production_frontend_url: get("PRODUCTION_FRONTEND_URL"),
            rate_limit_per_minute,
        })
    }

    /// Local dev servers, the frontend URL and the production URL, without
    /// duplicates and in that order.
    pub fn allowed_origins(&self) -> Vec<String> {
        let candidates = LOCAL_FRONTEND_ORIGINS
            .iter()
            .map(|o| o.to_string())
            .chain(std::iter::once(self.frontend_url.clone()))
            .chain(self.production_frontend_url.clone());

        let mut origins: Vec<String> = Vec::new();
        for origin in candidates {
            if !origins.contains(&origin) {
                origins.push(origin);
            }
        }
        origins
    }
}
