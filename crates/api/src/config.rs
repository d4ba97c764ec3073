use tripjournal_core::album_suggestion::{
    SuggestionParams, DEFAULT_MAX_DISTANCE_KM, DEFAULT_MAX_SUGGESTIONS, DEFAULT_TIME_WINDOW_MINS,
};

use crate::auth::jwt::JwtConfig;

/// Server configuration loaded from environment variables.
///
/// All fields except the JWT secret have defaults suitable for local
/// development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Upper bound on the post-shutdown drain, in seconds (default: `30`).
    pub shutdown_timeout_secs: u64,
    /// JWT token configuration (secret, expiry).
    pub jwt: JwtConfig,
    /// Album suggestion thresholds.
    pub suggestions: SuggestionParams,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                       | Default                    |
    /// |-------------------------------|----------------------------|
    /// | `HOST`                        | `0.0.0.0`                  |
    /// | `PORT`                        | `3000`                     |
    /// | `CORS_ORIGINS`                | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS`        | `30`                       |
    /// | `SHUTDOWN_TIMEOUT_SECS`       | `30`                       |
    /// | `SUGGESTION_TIME_WINDOW_MINS` | `120`                      |
    /// | `SUGGESTION_DISTANCE_KM`      | `0.5`                      |
    /// | `SUGGESTION_MAX_RESULTS`      | `5`                        |
    ///
    /// # Panics
    ///
    /// Panics on unparsable values or an invalid suggestion configuration,
    /// so misconfiguration fails at startup.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins = parse_origins(
            &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "http://localhost:5173".into()),
        );

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let shutdown_timeout_secs: u64 = std::env::var("SHUTDOWN_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("SHUTDOWN_TIMEOUT_SECS must be a valid u64");

        let jwt = JwtConfig::from_env();
        let suggestions = suggestion_params_from_env();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            shutdown_timeout_secs,
            jwt,
            suggestions,
        }
    }
}

/// Load and validate suggestion thresholds.
fn suggestion_params_from_env() -> SuggestionParams {
    let window_mins: i64 = std::env::var("SUGGESTION_TIME_WINDOW_MINS")
        .unwrap_or_else(|_| DEFAULT_TIME_WINDOW_MINS.to_string())
        .parse()
        .expect("SUGGESTION_TIME_WINDOW_MINS must be a valid i64");

    let max_distance_km: f64 = std::env::var("SUGGESTION_DISTANCE_KM")
        .unwrap_or_else(|_| DEFAULT_MAX_DISTANCE_KM.to_string())
        .parse()
        .expect("SUGGESTION_DISTANCE_KM must be a valid number");

    let max_suggestions: usize = std::env::var("SUGGESTION_MAX_RESULTS")
        .unwrap_or_else(|_| DEFAULT_MAX_SUGGESTIONS.to_string())
        .parse()
        .expect("SUGGESTION_MAX_RESULTS must be a valid usize");

    let params = SuggestionParams {
        time_window: chrono::Duration::try_minutes(window_mins)
            .expect("SUGGESTION_TIME_WINDOW_MINS is out of range"),
        max_distance_km,
        max_suggestions,
    };
    if let Err(e) = params.validate() {
        panic!("Invalid suggestion configuration: {e}");
    }
    params
}

/// Split a comma-separated origin list, dropping blanks.
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
