//! Process configuration, loaded from the environment at startup.
//!
//! Required credentials are checked eagerly so the server refuses to
//! start instead of failing on the first request.

use thiserror::Error;

/// Application-level constants
pub const APP_NAME: &str = "Pathway";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const ENV_SUPABASE_URL: &str = "SUPABASE_URL";
pub const ENV_SUPABASE_KEY: &str = "SUPABASE_KEY";
pub const ENV_OPENAI_API_KEY: &str = "OPENAI_API_KEY";
pub const ENV_OPENAI_BASE_URL: &str = "OPENAI_BASE_URL";
pub const ENV_BIND: &str = "PATHWAY_BIND";
pub const ENV_LOG_JSON: &str = "PATHWAY_LOG_JSON";
pub const ENV_CORS_ORIGINS: &str = "PATHWAY_CORS_ORIGINS";

pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8000";
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is missing. Check your .env")]
    Missing(&'static str),
}

/// Runtime configuration for the chat server.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Supabase project URL, e.g. `https://xyz.supabase.co`.
    pub supabase_url: String,
    pub supabase_key: String,
    pub openai_api_key: String,
    pub openai_base_url: String,
    /// TCP address to bind.
    pub bind_address: String,
    /// Emit log records as newline-delimited JSON.
    pub log_json: bool,
    /// Comma-separated list of allowed browser origins. `None` allows any.
    pub cors_allowed_origins: Option<String>,
}

impl AppConfig {
    /// Load `.env` (if present) and read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                eprintln!("WARN: failed to load .env file: {e}");
            }
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let require = |key: &'static str| get(key).ok_or(ConfigError::Missing(key));

        Ok(Self {
            supabase_url: require(ENV_SUPABASE_URL)?,
            supabase_key: require(ENV_SUPABASE_KEY)?,
            openai_api_key: require(ENV_OPENAI_API_KEY)?,
            openai_base_url: get(ENV_OPENAI_BASE_URL)
                .unwrap_or_else(|| DEFAULT_OPENAI_BASE_URL.to_string()),
            bind_address: get(ENV_BIND).unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            log_json: get(ENV_LOG_JSON)
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
            cors_allowed_origins: get(ENV_CORS_ORIGINS),
        })
    }
}

/// Fallback tracing filter when `RUST_LOG` is unset.
pub fn default_log_filter() -> &'static str {
    "pathway=info,pathway_lib=info"
}
