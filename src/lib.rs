pub mod api; // HTTP router, error mapping, server lifecycle
pub mod config;
pub mod db; // Session store (Supabase / in-memory)
pub mod models;
pub mod pipeline; // Session Q&A: context, prompt, completion

use std::sync::Arc;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::api::{chat_api_router, cors_layer, start_api_server, ApiContext, ServerError};
use crate::config::{AppConfig, ConfigError};
use crate::db::SupabaseSessionStore;
use crate::pipeline::chat::{OpenAiClient, SessionChat};

#[derive(Error, Debug)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Server(#[from] ServerError),
}

/// Install the global tracing subscriber. `RUST_LOG` wins over the default filter.
pub fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter()));
    let subscriber = tracing_subscriber::fmt().with_env_filter(filter).with_target(true);
    if json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}

/// Wire the production backends into a `SessionChat`.
///
/// Clients are created once here and shared by every request.
pub fn build_session_chat(config: &AppConfig) -> SessionChat {
    let store = SupabaseSessionStore::new(&config.supabase_url, &config.supabase_key);
    let llm = OpenAiClient::new(&config.openai_base_url, &config.openai_api_key);
    SessionChat::new(Arc::new(store), Arc::new(llm))
}

/// Load configuration, start the HTTP server and block until a shutdown
/// signal arrives.
pub async fn run() -> Result<(), StartupError> {
    let config = AppConfig::from_env()?;
    init_tracing(config.log_json);

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let ctx = ApiContext::new(build_session_chat(&config));
    let app = chat_api_router(ctx).layer(cors_layer(config.cors_allowed_origins.as_deref()));

    let mut server = start_api_server(app, &config.bind_address).await?;
    tracing::info!(addr = %server.info.server_addr, "{} ready", config::APP_NAME);

    api::server::shutdown_signal().await;
    server.shutdown();
    server.stopped().await;

    tracing::info!("{} stopped", config::APP_NAME);
    Ok(())
}
