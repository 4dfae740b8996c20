use std::env;
use std::net::SocketAddr;

use crate::config::ServerConfig;
use tracing::warn;

mod env_config;

pub const DEFAULT_DB_URL: &str = "sqlite://test.db";
pub const DEFAULT_CONFIG_PATH: &str = "config.yaml";

#[derive(Debug)]
pub struct Settings {
    pub addr: SocketAddr,
    pub db_url: String,
    pub db_pool_max: u32,
    pub config: ServerConfig,
}

fn default_addr() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 8080))
}

impl Settings {
    #[must_use]
    pub fn from_env() -> Self {
        let addr = match env::var("DOCQA_ADDR") {
            Ok(value) => value.parse().unwrap_or_else(|_| {
                warn!(event = "config_invalid", field = "DOCQA_ADDR", value = %value);
                default_addr()
            }),
            Err(_) => default_addr(),
        };
        let db_url = env::var("DOCQA_DB_URL").unwrap_or_else(|_| DEFAULT_DB_URL.to_string());
        // One connection keeps request-at-a-time semantics against SQLite.
        let db_pool_max = match env::var("DOCQA_DB_POOL_MAX") {
            Ok(value) => value.parse::<u32>().unwrap_or_else(|_| {
                warn!(event = "config_invalid", field = "DOCQA_DB_POOL_MAX", value = %value);
                1
            }),
            Err(_) => 1,
        };
        let config_path =
            env::var("DOCQA_CONFIG_PATH").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        let mut config = env_config::load_config(&config_path);
        env_config::apply_server_env_overrides(&mut config);
        env_config::apply_search_env_overrides(&mut config);
        env_config::apply_transcript_env_overrides(&mut config);

        Self {
            addr,
            db_url,
            db_pool_max,
            config,
        }
    }
}

pub fn preflight(settings: &Settings) -> Result<(), Vec<String>> {
    let mut missing = Vec::new();
    if !settings.db_url.starts_with("sqlite:") {
        missing.push(format!(
            "DOCQA_DB_URL must be a sqlite: URL (got {})",
            settings.db_url
        ));
    }
    if settings.db_pool_max == 0 {
        missing.push("DOCQA_DB_POOL_MAX must be at least 1".to_string());
    }
    if settings.config.server.max_body_bytes == 0 {
        missing.push("server.max_body_bytes must be greater than 0".to_string());
    }
    if settings.config.transcript.top_questions == 0 {
        missing.push("transcript.top_questions must be greater than 0".to_string());
    }
    if settings.config.transcript.top_words == 0 {
        missing.push("transcript.top_words must be greater than 0".to_string());
    }
    if missing.is_empty() {
        Ok(())
    } else {
        Err(missing)
    }
}
