use std::env;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use tracing::warn;

use crate::config::ServerConfig;

pub(super) fn load_config(path: &str) -> ServerConfig {
    if !Path::new(path).exists() {
        return ServerConfig::default();
    }

    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) => {
            warn!(event = "config_read_failed", path, error = %err);
            return ServerConfig::default();
        }
    };
    match serde_yaml::from_str(&contents) {
        Ok(config) => config,
        Err(err) => {
            warn!(event = "config_parse_failed", path, error = %err);
            ServerConfig::default()
        }
    }
}

pub(super) fn apply_server_env_overrides(config: &mut ServerConfig) {
    if let Some(value) = parse_env::<usize>("DOCQA_MAX_BODY_BYTES") {
        config.server.max_body_bytes = value;
    }
}

pub(super) fn apply_search_env_overrides(config: &mut ServerConfig) {
    if let Ok(value) = env::var("DOCQA_VULNERABLE_SEARCH") {
        if let Some(enabled) = parse_bool(&value) {
            config.search.vulnerable_endpoint = enabled;
        } else {
            warn!(
                event = "config_invalid",
                field = "DOCQA_VULNERABLE_SEARCH",
                value = %value
            );
        }
    }
}

pub(super) fn apply_transcript_env_overrides(config: &mut ServerConfig) {
    if let Some(value) = parse_env::<usize>("DOCQA_TOP_QUESTIONS") {
        config.transcript.top_questions = value;
    }
    if let Some(value) = parse_env::<usize>("DOCQA_TOP_WORDS") {
        config.transcript.top_words = value;
    }
}

fn parse_env<T: FromStr>(field: &'static str) -> Option<T> {
    let value = env::var(field).ok()?;
    match value.trim().parse::<T>() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            warn!(event = "config_invalid", field, value = %value);
            None
        }
    }
}

pub(super) fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
