use serde::{Deserialize, Serialize};

use docqa_core::{DEFAULT_TOP_QUESTIONS, DEFAULT_TOP_WORDS};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ServerConfig {
    #[serde(default)]
    pub server: ServerRuntimeConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub transcript: TranscriptConfig,
}

pub const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerRuntimeConfig {
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

impl Default for ServerRuntimeConfig {
    fn default() -> Self {
        Self {
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Mount `GET /search`, the string-concatenating lookup.
    #[serde(default = "default_true")]
    pub vulnerable_endpoint: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            vulnerable_endpoint: default_true(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptConfig {
    #[serde(default = "default_top_questions")]
    pub top_questions: usize,
    #[serde(default = "default_top_words")]
    pub top_words: usize,
}

impl Default for TranscriptConfig {
    fn default() -> Self {
        Self {
            top_questions: default_top_questions(),
            top_words: default_top_words(),
        }
    }
}

const fn default_true() -> bool {
    true
}

const fn default_max_body_bytes() -> usize {
    DEFAULT_MAX_BODY_BYTES
}

const fn default_top_questions() -> usize {
    DEFAULT_TOP_QUESTIONS
}

const fn default_top_words() -> usize {
    DEFAULT_TOP_WORDS
}
