//! TOML-based configuration for wikirag
//!
//! Infrastructure settings (server, provider endpoint, models, retrieval
//! parameters, corpus location) are read from a TOML file, `wikirag.toml` by
//! default. Every field has a default so a missing file yields a working
//! local setup against Ollama's OpenAI-compatible endpoint.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Root configuration structure loaded from wikirag.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WikiRagConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub provider: ProviderConfig,

    #[serde(default)]
    pub models: ModelsConfig,

    #[serde(default)]
    pub retrieval: RetrievalConfig,

    #[serde(default)]
    pub corpus: CorpusConfig,
}

// ============= Server Configuration =============

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            log_level: default_log_level(),
            log_format: LogFormat::default(),
        }
    }
}

// ============= Provider Configuration =============

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// Any OpenAI-compatible endpoint, including Ollama's `/v1`
    #[default]
    OpenAI,
    /// Native Ollama API (requires the `ollama` feature)
    Ollama,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    #[serde(rename = "type", default)]
    pub kind: ProviderKind,

    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Environment variable containing the API key, if the endpoint needs one
    #[serde(default)]
    pub api_key_env: Option<String>,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://localhost:11434/v1".to_string()
}

fn default_timeout_secs() -> u64 {
    60
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            kind: ProviderKind::default(),
            base_url: default_base_url(),
            api_key_env: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ProviderConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Resolve the API key from the environment. Ollama ignores the key, so
    /// an unset `api_key_env` resolves to a placeholder.
    pub fn api_key(&self) -> Result<String, ConfigError> {
        match &self.api_key_env {
            Some(name) => {
                std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.clone()))
            }
            None => Ok("ollama".to_string()),
        }
    }
}

// ============= Model Configuration =============

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelsConfig {
    #[serde(default = "default_chat_model")]
    pub chat: String,

    #[serde(default = "default_embedding_model")]
    pub embedding: String,
}

fn default_chat_model() -> String {
    "gemma:2b".to_string()
}

fn default_embedding_model() -> String {
    "nomic-embed-text".to_string()
}

impl Default for ModelsConfig {
    fn default() -> Self {
        Self {
            chat: default_chat_model(),
            embedding: default_embedding_model(),
        }
    }
}

// ============= Retrieval Configuration =============

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrievalConfig {
    /// Matches must score strictly above this cosine similarity
    #[serde(default = "default_similarity_threshold")]
    pub similarity_threshold: f32,

    #[serde(default = "default_limit")]
    pub limit: usize,

    #[serde(default = "default_document_prefix")]
    pub document_prefix: String,

    #[serde(default = "default_query_prefix")]
    pub query_prefix: String,
}

fn default_similarity_threshold() -> f32 {
    0.63
}

fn default_limit() -> usize {
    2
}

fn default_document_prefix() -> String {
    "search_document: ".to_string()
}

fn default_query_prefix() -> String {
    "search_query: ".to_string()
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: default_similarity_threshold(),
            limit: default_limit(),
            document_prefix: default_document_prefix(),
            query_prefix: default_query_prefix(),
        }
    }
}

// ============= Corpus Configuration =============

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorpusConfig {
    #[serde(default = "default_corpus_path")]
    pub path: PathBuf,

    #[serde(default = "default_collection")]
    pub collection: String,
}

fn default_corpus_path() -> PathBuf {
    PathBuf::from("wiki.jsonl")
}

fn default_collection() -> String {
    "Wiki".to_string()
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            path: default_corpus_path(),
            collection: default_collection(),
        }
    }
}

// ============= Configuration Loading & Validation =============

/// Where a loaded configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    /// The file was missing; built-in defaults are in use
    Defaults(PathBuf),
}

impl ConfigSource {
    /// Log where the configuration came from. Call once tracing is installed.
    pub fn report(&self) {
        match self {
            ConfigSource::File(path) => {
                tracing::debug!(path = %path.display(), "Configuration loaded")
            }
            ConfigSource::Defaults(missing) => {
                tracing::warn!(path = %missing.display(), "Config file not found, using defaults")
            }
        }
    }
}

/// Errors that can occur during configuration loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Failed to read configuration file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Environment variable '{0}' referenced in config is not set")]
    MissingEnvVar(String),
}

impl WikiRagConfig {
    /// Load configuration from a TOML file and validate it.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        let config: WikiRagConfig = toml::from_str(&content)?;

        config.validate()?;

        Ok(config)
    }

    /// Load the file if present, otherwise fall back to defaults.
    ///
    /// Runs before the tracing subscriber exists, so the fallback is reported
    /// through the returned [`ConfigSource`] rather than logged here.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<(Self, ConfigSource), ConfigError> {
        match Self::load(path.as_ref()) {
            Err(ConfigError::FileNotFound(missing)) => {
                let config = Self::default();
                config.validate()?;
                Ok((config, ConfigSource::Defaults(missing)))
            }
            Ok(config) => Ok((config, ConfigSource::File(path.as_ref().to_path_buf()))),
            Err(e) => Err(e),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let threshold = self.retrieval.similarity_threshold;
        if !(-1.0..=1.0).contains(&threshold) {
            return Err(ConfigError::ValidationError(format!(
                "retrieval.similarity_threshold must be within [-1, 1], got {}",
                threshold
            )));
        }

        if self.retrieval.limit == 0 {
            return Err(ConfigError::ValidationError(
                "retrieval.limit must be at least 1".to_string(),
            ));
        }

        if self.provider.timeout_secs == 0 {
            return Err(ConfigError::ValidationError(
                "provider.timeout_secs must be greater than 0".to_string(),
            ));
        }

        if self.models.chat.trim().is_empty() || self.models.embedding.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "models.chat and models.embedding must be set".to_string(),
            ));
        }

        if self.corpus.collection.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "corpus.collection must be set".to_string(),
            ));
        }

        if let Some(ref env) = self.provider.api_key_env {
            std::env::var(env).map_err(|_| ConfigError::MissingEnvVar(env.clone()))?;
        }

        Ok(())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
