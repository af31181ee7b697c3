//! Configuration handling for the curator.
//!
//! Values come from environment variables with development defaults, so a
//! bare `curate` invocation works against the public English Wikipedia and
//! writes to a local JSON-lines file.

use std::env;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

use crate::pipeline::{RetryPolicy, RunSettings};

/// Environment variable names.
pub const ENV_WIKIPEDIA_API_URL: &str = "WIKIPEDIA_API_URL";
pub const ENV_FACTS_OUTPUT_PATH: &str = "FACTS_OUTPUT_PATH";
pub const ENV_DATABASE_URL: &str = "DATABASE_URL";
pub const ENV_SEARCH_RESULTS_PER_TOPIC: &str = "SEARCH_RESULTS_PER_TOPIC";
pub const ENV_TOPIC_DELAY_MS: &str = "TOPIC_DELAY_MS";
pub const ENV_ARTICLE_DELAY_MS: &str = "ARTICLE_DELAY_MS";
pub const ENV_CATEGORY_DELAY_MS: &str = "CATEGORY_DELAY_MS";
pub const ENV_FETCH_RETRY_ATTEMPTS: &str = "FETCH_RETRY_ATTEMPTS";
pub const ENV_FETCH_RETRY_BASE_MS: &str = "FETCH_RETRY_BASE_MS";

const DEFAULT_WIKIPEDIA_API_URL: &str = "https://en.wikipedia.org/w/api.php";
const DEFAULT_FACTS_OUTPUT_PATH: &str = "facts.jsonl";
const DEFAULT_SEARCH_RESULTS_PER_TOPIC: usize = 3;
const DEFAULT_TOPIC_DELAY_MS: u64 = 500;
const DEFAULT_ARTICLE_DELAY_MS: u64 = 1000;
const DEFAULT_CATEGORY_DELAY_MS: u64 = 2000;
const DEFAULT_FETCH_RETRY_ATTEMPTS: u32 = 2;
const DEFAULT_FETCH_RETRY_BASE_MS: u64 = 500;

/// Runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    wikipedia_api_url: String,
    output_path: PathBuf,
    database_url: Option<String>,
    run_settings: RunSettings,
}

impl Config {
    /// Load from environment variables, falling back to development defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let wikipedia_api_url = env::var(ENV_WIKIPEDIA_API_URL)
            .unwrap_or_else(|_| DEFAULT_WIKIPEDIA_API_URL.to_string());
        url::Url::parse(&wikipedia_api_url).map_err(|e| ConfigError::InvalidValue {
            field: ENV_WIKIPEDIA_API_URL,
            reason: e.to_string(),
        })?;

        let output_path = env::var(ENV_FACTS_OUTPUT_PATH)
            .unwrap_or_else(|_| DEFAULT_FACTS_OUTPUT_PATH.to_string())
            .into();
        let database_url = env::var(ENV_DATABASE_URL).ok().filter(|v| !v.is_empty());

        let search_results_per_topic =
            parse_var(ENV_SEARCH_RESULTS_PER_TOPIC, DEFAULT_SEARCH_RESULTS_PER_TOPIC)?;
        if search_results_per_topic == 0 {
            return Err(ConfigError::InvalidValue {
                field: ENV_SEARCH_RESULTS_PER_TOPIC,
                reason: "must be at least 1".to_string(),
            });
        }

        let run_settings = RunSettings {
            search_results_per_topic,
            topic_delay: Duration::from_millis(parse_var(
                ENV_TOPIC_DELAY_MS,
                DEFAULT_TOPIC_DELAY_MS,
            )?),
            article_delay: Duration::from_millis(parse_var(
                ENV_ARTICLE_DELAY_MS,
                DEFAULT_ARTICLE_DELAY_MS,
            )?),
            category_delay: Duration::from_millis(parse_var(
                ENV_CATEGORY_DELAY_MS,
                DEFAULT_CATEGORY_DELAY_MS,
            )?),
            retry: RetryPolicy {
                attempts: parse_var(ENV_FETCH_RETRY_ATTEMPTS, DEFAULT_FETCH_RETRY_ATTEMPTS)?,
                base_delay_ms: parse_var(ENV_FETCH_RETRY_BASE_MS, DEFAULT_FETCH_RETRY_BASE_MS)?,
            },
        };

        Ok(Self {
            wikipedia_api_url,
            output_path,
            database_url,
            run_settings,
        })
    }

    /// Action API endpoint of the encyclopedia.
    pub fn wikipedia_api_url(&self) -> &str {
        &self.wikipedia_api_url
    }
    /// Where the JSON-lines sink writes.
    pub fn output_path(&self) -> &PathBuf {
        &self.output_path
    }
    /// PostgreSQL URL; when present facts go to the database instead of the file.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url.as_deref()
    }
    pub fn run_settings(&self) -> &RunSettings {
        &self.run_settings
    }

    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }
}

fn parse_var<T: std::str::FromStr>(key: &'static str, default: T) -> Result<T, ConfigError>
where
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::InvalidValue {
            field: key,
            reason: format!("{raw:?}: {e}"),
        }),
        Err(_) => Ok(default),
    }
}

/// Errors that can occur while building a configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for '{field}': {reason}")]
    InvalidValue { field: &'static str, reason: String },
}
