use crate::recognizer::RecognizerConfig;
use crate::resolve::RetryPolicy;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;

/// Environment variable holding the completion service credential
const API_KEY_ENV: &str = "GEMINI_API_KEY";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub completion: CompletionConfig,
    pub recognizer: RecognizerConfig,
}

/// Remote completion service settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionConfig {
    /// Service base URL
    pub base_url: String,
    /// Model identifier appended to the generate-content path
    pub model: String,
    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,
    /// Retry policy for failed requests
    pub retry: RetryPolicy,
    /// Credential, supplied through the environment at load time
    #[serde(default)]
    pub api_key: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            completion: CompletionConfig {
                base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
                model: "gemini-1.5-pro".to_string(),
                request_timeout_secs: 30,
                retry: RetryPolicy::default(),
                api_key: None,
            },
            recognizer: RecognizerConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration: defaults, then an optional TOML file, then
    /// environment overrides with the INTERVIEW prefix.
    pub fn load(path: &str) -> Result<Self> {
        let mut settings = config::Config::builder()
            .add_source(config::Config::try_from(&Config::default())?)
            .add_source(config::File::with_name(path).required(false))
            .add_source(config::Environment::with_prefix("INTERVIEW").separator("__"));

        // The credential comes from the conventional variable, never from a
        // checked-in file.
        if let Ok(key) = env::var(API_KEY_ENV) {
            settings = settings.set_override("completion.api_key", key)?;
        }

        let config: Config = settings.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate that the configuration values make sense
    pub fn validate(&self) -> Result<()> {
        if self.completion.model.is_empty() {
            return Err(anyhow::anyhow!("Completion model cannot be empty"));
        }

        if self.completion.retry.max_attempts == 0 {
            return Err(anyhow::anyhow!("Retry attempts must be greater than 0"));
        }

        if self.completion.retry.multiplier == 0 {
            return Err(anyhow::anyhow!("Retry multiplier must be greater than 0"));
        }

        if self.recognizer.language.is_empty() {
            return Err(anyhow::anyhow!("Recognizer language cannot be empty"));
        }

        Ok(())
    }
}
