use std::env;
use std::time::Duration;

/// Runtime used for the generated echo function.
pub const DEFAULT_PLACEHOLDER_RUNTIME: &str = "nodejs20.x";

/// Log stream name used when not running inside Lambda.
pub const DEFAULT_LOG_STREAM_NAME: &str = "local";

pub const DEFAULT_RESPONSE_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub log_stream_name: String,
    pub placeholder_runtime: String,
    pub response_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_stream_name: DEFAULT_LOG_STREAM_NAME.to_string(),
            placeholder_runtime: DEFAULT_PLACEHOLDER_RUNTIME.to_string(),
            response_timeout: Duration::from_secs(DEFAULT_RESPONSE_TIMEOUT_SECS),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let response_timeout = match var("RESPONSE_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map(Duration::from_secs)
                .map_err(|e| format!("RESPONSE_TIMEOUT_SECS: {}", e))?,
            None => Duration::from_secs(DEFAULT_RESPONSE_TIMEOUT_SECS),
        };

        Ok(Self {
            log_stream_name: var("AWS_LAMBDA_LOG_STREAM_NAME")
                .unwrap_or_else(|| DEFAULT_LOG_STREAM_NAME.to_string()),
            placeholder_runtime: var("PLACEHOLDER_RUNTIME")
                .unwrap_or_else(|| DEFAULT_PLACEHOLDER_RUNTIME.to_string()),
            response_timeout,
        })
    }
}
