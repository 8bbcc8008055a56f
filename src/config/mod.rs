use std::env;

use reqwest::Url;

use crate::error::{AppError, AppResult};
use crate::variant::VariantPolicy;

/// Default recommendation API base, shared by both request flows.
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";

/// Default page address the mood is mirrored into.
pub const DEFAULT_PAGE_URL: &str = "http://localhost:5173/";

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub api: ApiConfig,
    pub recommend: RecommendConfig,
    pub page: PageConfig,
    pub logging: LoggingConfig,
}

/// Recommendation API configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL for both the standard and the agentic endpoint.
    pub base_url: String,
    /// `None` waits for the remote service indefinitely.
    pub timeout_ms: Option<u64>,
}

/// Request shaping for the two flows
#[derive(Debug, Clone)]
pub struct RecommendConfig {
    pub limit: u32,
    pub agent_limit: u32,
    pub variant_policy: VariantPolicy,
}

/// Page location configuration
#[derive(Debug, Clone)]
pub struct PageConfig {
    pub url: String,
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

/// Log output format
#[derive(Debug, Clone, PartialEq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> AppResult<Self> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let api = ApiConfig {
            base_url: env::var("API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.to_string()),
            timeout_ms: env::var("REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|s| s.parse().ok())
                .filter(|ms| *ms > 0),
        };
        validate_url("API_BASE", &api.base_url)?;

        let recommend = RecommendConfig {
            limit: env::var("RECOMMEND_LIMIT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(12),
            agent_limit: env::var("AGENT_LIMIT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),
            variant_policy: match env::var("VARIANT_POLICY") {
                Ok(raw) => raw.parse().map_err(|message| AppError::Config { message })?,
                Err(_) => VariantPolicy::default(),
            },
        };

        let page = PageConfig {
            url: env::var("PAGE_URL").unwrap_or_else(|_| DEFAULT_PAGE_URL.to_string()),
        };
        validate_url("PAGE_URL", &page.url)?;

        let logging = LoggingConfig {
            level: env::var("LOG_LEVEL").unwrap_or_else(|_| "warn".to_string()),
            format: match env::var("LOG_FORMAT")
                .unwrap_or_else(|_| "pretty".to_string())
                .to_lowercase()
                .as_str()
            {
                "json" => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
        };

        Ok(Config {
            api,
            recommend,
            page,
            logging,
        })
    }
}

fn validate_url(var: &str, value: &str) -> AppResult<()> {
    Url::parse(value).map(|_| ()).map_err(|e| AppError::Config {
        message: format!("{} is not a valid URL ({}): {}", var, value, e),
    })
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE.to_string(),
            timeout_ms: None,
        }
    }
}

impl Default for RecommendConfig {
    fn default() -> Self {
        Self {
            limit: 12,
            agent_limit: 10,
            variant_policy: VariantPolicy::default(),
        }
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_PAGE_URL.to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recommend_defaults() {
        let config = RecommendConfig::default();
        assert_eq!(config.limit, 12);
        assert_eq!(config.agent_limit, 10);
        assert_eq!(config.variant_policy, VariantPolicy::EveryTwoClicks);
    }

    #[test]
    fn test_validate_url() {
        assert!(validate_url("API_BASE", DEFAULT_API_BASE).is_ok());
        let err = validate_url("API_BASE", "not a url").unwrap_err();
        assert!(err.to_string().contains("API_BASE is not a valid URL"));
    }
}
