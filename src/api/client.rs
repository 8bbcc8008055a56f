use async_trait::async_trait;
use reqwest::{Client, Response, Url};
use std::time::{Duration, Instant};
use tracing::{debug, error, info};

use super::types::{AgenticResult, RecommendationResult};
use super::RecommendationApi;
use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult};
use crate::input::AgentRequest;

/// Client for the recommendation service's standard and agentic endpoints
#[derive(Clone)]
pub struct RecommendClient {
    client: Client,
    base_url: Url,
    timeout_ms: Option<u64>,
}

impl RecommendClient {
    /// Create a new recommendation client
    pub fn new(config: &ApiConfig) -> ApiResult<Self> {
        let mut builder = Client::builder();
        if let Some(ms) = config.timeout_ms {
            builder = builder.timeout(Duration::from_millis(ms));
        }
        let client = builder.build().map_err(ApiError::Http)?;

        // Trailing slash so relative joins keep any path prefix.
        let base = format!("{}/", config.base_url.trim_end_matches('/'));
        let base_url = Url::parse(&base).map_err(|e| ApiError::InvalidUrl {
            message: format!("{}: {}", config.base_url, e),
        })?;

        Ok(Self {
            client,
            base_url,
            timeout_ms: config.timeout_ms,
        })
    }

    /// Get the base URL (for testing)
    pub fn base_url(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }

    fn endpoint(&self, path: &str) -> ApiResult<Url> {
        self.base_url.join(path).map_err(|e| ApiError::InvalidUrl {
            message: format!("{}{}: {}", self.base_url, path, e),
        })
    }

    async fn send(&self, url: Url, query: &[(&str, String)]) -> ApiResult<Response> {
        self.client
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|e| match self.timeout_ms {
                Some(timeout_ms) if e.is_timeout() => ApiError::Timeout { timeout_ms },
                _ => ApiError::Http(e),
            })
    }
}

#[async_trait]
impl RecommendationApi for RecommendClient {
    async fn recommend(
        &self,
        mood: &str,
        limit: u32,
        variant: u32,
    ) -> ApiResult<RecommendationResult> {
        let url = self.endpoint("api/recommend")?;
        // Cache buster so no intermediary replays an older variant.
        let ts = chrono::Utc::now().timestamp_millis();
        let query = [
            ("mood", mood.to_string()),
            ("limit", limit.to_string()),
            ("variant", variant.to_string()),
            ("_", ts.to_string()),
        ];

        debug!(mood = %mood, limit, variant, "Requesting recommendations");
        let start = Instant::now();

        let response = self.send(url, &query).await.inspect_err(|e| {
            error!(mood = %mood, error = %e, "Recommendation request failed");
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let err = match detail_from_body(&body) {
                Some(detail) => ApiError::StatusDetail {
                    status: status.as_u16(),
                    detail,
                },
                None => ApiError::Status {
                    status: status.as_u16(),
                },
            };
            error!(
                mood = %mood,
                status = status.as_u16(),
                latency_ms = start.elapsed().as_millis(),
                "Recommendation API returned an error"
            );
            return Err(err);
        }

        let result: RecommendationResult =
            response
                .json()
                .await
                .map_err(|e| ApiError::InvalidResponse {
                    message: format!("Failed to parse recommendations: {}", e),
                })?;

        info!(
            mood = %mood,
            variant,
            tracks = result.tracks.len(),
            latency_ms = start.elapsed().as_millis(),
            "Recommendations received"
        );

        Ok(result)
    }

    async fn agentic(&self, request: &AgentRequest) -> ApiResult<AgenticResult> {
        let url = self.endpoint("api/agentic/recommend")?;
        let query = [
            ("mood", request.mood.clone()),
            ("limit", request.limit.to_string()),
            ("seed", request.seed.to_string()),
            ("variant", request.variant.to_string()),
        ];

        debug!(
            mood = %request.mood,
            seed = request.seed,
            variant = request.variant,
            limit = request.limit,
            "Requesting agent playlist"
        );
        let start = Instant::now();

        let response = self.send(url, &query).await.inspect_err(|e| {
            error!(mood = %request.mood, error = %e, "Agent request failed");
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(
                mood = %request.mood,
                status = status.as_u16(),
                latency_ms = start.elapsed().as_millis(),
                "Agent API returned an error"
            );
            return Err(ApiError::Agent {
                status: status.as_u16(),
                body,
            });
        }

        let result: AgenticResult =
            response
                .json()
                .await
                .map_err(|e| ApiError::InvalidResponse {
                    message: format!("Failed to parse agent playlist: {}", e),
                })?;

        info!(
            mood = %result.mood,
            seed = result.seed,
            count = result.count,
            latency_ms = start.elapsed().as_millis(),
            "Agent playlist received"
        );

        Ok(result)
    }

    fn trace_link(&self, trace_url: &str) -> Option<String> {
        let trace_url = trace_url.trim();
        if trace_url.is_empty() {
            return None;
        }
        // Root-relative paths stay under the base's own prefix.
        let relative = match trace_url.strip_prefix('/') {
            Some(rest) if !rest.starts_with('/') => rest,
            _ => trace_url,
        };
        self.base_url.join(relative).ok().map(String::from)
    }
}

/// `detail` of a JSON error body: strings verbatim, other values as JSON.
fn detail_from_body(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        serde_json::Value::Null => None,
        serde_json::Value::String(s) if s.is_empty() => None,
        serde_json::Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
