//! Recommendation service access.
//!
//! This module provides:
//! - Wire types for the standard and agentic endpoints
//! - The `RecommendationApi` seam the session drives
//! - A reqwest-backed client sharing one base URL across both endpoints

mod client;
mod types;


pub use client::RecommendClient;
pub use types::*;

use async_trait::async_trait;

use crate::error::ApiResult;
use crate::input::AgentRequest;

/// Remote recommendation service.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecommendationApi: Send + Sync {
    /// `GET /api/recommend` for a mood and variant.
    async fn recommend(
        &self,
        mood: &str,
        limit: u32,
        variant: u32,
    ) -> ApiResult<RecommendationResult>;

    /// `GET /api/agentic/recommend`.
    async fn agentic(&self, request: &AgentRequest) -> ApiResult<AgenticResult>;

    /// Absolute link for a trace reference returned by the agentic endpoint.
    fn trace_link(&self, trace_url: &str) -> Option<String>;
}
