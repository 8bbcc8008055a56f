//! Recommendation client state and the two request flows.
//!
//! Each flow keeps its state behind its own lock, taken only between awaits,
//! so the standard and the agent flow can be in flight at the same time and
//! a snapshot can be read while a request is pending. Within one flow there
//! is no sequencing: whichever response resolves last overwrites the state.

mod location;

pub use location::PageLocation;

use std::sync::{Mutex, MutexGuard};

use serde::Serialize;
use tracing::{info, warn};

use crate::api::{AgenticResult, RecommendationApi, Track};
use crate::config::RecommendConfig;
use crate::error::ApiResult;
use crate::input::AgentRequest;
use crate::moods::{Mood, MoodSelection};
use crate::variant::ClickCounter;

/// State of the standard (Generate) flow.
#[derive(Debug, Clone, Default, Serialize)]
pub struct StandardState {
    pub loading: bool,
    pub error: Option<String>,
    /// Tracks of the last successful request.
    pub tracks: Vec<Track>,
    pub counter: ClickCounter,
    /// Mood of the last successful request.
    pub last_mood: Option<String>,
}

/// State of the agent-mode flow.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AgentState {
    pub loading: bool,
    pub error: Option<String>,
    pub result: Option<AgenticResult>,
}

/// The single client component: UI state plus the two request flows.
pub struct RecommendationSession<A> {
    api: A,
    config: RecommendConfig,
    selection: Mutex<MoodSelection>,
    standard: Mutex<StandardState>,
    agent: Mutex<AgentState>,
    location: Mutex<PageLocation>,
}

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl<A: RecommendationApi> RecommendationSession<A> {
    pub fn new(api: A, config: RecommendConfig, location: PageLocation) -> Self {
        Self {
            api,
            config,
            selection: Mutex::new(MoodSelection::default()),
            standard: Mutex::new(StandardState::default()),
            agent: Mutex::new(AgentState::default()),
            location: Mutex::new(location),
        }
    }

    /// Pick a mood chip (clears typed text).
    pub fn select_mood(&self, mood: Mood) {
        lock(&self.selection).select(mood);
    }

    /// Update the free-text vibe box.
    pub fn set_custom(&self, text: &str) {
        lock(&self.selection).set_custom(text);
    }

    pub fn selection(&self) -> MoodSelection {
        lock(&self.selection).clone()
    }

    pub fn standard(&self) -> StandardState {
        lock(&self.standard).clone()
    }

    pub fn agent(&self) -> AgentState {
        lock(&self.agent).clone()
    }

    pub fn location(&self) -> PageLocation {
        lock(&self.location).clone()
    }

    /// Press Generate with the current selection.
    pub async fn generate(&self) -> ApiResult<()> {
        let mood = self.selection().effective();
        self.trigger_standard(&mood).await
    }

    /// Run the standard flow for `mood`.
    ///
    /// Tracks, counters and the page URL only change when the request
    /// succeeds. The error is also kept in the flow state for display.
    pub async fn trigger_standard(&self, mood: &str) -> ApiResult<()> {
        let pending = {
            let mut state = lock(&self.standard);
            state.loading = true;
            state.error = None;
            state.counter.next(self.config.variant_policy)
        };

        let outcome = self
            .api
            .recommend(mood, self.config.limit, pending.variant)
            .await;

        let mut state = lock(&self.standard);
        state.loading = false;
        match outcome {
            Ok(result) => {
                state.tracks = result.tracks;
                state.counter.commit(pending);
                state.last_mood = Some(mood.to_string());
                info!(
                    mood = %mood,
                    clicks = pending.clicks,
                    variant = pending.variant,
                    tracks = state.tracks.len(),
                    "Recommendations updated"
                );
                drop(state);

                lock(&self.location).replace_query("mood", mood);
                Ok(())
            }
            Err(e) => {
                warn!(mood = %mood, error = %e, "Recommendations failed");
                state.error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Run agent mode from the raw form fields; the limit comes from config.
    pub async fn trigger_agent(&self, mood: &str, seed: &str, variant: &str) -> ApiResult<()> {
        let request = AgentRequest::from_inputs(mood, seed, variant, self.config.agent_limit);
        self.run_agent(request).await
    }

    /// Run agent mode with an already normalized request.
    ///
    /// The previous error and result are cleared before the request is sent.
    pub async fn run_agent(&self, request: AgentRequest) -> ApiResult<()> {
        {
            let mut state = lock(&self.agent);
            state.loading = true;
            state.error = None;
            state.result = None;
        }

        let outcome = self.api.agentic(&request).await;

        let mut state = lock(&self.agent);
        state.loading = false;
        match outcome {
            Ok(result) => {
                info!(
                    mood = %result.mood,
                    seed = result.seed,
                    count = result.count,
                    "Agent playlist updated"
                );
                state.result = Some(result);
                Ok(())
            }
            Err(e) => {
                warn!(mood = %request.mood, error = %e, "Agent mode failed");
                state.error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Absolute trace link of the current agent result.
    pub fn trace_link(&self) -> Option<String> {
        let state = lock(&self.agent);
        let trace_url = state.result.as_ref()?.trace_url.as_deref()?;
        self.api.trace_link(trace_url)
    }
}
