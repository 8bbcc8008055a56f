use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

/// Track returned by the standard recommendation endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    /// Service track id; numeric ids are kept as their decimal text
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub name: String,
    /// Artist names, already joined for display
    pub artists: String,
    #[serde(default)]
    pub album: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub spotify_url: Option<String>,
    #[serde(default)]
    pub preview_url: Option<String>,
}

/// Response from `GET /api/recommend`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecommendationResult {
    #[serde(default)]
    pub mood: String,
    #[serde(default)]
    pub count: u32,
    pub tracks: Vec<Track>,
}

/// Track in an agent-mode playlist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentTrack {
    pub title: String,
    pub artist: String,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub spotify_url: Option<String>,
}

/// Summary metrics computed by the agent run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AgentMetrics {
    /// Fraction of playlist entries that repeat an earlier one
    #[serde(default)]
    pub dup_rate: f64,
    #[serde(default)]
    pub unique_artists: u32,
    /// Any other metrics the service reports
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

/// Response from `GET /api/agentic/recommend`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgenticResult {
    /// Mood echo, may carry how it was interpreted, e.g. `cozy (preset)`
    pub mood: String,
    pub seed: u32,
    pub count: u32,
    #[serde(default)]
    pub metrics: AgentMetrics,
    #[serde(default)]
    pub trace_url: Option<String>,
    #[serde(default)]
    pub playlist: Vec<AgentTrack>,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Text(s) => s,
        Id::Int(n) => n.to_string(),
        Id::Float(n) => n.to_string(),
    })
}
