//! Normalization of the raw agent-mode form fields.
//!
//! Bad input is never rejected: empty or non-numeric fields fall back to
//! their defaults.

use serde::{Deserialize, Serialize};

pub const DEFAULT_AGENT_MOOD: &str = "cozy";
pub const DEFAULT_SEED: u32 = 42;
pub const DEFAULT_VARIANT: u32 = 0;

/// Trimmed mood, or `cozy` when the field is blank.
pub fn normalize_mood(raw: &str) -> String {
    let mood = raw.trim();
    if mood.is_empty() {
        DEFAULT_AGENT_MOOD.to_string()
    } else {
        mood.to_string()
    }
}

/// Seed field as a number, or 42.
pub fn normalize_seed(raw: &str) -> u32 {
    parse_or(raw, DEFAULT_SEED)
}

/// Variant field as a number, or 0.
pub fn normalize_variant(raw: &str) -> u32 {
    parse_or(raw, DEFAULT_VARIANT)
}

// Seeds and variants are unsigned on the service side (`ge=0`), so negative
// or out-of-range integers count as invalid here and take the fallback too.
fn parse_or(raw: &str, fallback: u32) -> u32 {
    raw.trim().parse().unwrap_or(fallback)
}

/// Parameters of one agent-mode request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentRequest {
    pub mood: String,
    pub seed: u32,
    pub variant: u32,
    pub limit: u32,
}

impl AgentRequest {
    /// Build a request from the raw text of the form fields.
    pub fn from_inputs(mood: &str, seed: &str, variant: &str, limit: u32) -> Self {
        Self {
            mood: normalize_mood(mood),
            seed: normalize_seed(seed),
            variant: normalize_variant(variant),
            limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_seed() {
        assert_eq!(normalize_seed(""), 42);
        assert_eq!(normalize_seed("abc"), 42);
        assert_eq!(normalize_seed("1.5"), 42);
        assert_eq!(normalize_seed("-3"), 42);
        assert_eq!(normalize_seed("4294967296"), 42);
        assert_eq!(normalize_seed("4294967295"), u32::MAX);
        assert_eq!(normalize_seed(" 7 "), 7);
        assert_eq!(normalize_seed("0"), 0);
    }

    #[test]
    fn test_normalize_variant() {
        assert_eq!(normalize_variant(""), 0);
        assert_eq!(normalize_variant("two"), 0);
        assert_eq!(normalize_variant("3"), 3);
    }

    #[test]
    fn test_normalize_mood() {
        assert_eq!(normalize_mood(""), "cozy");
        assert_eq!(normalize_mood("   "), "cozy");
        assert_eq!(normalize_mood(" rainy night "), "rainy night");
    }

    #[test]
    fn test_agent_request_from_inputs() {
        let req = AgentRequest::from_inputs("", "x", "", 10);
        assert_eq!(
            req,
            AgentRequest {
                mood: "cozy".to_string(),
                seed: 42,
                variant: 0,
                limit: 10,
            }
        );

        let req = AgentRequest::from_inputs("focus", "7", "2", 5);
        assert_eq!(req.mood, "focus");
        assert_eq!(req.seed, 7);
        assert_eq!(req.variant, 2);
        assert_eq!(req.limit, 5);
    }
}
