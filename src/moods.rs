//! The fixed mood chips and the user's current mood selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the predefined mood chips.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mood {
    Hype,
    #[default]
    Cozy,
    Focus,
    SadGirl,
    Romantic,
    Study,
    RageRun,
    Party,
    Dark,
}

impl Mood {
    /// All chips, in display order.
    pub const ALL: [Mood; 9] = [
        Mood::Hype,
        Mood::Cozy,
        Mood::Focus,
        Mood::SadGirl,
        Mood::Romantic,
        Mood::Study,
        Mood::RageRun,
        Mood::Party,
        Mood::Dark,
    ];

    /// Label sent to the API.
    pub fn as_str(self) -> &'static str {
        match self {
            Mood::Hype => "hype",
            Mood::Cozy => "cozy",
            Mood::Focus => "focus",
            Mood::SadGirl => "sad-girl",
            Mood::Romantic => "romantic",
            Mood::Study => "study",
            Mood::RageRun => "rage-run",
            Mood::Party => "party",
            Mood::Dark => "dark",
        }
    }

    /// Genres the recommendation service seeds this mood with.
    pub fn seed_genres(self) -> &'static [&'static str] {
        match self {
            Mood::Hype => &["pop", "edm", "dance", "electro", "hip-hop"],
            Mood::Cozy => &["acoustic", "singer-songwriter", "indie", "chill", "folk"],
            Mood::Focus => &["ambient", "classical", "piano", "lo-fi", "chill"],
            Mood::SadGirl => &["indie", "indie-pop", "singer-songwriter", "alt-rock", "pop"],
            Mood::Romantic => &["r-n-b", "soul", "latin", "pop", "indie-pop"],
            Mood::Study => &["lo-fi", "ambient", "piano", "classical", "chill"],
            Mood::RageRun => &["rock", "metal", "trap", "edm", "alt-rock"],
            Mood::Party => &["dance", "edm", "pop", "hip-hop", "house"],
            Mood::Dark => &["industrial", "electro", "rock", "trap", "alt-rock"],
        }
    }

    /// Search keywords associated with this mood.
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Mood::Hype => &["banger", "upbeat", "energy", "party"],
            Mood::Cozy => &["warm", "mellow", "soothing", "cozy"],
            Mood::Focus => &["instrumental", "minimal", "study", "focus"],
            Mood::SadGirl => &["melancholy", "sad", "intimate", "soft"],
            Mood::Romantic => &["romantic", "love", "slow", "sensual"],
            Mood::Study => &["instrumental", "lofi", "study", "focus"],
            Mood::RageRun => &["high tempo", "aggressive", "workout", "hard"],
            Mood::Party => &["club", "party", "dancefloor", "anthem"],
            Mood::Dark => &["dark", "brooding", "moody", "noir"],
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mood {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim().to_lowercase();
        Mood::ALL
            .into_iter()
            .find(|m| m.as_str() == label)
            .ok_or_else(|| format!("Unknown mood '{}'", s.trim()))
    }
}

/// Selected chip plus the free-text box that overrides it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoodSelection {
    selected: Mood,
    custom: String,
}

impl MoodSelection {
    pub fn new(selected: Mood) -> Self {
        Self {
            selected,
            custom: String::new(),
        }
    }

    pub fn selected(&self) -> Mood {
        self.selected
    }

    pub fn custom(&self) -> &str {
        &self.custom
    }

    /// Pick a chip. Clears any typed vibe.
    pub fn select(&mut self, mood: Mood) {
        self.selected = mood;
        self.custom.clear();
    }

    pub fn set_custom(&mut self, text: impl Into<String>) {
        self.custom = text.into();
    }

    /// Mood string a request is made with.
    pub fn effective(&self) -> String {
        let typed = self.custom.trim();
        if typed.is_empty() {
            self.selected.as_str().to_string()
        } else {
            typed.to_string()
        }
    }
}
