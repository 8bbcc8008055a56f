//! Plain-text rendering of the client state for the terminal front end.

use std::fmt::Write;

use crate::api::{AgenticResult, Track};
use crate::moods::{Mood, MoodSelection};
use crate::session::{AgentState, StandardState};

const RULE: &str = "───────────────────────────────────────────────";

/// Shown when the standard flow has no tracks yet.
pub const EMPTY_HINT: &str = "No tracks yet - pick a mood and hit Generate.";

/// One track card: title, artists, link and optional preview.
pub fn render_track_card(track: &Track) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "♪ {}", track.name);
    let _ = writeln!(out, "  {}", track.artists);
    if !track.album.is_empty() {
        let _ = writeln!(out, "  album: {}", track.album);
    }
    if let Some(url) = track.spotify_url.as_deref().filter(|u| !u.is_empty()) {
        let _ = writeln!(out, "  open: {}", url);
    }
    if let Some(preview) = track.preview_url.as_deref() {
        let _ = writeln!(out, "  preview: {}", preview);
    }
    out
}

/// All cards, or the empty hint.
pub fn render_tracks(tracks: &[Track]) -> String {
    if tracks.is_empty() {
        return format!("{}\n", EMPTY_HINT);
    }
    tracks
        .iter()
        .map(render_track_card)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Mood chips with the current selection marked, plus any typed vibe.
pub fn render_selection(selection: &MoodSelection) -> String {
    let chips: Vec<String> = Mood::ALL
        .iter()
        .map(|m| {
            if *m == selection.selected() {
                format!("[{}]", m)
            } else {
                m.to_string()
            }
        })
        .collect();
    let mut out = chips.join(" ");
    if !selection.custom().trim().is_empty() {
        let _ = write!(out, "\nvibe: {}", selection.custom().trim());
    }
    out.push('\n');
    out
}

/// Standard flow view.
pub fn render_standard(state: &StandardState) -> String {
    let mut out = String::new();
    if state.loading {
        out.push_str("Finding…\n");
    }
    if let Some(err) = &state.error {
        let _ = writeln!(out, "error: {}", err);
    }
    if let Some(mood) = &state.last_mood {
        let _ = writeln!(
            out,
            "{} (variant {}, {} tracks)",
            mood,
            state.counter.variant(),
            state.tracks.len()
        );
        let _ = writeln!(out, "{}", RULE);
    }
    out.push_str(&render_tracks(&state.tracks));
    out
}

/// Agent playlist with its metrics.
pub fn render_agent_result(result: &AgenticResult, trace_link: Option<&str>) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Agent playlist: {} | seed {} | {} tracks",
        result.mood, result.seed, result.count
    );
    let _ = writeln!(
        out,
        "duplicate rate: {:.1}% | unique artists: {}",
        result.metrics.dup_rate * 100.0,
        result.metrics.unique_artists
    );
    if let Some(link) = trace_link {
        let _ = writeln!(out, "trace: {}", link);
    }
    let _ = writeln!(out, "{}", RULE);
    for (i, t) in result.playlist.iter().enumerate() {
        let _ = write!(out, "{:>2}. {} - {}", i + 1, t.title, t.artist);
        if let Some(genre) = &t.genre {
            let _ = write!(out, " ({})", genre);
        }
        out.push('\n');
    }
    out
}

/// Agent flow view.
pub fn render_agent(state: &AgentState, trace_link: Option<&str>) -> String {
    let mut out = String::new();
    if state.loading {
        out.push_str("Agent running…\n");
    }
    if let Some(err) = &state.error {
        let _ = writeln!(out, "error: {}", err);
    }
    if let Some(result) = &state.result {
        out.push_str(&render_agent_result(result, trace_link));
    }
    out
}
