//! # Mood2Playlist
//!
//! A client for a remote mood-based music recommendation service. The user
//! picks a mood chip or types a vibe and gets a list of tracks back; agent
//! mode asks a second endpoint for a curated playlist with summary metrics
//! and a trace link.
//!
//! ## Features
//!
//! - **Standard flow**: mood → tracks, with a click counter that advances
//!   the request variant after each successful Generate
//! - **Agent mode**: mood, seed and variant → playlist, metrics, trace link
//! - **Input normalization**: blank or non-numeric form fields fall back to
//!   defaults instead of failing
//!
//! ## Architecture
//!
//! ```text
//! CLI → RecommendationSession → RecommendClient → Recommendation API (HTTP)
//!                ↓
//!        page location (mood query parameter)
//! ```
//!
//! ## Example
//!
//! ```ignore
//! use mood2playlist::{Config, RecommendClient, RecommendationSession};
//! use mood2playlist::session::PageLocation;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     let client = RecommendClient::new(&config.api)?;
//!     let location = PageLocation::parse(&config.page.url)?;
//!     let session = RecommendationSession::new(client, config.recommend, location);
//!     session.trigger_standard("cozy").await?;
//!     println!("{} tracks", session.standard().tracks.len());
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]

/// Recommendation API client and wire types.
pub mod api;
/// Command-line front end.
pub mod cli;
/// Configuration management.
pub mod config;
/// Error types and result aliases for the application.
pub mod error;
/// Agent-mode form input normalization.
pub mod input;
/// Mood chips and mood selection.
pub mod moods;
/// Terminal rendering of the client state.
pub mod render;
/// Client state and the standard and agent request flows.
pub mod session;
/// Click counter and variant policy.
pub mod variant;

pub use api::{RecommendClient, RecommendationApi};
pub use config::Config;
pub use error::{ApiError, ApiResult, AppError, AppResult};
pub use session::RecommendationSession;
