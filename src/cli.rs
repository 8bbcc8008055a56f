//! Command-line front end.
//!
//! Plays the role of the page: one-shot commands for each flow and an
//! interactive session that keeps the click counter between Generate
//! presses.

use std::io::Write;

use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::api::RecommendationApi;
use crate::moods::Mood;
use crate::render;
use crate::session::RecommendationSession;

/// Mood-based music recommendations.
#[derive(Parser, Debug)]
#[command(name = "mood2playlist", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Get recommended tracks for a mood
    Recommend {
        /// Mood chip: hype, cozy, focus, sad-girl, romantic, study, rage-run, party, dark
        #[arg(long)]
        mood: Option<Mood>,

        /// Free-text vibe; overrides the chip when not blank
        #[arg(long)]
        custom: Option<String>,

        /// Press Generate this many times in one session
        #[arg(long, default_value = "1")]
        times: u32,
    },

    /// Build a playlist in agent mode
    Agent {
        /// Mood or free-text vibe (blank = cozy)
        #[arg(long, default_value = "")]
        mood: String,

        /// Seed; blank or non-numeric = 42
        #[arg(long, default_value = "")]
        seed: String,

        /// Variant; blank or non-numeric = 0
        #[arg(long, default_value = "")]
        variant: String,
    },

    /// List the mood chips with their seed genres and keywords
    Moods,

    /// Line-oriented session reading commands from stdin
    Interactive,
}

/// Result of CLI command execution.
pub struct CliResult {
    /// Exit code (0 = success)
    pub exit_code: i32,
    /// Output message
    pub message: String,
}

impl CliResult {
    /// Create a success result with the given message.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            exit_code: 0,
            message: message.into(),
        }
    }

    /// Create an error result with the given message.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            exit_code: 1,
            message: message.into(),
        }
    }
}

/// Execute a one-shot command. `Interactive` is driven by [`run_interactive`].
pub async fn execute_command<A: RecommendationApi>(
    command: Commands,
    session: &RecommendationSession<A>,
) -> CliResult {
    match command {
        Commands::Recommend {
            mood,
            custom,
            times,
        } => execute_recommend(session, mood, custom, times).await,
        Commands::Agent {
            mood,
            seed,
            variant,
        } => execute_agent(session, &mood, &seed, &variant).await,
        Commands::Moods => CliResult::success(list_moods()),
        Commands::Interactive => CliResult::error("interactive mode reads from stdin"),
    }
}

async fn execute_recommend<A: RecommendationApi>(
    session: &RecommendationSession<A>,
    mood: Option<Mood>,
    custom: Option<String>,
    times: u32,
) -> CliResult {
    if let Some(mood) = mood {
        session.select_mood(mood);
    }
    if let Some(custom) = custom {
        session.set_custom(&custom);
    }

    let mut output = String::new();
    let mut failed = false;
    for _ in 0..times.max(1) {
        failed = session.generate().await.is_err();
        output.push_str(&render::render_standard(&session.standard()));
        output.push('\n');
    }
    output.push_str(&format!("page: {}\n", session.location().url()));

    if failed {
        CliResult::error(output)
    } else {
        CliResult::success(output)
    }
}

async fn execute_agent<A: RecommendationApi>(
    session: &RecommendationSession<A>,
    mood: &str,
    seed: &str,
    variant: &str,
) -> CliResult {
    let outcome = session.trigger_agent(mood, seed, variant).await;
    let output = render::render_agent(&session.agent(), session.trace_link().as_deref());
    match outcome {
        Ok(()) => CliResult::success(output),
        Err(_) => CliResult::error(output),
    }
}

/// Mood chips with their seed genres and keywords.
pub fn list_moods() -> String {
    let mut output = String::new();
    for mood in Mood::ALL {
        output.push_str(&format!(
            "{:<10} {}\n{:<10} keywords: {}\n",
            mood.as_str(),
            mood.seed_genres().join(", "),
            "",
            mood.keywords().join(", ")
        ));
    }
    output
}

const INTERACTIVE_HELP: &str = "\
commands:
  <mood>                      pick a mood chip (clears typed vibe)
  say <text>                  type a free-text vibe
  clear                       clear the typed vibe
  go                          Generate
  agent [mood words] [seed] [variant]
                              run agent mode; trailing numbers are
                              the seed and then the variant
  state                       show everything
  url                         show the page address
  help | quit
";

/// Split `agent` arguments into mood, seed and variant.
///
/// Up to two trailing integer tokens are the seed and the variant; every
/// word before them is the mood, so `rainy night 7 2` keeps its spaces.
pub fn split_agent_args(rest: &str) -> (String, &str, &str) {
    let tokens: Vec<&str> = rest.split_whitespace().collect();
    let numeric = tokens
        .iter()
        .rev()
        .take(2)
        .take_while(|t| t.parse::<i64>().is_ok())
        .count();
    let (words, numbers) = tokens.split_at(tokens.len() - numeric);
    let seed = numbers.first().copied().unwrap_or("");
    let variant = numbers.get(1).copied().unwrap_or("");
    (words.join(" "), seed, variant)
}

/// Drive a session from line commands until `quit` or end of input.
pub async fn run_interactive<A, R, W>(
    session: &RecommendationSession<A>,
    reader: R,
    out: &mut W,
) -> std::io::Result<()>
where
    A: RecommendationApi,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    write!(out, "{}", render::render_selection(&session.selection()))?;
    let mut lines = reader.lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        let (cmd, rest) = match line.split_once(char::is_whitespace) {
            Some((cmd, rest)) => (cmd, rest.trim()),
            None => (line, ""),
        };

        match cmd {
            "" => continue,
            "quit" | "exit" => break,
            "help" => write!(out, "{}", INTERACTIVE_HELP)?,
            "say" => {
                session.set_custom(rest);
                write!(out, "{}", render::render_selection(&session.selection()))?;
            }
            "clear" => {
                session.set_custom("");
                write!(out, "{}", render::render_selection(&session.selection()))?;
            }
            "go" | "generate" => {
                let _ = session.generate().await;
                write!(out, "{}", render::render_standard(&session.standard()))?;
            }
            "agent" => {
                let (mood, seed, variant) = split_agent_args(rest);
                let _ = session.trigger_agent(&mood, seed, variant).await;
                write!(
                    out,
                    "{}",
                    render::render_agent(&session.agent(), session.trace_link().as_deref())
                )?;
            }
            "state" => {
                write!(out, "{}", render::render_selection(&session.selection()))?;
                write!(out, "{}", render::render_standard(&session.standard()))?;
                write!(
                    out,
                    "{}",
                    render::render_agent(&session.agent(), session.trace_link().as_deref())
                )?;
            }
            "url" => writeln!(out, "{}", session.location().url())?,
            other => match other.parse::<Mood>() {
                Ok(mood) if rest.is_empty() => {
                    session.select_mood(mood);
                    write!(out, "{}", render::render_selection(&session.selection()))?;
                }
                _ => writeln!(out, "unknown command '{}' (try help)", line)?,
            },
        }
        out.flush()?;
    }
    Ok(())
}
