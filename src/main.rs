use clap::Parser;
use tokio::io::BufReader;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use mood2playlist::{
    cli::{self, Cli, Commands},
    config::Config,
    session::{PageLocation, RecommendationSession},
    AppResult, RecommendClient,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    // Load configuration
    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize logging
    init_logging(&config);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        base_url = %config.api.base_url,
        variant_policy = %config.recommend.variant_policy,
        "mood2playlist starting"
    );

    match run(args, config).await {
        Ok(0) => Ok(()),
        Ok(code) => std::process::exit(code),
        Err(e) => {
            error!(error = %e, "mood2playlist failed");
            Err(e.into())
        }
    }
}

/// Build the session and dispatch the command; returns the exit code.
async fn run(args: Cli, config: Config) -> AppResult<i32> {
    let client = RecommendClient::new(&config.api)?;
    let location = PageLocation::parse(&config.page.url)?;
    let session = RecommendationSession::new(client, config.recommend, location);

    if let Commands::Interactive = args.command {
        let stdin = BufReader::new(tokio::io::stdin());
        let mut stdout = std::io::stdout();
        cli::run_interactive(&session, stdin, &mut stdout).await?;
        return Ok(0);
    }

    let result = cli::execute_command(args.command, &session).await;
    print!("{}", result.message);
    Ok(result.exit_code)
}

/// Initialize tracing/logging
fn init_logging(config: &Config) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format {
        mood2playlist::config::LogFormat::Json => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        mood2playlist::config::LogFormat::Pretty => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }
}
