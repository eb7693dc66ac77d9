//! Quiz client: talks to the flashcard backend and runs quizzes in a terminal.

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod runner;

use std::io;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::api::HttpQuizApi;
use crate::cli::Command;
use crate::config::ClientConfig;
use crate::runner::QuizRunner;

pub use error::{ClientError, Result};

pub async fn run() -> anyhow::Result<()> {
    let (command, config) = prepare(std::env::args().skip(1), ClientConfig::from_env)?;

    tracing::info!(api_url = %config.api_url, "using quiz backend");
    let api = HttpQuizApi::new(&config)?;
    let runner = QuizRunner::new(api, config.option_count);

    let mut out = io::stdout().lock();

    match command {
        Command::Quiz { deck_id } => {
            let mut input = io::stdin().lock();
            cli::play(&runner, &deck_id, &mut input, &mut out).await?;
        }
        Command::History => {
            let history = runner.history().await?;
            cli::render_history(&history, &mut out)?;
        }
        Command::Show { quiz_id } => {
            let result = runner.detail(&quiz_id).await?;
            cli::render_result(&result, &mut out)?;
        }
    }

    Ok(())
}

/// Parse arguments, then install logging, then load configuration.
///
/// Usage errors come first so a bad invocation never reports missing
/// configuration, and configuration errors are logged once tracing is up.
fn prepare<I, F>(args: I, load_config: F) -> anyhow::Result<(Command, ClientConfig)>
where
    I: IntoIterator<Item = String>,
    F: FnOnce() -> Result<ClientConfig>,
{
    let command = Command::parse(args)?;

    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .try_init()
        .ok();

    let config = load_config().inspect_err(|e| tracing::error!(error = %e, "invalid configuration"))?;
    Ok((command, config))
}
