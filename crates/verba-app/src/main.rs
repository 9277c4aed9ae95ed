use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tokio::signal;
use tracing_subscriber::EnvFilter;
use verba_config::logging::LoggingConfig;
use verba_types::{Request, VocabularyEntry};

pub mod controller;
pub mod events;
pub mod io;
pub mod profile;
pub mod state;

#[cfg(test)]
mod tests;

use self::controller::AppController;
use self::state::AppState;

#[derive(Parser)]
#[command(name = "verba", version, about = "Latin dictionary lookup and grammar analysis")]
struct Cli {
    /// Config or profile JSON file, overrides --profile
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Saved profile name
    #[arg(long, global = true, default_value = "main")]
    profile: String,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Answer JSON requests read from stdin, one per line (default)
    Serve,
    /// Translate Latin text
    Translate { text: Vec<String> },
    /// Describe the grammar of each word
    Grammar { text: Vec<String> },
    /// Show translation history
    History,
    /// Show saved vocabulary
    Vocabulary,
    /// Save a word to the vocabulary list
    Save { word: String, definition: String },
}

impl Command {
    /// `None` for the long-running server
    fn into_request(self) -> Option<Request> {
        match self {
            Command::Serve => None,
            Command::Translate { text } => Some(Request::Translate {
                text: text.join(" "),
            }),
            Command::Grammar { text } => Some(Request::GetGrammar {
                text: text.join(" "),
            }),
            Command::History => Some(Request::LoadHistory),
            Command::Vocabulary => Some(Request::LoadVocabulary),
            Command::Save { word, definition } => Some(Request::SaveVocabularyItem {
                item: VocabularyEntry::new(word, definition),
            }),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = profile::load_config(cli.config.as_deref(), &cli.profile)?;
    init_tracing(&config.logging);

    let channel_capacity = config.channel_capacity;
    let state = Arc::new(AppState::new(config));
    let controller = AppController::new(state, channel_capacity);

    let request = cli.command.unwrap_or(Command::Serve).into_request();
    let mut tasks = controller.spawn_tasks(request.is_none());

    match request {
        Some(request) => {
            let response = controller.client().send(request).await?;
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        None => {
            tokio::select! {
                _ = signal::ctrl_c() => {
                    tracing::info!("Shutdown requested");
                }
                Some(result) = tasks.join_next() => {
                    match result {
                        Ok(Ok(())) => tracing::info!("Task finished"),
                        Ok(Err(e)) => tracing::error!("Task failed: {e}"),
                        Err(e) => tracing::error!("Task panicked: {e}"),
                    }
                }
            }
        }
    }

    controller.shutdown();
    while let Some(result) = tasks.join_next().await {
        if let Ok(Err(e)) = result {
            tracing::error!("Task failed during shutdown: {e}");
        }
    }

    Ok(())
}

/// Logs go to stderr so stdout stays free for responses
fn init_tracing(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.filter));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if config.json {
        builder.json().init();
    } else {
        builder.with_ansi(atty::is(atty::Stream::Stderr)).init();
    }
}
