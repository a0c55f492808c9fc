mod job;
mod menu;
mod session;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use scck_util::UserPreferences;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use crate::session::Session;

/// Interactive helper for filling in cluster job parameters.
#[derive(Debug, Parser)]
#[command(name = "scck", version, about)]
struct Cli {
    /// Answers used before reading stdin, separated by spaces ("@" stands
    /// for an empty answer). Implies the sequential prompt.
    #[arg(short = 'x', long = "exec", value_name = "ANSWERS", global = true)]
    exec: Option<String>,

    /// Do not print the menu in sequential mode.
    #[arg(short, long, global = true)]
    silent: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Open the job parameter prompt directly.
    Job,
    /// Show or change display preferences.
    Prefs {
        /// Maximum width of the prompt frames, in columns.
        #[arg(long)]
        max_width: Option<u16>,
        /// Text printed before the input line.
        #[arg(long)]
        prompt_symbol: Option<String>,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let preferences = load_preferences();

    match cli.command {
        Some(Command::Prefs {
            max_width,
            prompt_symbol,
        }) => run_prefs(preferences, max_width, prompt_symbol),
        Some(Command::Job) => {
            let mut session = Session::from_stdio(cli.exec.as_deref(), cli.silent, preferences);
            session.run_job().map(|_| ())
        }
        None => Session::from_stdio(cli.exec.as_deref(), cli.silent, preferences).run_menu(),
    }
}

/// Logs go to stderr so they never interleave with the inline viewport.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn load_preferences() -> UserPreferences {
    UserPreferences::new().unwrap_or_else(|error| {
        warn!(error = %error, "Failed to load preferences; using defaults");
        UserPreferences::ephemeral()
    })
}

fn run_prefs(mut preferences: UserPreferences, max_width: Option<u16>, prompt_symbol: Option<String>) -> Result<()> {
    if let Some(width) = max_width {
        preferences.set_max_width(width).context("failed to save max_width")?;
    }
    if let Some(symbol) = prompt_symbol {
        preferences.set_prompt_symbol(symbol).context("failed to save prompt_symbol")?;
    }
    println!("file          = {}", preferences.path().display());
    println!("max_width     = {}", preferences.max_width());
    println!("prompt_symbol = {:?}", preferences.prompt_symbol());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_exec_and_silent_for_subcommands() {
        let cli = Cli::parse_from(["scck", "job", "-x", "bob 2", "-s"]);
        assert!(matches!(cli.command, Some(Command::Job)));
        assert_eq!(cli.exec.as_deref(), Some("bob 2"));
        assert!(cli.silent);

        let cli = Cli::parse_from(["scck", "prefs", "--max-width", "80"]);
        assert!(matches!(cli.command, Some(Command::Prefs { max_width: Some(80), .. })));
    }
}
