//! auto-acmg-worker main executable

pub mod common;
pub mod defs;
pub mod err;
pub mod predictors;
pub mod seqvars;
pub mod strucvars;

use clap::{Args, Parser, Subcommand};
use console::{Emoji, Term};

/// CLI parser based on clap.
#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "ACMG criteria heavy lifting",
    long_about = "This tool performs the heavy lifting for automated ACMG variant classification"
)]
struct Cli {
    /// Commonly used arguments
    #[command(flatten)]
    common: common::Args,

    /// The sub command to run
    #[command(subcommand)]
    command: Commands,
}

/// Enum supporting the parsing of top-level commands.
#[derive(Debug, Subcommand)]
enum Commands {
    /// Sequence variant related commands.
    Seqvars(Seqvars),
    /// Structural variant related commands.
    Strucvars(Strucvars),
}

/// Parsing of "seqvars *" sub commands.
#[derive(Debug, Args)]
#[command(args_conflicts_with_subcommands = true)]
struct Seqvars {
    /// The sub command to run
    #[command(subcommand)]
    command: SeqvarsCommands,
}

/// Enum supporting the parsing of "seqvars *" sub commands.
#[derive(Debug, Subcommand)]
enum SeqvarsCommands {
    Predict(seqvars::Args),
}

/// Parsing of "strucvars *" sub commands.
#[derive(Debug, Args)]
#[command(args_conflicts_with_subcommands = true)]
struct Strucvars {
    /// The sub command to run
    #[command(subcommand)]
    command: StrucvarsCommands,
}

/// Enum supporting the parsing of "strucvars *" sub commands.
#[derive(Debug, Subcommand)]
enum StrucvarsCommands {
    Predict(strucvars::Args),
}

fn main() -> Result<(), anyhow::Error> {
    let cli = Cli::parse();

    // Build a tracing subscriber according to the configuration in `cli.common`.
    let collector = tracing_subscriber::fmt()
        .with_target(false)
        .with_max_level(match cli.common.verbose.log_level() {
            Some(level) => match level {
                log::Level::Error => tracing::Level::ERROR,
                log::Level::Warn => tracing::Level::WARN,
                log::Level::Info => tracing::Level::INFO,
                log::Level::Debug => tracing::Level::DEBUG,
                log::Level::Trace => tracing::Level::TRACE,
            },
            None => tracing::Level::INFO,
        })
        .compact()
        .finish();

    // Install collector and go into sub commands.
    let term = Term::stderr();
    tracing::subscriber::with_default(collector, || {
        match &cli.command {
            Commands::Seqvars(cmd) => match &cmd.command {
                SeqvarsCommands::Predict(args) => {
                    seqvars::run(&cli.common, args)?;
                }
            },
            Commands::Strucvars(cmd) => match &cmd.command {
                StrucvarsCommands::Predict(args) => {
                    strucvars::run(&cli.common, args)?;
                }
            },
        }

        Ok::<(), anyhow::Error>(())
    })?;
    term.write_line(&format!("All done. Have a nice day!{}", Emoji(" 😃", "")))?;

    Ok(())
}
