use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand, ValueEnum};
use owo_colors::OwoColorize;

mod commands;
mod error;

#[cfg(test)]
mod tests;

use error::CliError;

#[derive(Parser, Debug)]
#[command(
    name = "podforge",
    about = "PodForge - tournament pod and cube assignment",
    version,
    propagate_version = true
)]
struct Cli {
    /// Suppress the banner and planner logs on stderr
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Plan one round: reads a request on stdin, writes the result on stdout
    Solve {
        #[command(flatten)]
        planner: PlannerArgs,

        /// Output document
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Offline)]
        format: OutputFormat,

        /// Also write the round model in CPLEX LP format to FILE
        #[arg(long, value_name = "FILE")]
        emit_lp: Option<PathBuf>,
    },
    /// Plan independent rounds in parallel: reads a JSON array of requests
    Batch {
        #[command(flatten)]
        planner: PlannerArgs,

        /// Output document for each round
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Offline)]
        format: OutputFormat,
    },
    /// Print the pod sizes for a number of active players
    Sizes {
        /// Active player count
        players: usize,
    },
}

/// Planner overrides shared by `solve` and `batch`.
#[derive(Args, Debug, Clone, Default)]
struct PlannerArgs {
    /// Planner configuration (TOML or YAML). Defaults to ./podforge.toml if present
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Wall-clock budget in seconds
    #[arg(short, long, value_name = "SECS")]
    time_limit: Option<u64>,

    /// Solver backend
    #[arg(short, long, value_enum)]
    backend: Option<Backend>,

    /// Seed for the warm-start search
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    /// Pods with pod number, size, cube and players, plus warnings
    Offline,
    /// Index-aligned player lists, cube ids and objective
    Assignment,
    /// The full outcome with status and vote counts
    Report,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum Backend {
    Milp,
    Heuristic,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if !cli.quiet {
        podforge::console::init();
    }

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "error:".bright_red().bold(), e);
            ExitCode::from(e.exit_code())
        }
    }
}

fn run(command: Commands) -> Result<(), CliError> {
    let output = match command {
        Commands::Solve {
            planner,
            format,
            emit_lp,
        } => commands::solve::run(&planner, format, emit_lp.as_deref(), &read_stdin()?)?,
        Commands::Batch { planner, format } => {
            commands::batch::run(&planner, format, &read_stdin()?)?
        }
        Commands::Sizes { players } => commands::sizes::run(players)?,
    };

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", output)?;
    stdout.flush()?;
    Ok(())
}

fn read_stdin() -> Result<String, CliError> {
    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;
    Ok(input)
}
