//! prezquiz CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;
mod io;

#[derive(Parser)]
#[command(name = "prezquiz", version, about = "Quiz game for US presidents")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the quiz
    Play {
        /// Allow repeat questions before all have been asked
        #[arg(short, long, conflicts_with = "end_early")]
        repeat: bool,

        /// End the session once every president has been asked
        #[arg(short, long)]
        end_early: bool,

        /// Accept ambiguous answers (e.g. "Bush" counts for either Bush)
        #[arg(short, long)]
        allow_ambiguity: bool,

        /// Range of order numbers to include (default: all)
        #[arg(short = 'R', long, num_args = 2, value_names = ["START", "END"])]
        range: Option<Vec<u32>>,

        /// Verbosity level: 0 = quiet, 1 = normal, 2 = verbose
        #[arg(short, long, default_value = "1")]
        verbosity: u8,

        /// TOML dataset file (default: the built-in president table)
        #[arg(long)]
        dataset: Option<PathBuf>,

        /// Final summary format: text, json
        #[arg(long, default_value = "text")]
        format: String,

        /// Seed for deterministic question selection
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Print the president table
    List {
        /// Range of order numbers to print (default: all)
        #[arg(short = 'R', long, num_args = 2, value_names = ["START", "END"])]
        range: Option<Vec<u32>>,

        /// TOML dataset file (default: the built-in president table)
        #[arg(long)]
        dataset: Option<PathBuf>,
    },

    /// Validate a TOML dataset file
    Validate {
        /// Path to the dataset file
        #[arg(long)]
        dataset: PathBuf,
    },
}

fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => "error",
        2 => "debug",
        _ => "info",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(format!("prezquiz_core={level}").parse().unwrap())
                .add_directive(format!("prezquiz_cli={level}").parse().unwrap()),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();

    let verbosity = match &cli.command {
        Commands::Play { verbosity, .. } => *verbosity,
        _ => 1,
    };
    init_tracing(verbosity);

    let result = match cli.command {
        Commands::Play {
            repeat,
            end_early,
            allow_ambiguity,
            range,
            verbosity,
            dataset,
            format,
            seed,
        } => commands::play::execute(
            repeat,
            end_early,
            allow_ambiguity,
            range,
            verbosity,
            dataset,
            format,
            seed,
        ),
        Commands::List { range, dataset } => commands::list::execute(range, dataset),
        Commands::Validate { dataset } => commands::validate::execute(dataset),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
