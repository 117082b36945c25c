//! CLI frontend for the Nextframe puzzle engine.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "nextframe",
    about = "Nextframe: seeded \"find the missing frame\" puzzles",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List registered pattern families
    Families,

    /// Generate questions from one seeded stream
    Generate {
        /// Seed string; digits are used literally, anything else is hashed
        #[arg(short, long)]
        seed: Option<String>,

        /// Creativity in [0, 1]; out-of-range values are clamped
        #[arg(short, long, default_value = "0.5", allow_negative_numbers = true)]
        creativity: f64,

        /// Force a pattern family by key
        #[arg(short, long)]
        family: Option<String>,

        /// Number of questions to generate in one session
        #[arg(short = 'n', long, default_value = "1")]
        count: usize,

        /// Print questions as JSON instead of a summary
        #[arg(long)]
        json: bool,

        /// Write SVG artifacts and question JSON into this directory
        #[arg(short, long)]
        out_dir: Option<PathBuf>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Families => commands::families::run(),
        Commands::Generate {
            seed,
            creativity,
            family,
            count,
            json,
            out_dir,
        } => commands::generate::run(&commands::generate::GenerateArgs {
            seed: seed.as_deref(),
            creativity,
            family: family.as_deref(),
            count,
            json,
            out_dir: out_dir.as_deref(),
        }),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
