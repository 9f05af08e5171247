mod commands;
mod overlay;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cuptrack", about = "Circle detection and tracking tool")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Detect the dominant circle in one or more still images
    Detect(commands::detect::DetectArgs),
    /// Track a circle through an ordered frame sequence
    Track(commands::track::TrackArgs),
    /// Export the working-resolution luma and edge maps for an image
    Edges(commands::edges::EdgesArgs),
    /// Print or save the default detector configuration
    Config(commands::config::ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Detect(args) => commands::detect::run(args),
        Commands::Track(args) => commands::track::run(args),
        Commands::Edges(args) => commands::edges::run(args),
        Commands::Config(args) => commands::config::run(args),
    }
}
