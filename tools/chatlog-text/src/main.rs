mod commands;
mod input;
mod schema;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{media_types::MediaTypesArgs, render::RenderArgs};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "chatlog-text",
    about = "Render raw chat message rows as a plain-text transcript"
)]
struct Cli {
    /// Log at debug level when RUST_LOG is not set
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Normalize JSON-lines rows and print the transcript
    Render(RenderArgs),
    /// List message type codes with a media parser
    MediaTypes(MediaTypesArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Render(args) => args.run(),
        Commands::MediaTypes(args) => args.run(),
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
