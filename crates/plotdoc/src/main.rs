//! plotdoc CLI - documentation generator.
//!
//! Provides commands for:
//! - `markdown`: execute the example catalog for one backend and render it
//!   to Markdown with captured images
//! - `tables`: render attribute and capability tables to HTML

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{MarkdownArgs, TablesArgs};
use output::Output;

/// plotdoc - documentation generator.
#[derive(Parser)]
#[command(name = "plotdoc", version, about)]
struct Cli {
    /// Enable info-level logging.
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the example catalog for one backend to Markdown.
    Markdown(MarkdownArgs),
    /// Render attribute and support tables to HTML.
    Tables(TablesArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let result = match cli.command {
        Commands::Markdown(args) => args.execute(&output),
        Commands::Tables(args) => args.execute(&output),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
