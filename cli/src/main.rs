mod cli;
mod commands;

use cli::{Cli, Commands};
use commands::{inspect, render};

/// Initialize stderr logging; `RUST_LOG` overrides the -v level.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose >= 2)
        .with_line_number(verbose >= 3)
        .init();
}

pub fn run() -> anyhow::Result<()> {
    use clap::Parser;

    let cli = Cli::parse();
    init_tracing(cli.verbose);
    tracing::debug!(verbose = cli.verbose, "edumap started");

    match &cli.command {
        Commands::Render(args) => render::run(args),
        Commands::Inspect(args) => inspect::run(args),
    }
}

fn main() -> anyhow::Result<()> { run() }
