//! honeycomb binary
//!
//! Usage:
//!   honeycomb <GRID> <DICTIONARY> [--strategy recursive|stack|parallel] [--paths] [--verbose]

use std::io;
use std::process::ExitCode;

use clap::Parser;
use honeycomb_cli::{run, Cli, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "honeycomb=debug"
    } else {
        "honeycomb=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = Config::from(cli);
    match run(&config, &mut io::stdout().lock()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("honeycomb: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
