//! Objlex CLI
//!
//! Lex text with token rules from a TOML file.

use clap::Parser;
use objlex_tools::cli::Cli;
use std::error::Error as _;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_tracing(cli.verbose);

    match objlex_tools::execute(&cli.command) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            let mut source = err.source();
            while let Some(cause) = source {
                eprintln!("  caused by: {cause}");
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}

fn setup_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_env("OBJLEX_LOG")
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
