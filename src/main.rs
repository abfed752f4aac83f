use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use phonelist::cli;
use phonelist::config::Config;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = Config::parse();

    let directory = match cli::load(&config.file, io::stdout().lock()) {
        Ok(directory) => directory,
        Err(e) => {
            eprintln!("{}", cli::load_failure(&config.file, &e));
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = cli::run(&directory, io::stdin().lock(), io::stdout().lock()) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
