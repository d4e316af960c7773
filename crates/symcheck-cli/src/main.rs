use clap::Parser;
use eyre::Result;
use tracing_subscriber::EnvFilter;

use symcheck_cli::cli::Cli;
use symcheck_cli::commands;

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    if cli.log_json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }

    let output = commands::run(&cli)?;
    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
