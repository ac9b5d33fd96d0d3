mod commands;
mod config;
mod context;
mod error;
mod output;
mod prompt;
mod template;
mod traits;

use anyhow::Result;
use clap::Parser;
use commands::GenerateCommand;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gogrant")]
#[command(about = "Interactively generate a Vagrantfile for a single VirtualBox machine", long_about = None)]
#[command(version)]
struct Cli {
    /// Path of the Vagrantfile to write (overwritten if it exists)
    #[arg(short, long, env = "GOGRANT_OUTPUT", default_value = commands::generate::DEFAULT_OUTPUT)]
    output: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let ctx = context::Context::new();
    GenerateCommand::execute(&ctx, &config::STANDARD_DEFAULTS, &cli.output)?;

    Ok(())
}
