// server/src/cli/cli.rs

// Entry point: parse arguments, build the service, run one command and print
// its JSON result on stdout.
use anyhow::Result;
use clap::Parser;
use log::debug;

use crate::cli::commands::{CliArgs, MedGraphCommands};
use crate::cli::handlers::{build_service, handle_command, validate_seed_file};

pub fn start_cli() -> Result<()> {
    let args = CliArgs::parse();
    debug!("Parsed arguments: {:?}", args);

    let output = match &args.command {
        // validation must not depend on the file loading cleanly into a service
        MedGraphCommands::Validate { file } => serde_json::to_value(validate_seed_file(file)?)?,
        command => {
            let service = build_service(&args)?;
            handle_command(&service, command)?
        }
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
