// server/src/cli/mod.rs

pub mod cli;
pub mod commands;
pub mod handlers;

pub use cli::start_cli;
pub use commands::{CliArgs, MedGraphCommands};
pub use handlers::{build_service, handle_command, validate_seed_file};
