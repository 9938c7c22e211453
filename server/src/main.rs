// server/src/main.rs

use anyhow::Result;
use medgraph_server::cli::start_cli;

fn main() -> Result<()> {
    env_logger::init();
    start_cli()
}
