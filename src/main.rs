mod cli;

use std::io;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use tictactoe::console::Console;
use tictactoe::Match;

fn main() -> Result<()> {
    // logs go to stderr so they never land in the middle of the board
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.config();
    info!(?config, "starting match");

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout(), config.clear_screen);
    Match::new(&config).run(&mut console)?;
    Ok(())
}
