//! Terminal front end for the Goban rules engine.
//!
//! Reads one command per line from stdin and prints the board after each
//! change. Logs go to stderr; set `RUST_LOG` to adjust verbosity.

mod command;
mod session;

use clap::Parser;
use goban_engine::DEFAULT_SIZE;

use crate::session::Session;

/// Play Go on a text board: `play <row> <col>`, `undo`, `redo`, `new`, `show`, `state`, `quit`.
#[derive(Parser)]
#[command(name = "goban")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Number of lines on each side of the board
    #[arg(
        long,
        env = "GOBAN_SIZE",
        default_value_t = DEFAULT_SIZE,
        value_parser = clap::value_parser!(u8).range(1..=25)
    )]
    size: u8,

    /// Print the game state as JSON instead of an ASCII board
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "goban=info,goban_engine=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    tracing::info!("Starting goban on a {0}x{0} board", cli.size);

    let mut session = Session::new(cli.size, cli.json);
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout().lock();
    session.run(stdin.lock(), &mut stdout)
}
