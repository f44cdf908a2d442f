//! Terminal two-player falling-block game (default binary).
//!
//! Player one starts immediately; player two joins by pressing a movement
//! key. Frames are painted in place below the prompt, without the alternate
//! screen.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use log::error;

use twotris::app;
use twotris::core::{checked_size, GameState, PieceSource};
use twotris::input::{KeyMap, TerminalInput};
use twotris::term::Renderer;
use twotris::types::{DEFAULT_HEIGHT, DEFAULT_WIDTH, TICK};

/// Exit code when the requested board cannot be built.
const EXIT_BAD_BOARD: u8 = 1;

/// Exit code when the terminal fails mid-game. Clap already uses 2 for bad
/// arguments.
const EXIT_IO: u8 = 3;

/// Falling-block puzzle for one or two players on a shared board.
///
/// Player 1: j/k move, u/i rotate, h soft drop, n hard drop.
/// Player 2: d/f move, e/r rotate, g soft drop, v hard drop.
/// Both: ` toggles the ghost piece, q quits.
#[derive(Debug, Parser)]
#[command(name = "twotris", version)]
struct Args {
    /// Playable columns (walls are added on both sides)
    #[arg(default_value_t = u32::from(DEFAULT_WIDTH), value_name = "WIDTH")]
    width: u32,

    /// Playable rows (a floor is added below)
    #[arg(default_value_t = u32::from(DEFAULT_HEIGHT), value_name = "HEIGHT")]
    height: u32,

    /// Seed the piece sequence for a reproducible game
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off")).init();
    let args = Args::parse();

    let pieces = match args.seed {
        Some(seed) => PieceSource::seeded(seed),
        None => PieceSource::from_entropy(),
    };
    let size = checked_size(args.width, args.height);
    let mut game = match size.and_then(|size| GameState::new(size, pieces)) {
        Ok(game) => game,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::from(EXIT_BAD_BOARD);
        }
    };

    let mut source = TerminalInput::new(KeyMap::default());
    let mut renderer = Renderer::new(io::stdout());

    match app::run(&mut game, &mut source, &mut renderer, TICK) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            // Always try to restore the cursor.
            let _ = renderer.exit();
            error!("terminal failure: {e:#}");
            eprintln!("\nerror: {e:#}");
            ExitCode::from(EXIT_IO)
        }
    }
}
