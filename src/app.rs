//! The tick loop.
//!
//! One iteration per input window: read the buttons, advance the game, draw
//! the frame. Line clears pause inside the step; the end of the session plays
//! the curtain and prints the score card.

use std::io::Write;
use std::time::Duration;

use anyhow::Result;
use log::info;
use rand::Rng;

use crate::core::{Board, GameState, Outcome};
use crate::input::InputSource;
use crate::term::Renderer;

/// Play until someone tops out or everyone quits.
///
/// `tick` is both the input window and the unit of every pause.
pub fn run<R, S, W>(
    game: &mut GameState<R>,
    source: &mut S,
    renderer: &mut Renderer<W>,
    tick: Duration,
) -> Result<Outcome>
where
    R: Rng,
    S: InputSource,
    W: Write,
{
    renderer.enter()?;
    game.compose_overlay();
    renderer.draw_frame(game.board(), game.players())?;

    let outcome = loop {
        let input = source.poll(tick)?.into_input();
        let mut hold = |board: &Board, lines: u32| renderer.hold_line_clear(board, lines, tick);
        match game.step(input, &mut hold)? {
            Outcome::Continue => {}
            ended => break ended,
        }
        game.compose_overlay();
        renderer.draw_frame(game.board(), game.players())?;
    };
    info!("session over: {outcome:?}");

    renderer.play_curtain(game.board_mut(), tick)?;
    renderer.score_card(game.board(), game.players(), game.peak_players())?;
    Ok(outcome)
}
