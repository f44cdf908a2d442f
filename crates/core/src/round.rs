//! Round module - one player's step through one tick
//!
//! [`advance`] resolves a tick's buttons in a fixed order: join, quit,
//! ghost toggle, sideways move and rotation, gravity, hard drop. Landing runs
//! [`settle`], which stamps the piece, clears lines and spawns the next one.
//!
//! Line clears pause the game so the full rows stay visible. That pause is a
//! caller concern, so both functions take a `hold` callback that receives the
//! board before collapse and the number of full rows.

use log::debug;
use rand::Rng;

use crate::board::{Board, Cell, Layer};
use crate::player::{Player, PlayerState};
use crate::rng::PieceSource;
use crate::types::{Buttons, LINE_SCORE_UNIT};

/// Whether a player can keep playing after this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Continue,
    /// The next piece collided on spawn.
    ToppedOut,
}

/// Points for one settlement: quadratic in cleared lines plus one per row
/// between the spawn row and the landing row.
///
/// On the shared board the other seat can settle terrain over a falling
/// piece, which then lands above where it spawned. That distance counts as 0.
pub fn settlement_score(lines: u32, landing_y: i32, spawn_y: i32) -> u32 {
    let drop = landing_y.saturating_sub(spawn_y).max(0) as u32;
    lines * lines * LINE_SCORE_UNIT + drop
}

/// Advance `player` by one tick.
pub fn advance<R, E, F>(
    board: &mut Board,
    player: &mut Player,
    buttons: Buttons,
    forced_gravity: bool,
    pieces: &mut PieceSource<R>,
    hold: &mut F,
) -> Result<Step, E>
where
    R: Rng,
    F: FnMut(&Board, u32) -> Result<(), E>,
{
    if buttons.intersects(Buttons::MOVEMENT) && player.state() == PlayerState::Idle {
        debug!("player {} joined", player.seat().number());
        player.set_state(PlayerState::Active);
    }

    if buttons.contains(Buttons::QUIT) && player.is_active() {
        debug!("player {} quit", player.seat().number());
        player.set_state(PlayerState::GameOver);
    }

    if !player.is_active() {
        return Ok(Step::Continue);
    }

    if buttons.contains(Buttons::GHOST) {
        player.toggle_ghost();
    }

    let mut candidate = *player.piece();
    if buttons.contains(Buttons::LEFT) {
        candidate.x -= 1;
    }
    if buttons.contains(Buttons::RIGHT) {
        candidate.x += 1;
    }
    if buttons.contains(Buttons::ROTATE_LEFT) {
        candidate.rotation = candidate.rotation.rotate_ccw();
    }
    if buttons.contains(Buttons::ROTATE_RIGHT) {
        candidate.rotation = candidate.rotation.rotate_cw();
    }
    if board.test_placement(&candidate) {
        *player.piece_mut() = candidate;
    }

    if forced_gravity || buttons.contains(Buttons::SOFT_DROP) {
        let lowered = player.piece().at_y(player.piece().y + 1);
        if !board.test_placement(&lowered) {
            return settle(board, player, pieces, hold);
        }
        *player.piece_mut() = lowered;
    }

    if buttons.contains(Buttons::HARD_DROP) {
        return settle(board, player, pieces, hold);
    }

    Ok(Step::Continue)
}

/// Land the player's piece and spawn the next one.
pub fn settle<R, E, F>(
    board: &mut Board,
    player: &mut Player,
    pieces: &mut PieceSource<R>,
    hold: &mut F,
) -> Result<Step, E>
where
    R: Rng,
    F: FnMut(&Board, u32) -> Result<(), E>,
{
    let piece = *player.piece();
    let landing_y = board.landing_y(&piece);
    board.stamp(
        Layer::Settled,
        &piece.at_y(landing_y),
        Cell::Settled(player.seat()),
    );

    let lines = board.count_full_rows();
    player.add_score(settlement_score(lines, landing_y, player.spawn_y()), lines);

    if lines > 0 {
        debug!("player {} cleared {lines} line(s)", player.seat().number());
        hold(board, lines)?;
        board.collapse_full_rows();
    }

    let next = pieces.after(player.next());
    player.advance_piece(next, board.spawn_x(), 0);

    if board.test_placement(player.piece()) {
        Ok(Step::Continue)
    } else {
        debug!("player {} topped out", player.seat().number());
        player.set_state(PlayerState::GameOver);
        Ok(Step::ToppedOut)
    }
}
