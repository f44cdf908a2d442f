//! Player module - per-participant state
//!
//! One `Player` per seat. The round state machine in [`crate::round`] is the
//! only code that mutates it during play.

use crate::pieces::Tetromino;
use crate::types::{PieceKind, Seat};

/// Where a player is in its lifecycle.
///
/// Landing and settlement happen inside a single tick and are not a state a
/// player can be observed in between ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerState {
    /// Waiting for a movement key to join.
    Idle,
    /// A piece is falling.
    Active,
    /// Quit, or the next piece could not spawn.
    GameOver,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    seat: Seat,
    piece: Tetromino,
    /// Row the current piece entered play on; drop distance is scored from here.
    spawn_y: i32,
    next: PieceKind,
    score: u32,
    lines: u32,
    state: PlayerState,
    ghost: bool,
}

impl Player {
    pub fn new(seat: Seat, piece: Tetromino, next: PieceKind, state: PlayerState) -> Self {
        Self {
            seat,
            piece,
            spawn_y: piece.y,
            next,
            score: 0,
            lines: 0,
            state,
            ghost: false,
        }
    }

    pub fn seat(&self) -> Seat {
        self.seat
    }

    pub fn piece(&self) -> &Tetromino {
        &self.piece
    }

    pub fn spawn_y(&self) -> i32 {
        self.spawn_y
    }

    pub fn next(&self) -> PieceKind {
        self.next
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn state(&self) -> PlayerState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state == PlayerState::Active
    }

    /// Whether the landing preview is shown
    pub fn ghost(&self) -> bool {
        self.ghost
    }

    pub(crate) fn piece_mut(&mut self) -> &mut Tetromino {
        &mut self.piece
    }

    pub(crate) fn set_state(&mut self, state: PlayerState) {
        self.state = state;
    }

    pub(crate) fn toggle_ghost(&mut self) {
        self.ghost = !self.ghost;
    }

    pub(crate) fn add_score(&mut self, points: u32, lines: u32) {
        self.score += points;
        self.lines += lines;
    }

    /// Promote the next piece to the falling piece at `(x, y)` and queue `next`.
    pub(crate) fn advance_piece(&mut self, next: PieceKind, x: i32, y: i32) {
        self.piece = Tetromino::new(self.next, x, y);
        self.spawn_y = y;
        self.next = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_piece_promotes_next() {
        let mut player = Player::new(
            Seat::One,
            Tetromino::new(PieceKind::O, 4, -1),
            PieceKind::T,
            PlayerState::Active,
        );
        player.advance_piece(PieceKind::S, 5, 0);
        assert_eq!(player.piece().kind, PieceKind::T);
        assert_eq!((player.piece().x, player.piece().y), (5, 0));
        assert_eq!(player.spawn_y(), 0);
        assert_eq!(player.next(), PieceKind::S);
    }

    #[test]
    fn ghost_toggles() {
        let mut player = Player::new(
            Seat::Two,
            Tetromino::new(PieceKind::I, 0, 0),
            PieceKind::J,
            PlayerState::Idle,
        );
        assert!(!player.ghost());
        player.toggle_ghost();
        assert!(player.ghost());
        player.toggle_ghost();
        assert!(!player.ghost());
    }
}
