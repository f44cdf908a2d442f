//! Game state module - the two-player session
//!
//! Owns the shared board, both players, the piece source and the gravity
//! countdown, and advances all of them once per tick.

use log::{debug, info};
use rand::rngs::StdRng;
use rand::Rng;

use crate::board::{Board, BoardError};
use crate::pieces::Tetromino;
use crate::player::{Player, PlayerState};
use crate::rng::PieceSource;
use crate::round::{self, Step};
use crate::types::{BoardSize, Seat, TickInput, BASE_GRAVITY_TICKS, LINES_PER_SPEEDUP};

/// Ticks between forced drops once `total_lines` lines have been cleared.
///
/// Can reach zero; [`Gravity`] then drops every tick.
pub fn gravity_delay(total_lines: u32) -> u32 {
    BASE_GRAVITY_TICKS.saturating_sub(total_lines / LINES_PER_SPEEDUP)
}

/// Countdown to the next forced drop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gravity {
    remaining: u32,
}

impl Gravity {
    pub fn new() -> Self {
        Self {
            remaining: gravity_delay(0).max(1),
        }
    }

    /// Count one tick. Returns true when gravity fires, and then rearms with
    /// the delay for `total_lines`.
    pub fn tick(&mut self, total_lines: u32) -> bool {
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining > 0 {
            return false;
        }
        self.remaining = gravity_delay(total_lines).max(1);
        true
    }
}

impl Default for Gravity {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of one tick for the whole session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    /// This seat's next piece could not spawn; the shared board is full.
    ToppedOut(Seat),
    /// Nobody is playing any more.
    AllQuit,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<R = StdRng> {
    board: Board,
    players: [Player; 2],
    pieces: PieceSource<R>,
    gravity: Gravity,
    /// Most players ever active at once.
    peak_players: usize,
}

impl<R: Rng> GameState<R> {
    /// Allocate the board and seat both players. Player one starts active,
    /// player two joins on their first movement key.
    pub fn new(size: BoardSize, mut pieces: PieceSource<R>) -> Result<Self, BoardError> {
        let board = Board::new(size)?;
        let spawn_x = board.spawn_x();
        let mut seat_player = |seat: Seat, state: PlayerState| {
            let piece = Tetromino::new(pieces.any(), spawn_x, -1);
            Player::new(seat, piece, pieces.any(), state)
        };
        let players = [
            seat_player(Seat::One, PlayerState::Active),
            seat_player(Seat::Two, PlayerState::Idle),
        ];

        info!("new game on a {}x{} board", board.width(), board.height());
        Ok(Self {
            board,
            players,
            pieces,
            gravity: Gravity::new(),
            peak_players: 1,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat.index()]
    }

    pub fn peak_players(&self) -> usize {
        self.peak_players
    }

    /// Lines cleared by both players together; drives the gravity delay.
    pub fn total_lines(&self) -> u32 {
        self.players.iter().map(Player::lines).sum()
    }

    fn active_players(&self) -> usize {
        self.players.iter().filter(|p| p.is_active()).count()
    }

    /// Advance both players by one tick, player one first.
    ///
    /// `hold` is called with the pre-collapse board whenever a landing fills
    /// rows; see [`round::settle`].
    pub fn step<E, F>(&mut self, input: TickInput, hold: &mut F) -> Result<Outcome, E>
    where
        F: FnMut(&Board, u32) -> Result<(), E>,
    {
        let forced = self.gravity.tick(self.total_lines());

        for seat in Seat::BOTH {
            let step = round::advance(
                &mut self.board,
                &mut self.players[seat.index()],
                input.get(seat),
                forced,
                &mut self.pieces,
                &mut *hold,
            )?;
            if step == Step::ToppedOut {
                info!("player {} topped out", seat.number());
                return Ok(Outcome::ToppedOut(seat));
            }
        }

        let active = self.active_players();
        if active > self.peak_players {
            debug!("{active} players now active");
            self.peak_players = active;
        }

        if active == 0 {
            return Ok(Outcome::AllQuit);
        }
        Ok(Outcome::Continue)
    }

    /// Redraw the overlay from the current players.
    pub fn compose_overlay(&mut self) {
        self.board.compose_overlay(&self.players);
    }
}
