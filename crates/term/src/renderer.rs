//! Renderer: paints the board into an output sink.
//!
//! Frames are drawn relative to the cursor. Each layer is printed top to
//! bottom and the cursor is moved back up afterwards, so the next frame lands
//! on the same rows. Nothing ever clears the screen.
//!
//! All output is queued into an owned buffer and handed to the sink in one
//! `write_all` per frame.

use std::io::Write;
use std::thread;
use std::time::Duration;

use anyhow::Result;
use crossterm::{cursor, style::Print, QueueableCommand};

use crate::core::{Board, Cell, Player};
use crate::types::Seat;

/// Two terminal columns per cell to keep cells roughly square.
pub fn glyph(cell: Cell) -> Option<&'static str> {
    match cell {
        Cell::Empty => None,
        Cell::Wall => Some("XX"),
        Cell::Settled(Seat::One) => Some("[]"),
        Cell::Settled(Seat::Two) => Some("{}"),
        Cell::Ghost => Some(".."),
        Cell::Falling(Seat::One) => Some("##"),
        Cell::Falling(Seat::Two) => Some("@@"),
    }
}

/// Text of a player's stat line.
pub fn stat_line(player: &Player, shown: bool) -> String {
    let n = player.seat().number();
    if shown {
        format!(
            "P{n} SCORE={}, LINES={}, NEXT={}",
            player.score(),
            player.lines(),
            player.next()
        )
    } else {
        format!("PLAYER {n}?")
    }
}

pub struct Renderer<W: Write> {
    sink: W,
    buf: Vec<u8>,
}

impl<W: Write> Renderer<W> {
    pub fn new(sink: W) -> Self {
        Self {
            sink,
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    pub fn sink(&self) -> &W {
        &self.sink
    }

    pub fn into_sink(self) -> W {
        self.sink
    }

    /// Hide the cursor for the session.
    pub fn enter(&mut self) -> Result<()> {
        self.buf.queue(cursor::Hide)?;
        self.flush()
    }

    /// Drop anything unflushed and show the cursor again. For error paths;
    /// a finished game already does this in [`Renderer::score_card`].
    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(cursor::Show)?;
        self.flush()
    }

    /// Print one layer and return the cursor to its first row.
    ///
    /// Empty cells are blanked when `opaque`, skipped over otherwise so the
    /// previously painted layer shows through.
    pub fn paint_layer(
        &mut self,
        cells: &[Cell],
        width: usize,
        height: usize,
        opaque: bool,
    ) -> Result<()> {
        assert_eq!(cells.len(), width * height, "layer is not {width}x{height}");
        for row in cells.chunks(width) {
            for &cell in row {
                match glyph(cell) {
                    Some(g) => {
                        self.buf.queue(Print(g))?;
                    }
                    None if opaque => {
                        self.buf.queue(Print("  "))?;
                    }
                    None => {
                        self.buf.queue(cursor::MoveRight(2))?;
                    }
                }
            }
            self.buf.queue(Print("\n"))?;
        }
        self.buf.queue(cursor::MoveUp(height as u16))?;
        Ok(())
    }

    pub fn paint_settled(&mut self, board: &Board) -> Result<()> {
        self.paint_layer(board.settled(), board.width(), board.height(), true)
    }

    pub fn paint_overlay(&mut self, board: &Board) -> Result<()> {
        self.paint_layer(board.overlay(), board.width(), board.height(), false)
    }

    /// Print a player's stat line below the board, then return to the top.
    pub fn paint_stats(&mut self, board: &Board, player: &Player, shown: bool) -> Result<()> {
        let below = (board.height() + player.seat().index()) as u16;
        self.buf.queue(cursor::MoveDown(below))?;
        self.buf.queue(Print(stat_line(player, shown)))?;
        self.buf.queue(Print("\n"))?;
        self.buf.queue(cursor::MoveUp(below + 1))?;
        Ok(())
    }

    /// Full repaint: settled layer, overlay, both stat lines.
    ///
    /// The overlay must already be composed for this tick.
    pub fn draw_frame(&mut self, board: &Board, players: &[Player]) -> Result<()> {
        self.paint_settled(board)?;
        self.paint_overlay(board)?;
        for player in players {
            self.paint_stats(board, player, player.is_active())?;
        }
        self.flush()
    }

    /// Show the full rows of a landing, then pause one tick per row.
    pub fn hold_line_clear(&mut self, board: &Board, lines: u32, tick: Duration) -> Result<()> {
        self.paint_settled(board)?;
        self.flush()?;
        thread::sleep(tick * lines);
        Ok(())
    }

    /// End-of-game curtain: one more row covered per tick, bottom up.
    pub fn play_curtain(&mut self, board: &mut Board, tick: Duration) -> Result<()> {
        for top in (0..board.height() - 1).rev() {
            board.curtain(top);
            self.paint_settled(board)?;
            self.paint_overlay(board)?;
            self.flush()?;
            thread::sleep(tick);
        }
        self.paint_settled(board)?;
        Ok(())
    }

    /// Final scores, then park the cursor below them and show it again.
    ///
    /// Player two's line is only printed if both ever played at once.
    pub fn score_card(&mut self, board: &Board, players: &[Player], peak_players: usize) -> Result<()> {
        for player in players.iter().take(peak_players.max(1)) {
            self.paint_stats(board, player, true)?;
        }
        let below = (board.height() + peak_players.max(1)) as u16;
        self.buf.queue(cursor::MoveDown(below))?;
        self.buf.queue(cursor::Show)?;
        self.flush()
    }

    /// Write the queued bytes to the sink.
    pub fn flush(&mut self) -> Result<()> {
        self.sink.write_all(&self.buf)?;
        self.sink.flush()?;
        self.buf.clear();
        Ok(())
    }
}
