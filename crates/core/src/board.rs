//! Board module - manages the game grid
//!
//! The board is two same-sized layers in flat row-major storage:
//! `settled` holds the walls, the floor and every landed piece; `overlay`
//! holds what is redrawn every tick (ghosts and falling pieces).
//!
//! Coordinates: (x, y) where x grows to the right and y grows downward.
//! Column 0, column `width - 1` and row `height - 1` are permanent walls.
//!
//! Pieces are addressed by flat index (`y * width + x + offset`), so a mino
//! left of column 0 lands in the previous row's right wall. Indices outside
//! the array are dropped: they neither collide nor get written.

use arrayvec::ArrayVec;
use log::debug;
use thiserror::Error;

use crate::pieces::Tetromino;
use crate::player::Player;
use crate::types::{BoardSize, Seat, MAX_BOARD_CELLS};

/// Contents of one cell, in either layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Cell {
    #[default]
    Empty,
    /// Border column, floor, or the end-of-game curtain.
    Wall,
    /// Terrain left by a landed piece of this seat.
    Settled(Seat),
    /// Landing preview.
    Ghost,
    /// The seat's falling piece.
    Falling(Seat),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// Which of the two layers a write goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    Settled,
    Overlay,
}

/// Requested dimensions that cannot be turned into a board.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("board {width}x{height} is too small: need at least one column and one row")]
    TooSmall { width: u32, height: u32 },

    #[error("board {width}x{height} is too large: {cells} cells exceeds the limit of {limit}")]
    TooLarge {
        width: u32,
        height: u32,
        cells: u64,
        limit: usize,
    },

    #[error("could not allocate a {width}x{height} board")]
    Allocation { width: u32, height: u32 },
}

/// Validate a requested playable area.
///
/// Accepts anything a user can type, so sizes past `u16` are reported as
/// [`BoardError::TooLarge`] like any other oversized board.
pub fn checked_size(width: u32, height: u32) -> Result<BoardSize, BoardError> {
    if width == 0 || height == 0 {
        return Err(BoardError::TooSmall { width, height });
    }
    let cells = (u64::from(width) + 2) * (u64::from(height) + 1);
    if cells > MAX_BOARD_CELLS as u64 {
        return Err(BoardError::TooLarge {
            width,
            height,
            cells,
            limit: MAX_BOARD_CELLS,
        });
    }
    // Under the cell limit both sides already fit in a u16.
    match (u16::try_from(width), u16::try_from(height)) {
        (Ok(w), Ok(h)) => Ok(BoardSize::new(w, h)),
        _ => Err(BoardError::TooLarge {
            width,
            height,
            cells,
            limit: MAX_BOARD_CELLS,
        }),
    }
}

/// The shared game board
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    width: usize,
    height: usize,
    settled: Vec<Cell>,
    overlay: Vec<Cell>,
}

impl Board {
    /// Validate `size`, allocate both layers once and initialize the walls.
    pub fn new(size: BoardSize) -> Result<Self, BoardError> {
        let size = checked_size(size.width.into(), size.height.into())?;
        let (width, height) = (u32::from(size.width), u32::from(size.height));
        let w = size.logical_width();
        let h = size.logical_height();
        let cells = w * h;

        let mut settled = Vec::new();
        let mut overlay = Vec::new();
        settled
            .try_reserve_exact(cells)
            .and_then(|_| overlay.try_reserve_exact(cells))
            .map_err(|_| BoardError::Allocation { width, height })?;
        settled.resize(cells, Cell::Empty);
        overlay.resize(cells, Cell::Empty);

        let mut board = Self {
            width: w,
            height: h,
            settled,
            overlay,
        };
        board.initialize();
        debug!("allocated {w}x{h} board ({cells} cells per layer)");
        Ok(board)
    }

    /// Clear both layers and rebuild the walls and floor.
    pub fn initialize(&mut self) {
        self.settled.fill(Cell::Empty);
        self.overlay.fill(Cell::Empty);

        let w = self.width;
        for y in 0..self.height - 1 {
            self.settled[y * w] = Cell::Wall;
            self.settled[y * w + w - 1] = Cell::Wall;
        }
        let floor = (self.height - 1) * w;
        self.settled[floor..floor + w].fill(Cell::Wall);
    }

    /// Logical width, walls included
    pub fn width(&self) -> usize {
        self.width
    }

    /// Logical height, floor included
    pub fn height(&self) -> usize {
        self.height
    }

    /// Column where new pieces spawn.
    pub fn spawn_x(&self) -> i32 {
        (self.width / 2) as i32 - 1
    }

    pub fn settled(&self) -> &[Cell] {
        &self.settled
    }

    pub fn overlay(&self) -> &[Cell] {
        &self.overlay
    }

    /// Settled cell at (x, y), or `None` off the grid.
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.settled[y * self.width + x])
    }

    /// Overwrite a settled cell. Returns false off the grid.
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        self.settled[y * self.width + x] = cell;
        true
    }

    /// Flat indices of the piece's minos that fall inside the grid.
    pub fn cells_of(&self, piece: &Tetromino) -> ArrayVec<usize, 4> {
        let start = piece.anchor_index(self.width);
        let len = self.settled.len() as isize;
        piece
            .offsets(self.width)
            .iter()
            .map(|off| start + off)
            .filter(|idx| (0..len).contains(idx))
            .map(|idx| idx as usize)
            .collect()
    }

    /// True if no in-grid mino of `piece` overlaps settled terrain.
    pub fn test_placement(&self, piece: &Tetromino) -> bool {
        self.cells_of(piece)
            .iter()
            .all(|&idx| self.settled[idx].is_empty())
    }

    /// Write `cell` at every in-grid mino of `piece`.
    pub fn stamp(&mut self, layer: Layer, piece: &Tetromino, cell: Cell) {
        let cells = self.cells_of(piece);
        let target = match layer {
            Layer::Settled => &mut self.settled,
            Layer::Overlay => &mut self.overlay,
        };
        for idx in cells {
            target[idx] = cell;
        }
    }

    /// Lowest row the piece can occupy, dropping straight down from `piece.y`.
    ///
    /// The caller must pass a piece that fits where it is; the floor row always
    /// collides, so the probe terminates.
    pub fn landing_y(&self, piece: &Tetromino) -> i32 {
        let mut y = piece.y;
        while self.test_placement(&piece.at_y(y)) {
            y += 1;
        }
        y -= 1;
        assert!(
            y < self.height as i32,
            "landing row {y} is past the floor (height {})",
            self.height
        );
        y
    }

    /// Check if a row is completely filled
    pub fn row_is_full(&self, y: usize) -> bool {
        assert!(y < self.height, "row {y} outside board of height {}", self.height);
        let start = y * self.width;
        self.settled[start..start + self.width]
            .iter()
            .all(|cell| !cell.is_empty())
    }

    /// Drop every row above `y` by one and empty the interior of row 0.
    ///
    /// Only interior columns move; the wall columns stay as initialized.
    pub fn collapse_row(&mut self, y: usize) {
        assert!(y < self.height, "row {y} outside board of height {}", self.height);
        let w = self.width;
        for row in (1..=y).rev() {
            let dst = row * w + 1;
            let src = dst - w;
            self.settled.copy_within(src..src + w - 2, dst);
        }
        self.settled[1..w - 1].fill(Cell::Empty);
    }

    /// Number of full rows above the floor
    pub fn count_full_rows(&self) -> u32 {
        (0..self.height - 1).filter(|&y| self.row_is_full(y)).count() as u32
    }

    /// Collapse every full row above the floor, scanning top to bottom.
    ///
    /// Returns how many rows were collapsed.
    pub fn collapse_full_rows(&mut self) -> u32 {
        let mut collapsed = 0;
        for y in 0..self.height - 1 {
            if self.row_is_full(y) {
                self.collapse_row(y);
                collapsed += 1;
            }
        }
        collapsed
    }

    /// Clear the overlay
    pub fn clear_overlay(&mut self) {
        self.overlay.fill(Cell::Empty);
    }

    /// Rebuild the overlay for this tick: every active player's ghost (when
    /// enabled) first, then every active player's falling piece on top.
    pub fn compose_overlay(&mut self, players: &[Player]) {
        self.clear_overlay();

        for player in players.iter().filter(|p| p.is_active() && p.ghost()) {
            let piece = *player.piece();
            let ghost = piece.at_y(self.landing_y(&piece));
            self.stamp(Layer::Overlay, &ghost, Cell::Ghost);
        }

        for player in players.iter().filter(|p| p.is_active()) {
            self.stamp(Layer::Overlay, player.piece(), Cell::Falling(player.seat()));
        }
    }

    /// Overlay the settled layer with a curtain covering the interior of
    /// every row from `top` down to the floor.
    pub fn curtain(&mut self, top: usize) {
        self.overlay.copy_from_slice(&self.settled);
        let w = self.width;
        for y in top..self.height - 1 {
            self.overlay[y * w + 1..y * w + w - 1].fill(Cell::Wall);
        }
    }

    /// Build a board from row strings for tests: `#` wall, `1`/`2` settled by
    /// that seat, anything else empty.
    #[cfg(test)]
    pub fn from_rows(rows: &[&str]) -> Self {
        let height = rows.len();
        let width = rows[0].len();
        let mut settled = Vec::with_capacity(width * height);
        for row in rows {
            assert_eq!(row.len(), width);
            settled.extend(row.chars().map(|c| match c {
                '#' => Cell::Wall,
                '1' => Cell::Settled(Seat::One),
                '2' => Cell::Settled(Seat::Two),
                _ => Cell::Empty,
            }));
        }
        Self {
            width,
            height,
            overlay: vec![Cell::Empty; settled.len()],
            settled,
        }
    }

    /// Row strings in the `from_rows` alphabet.
    #[cfg(test)]
    pub fn to_rows(&self) -> Vec<String> {
        self.settled
            .chunks(self.width)
            .map(|row| {
                row.iter()
                    .map(|cell| match cell {
                        Cell::Wall => '#',
                        Cell::Settled(Seat::One) => '1',
                        Cell::Settled(Seat::Two) => '2',
                        _ => '.',
                    })
                    .collect()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PieceKind, Rotation};

    fn small() -> Board {
        Board::new(BoardSize::new(4, 4)).unwrap()
    }

    #[test]
    fn initialize_builds_walls_and_floor() {
        let board = small();
        assert_eq!(
            board.to_rows(),
            vec!["#....#", "#....#", "#....#", "#....#", "######"]
        );
        assert!(board.overlay().iter().all(|c| c.is_empty()));
    }

    #[test]
    fn rejects_degenerate_and_oversized_boards() {
        assert_eq!(
            Board::new(BoardSize::new(0, 5)),
            Err(BoardError::TooSmall { width: 0, height: 5 })
        );
        assert!(matches!(
            Board::new(BoardSize::new(u16::MAX, u16::MAX)),
            Err(BoardError::TooLarge { .. })
        ));
    }

    #[test]
    fn checked_size_reports_sizes_past_u16_as_too_large() {
        assert_eq!(checked_size(10, 20), Ok(BoardSize::new(10, 20)));
        assert!(matches!(
            checked_size(70_000, 20),
            Err(BoardError::TooLarge { width: 70_000, .. })
        ));
        assert!(matches!(
            checked_size(1, u32::MAX),
            Err(BoardError::TooLarge { .. })
        ));
        assert_eq!(
            checked_size(0, 0),
            Err(BoardError::TooSmall { width: 0, height: 0 })
        );
    }

    #[test]
    fn off_grid_minos_never_collide() {
        let board = small();
        // Anchor far above the grid: every mino is out of range.
        let piece = Tetromino::new(PieceKind::I, 2, -40);
        assert!(board.cells_of(&piece).is_empty());
        assert!(board.test_placement(&piece));

        // Far below the grid as well.
        let piece = Tetromino::new(PieceKind::T, 2, 400);
        assert!(board.test_placement(&piece));
    }

    #[test]
    fn negative_column_wraps_into_previous_row_wall() {
        let board = small();
        // T north at x=1: the (-1, 0) mino lands on column 0, the wall.
        let piece = Tetromino::new(PieceKind::T, 1, 2);
        assert!(!board.test_placement(&piece));
        let piece = Tetromino::new(PieceKind::T, 2, 2);
        assert!(board.test_placement(&piece));
    }

    #[test]
    fn stamp_drops_out_of_range_minos() {
        let mut board = small();
        let mut piece = Tetromino::new(PieceKind::I, 1, 0);
        piece.rotation = Rotation::East;
        // Vertical I anchored on row 0: two minos above the grid.
        board.stamp(Layer::Settled, &piece, Cell::Settled(Seat::One));
        assert_eq!(board.to_rows()[0], "#.1..#");
        assert_eq!(board.to_rows()[1], "#.1..#");
    }

    #[test]
    fn collapse_row_keeps_wall_columns() {
        let mut board = Board::from_rows(&["#1..#", "#.2.#", "#111#", "#####"]);
        board.collapse_row(2);
        assert_eq!(board.to_rows(), vec!["#...#", "#1..#", "#.2.#", "#####"]);
    }

    #[test]
    fn landing_y_on_empty_board() {
        let board = small();
        let piece = Tetromino::new(PieceKind::O, 2, 0);
        // O occupies rows y and y+1; the floor is row 4.
        assert_eq!(board.landing_y(&piece), 2);
    }
}
