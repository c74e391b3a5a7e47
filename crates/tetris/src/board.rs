//! Board module - manages the game grid
//!
//! The board is a 10x20 grid where each cell is empty or filled with the
//! piece kind that placed it. Uses a flat array for cache locality and
//! zero allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19
//! (top to bottom). Active pieces may sit above the board at negative y;
//! those rows are outside the grid and never collision-checked.

use arrayvec::ArrayVec;

use brick_game_types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH * BOARD_HEIGHT) as usize;

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Check if any cell of the top row is occupied (the loss condition
    /// evaluated before a stack-resting lock)
    pub fn top_row_occupied(&self) -> bool {
        self.cells[..BOARD_WIDTH as usize]
            .iter()
            .any(|cell| cell.is_some())
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= BOARD_HEIGHT as usize {
            return false;
        }
        let start = y * BOARD_WIDTH as usize;
        let end = start + BOARD_WIDTH as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Clear all full rows, shifting the rows above each cleared row down by
    /// one and introducing empty rows at the top.
    /// Returns the cleared row indices sorted bottom to top.
    /// Uses a two-pointer compaction with zero allocation.
    pub fn clear_full_rows(&mut self) -> ArrayVec<usize, 4> {
        let mut cleared_rows = ArrayVec::new();
        let width = BOARD_WIDTH as usize;
        let mut write_y = BOARD_HEIGHT as usize;

        // Scan from bottom to top
        for read_y in (0..BOARD_HEIGHT as usize).rev() {
            if self.is_row_full(read_y) {
                if cleared_rows.len() < 4 {
                    cleared_rows.push(read_y);
                }
            } else {
                // Not full, move it down to the write position
                write_y -= 1;
                if write_y != read_y {
                    let src_start = read_y * width;
                    let dst_start = write_y * width;
                    self.cells
                        .copy_within(src_start..src_start + width, dst_start);
                }
            }
        }

        // Empty rows enter at the top
        for cell in &mut self.cells[..write_y * width] {
            *cell = None;
        }

        cleared_rows
    }

    /// Stamp piece cells onto the board with the kind's color.
    /// Cells above the board (negative y) are skipped and occupied cells are
    /// never overwritten.
    pub fn stamp(&mut self, cells: &[(i8, i8)], kind: PieceKind) {
        for &(x, y) in cells {
            if !self.is_occupied(x, y) {
                self.set(x, y, Some(kind));
            }
        }
    }

    /// Write the grid as color indices (0 = empty, 1..=7 = kind)
    pub fn write_u8_grid(&self, out: &mut [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize]) {
        for y in 0..BOARD_HEIGHT as usize {
            for x in 0..BOARD_WIDTH as usize {
                out[y][x] = match self.cells[y * BOARD_WIDTH as usize + x] {
                    Some(kind) => kind.color_index(),
                    None => 0,
                };
            }
        }
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
