//! Caller-owned render snapshot
//!
//! A [`GameSnapshot`] is a plain-data view of everything a frontend needs to
//! draw a frame. [`crate::Game::snapshot_into`] fills one in place so a
//! render loop can reuse a single allocation-free buffer.

use brick_game_types::{Phase, PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH};

use crate::game::Piece;

/// Position and shape of the falling piece, for overlay drawing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
}

impl From<Piece> for ActiveSnapshot {
    fn from(piece: Piece) -> Self {
        Self {
            kind: piece.kind,
            rotation: piece.rotation,
            x: piece.x,
            y: piece.y,
        }
    }
}

/// Full renderable state of a stacking game.
///
/// Grid cells hold 0 for empty or the locked kind's color index (1..=7).
/// The `next` preview is the lookahead piece's spawn mask painted with its
/// color index.
#[derive(Debug, Clone, PartialEq)]
pub struct GameSnapshot {
    pub board: [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub next: [[u8; 4]; 4],
    pub active: ActiveSnapshot,
    pub score: u32,
    pub high_score: u32,
    pub level: u32,
    pub gravity_ms: u32,
    pub phase: Phase,
}

impl GameSnapshot {
    /// Zero the grids ahead of a refill
    pub fn clear(&mut self) {
        for row in &mut self.board {
            row.fill(0);
        }
        for row in &mut self.next {
            row.fill(0);
        }
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            next: [[0; 4]; 4],
            active: ActiveSnapshot {
                kind: PieceKind::I,
                rotation: Rotation::North,
                x: 0,
                y: 0,
            },
            score: 0,
            high_score: 0,
            level: 0,
            gravity_ms: 0,
            phase: Phase::NotStarted,
        }
    }
}
