//! Core types shared by both game engines
//! This module contains pure data types with no external dependencies

pub mod rng;

pub use rng::SimpleRng;

/// Board dimensions (shared by both games)
pub const BOARD_WIDTH: u8 = 10;
pub const BOARD_HEIGHT: u8 = 20;

/// Points awarded per lock, indexed by lines cleared in that lock
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 700, 1500];

/// Level cap for both games
pub const MAX_LEVEL: u32 = 10;

/// Stacking game: one level per 600 points
pub const LEVEL_SCORE_STEP: u32 = 600;

/// Stacking game gravity pacing (milliseconds): interval = base - level * step
pub const GRAVITY_BASE_MS: u32 = 1550;
pub const GRAVITY_LEVEL_STEP_MS: u32 = 125;

/// Growing-body game: one level per 5 points, speed = base - level * step
pub const SNAKE_LEVEL_SCORE_STEP: u32 = 5;
pub const SNAKE_BASE_SPEED_MS: u32 = 600;
pub const SNAKE_SPEED_LEVEL_STEP_MS: u32 = 40;

/// Growing-body game: score at which every board cell is occupied
/// (10 * 20 cells minus the 4 starting segments)
pub const SNAKE_WIN_SCORE: u32 = 196;

/// Well-known high-score filenames
pub const TETRIS_SCORE_FILE: &str = "TetrisHighScore.txt";
pub const SNAKE_SCORE_FILE: &str = "SnakeHighScore.txt";

/// Abstract input vocabulary consumed from the external input layer.
///
/// The `held` modifier that accompanies an action is only meaningful to the
/// growing-body game's `Action` button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserAction {
    Start,
    Pause,
    Terminate,
    Left,
    Right,
    Up,
    Down,
    Action,
}

/// Game lifecycle phase.
///
/// Shared by both engines; the stacking game never produces `Won`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    NotStarted,
    Running,
    Paused,
    Lost,
    Won,
    Quit,
}

impl Phase {
    /// Terminal phases accept no further play
    pub fn is_over(&self) -> bool {
        matches!(self, Phase::Lost | Phase::Won | Phase::Quit)
    }
}

/// Piece kinds of the stacking game, in catalog order.
///
/// The order is part of the data contract: a locked cell stores
/// `kind as u8 + 1` as its color index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    L,
    J,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// All kinds in catalog order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::L,
        PieceKind::J,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Kind from a catalog index in 0..7
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Catalog index in 0..7
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Cell value stamped onto the board (1..=7, renderer-only meaning)
    pub fn color_index(&self) -> u8 {
        *self as u8 + 1
    }
}

/// Rotation states (North = spawn orientation)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// The single rotation direction the stacking game supports
    pub fn next(&self) -> Self {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }

    /// Rotation-step index in 0..4
    pub fn index(&self) -> usize {
        *self as usize
    }
}

/// Movement direction of the growing body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// The direction a body cannot reverse into
    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Unit step in board coordinates (x grows right, y grows down)
    pub fn delta(&self) -> (i8, i8) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// A board coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i8,
    pub y: i8,
}

impl Point {
    pub fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    /// The neighboring cell one step in `direction`
    pub fn step(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Cell on the stacking-game board (None = empty, Some = filled with piece kind)
pub type Cell = Option<PieceKind>;
