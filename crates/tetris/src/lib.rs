//! Stacking-game engine - pure, deterministic, and testable
//!
//! All game rules live here: the closed rotation catalog, the 10x20 board
//! with line clearing, gravity/lock evaluation, scoring, and the lifecycle
//! phase machine. The crate performs no rendering and reads no clocks; a
//! front-end feeds it [`UserAction`](brick_game_types::UserAction) values and
//! elapsed milliseconds and reads the state back between calls.
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 grid with occupancy tests and row compaction
//! - [`pieces`]: the pre-enumerated 7-kind x 4-rotation mask catalog
//! - [`scoring`]: line scores, level progression, gravity pacing
//! - [`game`]: the engine - input handling, gravity, locking, spawning
//! - [`snapshot`]: plain-data view of the full state for renderers
//!
//! # Example
//!
//! ```
//! use brick_game_tetris::Game;
//! use brick_game_types::{Phase, UserAction};
//!
//! let mut game = Game::new(12345);
//! game.apply_input(UserAction::Start, false);
//! assert_eq!(game.phase(), Phase::Running);
//!
//! game.apply_input(UserAction::Left, false);
//! game.advance(1425); // one gravity step at level 1
//! ```

pub mod board;
pub mod game;
pub mod pieces;
pub mod scoring;
pub mod snapshot;

pub use board::Board;
pub use game::{Game, Piece};
pub use pieces::{mask, offsets, Mask};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
