//! Growing-body arcade game engine.
//!
//! The snake moves on the same 10x20 grid as the stacking game. Eating food
//! grows the body by one segment and raises the score; filling the whole
//! board (score 196) wins. Time arrives as elapsed milliseconds through
//! [`Game::advance`] and converts into movement steps at the level-derived
//! speed.
//!
//! # Example
//!
//! ```
//! use brick_game_snake::Game;
//! use brick_game_types::{Phase, UserAction};
//!
//! let mut game = Game::new(12345);
//! game.apply_input(UserAction::Start, false);
//! assert_eq!(game.phase(), Phase::Running);
//!
//! game.apply_input(UserAction::Left, false);
//! game.advance(600);
//! ```

pub mod game;

pub use game::{backdrop, Game};
