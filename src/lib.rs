//! BrickGame (workspace facade crate).
//!
//! This package keeps a single `brick_game::{tetris,snake,score,types}` public
//! API while the implementation lives in dedicated crates under `crates/`.

pub use brick_game_score as score;
pub use brick_game_snake as snake;
pub use brick_game_tetris as tetris;
pub use brick_game_types as types;
