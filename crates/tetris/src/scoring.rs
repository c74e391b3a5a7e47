//! Scoring module - line scores, level progression, gravity pacing
//!
//! The score table and level divisor are fixed compatibility constants,
//! not derived values.

use brick_game_types::{
    GRAVITY_BASE_MS, GRAVITY_LEVEL_STEP_MS, LEVEL_SCORE_STEP, LINE_SCORES, MAX_LEVEL,
};

/// Points awarded for the lines cleared by a single lock
pub fn line_clear_score(lines: usize) -> u32 {
    LINE_SCORES.get(lines).copied().unwrap_or(0)
}

/// Level as a pure function of cumulative score: min(10, 1 + score/600)
pub fn level_for_score(score: u32) -> u32 {
    MAX_LEVEL.min(1 + score / LEVEL_SCORE_STEP)
}

/// Milliseconds of accumulated time per gravity step at a level
pub fn gravity_interval_ms(level: u32) -> u32 {
    GRAVITY_BASE_MS - level.min(MAX_LEVEL) * GRAVITY_LEVEL_STEP_MS
}
