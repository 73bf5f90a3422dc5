//! Scoring module - line rewards and difficulty progression
//!
//! A bake that clears `n` lines (1..=4) is worth `LINE_SCORES[n - 1] * (difficulty + 1)`.
//! Difficulty rises one step at a time once the score passes the threshold for the
//! current level.

use crate::types::{DIFFICULTY_TIMEOUTS, LINE_SCORES, MAX_DIFFICULTY, SCORE_PER_LEVEL};

/// Calculate line clear score
/// lines: number of lines cleared (1-4)
/// difficulty: current difficulty (0-9)
pub fn calculate_line_score(lines: usize, difficulty: u8) -> u32 {
    if lines == 0 || lines > LINE_SCORES.len() {
        return 0;
    }
    LINE_SCORES[lines - 1] * (difficulty as u32 + 1)
}

/// Difficulty after reaching `score` while at `difficulty`.
///
/// Never moves more than one step and never goes down.
pub fn next_difficulty(difficulty: u8, score: u32) -> u8 {
    if difficulty >= MAX_DIFFICULTY {
        return MAX_DIFFICULTY;
    }
    if score > SCORE_PER_LEVEL[difficulty as usize] {
        difficulty + 1
    } else {
        difficulty
    }
}

/// Get tick interval for a difficulty (in milliseconds)
/// Difficulties above the table use the last entry.
pub fn tick_interval_ms(difficulty: u8) -> u32 {
    let idx = (difficulty as usize).min(DIFFICULTY_TIMEOUTS.len() - 1);
    DIFFICULTY_TIMEOUTS[idx]
}
