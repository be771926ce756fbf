//! XP and level arithmetic.
//!
//! Reaching level `L` takes `50 * L * (L - 1)` total XP, so each level costs
//! 100 XP more than the one before it (0, 100, 300, 600, 1000, ...).

use serde::{Deserialize, Serialize};

const LEVEL_STEP_XP: u64 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub fn xp_reward(self) -> u64 {
        match self {
            Difficulty::Easy => 10,
            Difficulty::Medium => 25,
            Difficulty::Hard => 50,
        }
    }
}

/// Total XP needed to reach `level`. Level 1 is free.
pub fn xp_threshold(level: u32) -> u64 {
    let level = u64::from(level.max(1));
    LEVEL_STEP_XP * level * (level - 1)
}

pub fn level_for_xp(xp: u64) -> u32 {
    let mut level = 1u32;
    while xp >= xp_threshold(level + 1) {
        level += 1;
    }
    level
}

pub fn xp_to_next_level(xp: u64) -> u64 {
    xp_threshold(level_for_xp(xp) + 1) - xp
}
