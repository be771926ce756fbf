use serde::{Deserialize, Serialize};

use super::progression::{level_for_xp, xp_to_next_level};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub user_id: String,
    pub total_xp: u64,
    pub level: u32,
    pub xp_to_next_level: u64,
    pub tasks_completed: u64,
}

impl Profile {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self::from_xp(user_id, 0, 0)
    }

    pub fn from_xp(user_id: impl Into<String>, total_xp: u64, tasks_completed: u64) -> Self {
        Self {
            user_id: user_id.into(),
            total_xp,
            level: level_for_xp(total_xp),
            xp_to_next_level: xp_to_next_level(total_xp),
            tasks_completed,
        }
    }

    pub fn record_completion(&mut self, xp: u64) {
        *self = Self::from_xp(
            std::mem::take(&mut self.user_id),
            self.total_xp.saturating_add(xp),
            self.tasks_completed + 1,
        );
    }
}
