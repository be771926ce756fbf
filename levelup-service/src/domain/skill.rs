use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::progression::level_for_xp;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub id: Uuid,
    pub name: String,
    pub xp: u64,
    pub level: u32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NewSkill {
    pub name: String,
}

impl Skill {
    pub fn new(new: NewSkill) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: new.name.trim().to_owned(),
            xp: 0,
            level: 1,
        }
    }

    pub fn award(&mut self, xp: u64) {
        self.xp = self.xp.saturating_add(xp);
        self.level = level_for_xp(self.xp);
    }
}
