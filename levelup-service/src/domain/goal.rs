use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

const MAX_PROGRESS: u8 = 100;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: Uuid,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_date: Option<NaiveDate>,
    pub progress: u8,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGoal {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub target_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalUpdate {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub target_date: Option<NaiveDate>,
    #[serde(default)]
    pub progress: Option<u32>,
}

impl Goal {
    pub fn new(new: NewGoal, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: new.title.trim().to_owned(),
            description: new.description,
            target_date: new.target_date,
            progress: 0,
            completed: false,
            created_at: now,
        }
    }

    pub fn apply(&mut self, update: GoalUpdate) {
        if let Some(title) = update.title {
            self.title = title.trim().to_owned();
        }
        if update.description.is_some() {
            self.description = update.description;
        }
        if update.target_date.is_some() {
            self.target_date = update.target_date;
        }
        if let Some(progress) = update.progress {
            self.set_progress(progress);
        }
    }

    pub fn set_progress(&mut self, progress: u32) {
        self.progress = progress.min(u32::from(MAX_PROGRESS)) as u8;
        self.completed = self.progress == MAX_PROGRESS;
    }
}
