use uuid::Uuid;

use crate::domain::{Goal, Profile, Skill, Task};

use super::ProgressStoreError;

/// Per-user storage for tasks, goals, skills and the XP profile.
#[async_trait::async_trait]
pub trait ProgressStore: Send + Sync {
    async fn list_tasks(&self, user_id: &str) -> Result<Vec<Task>, ProgressStoreError>;
    async fn get_task(&self, user_id: &str, id: Uuid) -> Result<Task, ProgressStoreError>;
    async fn save_task(&mut self, user_id: &str, task: Task) -> Result<(), ProgressStoreError>;
    async fn delete_task(&mut self, user_id: &str, id: Uuid) -> Result<(), ProgressStoreError>;

    async fn list_goals(&self, user_id: &str) -> Result<Vec<Goal>, ProgressStoreError>;
    async fn get_goal(&self, user_id: &str, id: Uuid) -> Result<Goal, ProgressStoreError>;
    async fn save_goal(&mut self, user_id: &str, goal: Goal) -> Result<(), ProgressStoreError>;
    async fn delete_goal(&mut self, user_id: &str, id: Uuid) -> Result<(), ProgressStoreError>;

    async fn list_skills(&self, user_id: &str) -> Result<Vec<Skill>, ProgressStoreError>;
    async fn get_skill(&self, user_id: &str, id: Uuid) -> Result<Skill, ProgressStoreError>;
    async fn save_skill(&mut self, user_id: &str, skill: Skill) -> Result<(), ProgressStoreError>;

    /// Returns a fresh level-1 profile for users that have none yet.
    async fn get_profile(&self, user_id: &str) -> Result<Profile, ProgressStoreError>;
    async fn save_profile(&mut self, profile: Profile) -> Result<(), ProgressStoreError>;
}
