use std::collections::HashMap;

use uuid::Uuid;

use crate::domain::data_stores::{ProgressStore, ProgressStoreError};
use crate::domain::{Goal, Profile, Skill, Task};

#[derive(Default)]
struct UserProgress {
    tasks: HashMap<Uuid, Task>,
    goals: HashMap<Uuid, Goal>,
    skills: HashMap<Uuid, Skill>,
    profile: Option<Profile>,
}

#[derive(Default)]
pub struct HashmapProgressStore {
    users: HashMap<String, UserProgress>,
}

impl HashmapProgressStore {
    fn user(&self, user_id: &str) -> Option<&UserProgress> {
        self.users.get(user_id)
    }

    fn user_mut(&mut self, user_id: &str) -> &mut UserProgress {
        self.users.entry(user_id.to_owned()).or_default()
    }
}

#[async_trait::async_trait]
impl ProgressStore for HashmapProgressStore {
    async fn list_tasks(&self, user_id: &str) -> Result<Vec<Task>, ProgressStoreError> {
        let mut tasks: Vec<Task> = self
            .user(user_id)
            .map(|u| u.tasks.values().cloned().collect())
            .unwrap_or_default();
        tasks.sort_by_key(|t| t.created_at);
        Ok(tasks)
    }

    async fn get_task(&self, user_id: &str, id: Uuid) -> Result<Task, ProgressStoreError> {
        self.user(user_id)
            .and_then(|u| u.tasks.get(&id))
            .cloned()
            .ok_or(ProgressStoreError::NotFound)
    }

    async fn save_task(&mut self, user_id: &str, task: Task) -> Result<(), ProgressStoreError> {
        self.user_mut(user_id).tasks.insert(task.id, task);
        Ok(())
    }

    async fn delete_task(&mut self, user_id: &str, id: Uuid) -> Result<(), ProgressStoreError> {
        self.users
            .get_mut(user_id)
            .and_then(|u| u.tasks.remove(&id))
            .map(|_| ())
            .ok_or(ProgressStoreError::NotFound)
    }

    async fn list_goals(&self, user_id: &str) -> Result<Vec<Goal>, ProgressStoreError> {
        let mut goals: Vec<Goal> = self
            .user(user_id)
            .map(|u| u.goals.values().cloned().collect())
            .unwrap_or_default();
        goals.sort_by_key(|g| g.created_at);
        Ok(goals)
    }

    async fn get_goal(&self, user_id: &str, id: Uuid) -> Result<Goal, ProgressStoreError> {
        self.user(user_id)
            .and_then(|u| u.goals.get(&id))
            .cloned()
            .ok_or(ProgressStoreError::NotFound)
    }

    async fn save_goal(&mut self, user_id: &str, goal: Goal) -> Result<(), ProgressStoreError> {
        self.user_mut(user_id).goals.insert(goal.id, goal);
        Ok(())
    }

    async fn delete_goal(&mut self, user_id: &str, id: Uuid) -> Result<(), ProgressStoreError> {
        self.users
            .get_mut(user_id)
            .and_then(|u| u.goals.remove(&id))
            .map(|_| ())
            .ok_or(ProgressStoreError::NotFound)
    }

    async fn list_skills(&self, user_id: &str) -> Result<Vec<Skill>, ProgressStoreError> {
        let mut skills: Vec<Skill> = self
            .user(user_id)
            .map(|u| u.skills.values().cloned().collect())
            .unwrap_or_default();
        skills.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(skills)
    }

    async fn get_skill(&self, user_id: &str, id: Uuid) -> Result<Skill, ProgressStoreError> {
        self.user(user_id)
            .and_then(|u| u.skills.get(&id))
            .cloned()
            .ok_or(ProgressStoreError::NotFound)
    }

    async fn save_skill(&mut self, user_id: &str, skill: Skill) -> Result<(), ProgressStoreError> {
        self.user_mut(user_id).skills.insert(skill.id, skill);
        Ok(())
    }

    async fn get_profile(&self, user_id: &str) -> Result<Profile, ProgressStoreError> {
        Ok(self
            .user(user_id)
            .and_then(|u| u.profile.clone())
            .unwrap_or_else(|| Profile::new(user_id)))
    }

    async fn save_profile(&mut self, profile: Profile) -> Result<(), ProgressStoreError> {
        let user_id = profile.user_id.clone();
        self.user_mut(&user_id).profile = Some(profile);
        Ok(())
    }
}
