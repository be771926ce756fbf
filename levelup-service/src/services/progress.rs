use chrono::Utc;
use uuid::Uuid;

use crate::app_state::AppState;
use crate::domain::{
    Goal, GoalUpdate, NewGoal, NewSkill, NewTask, Profile, ProgressStore, ProgressStoreError,
    Skill, Task, TaskCompletion, TaskUpdate,
};
use crate::errors::ApiError;

impl From<ProgressStoreError> for ApiError {
    fn from(e: ProgressStoreError) -> Self {
        match e {
            ProgressStoreError::NotFound => ApiError::NotFound,
            ProgressStoreError::UnexpectedError => ApiError::InternalServerError,
        }
    }
}

fn require_text(value: &str, field: &str) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        return Err(ApiError::Validation(format!("{} must not be empty", field)));
    }
    Ok(())
}

async fn require_skill(
    store: &(dyn ProgressStore + '_),
    user_id: &str,
    skill_id: Option<Uuid>,
) -> Result<(), ApiError> {
    if let Some(skill_id) = skill_id {
        match store.get_skill(user_id, skill_id).await {
            Ok(_) => {}
            Err(ProgressStoreError::NotFound) => {
                return Err(ApiError::Validation(format!("unknown skill {}", skill_id)))
            }
            Err(e) => return Err(e.into()),
        }
    }
    Ok(())
}

/// Task, goal and skill operations for one user.
pub struct ProgressService;

impl ProgressService {
    pub async fn list_tasks(state: &AppState, user_id: &str) -> Result<Vec<Task>, ApiError> {
        Ok(state.progress_store.read().await.list_tasks(user_id).await?)
    }

    pub async fn create_task(
        state: &AppState,
        user_id: &str,
        new: NewTask,
    ) -> Result<Task, ApiError> {
        require_text(&new.title, "title")?;
        let mut store = state.progress_store.write().await;
        require_skill(&*store, user_id, new.skill_id).await?;

        let task = Task::new(new, Utc::now());
        store.save_task(user_id, task.clone()).await?;
        Ok(task)
    }

    pub async fn update_task(
        state: &AppState,
        user_id: &str,
        id: Uuid,
        update: TaskUpdate,
    ) -> Result<Task, ApiError> {
        if let Some(title) = &update.title {
            require_text(title, "title")?;
        }
        let mut store = state.progress_store.write().await;
        require_skill(&*store, user_id, update.skill_id).await?;

        let mut task = store.get_task(user_id, id).await?;
        task.apply(update);
        store.save_task(user_id, task.clone()).await?;
        Ok(task)
    }

    pub async fn delete_task(state: &AppState, user_id: &str, id: Uuid) -> Result<(), ApiError> {
        Ok(state.progress_store.write().await.delete_task(user_id, id).await?)
    }

    /// Mark a task done and award its XP to the profile and linked skill.
    ///
    /// Runs under one write lock so a task can only pay out once.
    pub async fn complete_task(
        state: &AppState,
        user_id: &str,
        id: Uuid,
    ) -> Result<TaskCompletion, ApiError> {
        let mut store = state.progress_store.write().await;

        let mut task = store.get_task(user_id, id).await?;
        if task.completed {
            return Err(ApiError::Conflict("task is already completed".to_owned()));
        }
        let xp = task.difficulty.xp_reward();
        task.completed = true;
        task.completed_at = Some(Utc::now());

        let skill = match task.skill_id {
            Some(skill_id) => match store.get_skill(user_id, skill_id).await {
                Ok(mut skill) => {
                    skill.award(xp);
                    store.save_skill(user_id, skill.clone()).await?;
                    Some(skill)
                }
                // Skill deleted since the task was linked: still pay the profile.
                Err(ProgressStoreError::NotFound) => None,
                Err(e) => return Err(e.into()),
            },
            None => None,
        };

        let mut profile = store.get_profile(user_id).await?;
        profile.record_completion(xp);
        store.save_profile(profile.clone()).await?;
        store.save_task(user_id, task.clone()).await?;

        tracing::debug!(user_id, task_id = %task.id, xp, level = profile.level, "task completed");
        Ok(TaskCompletion {
            task,
            xp_awarded: xp,
            profile,
            skill,
        })
    }

    pub async fn list_goals(state: &AppState, user_id: &str) -> Result<Vec<Goal>, ApiError> {
        Ok(state.progress_store.read().await.list_goals(user_id).await?)
    }

    pub async fn create_goal(
        state: &AppState,
        user_id: &str,
        new: NewGoal,
    ) -> Result<Goal, ApiError> {
        require_text(&new.title, "title")?;
        let goal = Goal::new(new, Utc::now());
        state
            .progress_store
            .write()
            .await
            .save_goal(user_id, goal.clone())
            .await?;
        Ok(goal)
    }

    pub async fn update_goal(
        state: &AppState,
        user_id: &str,
        id: Uuid,
        update: GoalUpdate,
    ) -> Result<Goal, ApiError> {
        if let Some(title) = &update.title {
            require_text(title, "title")?;
        }
        let mut store = state.progress_store.write().await;
        let mut goal = store.get_goal(user_id, id).await?;
        goal.apply(update);
        store.save_goal(user_id, goal.clone()).await?;
        Ok(goal)
    }

    pub async fn delete_goal(state: &AppState, user_id: &str, id: Uuid) -> Result<(), ApiError> {
        Ok(state.progress_store.write().await.delete_goal(user_id, id).await?)
    }

    pub async fn list_skills(state: &AppState, user_id: &str) -> Result<Vec<Skill>, ApiError> {
        Ok(state.progress_store.read().await.list_skills(user_id).await?)
    }

    pub async fn create_skill(
        state: &AppState,
        user_id: &str,
        new: NewSkill,
    ) -> Result<Skill, ApiError> {
        require_text(&new.name, "name")?;
        let mut store = state.progress_store.write().await;
        let exists = store
            .list_skills(user_id)
            .await?
            .iter()
            .any(|s| s.name.eq_ignore_ascii_case(new.name.trim()));
        if exists {
            return Err(ApiError::Conflict(format!("skill {} already exists", new.name.trim())));
        }

        let skill = Skill::new(new);
        store.save_skill(user_id, skill.clone()).await?;
        Ok(skill)
    }

    pub async fn profile(state: &AppState, user_id: &str) -> Result<Profile, ApiError> {
        Ok(state.progress_store.read().await.get_profile(user_id).await?)
    }
}
