use serde_json::json;
use uuid::Uuid;

use levelup_service::domain::{Goal, Profile, Skill, Task, TaskCompletion};

use crate::helpers::{error_message, TestApp};

#[tokio::test]
async fn data_routes_require_a_token() {
    let app = TestApp::new().await;

    for path in ["/api/tasks", "/api/goals", "/api/skills", "/api/profile"] {
        let response = app
            .http_client
            .get(format!("{}{}", app.address, path))
            .send()
            .await
            .expect("Failed to execute request.");
        assert_eq!(response.status().as_u16(), 401, "{} allowed anonymous access", path);
    }
}

#[tokio::test]
async fn refresh_token_is_not_a_bearer_token() {
    let app = TestApp::new().await;
    let session = app.signed_up_user().await;

    let response = app.get("/api/tasks", &session.tokens.refresh_token).await;

    assert_eq!(response.status().as_u16(), 401);
}

#[tokio::test]
async fn new_user_starts_at_level_one() {
    let app = TestApp::new().await;
    let token = app.signed_up_user().await.tokens.access_token;

    let profile: Profile = app.get("/api/profile", &token).await.json().await.unwrap();

    assert_eq!(profile.total_xp, 0);
    assert_eq!(profile.level, 1);
    assert_eq!(profile.xp_to_next_level, 100);

    let tasks: Vec<Task> = app.get("/api/tasks", &token).await.json().await.unwrap();
    assert!(tasks.is_empty());
}

#[tokio::test]
async fn task_crud_round_trip() {
    let app = TestApp::new().await;
    let token = app.signed_up_user().await.tokens.access_token;

    let response = app
        .post("/api/tasks", &token, &json!({ "title": "Stretch", "difficulty": "easy" }))
        .await;
    assert_eq!(response.status().as_u16(), 201);
    let task: Task = response.json().await.unwrap();
    assert!(!task.completed);

    let response = app
        .put(
            &format!("/api/tasks/{}", task.id),
            &token,
            &json!({ "title": "Stretch for 10 minutes" }),
        )
        .await;
    assert_eq!(response.status().as_u16(), 200);
    let updated: Task = response.json().await.unwrap();
    assert_eq!(updated.title, "Stretch for 10 minutes");
    assert_eq!(updated.id, task.id);

    let tasks: Vec<Task> = app.get("/api/tasks", &token).await.json().await.unwrap();
    assert_eq!(tasks, vec![updated]);

    let response = app.delete(&format!("/api/tasks/{}", task.id), &token).await;
    assert_eq!(response.status().as_u16(), 204);

    let response = app.delete(&format!("/api/tasks/{}", task.id), &token).await;
    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn should_return_422_for_blank_title_or_unknown_skill() {
    let app = TestApp::new().await;
    let token = app.signed_up_user().await.tokens.access_token;

    let response = app.post("/api/tasks", &token, &json!({ "title": "  " })).await;
    assert_eq!(response.status().as_u16(), 422);
    assert_eq!(error_message(response).await, "title must not be empty");

    let response = app
        .post(
            "/api/tasks",
            &token,
            &json!({ "title": "Orphan", "skillId": Uuid::new_v4() }),
        )
        .await;
    assert_eq!(response.status().as_u16(), 422);
}

#[tokio::test]
async fn completing_a_task_awards_xp_once() {
    let app = TestApp::new().await;
    let token = app.signed_up_user().await.tokens.access_token;

    let response = app.post("/api/skills", &token, &json!({ "name": "Fitness" })).await;
    assert_eq!(response.status().as_u16(), 201);
    let skill: Skill = response.json().await.unwrap();

    let task: Task = app
        .post(
            "/api/tasks",
            &token,
            &json!({ "title": "Hill sprints", "difficulty": "hard", "skillId": skill.id }),
        )
        .await
        .json()
        .await
        .unwrap();

    let response = app
        .post(&format!("/api/tasks/{}/complete", task.id), &token, &json!({}))
        .await;
    assert_eq!(response.status().as_u16(), 200);
    let completion: TaskCompletion = response.json().await.unwrap();
    assert_eq!(completion.xp_awarded, 50);
    assert!(completion.task.completed);
    assert!(completion.task.completed_at.is_some());
    assert_eq!(completion.profile.total_xp, 50);
    assert_eq!(completion.profile.tasks_completed, 1);
    assert_eq!(completion.skill.map(|s| s.xp), Some(50));

    let response = app
        .post(&format!("/api/tasks/{}/complete", task.id), &token, &json!({}))
        .await;
    assert_eq!(response.status().as_u16(), 409);

    let profile: Profile = app.get("/api/profile", &token).await.json().await.unwrap();
    assert_eq!(profile.total_xp, 50);
}

#[tokio::test]
async fn enough_xp_levels_the_profile_up() {
    let app = TestApp::new().await;
    let token = app.signed_up_user().await.tokens.access_token;

    for i in 0..2 {
        let task: Task = app
            .post(
                "/api/tasks",
                &token,
                &json!({ "title": format!("Boss fight {}", i), "difficulty": "hard" }),
            )
            .await
            .json()
            .await
            .unwrap();
        let response = app
            .post(&format!("/api/tasks/{}/complete", task.id), &token, &json!({}))
            .await;
        assert_eq!(response.status().as_u16(), 200);
    }

    let profile: Profile = app.get("/api/profile", &token).await.json().await.unwrap();
    assert_eq!(profile.total_xp, 100);
    assert_eq!(profile.level, 2);
    assert_eq!(profile.xp_to_next_level, 200);
}

#[tokio::test]
async fn users_cannot_see_each_others_data() {
    let app = TestApp::new().await;
    let alice = app.signed_up_user().await.tokens.access_token;
    let bob = app.signed_up_user().await.tokens.access_token;

    let task: Task = app
        .post("/api/tasks", &alice, &json!({ "title": "Private" }))
        .await
        .json()
        .await
        .unwrap();

    let tasks: Vec<Task> = app.get("/api/tasks", &bob).await.json().await.unwrap();
    assert!(tasks.is_empty());

    let response = app
        .post(&format!("/api/tasks/{}/complete", task.id), &bob, &json!({}))
        .await;
    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn goal_progress_is_clamped_and_completes() {
    let app = TestApp::new().await;
    let token = app.signed_up_user().await.tokens.access_token;

    let response = app
        .post(
            "/api/goals",
            &token,
            &json!({ "title": "Learn Rust", "targetDate": "2030-01-01" }),
        )
        .await;
    assert_eq!(response.status().as_u16(), 201);
    let goal: Goal = response.json().await.unwrap();
    assert_eq!(goal.progress, 0);

    let updated: Goal = app
        .put(&format!("/api/goals/{}", goal.id), &token, &json!({ "progress": 40 }))
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(updated.progress, 40);
    assert!(!updated.completed);

    let updated: Goal = app
        .put(&format!("/api/goals/{}", goal.id), &token, &json!({ "progress": 250 }))
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(updated.progress, 100);
    assert!(updated.completed);

    let response = app.delete(&format!("/api/goals/{}", goal.id), &token).await;
    assert_eq!(response.status().as_u16(), 204);

    let goals: Vec<Goal> = app.get("/api/goals", &token).await.json().await.unwrap();
    assert!(goals.is_empty());
}

#[tokio::test]
async fn duplicate_skill_names_conflict() {
    let app = TestApp::new().await;
    let token = app.signed_up_user().await.tokens.access_token;

    let response = app.post("/api/skills", &token, &json!({ "name": "Focus" })).await;
    assert_eq!(response.status().as_u16(), 201);

    let response = app.post("/api/skills", &token, &json!({ "name": "focus" })).await;
    assert_eq!(response.status().as_u16(), 409);

    let skills: Vec<Skill> = app.get("/api/skills", &token).await.json().await.unwrap();
    assert_eq!(skills.len(), 1);
    assert_eq!(skills[0].level, 1);
}

#[tokio::test]
async fn access_cookie_authenticates_data_routes() {
    let app = TestApp::new().await;
    let token = app.signed_up_user().await.tokens.access_token;

    let response = app
        .http_client
        .get(format!("{}/api/profile", app.address))
        .header("Cookie", format!("access={}", token))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status().as_u16(), 200);
    let profile: Profile = response.json().await.unwrap();
    assert_eq!(profile.level, 1);
}
