//! Canned data served to the demo identity.
//!
//! Everything here is fixed so every demo session sees the same account no
//! matter what other users have stored.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use uuid::Uuid;

use crate::domain::{Difficulty, Goal, Profile, Skill, Task};
use crate::utils::DEMO_USER_ID;

const DEMO_CREATED_AT: i64 = 1_704_067_200; // 2024-01-01T00:00:00Z

const SKILL_FITNESS: Uuid = Uuid::from_u128(0x5a11_0001);
const SKILL_LEARNING: Uuid = Uuid::from_u128(0x5a11_0002);
const SKILL_FOCUS: Uuid = Uuid::from_u128(0x5a11_0003);

fn at(offset_secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(DEMO_CREATED_AT + offset_secs, 0)
        .single()
        .unwrap_or_default()
}

fn skill(id: Uuid, name: &str, xp: u64) -> Skill {
    let mut skill = Skill {
        id,
        name: name.to_owned(),
        xp: 0,
        level: 1,
    };
    skill.award(xp);
    skill
}

pub fn skills() -> Vec<Skill> {
    vec![
        skill(SKILL_FITNESS, "Fitness", 340),
        skill(SKILL_FOCUS, "Focus", 75),
        skill(SKILL_LEARNING, "Learning", 150),
    ]
}

pub fn tasks() -> Vec<Task> {
    let task = |n: u128, title: &str, difficulty, skill_id, completed: bool| Task {
        id: Uuid::from_u128(0x7a5c_0000 + n),
        title: title.to_owned(),
        description: None,
        difficulty,
        skill_id: Some(skill_id),
        completed,
        completed_at: completed.then(|| at(86_400 * n as i64)),
        created_at: at(3_600 * n as i64),
    };
    vec![
        task(1, "Morning run", Difficulty::Medium, SKILL_FITNESS, true),
        task(2, "Read one chapter", Difficulty::Easy, SKILL_LEARNING, true),
        task(3, "Deep work block (90 min)", Difficulty::Hard, SKILL_FOCUS, false),
        task(4, "Strength training", Difficulty::Hard, SKILL_FITNESS, false),
    ]
}

pub fn goals() -> Vec<Goal> {
    vec![
        Goal {
            id: Uuid::from_u128(0x60a1_0001),
            title: "Run a half marathon".to_owned(),
            description: Some("Build up to 21 km by the end of the season".to_owned()),
            target_date: NaiveDate::from_ymd_opt(2024, 10, 1),
            progress: 45,
            completed: false,
            created_at: at(0),
        },
        Goal {
            id: Uuid::from_u128(0x60a1_0002),
            title: "Finish 12 books".to_owned(),
            description: None,
            target_date: NaiveDate::from_ymd_opt(2024, 12, 31),
            progress: 100,
            completed: true,
            created_at: at(60),
        },
    ]
}

pub fn profile() -> Profile {
    Profile::from_xp(DEMO_USER_ID, 565, 23)
}
