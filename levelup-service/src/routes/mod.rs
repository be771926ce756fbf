pub(crate) mod demo_login;
pub(crate) mod goals;
pub(crate) mod health;
pub(crate) mod login;
pub(crate) mod logout;
pub(crate) mod profile;
pub(crate) mod refresh;
pub(crate) mod signup;
pub(crate) mod skills;
pub(crate) mod tasks;
pub(crate) mod verify_token;

// re-export items from sub-modules
pub use demo_login::*;
pub use goals::*;
pub use health::*;
pub use login::*;
pub use logout::*;
pub use profile::*;
pub use refresh::*;
pub use signup::*;
pub use skills::*;
pub use tasks::*;
pub use verify_token::*;

pub mod paths {
    pub const HEALTH: &str = "/health";

    pub const SIGNUP: &str = "/api/auth/signup";
    pub const LOGIN: &str = "/api/auth/login";
    pub const DEMO_LOGIN: &str = "/api/auth/demo";
    pub const REFRESH: &str = "/api/auth/refresh";
    pub const VERIFY_TOKEN: &str = "/api/auth/verify";
    pub const LOGOUT: &str = "/api/auth/logout";

    pub const TASKS: &str = "/api/tasks";
    pub const TASK: &str = "/api/tasks/:id";
    pub const TASK_COMPLETE: &str = "/api/tasks/:id/complete";
    pub const GOALS: &str = "/api/goals";
    pub const GOAL: &str = "/api/goals/:id";
    pub const SKILLS: &str = "/api/skills";
    pub const PROFILE: &str = "/api/profile";
}
