pub mod auth_requests;
pub mod auth_responses;
pub mod authenticated_user;
pub mod data_stores;
pub mod email;
pub mod goal;
pub mod identity_claims;
pub mod issued_tokens;
pub mod password;
pub mod profile;
pub mod progression;
pub mod skill;
pub mod task;
pub mod token_error;
mod user;

pub use auth_requests::*;
pub use auth_responses::*;
pub use authenticated_user::*;
pub use data_stores::*;
pub use email::*;
pub use goal::*;
pub use identity_claims::*;
pub use issued_tokens::*;
pub use password::*;
pub use profile::*;
pub use progression::Difficulty;
pub use skill::*;
pub use task::*;
pub use token_error::*;
pub use user::*;
