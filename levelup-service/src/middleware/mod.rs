pub mod auth;
pub mod demo_guard;

pub use auth::*;
pub use demo_guard::*;
