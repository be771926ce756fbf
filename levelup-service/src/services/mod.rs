pub mod auth;
pub mod data_stores;
pub mod demo;
pub mod progress;
pub mod token_service;

pub use auth::*;
pub use data_stores::*;
pub use progress::*;
pub use token_service::*;
