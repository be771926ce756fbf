pub mod config;
pub mod consts;
pub mod cookie_helpers;
pub mod telemetry;

pub use config::{Config, ConfigError, SecretSource};
pub use consts::*;
pub use cookie_helpers::*;
pub use telemetry::init_tracing;
