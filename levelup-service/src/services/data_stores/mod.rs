pub mod hashmap_progress_store;
pub mod hashmap_revoked_token_store;
pub mod hashmap_user_store;

pub use hashmap_progress_store::*;
pub use hashmap_revoked_token_store::*;
pub use hashmap_user_store::*;
