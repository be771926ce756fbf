pub mod progress_store;
pub mod progress_store_err;
pub mod revoked_token_store;
pub mod revoked_token_store_err;
pub mod user_store;
pub mod user_store_err;

pub use progress_store::ProgressStore;
pub use progress_store_err::ProgressStoreError;
pub use revoked_token_store::RevokedTokenStore;
pub use revoked_token_store_err::RevokedTokenStoreErr;
pub use user_store::UserStore;
pub use user_store_err::UserStoreError;
