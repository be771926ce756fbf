use std::time::Duration;

use levelup_service::app_state::AppState;
use levelup_service::utils::{init_tracing, Config};
use levelup_service::Application;

const REVOKED_PURGE_INTERVAL: Duration = Duration::from_secs(60 * 60);

#[tokio::main]
async fn main() {
    init_tracing();

    let config = Config::from_env().expect("Failed to load config");
    tracing::info!(?config, "configuration loaded");

    let address = config.bind_address().to_owned();
    let app_state = AppState::in_memory(config).expect("Failed to build app state");

    if app_state.token_service.revocation_enabled() {
        let token_service = app_state.token_service.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(REVOKED_PURGE_INTERVAL);
            loop {
                interval.tick().await;
                let purged = token_service.purge_revoked().await;
                if purged > 0 {
                    tracing::debug!(purged, "dropped expired revoked token ids");
                }
            }
        });
    }

    let app = Application::build(app_state, &address)
        .await
        .expect("Failed to build app");

    app.run().await.expect("Failed to run app");
}
