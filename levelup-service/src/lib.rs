use std::{error::Error, future::Future, pin::Pin};

use axum::http::{header, Method};
use axum::routing::{get, post, put};
use axum::{middleware as axum_middleware, Router};
use axum_server::bind;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use app_state::AppState;
use middleware::{demo_guard, require_auth};
use routes::paths;

pub mod app_state;
pub mod domain;
pub mod errors;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod utils;
pub mod validation;

type ServerFuture = Pin<Box<dyn Future<Output = Result<(), std::io::Error>> + Send>>;

/// Any origin may call the API with the verbs the client uses.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

pub fn app_router(app_state: AppState) -> Router {
    // Layers run bottom-up: authenticate first, then divert demo sessions.
    let data_routes = Router::new()
        .route(paths::TASKS, get(routes::list_tasks).post(routes::create_task))
        .route(paths::TASK, put(routes::update_task).delete(routes::delete_task))
        .route(paths::TASK_COMPLETE, post(routes::complete_task))
        .route(paths::GOALS, get(routes::list_goals).post(routes::create_goal))
        .route(paths::GOAL, put(routes::update_goal).delete(routes::delete_goal))
        .route(paths::SKILLS, get(routes::list_skills).post(routes::create_skill))
        .route(paths::PROFILE, get(routes::get_profile))
        .route_layer(axum_middleware::from_fn(demo_guard))
        .route_layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            require_auth,
        ));

    Router::new()
        .route(paths::HEALTH, get(routes::health))
        .route(paths::SIGNUP, post(routes::signup))
        .route(paths::LOGIN, post(routes::login))
        .route(paths::DEMO_LOGIN, post(routes::demo_login))
        .route(paths::REFRESH, post(routes::refresh))
        .route(paths::VERIFY_TOKEN, post(routes::verify_token))
        .route(paths::LOGOUT, post(routes::logout))
        .merge(data_routes)
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

// This struct encapsulates our application-related logic.
pub struct Application {
    http_future: ServerFuture,
    // address is exposed as a public field,
    // so we have access to it in tests.
    pub address: String,
}

impl Application {
    pub async fn build(app_state: AppState, address: &str) -> Result<Self, Box<dyn Error>> {
        let router = app_router(app_state);

        let http_future = bind(address.parse()?).serve(router.into_make_service());

        Ok(Self {
            http_future: Box::pin(http_future),
            address: format!("http://{}", address),
        })
    }

    pub async fn run(self) -> Result<(), std::io::Error> {
        tracing::info!("listening on {}", &self.address);
        self.http_future.await
    }
}
