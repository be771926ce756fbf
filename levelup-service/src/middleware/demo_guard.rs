//! Demo identity interceptor.
//!
//! Sits directly behind `require_auth` on every data route. Requests made as
//! the demo identity are answered here from `services::demo` and never reach a
//! handler or a store.

use axum::extract::{MatchedPath, Request};
use axum::http::{Method, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::domain::AuthenticatedUser;
use crate::errors::ApiError;
use crate::routes::paths;
use crate::services::demo;

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct DemoWriteResponse {
    pub message: String,
    pub demo: bool,
}

pub async fn demo_guard(req: Request, next: Next) -> Response {
    let is_demo = req
        .extensions()
        .get::<AuthenticatedUser>()
        .is_some_and(AuthenticatedUser::is_demo);
    if !is_demo {
        return next.run(req).await;
    }

    let route = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_else(|| req.uri().path().to_owned());
    tracing::debug!(method = %req.method(), %route, "serving canned demo response");
    canned_response(req.method(), &route)
}

fn canned_response(method: &Method, route: &str) -> Response {
    if method != Method::GET {
        return (
            StatusCode::OK,
            Json(DemoWriteResponse {
                message: "Demo mode: changes are not saved".to_owned(),
                demo: true,
            }),
        )
            .into_response();
    }

    match route {
        paths::TASKS => Json(demo::tasks()).into_response(),
        paths::GOALS => Json(demo::goals()).into_response(),
        paths::SKILLS => Json(demo::skills()).into_response(),
        paths::PROFILE => Json(demo::profile()).into_response(),
        _ => ApiError::NotFound.into_response(),
    }
}
