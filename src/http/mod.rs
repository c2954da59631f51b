//! HTTP surface: routes, extractors, error mapping and middleware.
//!
//! ```text
//! GET    /                  -> {message, version, framework}
//! GET    /health            -> {status, timestamp, uptime}
//! GET    /api/users         -> {success, count, users}
//! GET    /api/users/:id     -> {success, user}            | 404
//! POST   /api/users         -> 201 {success, user}        | 400
//! PUT    /api/users/:id     -> {success, user}            | 404
//! DELETE /api/users/:id     -> {success, message, user}   | 404
//! *                         -> 404 {success:false, error:"Route not found"}
//! ```
//!
//! A trailing slash is trimmed before routing, so `/api/users/` and
//! `/api/users/1/` reach the same handlers.

pub mod dtos;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod state;

use axum::{routing::get, Router};
use tower_http::normalize_path::NormalizePath;

pub use state::AppState;

use handlers::{meta, route_not_found, users};

/// Build the full application router with its middleware chain.
pub fn router(state: AppState) -> Router {
    let routes = Router::new()
        .route("/", get(meta::root).fallback(route_not_found))
        .route("/health", get(meta::health).fallback(route_not_found))
        .route(
            "/api/users",
            get(users::list_users)
                .post(users::create_user)
                .fallback(route_not_found),
        )
        .route(
            "/api/users/:id",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user)
                .fallback(route_not_found),
        )
        .fallback(route_not_found)
        .with_state(state);

    // Path rewriting has to happen before route matching, so the normalized
    // routes sit behind an outer router that only forwards.
    Router::new()
        .fallback_service(NormalizePath::trim_trailing_slash(routes))
        .layer(middleware::panic_boundary())
        .layer(middleware::cors())
        .layer(middleware::request_logging())
}
