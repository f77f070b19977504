//! API route definitions.

use axum::Router;

use crate::AppState;

pub mod entries;
pub mod health;
pub mod users;

/// Creates the router mounted under `/api`.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(users::routes())
        .merge(entries::routes())
}
