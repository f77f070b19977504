//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - REST routes for users, ledger entries and balances
//! - Shared application state
//! - Error responses in a `{ "error", "message" }` body

pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use ledgerly_core::ledger::LedgerService;
use ledgerly_core::user::UserService;
use ledgerly_db::{InMemoryLedgerRepository, InMemoryUserRepository};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Ledger service as wired into the API.
pub type Ledger = LedgerService<InMemoryLedgerRepository>;

/// User service as wired into the API.
pub type Users = UserService<InMemoryUserRepository>;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Ledger entry operations.
    pub ledger: Arc<Ledger>,
    /// User registration and lookup.
    pub users: Arc<Users>,
}

impl AppState {
    /// Creates state backed by fresh in-memory repositories.
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            ledger: Arc::new(LedgerService::new(InMemoryLedgerRepository::new())),
            users: Arc::new(UserService::new(InMemoryUserRepository::new())),
        }
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(routes::health::routes())
        .nest("/api", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
