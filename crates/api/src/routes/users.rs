//! User registration, authentication, balance and summary routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use ledgerly_core::user::NewUser;
use ledgerly_shared::{AppError, types::UserId};
use serde::Deserialize;
use tracing::info;

use crate::AppState;
use crate::error::{ApiResult, USER_NOT_FOUND};

/// Creates the user routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/users", post(register))
        .route("/users/authenticate", post(authenticate))
        .route("/users/{id}/balance", get(balance))
        .route("/users/{id}/summary", get(summary))
}

/// Request body for logging in.
#[derive(Debug, Deserialize)]
pub struct AuthenticateRequest {
    /// Login e-mail.
    pub email: String,
    /// Plaintext password.
    pub password: String,
}

/// POST `/users` - Register a user.
async fn register(
    State(state): State<AppState>,
    Json(payload): Json<NewUser>,
) -> ApiResult<impl IntoResponse> {
    let user = state.users.register(payload)?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// POST `/users/authenticate` - Check an e-mail and password.
async fn authenticate(
    State(state): State<AppState>,
    Json(payload): Json<AuthenticateRequest>,
) -> ApiResult<impl IntoResponse> {
    let user = state
        .users
        .authenticate(&payload.email, &payload.password)?;
    if let Some(id) = user.id {
        info!(user_id = %id, "User authenticated");
    }
    Ok(Json(user))
}

/// GET `/users/{id}/balance` - Balance over the user's effective entries.
async fn balance(
    State(state): State<AppState>,
    Path(id): Path<UserId>,
) -> ApiResult<impl IntoResponse> {
    require_registered(&state, id)?;
    let balance = state.ledger.balance_for_user(id)?;
    Ok(Json(balance))
}

/// GET `/users/{id}/summary` - Income, expense and balance over effective entries.
async fn summary(
    State(state): State<AppState>,
    Path(id): Path<UserId>,
) -> ApiResult<impl IntoResponse> {
    require_registered(&state, id)?;
    let summary = state.ledger.summary_for_user(id)?;
    Ok(Json(summary))
}

fn require_registered(state: &AppState, id: UserId) -> ApiResult<()> {
    if state.users.find_by_id(id)?.is_none() {
        return Err(AppError::NotFound(USER_NOT_FOUND.to_string()).into());
    }
    Ok(())
}
