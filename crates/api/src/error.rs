//! Error responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use ledgerly_core::ledger::LedgerError;
use ledgerly_core::user::UserError;
use ledgerly_shared::AppError;
use serde_json::json;
use tracing::error;

/// Message returned when an entry's owner cannot be found.
pub const USER_NOT_FOUND: &str = "Usuário não encontrado para o Id informado.";

/// Message returned when an entry id does not exist.
pub const ENTRY_NOT_FOUND: &str = "Lançamento não encontrado na base de dados.";

/// Message returned when a status change names an unknown status.
pub const INVALID_STATUS: &str =
    "Não foi possível atualizar o status do lançamento, envie um status válido.";

/// Error wrapper that renders as a JSON response.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl From<LedgerError> for ApiError {
    fn from(err: LedgerError) -> Self {
        Self(err.into())
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.0.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        if status.is_server_error() {
            error!(error = %self.0, "Request failed");
        }

        (
            status,
            Json(json!({
                "error": self.0.error_code(),
                "message": self.0.client_message(),
            })),
        )
            .into_response()
    }
}

/// Result type for handlers.
pub type ApiResult<T> = Result<T, ApiError>;
