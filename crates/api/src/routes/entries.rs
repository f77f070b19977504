//! Ledger entry routes.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, put},
};
use chrono::{Local, NaiveDate};
use ledgerly_core::ledger::{
    EntryFilter, EntryStatus, EntryType, LedgerEntry, NewLedgerEntry, OwnerRef,
};
use ledgerly_shared::{
    AppError,
    types::{LedgerEntryId, UserId},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::AppState;
use crate::error::{ApiResult, ENTRY_NOT_FOUND, INVALID_STATUS, USER_NOT_FOUND};

/// Creates the ledger entry routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/entries", get(search_entries).post(create_entry))
        .route(
            "/entries/{id}",
            get(get_entry).put(update_entry).delete(delete_entry),
        )
        .route("/entries/{id}/status", put(update_status))
}

/// Request body for creating or replacing an entry.
#[derive(Debug, Deserialize)]
pub struct EntryRequest {
    /// Free-text description.
    pub description: Option<String>,
    /// Month of competence.
    pub month: Option<i32>,
    /// Year of competence.
    pub year: Option<i32>,
    /// Owning user id.
    pub user: Option<UserId>,
    /// Entry amount.
    pub amount: Option<Decimal>,
    /// Income or expense.
    #[serde(rename = "type")]
    pub entry_type: Option<EntryType>,
    /// Ignored on create; new entries always start as pending.
    pub status: Option<EntryStatus>,
}

/// Request body for a status change.
#[derive(Debug, Deserialize)]
pub struct StatusRequest {
    /// Target status name, e.g. `effective`.
    pub status: String,
}

/// Query parameters for searching entries. `user` is required.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    /// Owning user id.
    pub user: Option<UserId>,
    /// Free-text description.
    pub description: Option<String>,
    /// Month of competence.
    pub month: Option<i32>,
    /// Year of competence.
    pub year: Option<i32>,
    /// Income or expense.
    #[serde(rename = "type")]
    pub entry_type: Option<EntryType>,
    /// Lifecycle status.
    pub status: Option<EntryStatus>,
}

/// Response for a ledger entry.
#[derive(Debug, Serialize)]
pub struct EntryResponse {
    /// Entry id.
    pub id: Option<LedgerEntryId>,
    /// Free-text description.
    pub description: Option<String>,
    /// Month of competence.
    pub month: Option<i32>,
    /// Year of competence.
    pub year: Option<i32>,
    /// Owning user id.
    pub user: Option<UserId>,
    /// Entry amount.
    pub amount: Option<Decimal>,
    /// Date the entry was registered.
    pub registration_date: Option<NaiveDate>,
    /// Income or expense.
    #[serde(rename = "type")]
    pub entry_type: Option<EntryType>,
    /// Lifecycle status.
    pub status: Option<EntryStatus>,
}

impl From<LedgerEntry> for EntryResponse {
    fn from(entry: LedgerEntry) -> Self {
        Self {
            id: entry.id,
            user: entry.owner_id(),
            description: entry.description,
            month: entry.month,
            year: entry.year,
            amount: entry.amount,
            registration_date: entry.registration_date,
            entry_type: entry.entry_type,
            status: entry.status,
        }
    }
}

/// Resolves the owner named by a request, which must be a registered user.
fn require_user(state: &AppState, user: Option<UserId>) -> ApiResult<UserId> {
    let found = match user {
        Some(id) => state.users.find_by_id(id)?,
        None => None,
    };
    found
        .and_then(|user| user.id)
        .ok_or_else(|| AppError::BusinessRule(USER_NOT_FOUND.to_string()).into())
}

fn load_entry(state: &AppState, id: LedgerEntryId) -> ApiResult<LedgerEntry> {
    state
        .ledger
        .find_by_id(id)?
        .ok_or_else(|| AppError::NotFound(ENTRY_NOT_FOUND.to_string()).into())
}

/// GET `/entries` - Search a user's entries by example.
async fn search_entries(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> ApiResult<impl IntoResponse> {
    let owner_id = require_user(&state, query.user)?;

    let filter = EntryFilter {
        description: query.description,
        month: query.month,
        year: query.year,
        entry_type: query.entry_type,
        status: query.status,
        ..EntryFilter::new().with_owner(owner_id)
    };
    let entries = state.ledger.search(&filter)?;
    debug!(user_id = %owner_id, count = entries.len(), "Entries listed");

    let response: Vec<EntryResponse> = entries.into_iter().map(EntryResponse::from).collect();
    Ok(Json(response))
}

/// POST `/entries` - Create an entry.
async fn create_entry(
    State(state): State<AppState>,
    Json(payload): Json<EntryRequest>,
) -> ApiResult<impl IntoResponse> {
    let owner_id = require_user(&state, payload.user)?;

    let entry = LedgerEntry::create(
        NewLedgerEntry {
            description: payload.description,
            month: payload.month,
            year: payload.year,
            owner_id: Some(owner_id),
            amount: payload.amount,
            entry_type: payload.entry_type,
        },
        Local::now().date_naive(),
    );
    let saved = state.ledger.save(entry)?;
    Ok((StatusCode::CREATED, Json(EntryResponse::from(saved))))
}

/// GET `/entries/{id}` - Fetch one entry.
async fn get_entry(
    State(state): State<AppState>,
    Path(id): Path<LedgerEntryId>,
) -> ApiResult<impl IntoResponse> {
    let entry = load_entry(&state, id)?;
    Ok(Json(EntryResponse::from(entry)))
}

/// PUT `/entries/{id}` - Replace an entry's fields.
///
/// The registration date is kept; the status is kept unless the body names one.
async fn update_entry(
    State(state): State<AppState>,
    Path(id): Path<LedgerEntryId>,
    Json(payload): Json<EntryRequest>,
) -> ApiResult<impl IntoResponse> {
    let existing = load_entry(&state, id)?;
    let owner_id = require_user(&state, payload.user)?;

    let entry = LedgerEntry {
        id: existing.id,
        description: payload.description,
        month: payload.month,
        year: payload.year,
        owner: Some(OwnerRef::new(owner_id)),
        amount: payload.amount,
        registration_date: existing.registration_date,
        entry_type: payload.entry_type,
        status: payload.status.or(existing.status),
    };
    let updated = state.ledger.update(entry)?;
    Ok(Json(EntryResponse::from(updated)))
}

/// PUT `/entries/{id}/status` - Move an entry to another status.
async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<LedgerEntryId>,
    Json(payload): Json<StatusRequest>,
) -> ApiResult<impl IntoResponse> {
    let Some(status) = EntryStatus::parse(&payload.status) else {
        return Err(AppError::BusinessRule(INVALID_STATUS.to_string()).into());
    };
    let entry = load_entry(&state, id)?;

    let updated = state.ledger.set_status(entry, status)?;
    Ok(Json(EntryResponse::from(updated)))
}

/// DELETE `/entries/{id}` - Remove an entry.
async fn delete_entry(
    State(state): State<AppState>,
    Path(id): Path<LedgerEntryId>,
) -> ApiResult<impl IntoResponse> {
    let entry = load_entry(&state, id)?;
    state.ledger.delete(&entry)?;
    Ok(StatusCode::NO_CONTENT)
}
