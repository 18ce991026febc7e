//! Pass-through of the remote collections, one fresh fetch per call.

use axum::{extract::{Path, State}, Json};
use service::join::JoinPair;

use crate::errors::JsonApiError;
use crate::state::AppState;

pub async fn list<P: JoinPair>(State(state): State<AppState>) -> Result<Json<Vec<P::Remote>>, JsonApiError> {
    let records = P::source(state.joins.upstreams()).fetch_all().await?;
    Ok(Json(records))
}

/// Single record by identity, or `null`.
pub async fn get<P: JoinPair>(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Option<P::Remote>>, JsonApiError> {
    let record = P::source(state.joins.upstreams()).fetch_one(id).await?;
    Ok(Json(record))
}
