use axum::{extract::{Path, State}, Json};
use service::join::JoinPair;

use crate::errors::JsonApiError;
use crate::state::AppState;

pub async fn list<P: JoinPair>(State(state): State<AppState>) -> Result<Json<Vec<P::Joined>>, JsonApiError> {
    let joined = state.joins.joined::<P>().await?;
    Ok(Json(joined))
}

/// 404 when no joined record carries `key` on its remote side.
pub async fn by_key<P: JoinPair>(
    State(state): State<AppState>,
    Path(key): Path<i64>,
) -> Result<Json<Vec<P::Joined>>, JsonApiError> {
    let joined = state.joins.joined_by_key::<P>(key).await?;
    Ok(Json(joined))
}
