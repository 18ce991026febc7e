use axum::{extract::{Path, State}, Json};
use tracing::info;

use common::types::Message;
use models::wisata::Destination;

use crate::errors::JsonApiError;
use crate::state::AppState;

#[utoipa::path(
    post, path = "/wisata", tag = "wisata",
    request_body = crate::openapi::DestinationDoc,
    responses(
        (status = 200, description = "Inserted", body = crate::openapi::MessageDoc),
        (status = 422, description = "Validation Error"),
        (status = 500, description = "Insert Failed")
    )
)]
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<Destination>,
) -> Result<Json<Message>, JsonApiError> {
    let created = state.store.insert(input).await?;
    info!(id = %created.id_wisata, "wisata created");
    Ok(Json(Message::new("Data wisata berhasil ditambahkan.")))
}

#[utoipa::path(
    get, path = "/wisata", tag = "wisata",
    responses((status = 200, description = "All destinations", body = [crate::openapi::DestinationDoc]))
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Destination>>, JsonApiError> {
    let items = state.store.list().await?;
    Ok(Json(items))
}

/// Missing ids answer 200 with `null`.
#[utoipa::path(
    get, path = "/wisata/{id}", tag = "wisata",
    params(("id" = String, Path, description = "Destination id")),
    responses((status = 200, description = "The destination, or null", body = crate::openapi::DestinationDoc))
)]
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Option<Destination>>, JsonApiError> {
    let found = state.store.get(&id).await?;
    Ok(Json(found))
}

#[utoipa::path(
    put, path = "/wisata/{id}", tag = "wisata",
    params(("id" = String, Path, description = "Destination id")),
    request_body = crate::openapi::DestinationDoc,
    responses(
        (status = 200, description = "Replaced", body = crate::openapi::MessageDoc),
        (status = 404, description = "Not Found"),
        (status = 422, description = "Validation Error")
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<Destination>,
) -> Result<Json<Message>, JsonApiError> {
    state.store.update(&id, input).await?;
    info!(id = %id, "wisata updated");
    Ok(Json(Message::new("Data wisata berhasil diperbarui.")))
}

#[utoipa::path(
    delete, path = "/wisata/{id}", tag = "wisata",
    params(("id" = String, Path, description = "Destination id")),
    responses(
        (status = 200, description = "Deleted", body = crate::openapi::MessageDoc),
        (status = 404, description = "Not Found")
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Message>, JsonApiError> {
    state.store.delete(&id).await?;
    info!(id = %id, "wisata deleted");
    Ok(Json(Message::new("Data wisata berhasil dihapus.")))
}
