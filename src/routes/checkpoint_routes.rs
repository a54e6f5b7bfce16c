//! Rutas de checkpoints
//!
//! Superficie append-only: no hay PUT. El listado acepta el filtro
//! opcional `?transport_id=` para la traza de un transporte concreto.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use serde::Deserialize;

use crate::controllers::CheckpointController;
use crate::dto::checkpoint_dto::CreateCheckpointRequest;
use crate::dto::{ApiResponse, ValidatedJson};
use crate::models::Checkpoint;
use crate::state::AppState;
use crate::utils::errors::AppError;

#[derive(Debug, Deserialize)]
struct CheckpointFilter {
    transport_id: Option<i64>,
}

pub fn create_checkpoint_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_checkpoint))
        .route("/", get(list_checkpoints))
        .route("/:id", get(get_checkpoint))
        .route("/:id", delete(delete_checkpoint))
}

async fn create_checkpoint(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateCheckpointRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Checkpoint>>), AppError> {
    let controller = CheckpointController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn list_checkpoints(
    State(state): State<AppState>,
    Query(filter): Query<CheckpointFilter>,
) -> Result<Json<ApiResponse<Vec<Checkpoint>>>, AppError> {
    let controller = CheckpointController::new(state.pool.clone());
    let response = controller.list(filter.transport_id).await?;
    Ok(Json(response))
}

async fn get_checkpoint(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<Checkpoint>>, AppError> {
    let controller = CheckpointController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn delete_checkpoint(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = CheckpointController::new(state.pool.clone());
    let response = controller.delete(id).await?;
    Ok(Json(response))
}
