//! Rutas de depots

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};

use crate::controllers::DepotController;
use crate::dto::depot_dto::CreateDepotRequest;
use crate::dto::{ApiResponse, ValidatedJson};
use crate::models::Depot;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_depot_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_depot))
        .route("/", get(list_depots))
        .route("/:id", get(get_depot))
        .route("/:id", put(update_depot))
        .route("/:id", delete(delete_depot))
}

async fn create_depot(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateDepotRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Depot>>), AppError> {
    let controller = DepotController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn list_depots(State(state): State<AppState>) -> Result<Json<ApiResponse<Vec<Depot>>>, AppError> {
    let controller = DepotController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn get_depot(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<Depot>>, AppError> {
    let controller = DepotController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn update_depot(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidatedJson(request): ValidatedJson<CreateDepotRequest>,
) -> Result<Json<ApiResponse<Depot>>, AppError> {
    let controller = DepotController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_depot(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = DepotController::new(state.pool.clone());
    let response = controller.delete(id).await?;
    Ok(Json(response))
}
