//! Rutas de lecturas de caudalímetro

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};

use crate::controllers::FlowMeterController;
use crate::dto::flow_meter_dto::CreateFlowMeterReadingRequest;
use crate::dto::{ApiResponse, ValidatedJson};
use crate::models::FlowMeterReading;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_flow_meter_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_reading))
        .route("/", get(list_readings))
        .route("/:id", get(get_reading))
        .route("/:id", put(update_reading))
        .route("/:id", delete(delete_reading))
}

async fn create_reading(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateFlowMeterReadingRequest>,
) -> Result<(StatusCode, Json<ApiResponse<FlowMeterReading>>), AppError> {
    let controller = FlowMeterController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn list_readings(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<FlowMeterReading>>>, AppError> {
    let controller = FlowMeterController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn get_reading(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<FlowMeterReading>>, AppError> {
    let controller = FlowMeterController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn update_reading(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidatedJson(request): ValidatedJson<CreateFlowMeterReadingRequest>,
) -> Result<Json<ApiResponse<FlowMeterReading>>, AppError> {
    let controller = FlowMeterController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_reading(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = FlowMeterController::new(state.pool.clone());
    let response = controller.delete(id).await?;
    Ok(Json(response))
}
