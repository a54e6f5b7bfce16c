//! Rutas de tests de calidad de combustible

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};

use crate::controllers::FuelQualityController;
use crate::dto::fuel_quality_dto::CreateFuelQualityTestRequest;
use crate::dto::{ApiResponse, ValidatedJson};
use crate::models::FuelQualityTest;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_fuel_quality_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_test))
        .route("/", get(list_tests))
        .route("/:id", get(get_test))
        .route("/:id", put(update_test))
        .route("/:id", delete(delete_test))
}

async fn create_test(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateFuelQualityTestRequest>,
) -> Result<(StatusCode, Json<ApiResponse<FuelQualityTest>>), AppError> {
    let controller = FuelQualityController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn list_tests(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<FuelQualityTest>>>, AppError> {
    let controller = FuelQualityController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn get_test(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<FuelQualityTest>>, AppError> {
    let controller = FuelQualityController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn update_test(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidatedJson(request): ValidatedJson<CreateFuelQualityTestRequest>,
) -> Result<Json<ApiResponse<FuelQualityTest>>, AppError> {
    let controller = FuelQualityController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_test(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = FuelQualityController::new(state.pool.clone());
    let response = controller.delete(id).await?;
    Ok(Json(response))
}
