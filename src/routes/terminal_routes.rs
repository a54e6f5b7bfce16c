//! Rutas de terminales

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};

use crate::controllers::TerminalController;
use crate::dto::terminal_dto::CreateTerminalRequest;
use crate::dto::{ApiResponse, ValidatedJson};
use crate::models::Terminal;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_terminal_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_terminal))
        .route("/", get(list_terminals))
        .route("/:id", get(get_terminal))
        .route("/:id", put(update_terminal))
        .route("/:id", delete(delete_terminal))
}

async fn create_terminal(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateTerminalRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Terminal>>), AppError> {
    let controller = TerminalController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn list_terminals(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Terminal>>>, AppError> {
    let controller = TerminalController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn get_terminal(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<Terminal>>, AppError> {
    let controller = TerminalController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn update_terminal(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidatedJson(request): ValidatedJson<CreateTerminalRequest>,
) -> Result<Json<ApiResponse<Terminal>>, AppError> {
    let controller = TerminalController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_terminal(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = TerminalController::new(state.pool.clone());
    let response = controller.delete(id).await?;
    Ok(Json(response))
}
