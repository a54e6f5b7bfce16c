//! Rutas de activity logs
//!
//! El registro de auditoría es append-only: se crea y se consulta, nunca
//! se actualiza ni se borra. El listado filtra por usuario o por tipo de
//! entidad.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;

use crate::controllers::ActivityLogController;
use crate::dto::activity_log_dto::CreateActivityLogRequest;
use crate::dto::{ApiResponse, ValidatedJson};
use crate::models::ActivityLog;
use crate::state::AppState;
use crate::utils::errors::AppError;

#[derive(Debug, Deserialize)]
struct ActivityLogFilter {
    user_id: Option<i64>,
    entity_type: Option<String>,
}

pub fn create_activity_log_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_log))
        .route("/", get(list_logs))
        .route("/:id", get(get_log))
}

async fn create_log(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateActivityLogRequest>,
) -> Result<(StatusCode, Json<ApiResponse<ActivityLog>>), AppError> {
    let controller = ActivityLogController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn list_logs(
    State(state): State<AppState>,
    Query(filter): Query<ActivityLogFilter>,
) -> Result<Json<ApiResponse<Vec<ActivityLog>>>, AppError> {
    let controller = ActivityLogController::new(state.pool.clone());
    let response = controller
        .list(filter.user_id, filter.entity_type.as_deref())
        .await?;
    Ok(Json(response))
}

async fn get_log(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<ActivityLog>>, AppError> {
    let controller = ActivityLogController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}
