//! Rutas de transportes
//!
//! El PATCH de estado es la única ruta protegida de toda la API: pasa por
//! el middleware de auth y recibe el usuario autenticado como extensión.

use axum::{
    extract::{Extension, Path, State},
    http::StatusCode,
    middleware,
    routing::{delete, get, patch, post, put},
    Json, Router,
};

use crate::controllers::TransportController;
use crate::dto::transport_dto::{CreateTransportRequest, UpdateTransportStatusRequest};
use crate::dto::{ApiResponse, ValidatedJson};
use crate::middleware::auth::{auth_middleware, AuthenticatedUser};
use crate::models::Transport;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_transport_router(state: AppState) -> Router<AppState> {
    let status_routes = Router::new()
        .route("/:id/status", patch(update_transport_status))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware));

    Router::new()
        .route("/", post(create_transport))
        .route("/", get(list_transports))
        .route("/:id", get(get_transport))
        .route("/:id", put(update_transport))
        .route("/:id", delete(delete_transport))
        .merge(status_routes)
}

async fn create_transport(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateTransportRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Transport>>), AppError> {
    let controller = TransportController::new(state.pool.clone(), &state.config);
    let response = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn list_transports(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Transport>>>, AppError> {
    let controller = TransportController::new(state.pool.clone(), &state.config);
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn get_transport(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<Transport>>, AppError> {
    let controller = TransportController::new(state.pool.clone(), &state.config);
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn update_transport(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidatedJson(request): ValidatedJson<CreateTransportRequest>,
) -> Result<Json<ApiResponse<Transport>>, AppError> {
    let controller = TransportController::new(state.pool.clone(), &state.config);
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn update_transport_status(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Extension(user): Extension<AuthenticatedUser>,
    ValidatedJson(request): ValidatedJson<UpdateTransportStatusRequest>,
) -> Result<Json<ApiResponse<Transport>>, AppError> {
    let controller = TransportController::new(state.pool.clone(), &state.config);
    let response = controller.update_status(id, &user, request).await?;
    Ok(Json(response))
}

async fn delete_transport(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = TransportController::new(state.pool.clone(), &state.config);
    let response = controller.delete(id).await?;
    Ok(Json(response))
}
