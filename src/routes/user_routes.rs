//! Rutas de usuarios
//!
//! CRUD más `POST /login`. El login convive bajo `/api/users` igual que
//! en el resto de recursos; no hay un router de auth separado.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};

use crate::controllers::UserController;
use crate::dto::user_dto::{
    CreateUserRequest, LoginRequest, LoginResponse, UpdateUserRequest, UserResponse,
};
use crate::dto::{ApiResponse, ValidatedJson};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_user_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_user))
        .route("/", get(list_users))
        .route("/login", post(login))
        .route("/:id", get(get_user))
        .route("/:id", put(update_user))
        .route("/:id", delete(delete_user))
}

async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateUserRequest>,
) -> Result<(StatusCode, Json<ApiResponse<UserResponse>>), AppError> {
    let controller = UserController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<UserResponse>>>, AppError> {
    let controller = UserController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<UserResponse>>, AppError> {
    let controller = UserController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidatedJson(request): ValidatedJson<UpdateUserRequest>,
) -> Result<Json<ApiResponse<UserResponse>>, AppError> {
    let controller = UserController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = UserController::new(state.pool.clone());
    let response = controller.delete(id).await?;
    Ok(Json(response))
}

async fn login(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> Result<Json<ApiResponse<LoginResponse>>, AppError> {
    let controller = UserController::new(state.pool.clone());
    let response = controller.login(&state.config, request).await?;
    Ok(Json(response))
}
