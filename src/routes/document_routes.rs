//! Rutas de documentos
//!
//! Incluye el upload multipart. Este router lleva su propio límite de
//! cuerpo (el doble del tamaño máximo de archivo, para dejar sitio a los
//! boundaries y campos del multipart); el límite exacto por archivo se
//! aplica en el servicio de upload.

use axum::{
    extract::{DefaultBodyLimit, Multipart, Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use serde::Deserialize;

use crate::config::EnvironmentConfig;
use crate::controllers::DocumentController;
use crate::dto::document_dto::CreateDocumentRequest;
use crate::dto::{ApiResponse, ValidatedJson};
use crate::models::Document;
use crate::state::AppState;
use crate::utils::errors::AppError;

#[derive(Debug, Deserialize)]
struct DocumentFilter {
    transport_id: Option<i64>,
}

pub fn create_document_router(config: &EnvironmentConfig) -> Router<AppState> {
    Router::new()
        .route("/", post(create_document))
        .route("/", get(list_documents))
        .route("/upload", post(upload_document))
        .route("/:id", get(get_document))
        .route("/:id", delete(delete_document))
        .layer(DefaultBodyLimit::max(config.max_upload_size * 2))
}

async fn create_document(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateDocumentRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Document>>), AppError> {
    let controller = DocumentController::new(state.pool.clone(), &state.config);
    let response = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn list_documents(
    State(state): State<AppState>,
    Query(filter): Query<DocumentFilter>,
) -> Result<Json<ApiResponse<Vec<Document>>>, AppError> {
    let controller = DocumentController::new(state.pool.clone(), &state.config);
    let response = controller.list(filter.transport_id).await?;
    Ok(Json(response))
}

async fn upload_document(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<ApiResponse<Document>>), AppError> {
    let controller = DocumentController::new(state.pool.clone(), &state.config);
    let response = controller.upload(multipart).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn get_document(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<Document>>, AppError> {
    let controller = DocumentController::new(state.pool.clone(), &state.config);
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn delete_document(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = DocumentController::new(state.pool.clone(), &state.config);
    let response = controller.delete(id).await?;
    Ok(Json(response))
}
