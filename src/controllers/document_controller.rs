//! Controller de documentos
//!
//! Dos vías de alta: metadatos de un archivo ya almacenado (POST JSON)
//! y subida multipart que valida y escribe el archivo antes de registrar
//! la fila. Un documento no se edita; solo se borra, y el borrado intenta
//! retirar también el archivo.

use axum::extract::Multipart;
use sqlx::PgPool;

use crate::config::EnvironmentConfig;
use crate::dto::document_dto::CreateDocumentRequest;
use crate::dto::ApiResponse;
use crate::models::Document;
use crate::repositories::DocumentRepository;
use crate::services::UploadService;
use crate::utils::errors::AppError;
use crate::utils::validation::{validate_document_type, DOCUMENT_TYPES};

pub struct DocumentController {
    repository: DocumentRepository,
    uploads: UploadService,
}

impl DocumentController {
    pub fn new(pool: PgPool, config: &EnvironmentConfig) -> Self {
        Self {
            repository: DocumentRepository::new(pool),
            uploads: UploadService::new(config),
        }
    }

    pub async fn list(
        &self,
        transport_id: Option<i64>,
    ) -> Result<ApiResponse<Vec<Document>>, AppError> {
        let documents = self.repository.find_all(transport_id).await?;
        Ok(ApiResponse::success(documents))
    }

    pub async fn get_by_id(&self, id: i64) -> Result<ApiResponse<Document>, AppError> {
        let document = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Document not found".to_string()))?;

        Ok(ApiResponse::success(document))
    }

    pub async fn create(
        &self,
        request: CreateDocumentRequest,
    ) -> Result<ApiResponse<Document>, AppError> {
        let document = self.repository.create(&request).await?;

        Ok(ApiResponse::success_with_message(
            document,
            "Document created successfully".to_string(),
        ))
    }

    /// Subida multipart: campo `file` más transport_id, type y
    /// uploaded_by como campos de texto. Los metadatos se validan antes
    /// de escribir nada en disco.
    pub async fn upload(&self, mut multipart: Multipart) -> Result<ApiResponse<Document>, AppError> {
        let mut file: Option<(String, Option<String>, Vec<u8>)> = None;
        let mut transport_id: Option<i64> = None;
        let mut document_type: Option<String> = None;
        let mut uploaded_by: Option<i64> = None;

        while let Some(field) = multipart.next_field().await.map_err(|e| {
            AppError::UploadRejected(format!("invalid multipart payload: {}", e))
        })? {
            let field_name = field.name().map(ToString::to_string);
            match field_name.as_deref() {
                Some("file") => {
                    let original_name = field
                        .file_name()
                        .map(ToString::to_string)
                        .ok_or_else(|| {
                            AppError::UploadRejected(
                                "file part is missing a file name".to_string(),
                            )
                        })?;
                    let content_type = field.content_type().map(ToString::to_string);
                    let data = field.bytes().await.map_err(|e| {
                        AppError::UploadRejected(format!("could not read file: {}", e))
                    })?;
                    file = Some((original_name, content_type, data.to_vec()));
                }
                Some("transport_id") => {
                    transport_id = Some(Self::parse_id_field(
                        "transport_id",
                        &Self::text_field(field).await?,
                    )?);
                }
                Some("type") => {
                    document_type = Some(Self::text_field(field).await?);
                }
                Some("uploaded_by") => {
                    uploaded_by = Some(Self::parse_id_field(
                        "uploaded_by",
                        &Self::text_field(field).await?,
                    )?);
                }
                // Campos desconocidos del form se ignoran
                _ => {}
            }
        }

        let (original_name, content_type, data) = file.ok_or_else(|| {
            AppError::UploadRejected("missing 'file' field".to_string())
        })?;
        let transport_id = transport_id.ok_or_else(|| {
            AppError::ValidationError(vec!["transport_id: is required".to_string()])
        })?;
        let document_type = document_type.ok_or_else(|| {
            AppError::ValidationError(vec!["type: is required".to_string()])
        })?;
        let uploaded_by = uploaded_by.ok_or_else(|| {
            AppError::ValidationError(vec!["uploaded_by: is required".to_string()])
        })?;

        if validate_document_type(&document_type).is_err() {
            return Err(AppError::ValidationError(vec![format!(
                "type: must be one of: {}",
                DOCUMENT_TYPES.join(", ")
            )]));
        }

        let stored = self
            .uploads
            .store(&original_name, content_type.as_deref(), &data)
            .await?;

        let request = CreateDocumentRequest {
            transport_id,
            document_type,
            file_name: stored.file_name,
            file_path: stored.file_path,
            file_size: stored.file_size,
            uploaded_by,
        };

        // Si la fila no se puede registrar, el archivo recién escrito
        // no debe quedar huérfano
        let document = match self.repository.create(&request).await {
            Ok(document) => document,
            Err(e) => {
                self.uploads.remove_public_file(&request.file_path).await;
                return Err(e);
            }
        };

        Ok(ApiResponse::success_with_message(
            document,
            "Document uploaded successfully".to_string(),
        ))
    }

    pub async fn delete(&self, id: i64) -> Result<ApiResponse<()>, AppError> {
        let document = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Document not found".to_string()))?;

        let deleted = self.repository.delete(id).await?;
        if !deleted {
            return Err(AppError::NotFound("Document not found".to_string()));
        }

        self.uploads.remove_public_file(&document.file_path).await;

        Ok(ApiResponse::message_only(
            "Document deleted successfully".to_string(),
        ))
    }

    async fn text_field(field: axum::extract::multipart::Field<'_>) -> Result<String, AppError> {
        field
            .text()
            .await
            .map_err(|e| AppError::UploadRejected(format!("could not read form field: {}", e)))
    }

    fn parse_id_field(name: &str, value: &str) -> Result<i64, AppError> {
        match value.trim().parse::<i64>() {
            Ok(id) if id > 0 => Ok(id),
            _ => Err(AppError::ValidationError(vec![format!(
                "{}: must be a positive integer",
                name
            )])),
        }
    }
}
