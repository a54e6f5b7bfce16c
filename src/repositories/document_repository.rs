//! Repositorio de documentos
//!
//! Un documento es inmutable una vez registrado: no hay UPDATE, solo
//! alta (metadatos o subida) y baja.

use sqlx::PgPool;

use crate::dto::document_dto::CreateDocumentRequest;
use crate::models::Document;
use crate::utils::errors::AppError;

pub struct DocumentRepository {
    pool: PgPool,
}

impl DocumentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_all(&self, transport_id: Option<i64>) -> Result<Vec<Document>, AppError> {
        sqlx::query_as::<_, Document>(
            r#"
            SELECT * FROM documents
            WHERE ($1::bigint IS NULL OR transport_id = $1)
            ORDER BY created_at DESC
            "#,
        )
        .bind(transport_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::from_db("Error fetching documents", e))
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Document>, AppError> {
        sqlx::query_as::<_, Document>("SELECT * FROM documents WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::from_db("Error fetching document", e))
    }

    pub async fn find_by_transport(&self, transport_id: i64) -> Result<Vec<Document>, AppError> {
        self.find_all(Some(transport_id)).await
    }

    pub async fn create(&self, request: &CreateDocumentRequest) -> Result<Document, AppError> {
        sqlx::query_as::<_, Document>(
            r#"
            INSERT INTO documents (transport_id, type, file_name, file_path, file_size, uploaded_by)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(request.transport_id)
        .bind(&request.document_type)
        .bind(&request.file_name)
        .bind(&request.file_path)
        .bind(request.file_size)
        .bind(request.uploaded_by)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::from_db("Error creating document", e))
    }

    pub async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM documents WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::from_db("Error deleting document", e))?;

        Ok(result.rows_affected() > 0)
    }
}
