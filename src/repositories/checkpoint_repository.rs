//! Repositorio de checkpoints
//!
//! El historial de una ruta es append-only: no hay UPDATE.

use sqlx::PgPool;

use crate::dto::checkpoint_dto::CreateCheckpointRequest;
use crate::models::Checkpoint;
use crate::utils::errors::AppError;

pub struct CheckpointRepository {
    pool: PgPool,
}

impl CheckpointRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_all(&self, transport_id: Option<i64>) -> Result<Vec<Checkpoint>, AppError> {
        sqlx::query_as::<_, Checkpoint>(
            r#"
            SELECT * FROM checkpoints
            WHERE ($1::bigint IS NULL OR transport_id = $1)
            ORDER BY created_at DESC
            "#,
        )
        .bind(transport_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::from_db("Error fetching checkpoints", e))
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Checkpoint>, AppError> {
        sqlx::query_as::<_, Checkpoint>("SELECT * FROM checkpoints WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::from_db("Error fetching checkpoint", e))
    }

    pub async fn create(&self, request: &CreateCheckpointRequest) -> Result<Checkpoint, AppError> {
        sqlx::query_as::<_, Checkpoint>(
            r#"
            INSERT INTO checkpoints (transport_id, location, timestamp, status, notes, latitude, longitude)
            VALUES ($1, $2, COALESCE($3, NOW()), $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(request.transport_id)
        .bind(&request.location)
        .bind(request.timestamp)
        .bind(&request.status)
        .bind(&request.notes)
        .bind(request.latitude)
        .bind(request.longitude)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::from_db("Error creating checkpoint", e))
    }

    pub async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM checkpoints WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::from_db("Error deleting checkpoint", e))?;

        Ok(result.rows_affected() > 0)
    }
}
