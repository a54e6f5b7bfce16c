//! Repositorio de terminales

use sqlx::PgPool;

use crate::dto::terminal_dto::CreateTerminalRequest;
use crate::models::Terminal;
use crate::utils::errors::AppError;

pub struct TerminalRepository {
    pool: PgPool,
}

impl TerminalRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_all(&self) -> Result<Vec<Terminal>, AppError> {
        sqlx::query_as::<_, Terminal>("SELECT * FROM terminals ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::from_db("Error fetching terminals", e))
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Terminal>, AppError> {
        sqlx::query_as::<_, Terminal>("SELECT * FROM terminals WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::from_db("Error fetching terminal", e))
    }

    pub async fn create(&self, request: &CreateTerminalRequest) -> Result<Terminal, AppError> {
        sqlx::query_as::<_, Terminal>(
            r#"
            INSERT INTO terminals (name, location, type, capacity, operator_id, latitude, longitude)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(&request.name)
        .bind(&request.location)
        .bind(&request.terminal_type)
        .bind(request.capacity)
        .bind(request.operator_id)
        .bind(request.latitude)
        .bind(request.longitude)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::from_db("Error creating terminal", e))
    }

    pub async fn update(
        &self,
        id: i64,
        request: &CreateTerminalRequest,
    ) -> Result<Option<Terminal>, AppError> {
        sqlx::query_as::<_, Terminal>(
            r#"
            UPDATE terminals SET
                name = $2, location = $3, type = $4, capacity = $5,
                operator_id = $6, latitude = $7, longitude = $8, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&request.name)
        .bind(&request.location)
        .bind(&request.terminal_type)
        .bind(request.capacity)
        .bind(request.operator_id)
        .bind(request.latitude)
        .bind(request.longitude)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::from_db("Error updating terminal", e))
    }

    pub async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM terminals WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::from_db("Error deleting terminal", e))?;

        Ok(result.rows_affected() > 0)
    }
}
