//! Repositorio del registro de actividad
//!
//! Tabla de auditoría append-only: ni UPDATE ni DELETE existen aquí.

use sqlx::PgPool;

use crate::dto::activity_log_dto::CreateActivityLogRequest;
use crate::models::ActivityLog;
use crate::utils::errors::AppError;

pub struct ActivityLogRepository {
    pool: PgPool,
}

impl ActivityLogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_all(
        &self,
        user_id: Option<i64>,
        entity_type: Option<&str>,
    ) -> Result<Vec<ActivityLog>, AppError> {
        sqlx::query_as::<_, ActivityLog>(
            r#"
            SELECT * FROM activity_logs
            WHERE ($1::bigint IS NULL OR user_id = $1)
              AND ($2::text IS NULL OR entity_type = $2)
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .bind(entity_type)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::from_db("Error fetching activity logs", e))
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<ActivityLog>, AppError> {
        sqlx::query_as::<_, ActivityLog>("SELECT * FROM activity_logs WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::from_db("Error fetching activity log", e))
    }

    pub async fn create(&self, request: &CreateActivityLogRequest) -> Result<ActivityLog, AppError> {
        sqlx::query_as::<_, ActivityLog>(
            r#"
            INSERT INTO activity_logs (user_id, action, entity_type, entity_id, details, ip_address, user_agent)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(request.user_id)
        .bind(&request.action)
        .bind(&request.entity_type)
        .bind(request.entity_id)
        .bind(&request.details)
        .bind(&request.ip_address)
        .bind(&request.user_agent)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::from_db("Error creating activity log", e))
    }
}
