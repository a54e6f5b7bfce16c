//! Controller del registro de actividad
//!
//! Auditoría append-only: solo lectura y alta.

use sqlx::PgPool;

use crate::dto::activity_log_dto::CreateActivityLogRequest;
use crate::dto::ApiResponse;
use crate::models::ActivityLog;
use crate::repositories::ActivityLogRepository;
use crate::utils::errors::AppError;

pub struct ActivityLogController {
    repository: ActivityLogRepository,
}

impl ActivityLogController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: ActivityLogRepository::new(pool),
        }
    }

    pub async fn list(
        &self,
        user_id: Option<i64>,
        entity_type: Option<&str>,
    ) -> Result<ApiResponse<Vec<ActivityLog>>, AppError> {
        let logs = self.repository.find_all(user_id, entity_type).await?;
        Ok(ApiResponse::success(logs))
    }

    pub async fn get_by_id(&self, id: i64) -> Result<ApiResponse<ActivityLog>, AppError> {
        let log = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Activity log not found".to_string()))?;

        Ok(ApiResponse::success(log))
    }

    pub async fn create(
        &self,
        request: CreateActivityLogRequest,
    ) -> Result<ApiResponse<ActivityLog>, AppError> {
        let log = self.repository.create(&request).await?;

        Ok(ApiResponse::success_with_message(
            log,
            "Activity log created successfully".to_string(),
        ))
    }
}
