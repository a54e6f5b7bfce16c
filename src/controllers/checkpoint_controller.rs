//! Controller de checkpoints
//!
//! El historial de ruta de un transporte es append-only: hay alta y
//! baja, pero no edición.

use sqlx::PgPool;

use crate::dto::checkpoint_dto::CreateCheckpointRequest;
use crate::dto::ApiResponse;
use crate::models::Checkpoint;
use crate::repositories::CheckpointRepository;
use crate::utils::errors::AppError;

pub struct CheckpointController {
    repository: CheckpointRepository,
}

impl CheckpointController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: CheckpointRepository::new(pool),
        }
    }

    pub async fn list(
        &self,
        transport_id: Option<i64>,
    ) -> Result<ApiResponse<Vec<Checkpoint>>, AppError> {
        let checkpoints = self.repository.find_all(transport_id).await?;
        Ok(ApiResponse::success(checkpoints))
    }

    pub async fn get_by_id(&self, id: i64) -> Result<ApiResponse<Checkpoint>, AppError> {
        let checkpoint = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Checkpoint not found".to_string()))?;

        Ok(ApiResponse::success(checkpoint))
    }

    pub async fn create(
        &self,
        request: CreateCheckpointRequest,
    ) -> Result<ApiResponse<Checkpoint>, AppError> {
        let checkpoint = self.repository.create(&request).await?;

        Ok(ApiResponse::success_with_message(
            checkpoint,
            "Checkpoint created successfully".to_string(),
        ))
    }

    pub async fn delete(&self, id: i64) -> Result<ApiResponse<()>, AppError> {
        let deleted = self.repository.delete(id).await?;
        if !deleted {
            return Err(AppError::NotFound("Checkpoint not found".to_string()));
        }

        Ok(ApiResponse::message_only(
            "Checkpoint deleted successfully".to_string(),
        ))
    }
}
