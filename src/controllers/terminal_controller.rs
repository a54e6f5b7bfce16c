//! Controller de terminales

use sqlx::PgPool;

use crate::dto::terminal_dto::CreateTerminalRequest;
use crate::dto::ApiResponse;
use crate::models::Terminal;
use crate::repositories::TerminalRepository;
use crate::utils::errors::AppError;

pub struct TerminalController {
    repository: TerminalRepository,
}

impl TerminalController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: TerminalRepository::new(pool),
        }
    }

    pub async fn list(&self) -> Result<ApiResponse<Vec<Terminal>>, AppError> {
        let terminals = self.repository.find_all().await?;
        Ok(ApiResponse::success(terminals))
    }

    pub async fn get_by_id(&self, id: i64) -> Result<ApiResponse<Terminal>, AppError> {
        let terminal = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Terminal not found".to_string()))?;

        Ok(ApiResponse::success(terminal))
    }

    pub async fn create(
        &self,
        request: CreateTerminalRequest,
    ) -> Result<ApiResponse<Terminal>, AppError> {
        let terminal = self.repository.create(&request).await?;

        Ok(ApiResponse::success_with_message(
            terminal,
            "Terminal created successfully".to_string(),
        ))
    }

    pub async fn update(
        &self,
        id: i64,
        request: CreateTerminalRequest,
    ) -> Result<ApiResponse<Terminal>, AppError> {
        let terminal = self
            .repository
            .update(id, &request)
            .await?
            .ok_or_else(|| AppError::NotFound("Terminal not found".to_string()))?;

        Ok(ApiResponse::success_with_message(
            terminal,
            "Terminal updated successfully".to_string(),
        ))
    }

    pub async fn delete(&self, id: i64) -> Result<ApiResponse<()>, AppError> {
        let deleted = self.repository.delete(id).await?;
        if !deleted {
            return Err(AppError::NotFound("Terminal not found".to_string()));
        }

        Ok(ApiResponse::message_only(
            "Terminal deleted successfully".to_string(),
        ))
    }
}
