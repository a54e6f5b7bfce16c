//! Controller de lecturas de caudalímetro

use sqlx::PgPool;

use crate::dto::flow_meter_dto::CreateFlowMeterReadingRequest;
use crate::dto::ApiResponse;
use crate::models::FlowMeterReading;
use crate::repositories::FlowMeterRepository;
use crate::utils::errors::AppError;

pub struct FlowMeterController {
    repository: FlowMeterRepository,
}

impl FlowMeterController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: FlowMeterRepository::new(pool),
        }
    }

    pub async fn list(&self) -> Result<ApiResponse<Vec<FlowMeterReading>>, AppError> {
        let readings = self.repository.find_all().await?;
        Ok(ApiResponse::success(readings))
    }

    pub async fn get_by_id(&self, id: i64) -> Result<ApiResponse<FlowMeterReading>, AppError> {
        let reading = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Flow meter reading not found".to_string()))?;

        Ok(ApiResponse::success(reading))
    }

    pub async fn create(
        &self,
        request: CreateFlowMeterReadingRequest,
    ) -> Result<ApiResponse<FlowMeterReading>, AppError> {
        let reading = self.repository.create(&request).await?;

        Ok(ApiResponse::success_with_message(
            reading,
            "Flow meter reading created successfully".to_string(),
        ))
    }

    pub async fn update(
        &self,
        id: i64,
        request: CreateFlowMeterReadingRequest,
    ) -> Result<ApiResponse<FlowMeterReading>, AppError> {
        let reading = self
            .repository
            .update(id, &request)
            .await?
            .ok_or_else(|| AppError::NotFound("Flow meter reading not found".to_string()))?;

        Ok(ApiResponse::success_with_message(
            reading,
            "Flow meter reading updated successfully".to_string(),
        ))
    }

    pub async fn delete(&self, id: i64) -> Result<ApiResponse<()>, AppError> {
        let deleted = self.repository.delete(id).await?;
        if !deleted {
            return Err(AppError::NotFound(
                "Flow meter reading not found".to_string(),
            ));
        }

        Ok(ApiResponse::message_only(
            "Flow meter reading deleted successfully".to_string(),
        ))
    }
}
