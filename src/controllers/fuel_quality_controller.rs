//! Controller de pruebas de calidad de combustible

use sqlx::PgPool;

use crate::dto::fuel_quality_dto::CreateFuelQualityTestRequest;
use crate::dto::ApiResponse;
use crate::models::FuelQualityTest;
use crate::repositories::FuelQualityRepository;
use crate::utils::errors::AppError;

pub struct FuelQualityController {
    repository: FuelQualityRepository,
}

impl FuelQualityController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: FuelQualityRepository::new(pool),
        }
    }

    pub async fn list(&self) -> Result<ApiResponse<Vec<FuelQualityTest>>, AppError> {
        let tests = self.repository.find_all().await?;
        Ok(ApiResponse::success(tests))
    }

    pub async fn get_by_id(&self, id: i64) -> Result<ApiResponse<FuelQualityTest>, AppError> {
        let test = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Quality test not found".to_string()))?;

        Ok(ApiResponse::success(test))
    }

    pub async fn create(
        &self,
        request: CreateFuelQualityTestRequest,
    ) -> Result<ApiResponse<FuelQualityTest>, AppError> {
        let test = self.repository.create(&request).await?;

        Ok(ApiResponse::success_with_message(
            test,
            "Quality test created successfully".to_string(),
        ))
    }

    pub async fn update(
        &self,
        id: i64,
        request: CreateFuelQualityTestRequest,
    ) -> Result<ApiResponse<FuelQualityTest>, AppError> {
        let test = self
            .repository
            .update(id, &request)
            .await?
            .ok_or_else(|| AppError::NotFound("Quality test not found".to_string()))?;

        Ok(ApiResponse::success_with_message(
            test,
            "Quality test updated successfully".to_string(),
        ))
    }

    pub async fn delete(&self, id: i64) -> Result<ApiResponse<()>, AppError> {
        let deleted = self.repository.delete(id).await?;
        if !deleted {
            return Err(AppError::NotFound("Quality test not found".to_string()));
        }

        Ok(ApiResponse::message_only(
            "Quality test deleted successfully".to_string(),
        ))
    }
}
