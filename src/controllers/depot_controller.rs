//! Controller de depósitos

use sqlx::PgPool;

use crate::dto::depot_dto::CreateDepotRequest;
use crate::dto::ApiResponse;
use crate::models::Depot;
use crate::repositories::DepotRepository;
use crate::utils::errors::AppError;

pub struct DepotController {
    repository: DepotRepository,
}

impl DepotController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: DepotRepository::new(pool),
        }
    }

    // El stock no puede superar la capacidad declarada
    fn ensure_stock_fits(request: &CreateDepotRequest) -> Result<(), AppError> {
        if request.current_stock.unwrap_or(0.0) > request.capacity {
            return Err(AppError::ValidationError(vec![
                "current_stock: must not exceed capacity".to_string(),
            ]));
        }
        Ok(())
    }

    pub async fn list(&self) -> Result<ApiResponse<Vec<Depot>>, AppError> {
        let depots = self.repository.find_all().await?;
        Ok(ApiResponse::success(depots))
    }

    pub async fn get_by_id(&self, id: i64) -> Result<ApiResponse<Depot>, AppError> {
        let depot = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Depot not found".to_string()))?;

        Ok(ApiResponse::success(depot))
    }

    pub async fn create(&self, request: CreateDepotRequest) -> Result<ApiResponse<Depot>, AppError> {
        Self::ensure_stock_fits(&request)?;

        let depot = self.repository.create(&request).await?;

        Ok(ApiResponse::success_with_message(
            depot,
            "Depot created successfully".to_string(),
        ))
    }

    pub async fn update(
        &self,
        id: i64,
        request: CreateDepotRequest,
    ) -> Result<ApiResponse<Depot>, AppError> {
        Self::ensure_stock_fits(&request)?;

        let depot = self
            .repository
            .update(id, &request)
            .await?
            .ok_or_else(|| AppError::NotFound("Depot not found".to_string()))?;

        Ok(ApiResponse::success_with_message(
            depot,
            "Depot updated successfully".to_string(),
        ))
    }

    pub async fn delete(&self, id: i64) -> Result<ApiResponse<()>, AppError> {
        let deleted = self.repository.delete(id).await?;
        if !deleted {
            return Err(AppError::NotFound("Depot not found".to_string()));
        }

        Ok(ApiResponse::message_only(
            "Depot deleted successfully".to_string(),
        ))
    }
}
