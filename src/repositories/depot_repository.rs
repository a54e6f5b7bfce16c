//! Repositorio de depósitos

use sqlx::PgPool;

use crate::dto::depot_dto::CreateDepotRequest;
use crate::models::Depot;
use crate::utils::errors::AppError;

pub struct DepotRepository {
    pool: PgPool,
}

impl DepotRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_all(&self) -> Result<Vec<Depot>, AppError> {
        sqlx::query_as::<_, Depot>("SELECT * FROM depots ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::from_db("Error fetching depots", e))
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Depot>, AppError> {
        sqlx::query_as::<_, Depot>("SELECT * FROM depots WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::from_db("Error fetching depot", e))
    }

    pub async fn create(&self, request: &CreateDepotRequest) -> Result<Depot, AppError> {
        sqlx::query_as::<_, Depot>(
            r#"
            INSERT INTO depots (name, location, capacity, current_stock, manager_id, latitude, longitude)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(&request.name)
        .bind(&request.location)
        .bind(request.capacity)
        .bind(request.current_stock.unwrap_or(0.0))
        .bind(request.manager_id)
        .bind(request.latitude)
        .bind(request.longitude)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::from_db("Error creating depot", e))
    }

    pub async fn update(
        &self,
        id: i64,
        request: &CreateDepotRequest,
    ) -> Result<Option<Depot>, AppError> {
        sqlx::query_as::<_, Depot>(
            r#"
            UPDATE depots SET
                name = $2, location = $3, capacity = $4, current_stock = $5,
                manager_id = $6, latitude = $7, longitude = $8, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&request.name)
        .bind(&request.location)
        .bind(request.capacity)
        .bind(request.current_stock.unwrap_or(0.0))
        .bind(request.manager_id)
        .bind(request.latitude)
        .bind(request.longitude)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::from_db("Error updating depot", e))
    }

    pub async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM depots WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::from_db("Error deleting depot", e))?;

        Ok(result.rows_affected() > 0)
    }
}
