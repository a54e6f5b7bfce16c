//! Repositorio de pruebas de calidad de combustible

use sqlx::PgPool;

use crate::dto::fuel_quality_dto::CreateFuelQualityTestRequest;
use crate::models::FuelQualityTest;
use crate::utils::errors::AppError;

pub struct FuelQualityRepository {
    pool: PgPool,
}

impl FuelQualityRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_all(&self) -> Result<Vec<FuelQualityTest>, AppError> {
        sqlx::query_as::<_, FuelQualityTest>(
            "SELECT * FROM fuel_quality_tests ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::from_db("Error fetching quality tests", e))
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<FuelQualityTest>, AppError> {
        sqlx::query_as::<_, FuelQualityTest>("SELECT * FROM fuel_quality_tests WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::from_db("Error fetching quality test", e))
    }

    pub async fn create(
        &self,
        request: &CreateFuelQualityTestRequest,
    ) -> Result<FuelQualityTest, AppError> {
        sqlx::query_as::<_, FuelQualityTest>(
            r#"
            INSERT INTO fuel_quality_tests (
                transport_id, octane_rating, density, temperature, water_content,
                sulfur_content, test_date, tested_by, status, notes
            )
            VALUES ($1, $2, $3, $4, $5, $6, COALESCE($7, NOW()), $8, $9, $10)
            RETURNING *
            "#,
        )
        .bind(request.transport_id)
        .bind(request.octane_rating)
        .bind(request.density)
        .bind(request.temperature)
        .bind(request.water_content)
        .bind(request.sulfur_content)
        .bind(request.test_date)
        .bind(request.tested_by)
        .bind(request.status.as_deref().unwrap_or("pending"))
        .bind(&request.notes)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::from_db("Error creating quality test", e))
    }

    pub async fn update(
        &self,
        id: i64,
        request: &CreateFuelQualityTestRequest,
    ) -> Result<Option<FuelQualityTest>, AppError> {
        sqlx::query_as::<_, FuelQualityTest>(
            r#"
            UPDATE fuel_quality_tests SET
                transport_id = $2, octane_rating = $3, density = $4, temperature = $5,
                water_content = $6, sulfur_content = $7, test_date = COALESCE($8, NOW()),
                tested_by = $9, status = $10, notes = $11
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(request.transport_id)
        .bind(request.octane_rating)
        .bind(request.density)
        .bind(request.temperature)
        .bind(request.water_content)
        .bind(request.sulfur_content)
        .bind(request.test_date)
        .bind(request.tested_by)
        .bind(request.status.as_deref().unwrap_or("pending"))
        .bind(&request.notes)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::from_db("Error updating quality test", e))
    }

    pub async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM fuel_quality_tests WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::from_db("Error deleting quality test", e))?;

        Ok(result.rows_affected() > 0)
    }
}
