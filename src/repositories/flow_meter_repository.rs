//! Repositorio de lecturas de caudalímetro

use sqlx::PgPool;

use crate::dto::flow_meter_dto::CreateFlowMeterReadingRequest;
use crate::models::FlowMeterReading;
use crate::utils::errors::AppError;

pub struct FlowMeterRepository {
    pool: PgPool,
}

impl FlowMeterRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_all(&self) -> Result<Vec<FlowMeterReading>, AppError> {
        sqlx::query_as::<_, FlowMeterReading>(
            "SELECT * FROM flow_meter_readings ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::from_db("Error fetching flow meter readings", e))
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<FlowMeterReading>, AppError> {
        sqlx::query_as::<_, FlowMeterReading>("SELECT * FROM flow_meter_readings WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::from_db("Error fetching flow meter reading", e))
    }

    pub async fn create(
        &self,
        request: &CreateFlowMeterReadingRequest,
    ) -> Result<FlowMeterReading, AppError> {
        sqlx::query_as::<_, FlowMeterReading>(
            r#"
            INSERT INTO flow_meter_readings (terminal_id, meter_id, reading, timestamp, operator_id, fuel_type)
            VALUES ($1, $2, $3, COALESCE($4, NOW()), $5, $6)
            RETURNING *
            "#,
        )
        .bind(request.terminal_id)
        .bind(&request.meter_id)
        .bind(request.reading)
        .bind(request.timestamp)
        .bind(request.operator_id)
        .bind(&request.fuel_type)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::from_db("Error creating flow meter reading", e))
    }

    pub async fn update(
        &self,
        id: i64,
        request: &CreateFlowMeterReadingRequest,
    ) -> Result<Option<FlowMeterReading>, AppError> {
        sqlx::query_as::<_, FlowMeterReading>(
            r#"
            UPDATE flow_meter_readings SET
                terminal_id = $2, meter_id = $3, reading = $4,
                timestamp = COALESCE($5, NOW()), operator_id = $6, fuel_type = $7
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(request.terminal_id)
        .bind(&request.meter_id)
        .bind(request.reading)
        .bind(request.timestamp)
        .bind(request.operator_id)
        .bind(&request.fuel_type)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::from_db("Error updating flow meter reading", e))
    }

    pub async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM flow_meter_readings WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::from_db("Error deleting flow meter reading", e))?;

        Ok(result.rows_affected() > 0)
    }
}
