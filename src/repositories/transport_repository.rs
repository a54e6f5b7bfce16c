//! Repositorio de transportes
//!
//! Las lecturas salen siempre por el read-model con los nombres
//! denormalizados de conductor, depósito y terminal.

use sqlx::PgPool;

use crate::dto::transport_dto::CreateTransportRequest;
use crate::models::Transport;
use crate::utils::errors::AppError;

const TRANSPORT_SELECT: &str = r#"
SELECT t.*, u.fullname AS driver_name, d.name AS depot_name, term.name AS terminal_name
FROM transports t
LEFT JOIN users u ON t.driver_id = u.id
LEFT JOIN depots d ON t.depot_id = d.id
LEFT JOIN terminals term ON t.terminal_id = term.id
"#;

pub struct TransportRepository {
    pool: PgPool,
}

impl TransportRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_all(&self) -> Result<Vec<Transport>, AppError> {
        let sql = format!("{} ORDER BY t.created_at DESC", TRANSPORT_SELECT);
        sqlx::query_as::<_, Transport>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::from_db("Error fetching transports", e))
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Transport>, AppError> {
        let sql = format!("{} WHERE t.id = $1", TRANSPORT_SELECT);
        sqlx::query_as::<_, Transport>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::from_db("Error fetching transport", e))
    }

    pub async fn create(&self, request: &CreateTransportRequest) -> Result<Transport, AppError> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO transports (
                unit_number, driver_id, depot_id, terminal_id, destination,
                fuel_type, volume, status, notes, latitude, longitude
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING id
            "#,
        )
        .bind(&request.unit_number)
        .bind(request.driver_id)
        .bind(request.depot_id)
        .bind(request.terminal_id)
        .bind(&request.destination)
        .bind(&request.fuel_type)
        .bind(request.volume)
        .bind(request.status.as_deref().unwrap_or("pending"))
        .bind(&request.notes)
        .bind(request.latitude)
        .bind(request.longitude)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::from_db("Error creating transport", e))?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::DatabaseError("Transport missing after insert".to_string()))
    }

    /// Overwrite completo: el esquema es el mismo del create, incluido el
    /// default de `status` cuando el cuerpo lo omite. A diferencia de
    /// `update_status`, aquí no hay condición sobre el estado observado:
    /// el último escritor gana.
    pub async fn update(
        &self,
        id: i64,
        request: &CreateTransportRequest,
    ) -> Result<Option<Transport>, AppError> {
        let updated: Option<i64> = sqlx::query_scalar(
            r#"
            UPDATE transports SET
                unit_number = $2, driver_id = $3, depot_id = $4, terminal_id = $5,
                destination = $6, fuel_type = $7, volume = $8, status = $9,
                notes = $10, latitude = $11, longitude = $12, updated_at = NOW()
            WHERE id = $1
            RETURNING id
            "#,
        )
        .bind(id)
        .bind(&request.unit_number)
        .bind(request.driver_id)
        .bind(request.depot_id)
        .bind(request.terminal_id)
        .bind(&request.destination)
        .bind(&request.fuel_type)
        .bind(request.volume)
        .bind(request.status.as_deref().unwrap_or("pending"))
        .bind(&request.notes)
        .bind(request.latitude)
        .bind(request.longitude)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::from_db("Error updating transport", e))?;

        match updated {
            Some(id) => self.find_by_id(id).await,
            None => Ok(None),
        }
    }

    /// Transición condicionada al estado observado. Si otra transición ganó
    /// la carrera el UPDATE no afecta filas y se devuelve `None`.
    pub async fn update_status(
        &self,
        id: i64,
        current_status: &str,
        new_status: &str,
    ) -> Result<Option<Transport>, AppError> {
        let result = sqlx::query(
            "UPDATE transports SET status = $3, updated_at = NOW() WHERE id = $1 AND status = $2",
        )
        .bind(id)
        .bind(current_status)
        .bind(new_status)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::from_db("Error updating transport status", e))?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }
        self.find_by_id(id).await
    }

    /// Borra el transporte y sus dependientes (checkpoints, documentos,
    /// pruebas de calidad) dentro de una sola transacción.
    pub async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::from_db("Error starting transaction", e))?;

        sqlx::query("DELETE FROM fuel_quality_tests WHERE transport_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::from_db("Error deleting quality tests", e))?;

        sqlx::query("DELETE FROM documents WHERE transport_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::from_db("Error deleting documents", e))?;

        sqlx::query("DELETE FROM checkpoints WHERE transport_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::from_db("Error deleting checkpoints", e))?;

        let result = sqlx::query("DELETE FROM transports WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::from_db("Error deleting transport", e))?;

        tx.commit()
            .await
            .map_err(|e| AppError::from_db("Error committing transaction", e))?;

        Ok(result.rows_affected() > 0)
    }
}
