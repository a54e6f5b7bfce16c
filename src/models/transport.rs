//! Modelo de Transport
//!
//! Fila de la tabla `transports` más el read-model con los nombres
//! denormalizados de driver/depot/terminal (LEFT JOIN en el repositorio).

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Transport {
    pub id: i64,
    pub unit_number: String,
    pub driver_id: i64,
    pub depot_id: Option<i64>,
    pub terminal_id: Option<i64>,
    pub destination: String,
    pub fuel_type: String,
    pub volume: f64,
    pub status: String,
    pub notes: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    // Read-model join
    pub driver_name: Option<String>,
    pub depot_name: Option<String>,
    pub terminal_name: Option<String>,
}
