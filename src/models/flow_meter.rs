//! Modelo de FlowMeterReading
//!
//! Lectura de caudalímetro tomada en una terminal. En uso correcto la
//! lectura es monótona no decreciente por medidor, pero el sistema no
//! lo impone.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct FlowMeterReading {
    pub id: i64,
    pub terminal_id: i64,
    pub meter_id: String,
    pub reading: f64,
    pub timestamp: DateTime<Utc>,
    pub operator_id: i64,
    pub fuel_type: String,
    pub created_at: DateTime<Utc>,
}
