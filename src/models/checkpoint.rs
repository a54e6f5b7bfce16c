//! Modelo de Checkpoint
//!
//! Waypoint con timestamp registrado contra un transporte. Historial
//! append-only: no existe operación de actualización.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Checkpoint {
    pub id: i64,
    pub transport_id: i64,
    pub location: String,
    pub timestamp: DateTime<Utc>,
    pub status: String,
    pub notes: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub created_at: DateTime<Utc>,
}
