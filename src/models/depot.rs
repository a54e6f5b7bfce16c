//! Modelo de Depot

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Depot {
    pub id: i64,
    pub name: String,
    pub location: String,
    pub capacity: f64,
    pub current_stock: f64,
    pub manager_id: Option<i64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
