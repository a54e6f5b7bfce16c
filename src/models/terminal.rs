//! Modelo de Terminal

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Terminal {
    pub id: i64,
    pub name: String,
    pub location: String,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub terminal_type: String,
    pub capacity: f64,
    pub operator_id: Option<i64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
