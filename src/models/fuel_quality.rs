//! Modelo de FuelQualityTest

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct FuelQualityTest {
    pub id: i64,
    pub transport_id: i64,
    pub octane_rating: Option<f64>,
    pub density: f64,
    pub temperature: f64,
    pub water_content: f64,
    pub sulfur_content: f64,
    pub test_date: DateTime<Utc>,
    pub tested_by: i64,
    pub status: String,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}
