//! Modelo de Document
//!
//! Metadatos de un archivo adjunto a un transporte. Inmutable una vez
//! almacenado: solo se crea y se elimina, nunca se actualiza.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Document {
    pub id: i64,
    pub transport_id: i64,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub document_type: String,
    pub file_name: String,
    pub file_path: String,
    pub file_size: i64,
    pub uploaded_by: i64,
    pub created_at: DateTime<Utc>,
}
