//! Modelo de User
//!
//! Fila completa de la tabla `users`. El hash de password solo vive aquí;
//! nunca se serializa hacia la API (ver `dto::user_dto::UserResponse`).

use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password: String,
    pub fullname: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
