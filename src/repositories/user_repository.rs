//! Repositorio de usuarios

use sqlx::PgPool;

use crate::dto::user_dto::{CreateUserRequest, UpdateUserRequest};
use crate::models::User;
use crate::utils::errors::AppError;

pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_all(&self) -> Result<Vec<User>, AppError> {
        sqlx::query_as::<_, User>("SELECT * FROM users ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::from_db("Error fetching users", e))
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::from_db("Error fetching user", e))
    }

    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE username = $1")
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::from_db("Error fetching user", e))
    }

    pub async fn create(
        &self,
        request: &CreateUserRequest,
        password_hash: &str,
    ) -> Result<User, AppError> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, password, fullname, role)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(&request.username)
        .bind(password_hash)
        .bind(&request.fullname)
        .bind(&request.role)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::from_db("Error creating user", e))
    }

    pub async fn update(
        &self,
        id: i64,
        request: &UpdateUserRequest,
    ) -> Result<Option<User>, AppError> {
        sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET username = $2, fullname = $3, role = $4, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&request.username)
        .bind(&request.fullname)
        .bind(&request.role)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::from_db("Error updating user", e))
    }

    pub async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::from_db("Error deleting user", e))?;

        Ok(result.rows_affected() > 0)
    }

    /// Un usuario con transportes asignados como conductor no puede borrarse
    pub async fn has_assigned_transports(&self, id: i64) -> Result<bool, AppError> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM transports WHERE driver_id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| AppError::from_db("Error checking assigned transports", e))?;

        Ok(result.0)
    }

    pub fn validate_password(&self, plain: &str, hash: &str) -> Result<bool, AppError> {
        bcrypt::verify(plain, hash)
            .map_err(|e| AppError::Internal(format!("Error verifying password: {}", e)))
    }
}
