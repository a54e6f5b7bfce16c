//! Controller de usuarios
//!
//! CRUD de usuarios más el login. El login devuelve el mismo envelope
//! genérico tanto si el username no existe como si la contraseña no
//! coincide.

use sqlx::PgPool;

use crate::config::EnvironmentConfig;
use crate::dto::user_dto::{
    CreateUserRequest, LoginRequest, LoginResponse, LoginUser, UpdateUserRequest, UserResponse,
};
use crate::dto::ApiResponse;
use crate::repositories::UserRepository;
use crate::utils::errors::AppError;
use crate::utils::jwt::generate_token;

pub struct UserController {
    repository: UserRepository,
}

impl UserController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: UserRepository::new(pool),
        }
    }

    pub async fn list(&self) -> Result<ApiResponse<Vec<UserResponse>>, AppError> {
        let users = self.repository.find_all().await?;
        let users: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();
        Ok(ApiResponse::success(users))
    }

    pub async fn get_by_id(&self, id: i64) -> Result<ApiResponse<UserResponse>, AppError> {
        let user = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        Ok(ApiResponse::success(user.into()))
    }

    pub async fn create(
        &self,
        request: CreateUserRequest,
    ) -> Result<ApiResponse<UserResponse>, AppError> {
        // Unicidad del username antes del insert; la constraint única
        // respalda la carrera con otro create concurrente
        if self
            .repository
            .find_by_username(&request.username)
            .await?
            .is_some()
        {
            return Err(AppError::Conflict("Username already exists".to_string()));
        }

        let password_hash = bcrypt::hash(&request.password, bcrypt::DEFAULT_COST)
            .map_err(|e| AppError::Internal(format!("Error hashing password: {}", e)))?;

        let user = self.repository.create(&request, &password_hash).await?;

        Ok(ApiResponse::success_with_message(
            user.into(),
            "User created successfully".to_string(),
        ))
    }

    pub async fn update(
        &self,
        id: i64,
        request: UpdateUserRequest,
    ) -> Result<ApiResponse<UserResponse>, AppError> {
        // El username nuevo no puede pertenecer a otro usuario
        if let Some(existing) = self.repository.find_by_username(&request.username).await? {
            if existing.id != id {
                return Err(AppError::Conflict("Username already exists".to_string()));
            }
        }

        let user = self
            .repository
            .update(id, &request)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        Ok(ApiResponse::success_with_message(
            user.into(),
            "User updated successfully".to_string(),
        ))
    }

    pub async fn delete(&self, id: i64) -> Result<ApiResponse<()>, AppError> {
        if self.repository.has_assigned_transports(id).await? {
            return Err(AppError::Conflict(
                "User has transports assigned and cannot be deleted".to_string(),
            ));
        }

        let deleted = self.repository.delete(id).await?;
        if !deleted {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        Ok(ApiResponse::message_only(
            "User deleted successfully".to_string(),
        ))
    }

    pub async fn login(
        &self,
        config: &EnvironmentConfig,
        request: LoginRequest,
    ) -> Result<ApiResponse<LoginResponse>, AppError> {
        let user = self
            .repository
            .find_by_username(&request.username)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        if !self
            .repository
            .validate_password(&request.password, &user.password)?
        {
            return Err(AppError::InvalidCredentials);
        }

        let token = generate_token(user.id, &user.username, &user.role, config)?;

        Ok(ApiResponse::success_with_message(
            LoginResponse {
                user: LoginUser {
                    id: user.id,
                    username: user.username,
                    fullname: user.fullname,
                    role: user.role,
                },
                token,
            },
            "Login successful".to_string(),
        ))
    }
}
