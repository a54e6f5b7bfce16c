use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::User;

// Request para crear un usuario
#[derive(Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct CreateUserRequest {
    #[validate(
        length(min = 3, max = 30, message = "must be between 3 and 30 characters"),
        regex(
            path = "crate::utils::validation::USERNAME_RE",
            message = "must contain only letters and numbers"
        )
    )]
    pub username: String,

    #[validate(length(min = 6, message = "must be at least 6 characters"))]
    pub password: String,

    #[validate(length(min = 2, max = 100, message = "must be between 2 and 100 characters"))]
    pub fullname: String,

    #[validate(custom = "crate::utils::validation::validate_role")]
    pub role: String,
}

// Request para actualizar un usuario (la contraseña no cambia por esta vía)
#[derive(Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct UpdateUserRequest {
    #[validate(
        length(min = 3, max = 30, message = "must be between 3 and 30 characters"),
        regex(
            path = "crate::utils::validation::USERNAME_RE",
            message = "must contain only letters and numbers"
        )
    )]
    pub username: String,

    #[validate(length(min = 2, max = 100, message = "must be between 2 and 100 characters"))]
    pub fullname: String,

    #[validate(custom = "crate::utils::validation::validate_role")]
    pub role: String,
}

// Login request
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "is required"))]
    pub username: String,

    #[validate(length(min = 1, message = "is required"))]
    pub password: String,
}

// Response de usuario (sin password)
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub fullname: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            fullname: user.fullname,
            role: user.role,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

// Identidad resumida que acompaña al token en el login
#[derive(Debug, Serialize)]
pub struct LoginUser {
    pub id: i64,
    pub username: String,
    pub fullname: String,
    pub role: String,
}

// Response de login
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub user: LoginUser,
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_user_rejects_short_username() {
        let request = CreateUserRequest {
            username: "ab".to_string(),
            password: "secret123".to_string(),
            fullname: "Ahmad Subarjo".to_string(),
            role: "driver".to_string(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_create_user_rejects_non_alphanumeric_username() {
        let request = CreateUserRequest {
            username: "driver one".to_string(),
            password: "secret123".to_string(),
            fullname: "Ahmad Subarjo".to_string(),
            role: "driver".to_string(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_create_user_rejects_unknown_role() {
        let request = CreateUserRequest {
            username: "driver01".to_string(),
            password: "secret123".to_string(),
            fullname: "Ahmad Subarjo".to_string(),
            role: "superuser".to_string(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_create_user_accepts_valid_payload() {
        let request = CreateUserRequest {
            username: "driver01".to_string(),
            password: "secret123".to_string(),
            fullname: "Ahmad Subarjo".to_string(),
            role: "driver".to_string(),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_create_user_denies_unknown_fields() {
        let body = r#"{
            "username": "driver01",
            "password": "secret123",
            "fullname": "Ahmad Subarjo",
            "role": "driver",
            "is_admin": true
        }"#;
        assert!(serde_json::from_str::<CreateUserRequest>(body).is_err());
    }

    #[test]
    fn test_user_response_never_carries_password() {
        let json = serde_json::to_value(UserResponse {
            id: 1,
            username: "driver01".to_string(),
            fullname: "Ahmad Subarjo".to_string(),
            role: "driver".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        })
        .unwrap();
        assert!(json.get("password").is_none());
    }
}
