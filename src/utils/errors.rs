//! Sistema de manejo de errores
//!
//! Este módulo define todos los tipos de errores de la aplicación
//! y su conversión a respuestas HTTP con el envelope uniforme
//! `{ success, message, error?, errors? }`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::config::environment::is_development;

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error")]
    ValidationError(Vec<String>),

    #[error("Upload rejected: {0}")]
    UploadRejected(String),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Illegal status transition from '{from}' to '{to}'")]
    IllegalTransition { from: String, to: String },

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Cuerpo de error para la API (mismo envelope que las respuestas exitosas)
#[derive(Debug, serde::Serialize)]
struct ErrorResponse {
    success: bool,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<Vec<String>>,
}

impl ErrorResponse {
    fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            error: None,
            errors: None,
        }
    }

    fn with_error(message: impl Into<String>, error: String) -> Self {
        Self {
            error: Some(error),
            ..Self::new(message)
        }
    }
}

impl AppError {
    /// Clasificar un error de sqlx en el miembro más cercano de la taxonomía.
    ///
    /// Violación de unicidad (23505) y de clave foránea (23503) se reportan
    /// como `Conflict`; cualquier otro fallo del store es `DatabaseError`.
    pub fn from_db(context: &str, e: sqlx::Error) -> AppError {
        if let sqlx::Error::Database(ref db_err) = e {
            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return AppError::Conflict(
                            "A record with the same unique value already exists".to_string(),
                        )
                    }
                    "23503" => {
                        return AppError::Conflict(
                            "Operation violates a reference to another record".to_string(),
                        )
                    }
                    _ => {}
                }
            }
        }
        AppError::DatabaseError(format!("{}: {}", context, e))
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) | AppError::UploadRejected(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidCredentials | AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Timeout => StatusCode::REQUEST_TIMEOUT,
            AppError::Conflict(_) | AppError::IllegalTransition { .. } => StatusCode::CONFLICT,
            AppError::DatabaseError(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::ValidationError(flatten_validation_errors(&errors))
    }
}

/// Aplanar los errores de `validator` a un mensaje por campo que falla
/// (todos los campos, no solo el primero).
pub fn flatten_validation_errors(errors: &validator::ValidationErrors) -> Vec<String> {
    use validator::ValidationErrorsKind;

    let mut messages = Vec::new();
    for (field, kind) in errors.errors() {
        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                for fe in field_errors {
                    match &fe.message {
                        Some(msg) => messages.push(format!("{}: {}", field, msg)),
                        None => messages.push(format!("{}: invalid value ({})", field, fe.code)),
                    }
                }
            }
            ValidationErrorsKind::Struct(nested) => {
                messages.extend(flatten_validation_errors(nested));
            }
            ValidationErrorsKind::List(items) => {
                for nested in items.values() {
                    messages.extend(flatten_validation_errors(nested));
                }
            }
        }
    }
    messages.sort();
    messages
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match self {
            AppError::ValidationError(messages) => {
                tracing::warn!("Validation error: {:?}", messages);
                ErrorResponse {
                    errors: Some(messages),
                    ..ErrorResponse::new("Validation error")
                }
            }

            AppError::UploadRejected(reason) => {
                tracing::warn!("Upload rejected: {}", reason);
                ErrorResponse::with_error("Upload rejected", reason)
            }

            // Mensaje genérico deliberado: no revelar si el username existe
            AppError::InvalidCredentials => ErrorResponse::new("Invalid credentials"),

            AppError::Unauthorized(msg) => {
                tracing::warn!("Unauthorized: {}", msg);
                ErrorResponse::new(msg)
            }

            AppError::Forbidden(msg) => {
                tracing::warn!("Forbidden: {}", msg);
                ErrorResponse::new(msg)
            }

            AppError::NotFound(msg) => ErrorResponse::new(msg),

            AppError::Timeout => {
                tracing::warn!("Request timed out");
                ErrorResponse::new("Request timeout")
            }

            AppError::Conflict(msg) => {
                tracing::warn!("Conflict: {}", msg);
                ErrorResponse::new(msg)
            }

            AppError::IllegalTransition { from, to } => {
                tracing::warn!("Illegal status transition: {} -> {}", from, to);
                ErrorResponse::with_error(
                    "Illegal status transition",
                    format!("cannot transition from '{}' to '{}'", from, to),
                )
            }

            AppError::DatabaseError(detail) => {
                tracing::error!("Database error: {}", detail);
                if is_development() {
                    ErrorResponse::with_error("Internal Server Error", detail)
                } else {
                    ErrorResponse::new("Internal Server Error")
                }
            }

            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                if is_development() {
                    ErrorResponse::with_error("Internal Server Error", detail)
                } else {
                    ErrorResponse::new("Internal Server Error")
                }
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::ValidationError(vec![]).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::UploadRejected("too big".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::InvalidCredentials.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::NotFound("Transport not found".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::Conflict("Username already exists".into()).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::IllegalTransition {
                from: "completed".into(),
                to: "pending".into()
            }
            .status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(AppError::Timeout.status_code(), StatusCode::REQUEST_TIMEOUT);
        assert_eq!(
            AppError::DatabaseError("boom".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_validation_error_collects_every_field() {
        use validator::ValidationError;

        let mut errors = validator::ValidationErrors::new();
        let mut username_error = ValidationError::new("length");
        username_error.message = Some("username must be between 3 and 30 characters".into());
        errors.add("username", username_error);
        let mut role_error = ValidationError::new("role");
        role_error.message =
            Some("role must be one of: driver, supervisor, fuelman, glpama, admin".into());
        errors.add("role", role_error);

        let messages = flatten_validation_errors(&errors);
        assert_eq!(messages.len(), 2);
        assert!(messages.iter().any(|m| m.starts_with("username:")));
        assert!(messages.iter().any(|m| m.starts_with("role:")));
    }

    #[test]
    fn test_row_not_found_is_database_error() {
        let err = AppError::from_db("Error fetching transport", sqlx::Error::RowNotFound);
        assert!(matches!(err, AppError::DatabaseError(_)));
    }
}
