//! DTOs de entrada/salida de la API
//!
//! Todas las respuestas usan el envelope `ApiResponse` y todos los cuerpos
//! de mutación entran por `ValidatedJson`, que deserializa y valida antes
//! de que el controller toque el repositorio.

use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Json,
};
use serde::{de::DeserializeOwned, Serialize};
use validator::Validate;

use crate::utils::errors::AppError;

pub mod activity_log_dto;
pub mod checkpoint_dto;
pub mod depot_dto;
pub mod document_dto;
pub mod flow_meter_dto;
pub mod fuel_quality_dto;
pub mod terminal_dto;
pub mod transport_dto;
pub mod user_dto;

// Response genérica
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    pub fn success_with_message(data: T, message: String) -> Self {
        Self {
            success: true,
            message: Some(message),
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    pub fn message_only(message: String) -> Self {
        Self {
            success: true,
            message: Some(message),
            data: None,
        }
    }

    pub fn error(message: String) -> Self {
        Self {
            success: false,
            message: Some(message),
            data: None,
        }
    }
}

/// Extractor que deserializa el JSON y corre las reglas de `validator`.
///
/// Un cuerpo malformado o con campos faltantes produce el mismo 400
/// `Validation error` que una regla de campo que falla, nunca el 422
/// plano de axum.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::ValidationError(vec![rejection.body_text()]))?;
        value.validate()?;
        Ok(Self(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_omits_message() {
        let response = ApiResponse::success(42);
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["data"], 42);
        assert!(json.get("message").is_none());
    }

    #[test]
    fn test_message_only_omits_data() {
        let response = ApiResponse::message_only("User deleted successfully".to_string());
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "User deleted successfully");
        assert!(json.get("data").is_none());
    }

    #[test]
    fn test_error_is_unsuccessful() {
        let response = ApiResponse::error("Route not found".to_string());
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Route not found");
    }
}
