//! Utilidades de validación
//!
//! Validadores de dominio para los campos enumerados del sistema
//! (roles, tipos de combustible, estados) y helpers numéricos.
//! Cada validador deja un mensaje por campo; el controlador los
//! reporta todos juntos antes de tocar el repositorio.

use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationError;

lazy_static! {
    /// Username: 3-30 caracteres alfanuméricos
    pub static ref USERNAME_RE: Regex = Regex::new(r"^[a-zA-Z0-9]+$").unwrap();
}

/// Roles de usuario del sistema
pub const USER_ROLES: [&str; 5] = ["driver", "supervisor", "fuelman", "glpama", "admin"];

/// Tipos de combustible transportado
pub const FUEL_TYPES: [&str; 3] = ["gasoline", "diesel", "kerosene"];

/// Estados del workflow de un transporte
pub const TRANSPORT_STATUSES: [&str; 6] = [
    "pending",
    "in_transit",
    "arrived",
    "unloading",
    "completed",
    "cancelled",
];

/// Tipos de terminal (capacidad de carga/descarga)
pub const TERMINAL_TYPES: [&str; 3] = ["loading", "unloading", "both"];

/// Estados de un checkpoint
pub const CHECKPOINT_STATUSES: [&str; 3] = ["passed", "delayed", "stopped"];

/// Tipos de documento adjuntable a un transporte
pub const DOCUMENT_TYPES: [&str; 5] = ["invoice", "receipt", "permit", "inspection", "other"];

/// Estados de un test de calidad de combustible
pub const QUALITY_STATUSES: [&str; 3] = ["passed", "failed", "pending"];

fn one_of(value: &str, allowed: &[&str], code: &'static str) -> Result<(), ValidationError> {
    if allowed.contains(&value) {
        return Ok(());
    }
    let mut error = ValidationError::new(code);
    error.message = Some(format!("must be one of: {}", allowed.join(", ")).into());
    Err(error)
}

pub fn validate_role(value: &str) -> Result<(), ValidationError> {
    one_of(value, &USER_ROLES, "role")
}

pub fn validate_fuel_type(value: &str) -> Result<(), ValidationError> {
    one_of(value, &FUEL_TYPES, "fuel_type")
}

pub fn validate_transport_status(value: &str) -> Result<(), ValidationError> {
    one_of(value, &TRANSPORT_STATUSES, "status")
}

pub fn validate_terminal_type(value: &str) -> Result<(), ValidationError> {
    one_of(value, &TERMINAL_TYPES, "type")
}

pub fn validate_checkpoint_status(value: &str) -> Result<(), ValidationError> {
    one_of(value, &CHECKPOINT_STATUSES, "status")
}

pub fn validate_document_type(value: &str) -> Result<(), ValidationError> {
    one_of(value, &DOCUMENT_TYPES, "type")
}

pub fn validate_quality_status(value: &str) -> Result<(), ValidationError> {
    one_of(value, &QUALITY_STATUSES, "status")
}

fn is_positive<T: PartialOrd + num_traits::Zero>(value: &T) -> bool {
    *value > T::zero()
}

fn is_non_negative<T: PartialOrd + num_traits::Zero>(value: &T) -> bool {
    *value >= T::zero()
}

/// Validar que un número sea estrictamente positivo (volúmenes, capacidades)
pub fn validate_positive_number(value: f64) -> Result<(), ValidationError> {
    if is_positive(&value) {
        return Ok(());
    }
    let mut error = ValidationError::new("positive");
    error.message = Some("must be a positive number".into());
    Err(error)
}

/// Validar que un número no sea negativo (lecturas, stock)
pub fn validate_non_negative_number(value: f64) -> Result<(), ValidationError> {
    if is_non_negative(&value) {
        return Ok(());
    }
    let mut error = ValidationError::new("non_negative");
    error.message = Some("must not be negative".into());
    Err(error)
}

/// Validar que un id referencie algo plausible (> 0)
pub fn validate_positive_id(value: i64) -> Result<(), ValidationError> {
    if value > 0 {
        return Ok(());
    }
    let mut error = ValidationError::new("id");
    error.message = Some("must be a positive integer".into());
    Err(error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_role() {
        for role in USER_ROLES {
            assert!(validate_role(role).is_ok());
        }
        assert!(validate_role("superuser").is_err());
        assert!(validate_role("").is_err());
        assert!(validate_role("Driver").is_err());
    }

    #[test]
    fn test_validate_fuel_type() {
        assert!(validate_fuel_type("diesel").is_ok());
        assert!(validate_fuel_type("gasoline").is_ok());
        assert!(validate_fuel_type("kerosene").is_ok());
        assert!(validate_fuel_type("petrol").is_err());
    }

    #[test]
    fn test_validate_transport_status() {
        for status in TRANSPORT_STATUSES {
            assert!(validate_transport_status(status).is_ok());
        }
        assert!(validate_transport_status("bogus").is_err());
        assert!(validate_transport_status("in transit").is_err());
    }

    #[test]
    fn test_validate_terminal_type() {
        assert!(validate_terminal_type("loading").is_ok());
        assert!(validate_terminal_type("unloading").is_ok());
        assert!(validate_terminal_type("both").is_ok());
        assert!(validate_terminal_type("neither").is_err());
    }

    #[test]
    fn test_validate_document_type() {
        assert!(validate_document_type("invoice").is_ok());
        assert!(validate_document_type("other").is_ok());
        assert!(validate_document_type("photo").is_err());
    }

    #[test]
    fn test_enum_error_message_lists_allowed_values() {
        let err = validate_checkpoint_status("waiting").unwrap_err();
        let message = err.message.unwrap();
        assert!(message.contains("passed"));
        assert!(message.contains("delayed"));
        assert!(message.contains("stopped"));
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number(5000.0).is_ok());
        assert!(validate_positive_number(0.5).is_ok());
        assert!(validate_positive_number(0.0).is_err());
        assert!(validate_positive_number(-1.0).is_err());
    }

    #[test]
    fn test_validate_non_negative_number() {
        assert!(validate_non_negative_number(0.0).is_ok());
        assert!(validate_non_negative_number(12.3).is_ok());
        assert!(validate_non_negative_number(-0.1).is_err());
    }

    #[test]
    fn test_validate_positive_id() {
        assert!(validate_positive_id(1).is_ok());
        assert!(validate_positive_id(0).is_err());
        assert!(validate_positive_id(-7).is_err());
    }

    #[test]
    fn test_username_regex() {
        assert!(USERNAME_RE.is_match("driver01"));
        assert!(USERNAME_RE.is_match("ABC123"));
        assert!(!USERNAME_RE.is_match("user name"));
        assert!(!USERNAME_RE.is_match("user-name"));
        assert!(!USERNAME_RE.is_match(""));
    }
}
