use chrono::{DateTime, Utc};
use serde::Deserialize;
use validator::Validate;

// Request para registrar un checkpoint. El historial es append-only:
// no existe request de actualización.
#[derive(Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct CreateCheckpointRequest {
    #[validate(custom = "crate::utils::validation::validate_positive_id")]
    pub transport_id: i64,

    #[validate(length(min = 1, message = "is required"))]
    pub location: String,

    // Opcional: por defecto el momento del registro
    pub timestamp: Option<DateTime<Utc>>,

    #[validate(custom = "crate::utils::validation::validate_checkpoint_status")]
    pub status: String,

    pub notes: Option<String>,

    #[validate(range(min = -90.0, max = 90.0, message = "must be between -90 and 90"))]
    pub latitude: Option<f64>,

    #[validate(range(min = -180.0, max = 180.0, message = "must be between -180 and 180"))]
    pub longitude: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_status_fails() {
        let request = CreateCheckpointRequest {
            transport_id: 1,
            location: "KM 45 Tol Cikampek".to_string(),
            timestamp: None,
            status: "vanished".to_string(),
            notes: None,
            latitude: None,
            longitude: None,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_valid_checkpoint_passes() {
        let request = CreateCheckpointRequest {
            transport_id: 1,
            location: "KM 45 Tol Cikampek".to_string(),
            timestamp: None,
            status: "passed".to_string(),
            notes: Some("normal traffic".to_string()),
            latitude: Some(-6.3),
            longitude: Some(107.2),
        };
        assert!(request.validate().is_ok());
    }
}
