use chrono::{DateTime, Utc};
use serde::Deserialize;
use validator::Validate;

// Request para registrar/corregir una lectura de caudalímetro
#[derive(Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct CreateFlowMeterReadingRequest {
    #[validate(custom = "crate::utils::validation::validate_positive_id")]
    pub terminal_id: i64,

    #[validate(length(min = 1, message = "is required"))]
    pub meter_id: String,

    #[validate(custom = "crate::utils::validation::validate_non_negative_number")]
    pub reading: f64,

    // Opcional: por defecto el momento del registro
    pub timestamp: Option<DateTime<Utc>>,

    #[validate(custom = "crate::utils::validation::validate_positive_id")]
    pub operator_id: i64,

    #[validate(custom = "crate::utils::validation::validate_fuel_type")]
    pub fuel_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_reading_fails() {
        let request = CreateFlowMeterReadingRequest {
            terminal_id: 1,
            meter_id: "FM-01".to_string(),
            reading: -10.0,
            timestamp: None,
            operator_id: 2,
            fuel_type: "diesel".to_string(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_zero_reading_is_allowed() {
        let request = CreateFlowMeterReadingRequest {
            terminal_id: 1,
            meter_id: "FM-01".to_string(),
            reading: 0.0,
            timestamp: None,
            operator_id: 2,
            fuel_type: "diesel".to_string(),
        };
        assert!(request.validate().is_ok());
    }
}
