use chrono::{DateTime, Utc};
use serde::Deserialize;
use validator::Validate;

// Request para registrar/actualizar una prueba de calidad de combustible
#[derive(Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct CreateFuelQualityTestRequest {
    #[validate(custom = "crate::utils::validation::validate_positive_id")]
    pub transport_id: i64,

    pub octane_rating: Option<f64>,

    pub density: f64,

    pub temperature: f64,

    #[validate(custom = "crate::utils::validation::validate_non_negative_number")]
    pub water_content: f64,

    #[validate(custom = "crate::utils::validation::validate_non_negative_number")]
    pub sulfur_content: f64,

    // Opcional: por defecto el momento del registro
    pub test_date: Option<DateTime<Utc>>,

    #[validate(custom = "crate::utils::validation::validate_positive_id")]
    pub tested_by: i64,

    // Opcional: por defecto "pending"
    #[validate(custom = "crate::utils::validation::validate_quality_status")]
    pub status: Option<String>,

    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> CreateFuelQualityTestRequest {
        CreateFuelQualityTestRequest {
            transport_id: 1,
            octane_rating: Some(92.0),
            density: 0.845,
            temperature: 28.5,
            water_content: 0.01,
            sulfur_content: 0.003,
            test_date: None,
            tested_by: 4,
            status: None,
            notes: None,
        }
    }

    #[test]
    fn test_valid_quality_test_passes() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_negative_water_content_fails() {
        let mut request = valid_request();
        request.water_content = -0.5;
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_unknown_status_fails() {
        let mut request = valid_request();
        request.status = Some("inconclusive".to_string());
        assert!(request.validate().is_err());
    }
}
