use serde::Deserialize;
use validator::Validate;

// Request para crear un transporte. El PUT reutiliza el mismo esquema:
// la actualización es un overwrite completo, no un patch.
#[derive(Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct CreateTransportRequest {
    #[validate(length(min = 1, message = "is required"))]
    pub unit_number: String,

    #[validate(custom = "crate::utils::validation::validate_positive_id")]
    pub driver_id: i64,

    #[validate(custom = "crate::utils::validation::validate_positive_id")]
    pub depot_id: Option<i64>,

    #[validate(custom = "crate::utils::validation::validate_positive_id")]
    pub terminal_id: Option<i64>,

    #[validate(length(min = 1, message = "is required"))]
    pub destination: String,

    #[validate(custom = "crate::utils::validation::validate_fuel_type")]
    pub fuel_type: String,

    #[validate(custom = "crate::utils::validation::validate_positive_number")]
    pub volume: f64,

    // Opcional en el create: por defecto "pending"
    #[validate(custom = "crate::utils::validation::validate_transport_status")]
    pub status: Option<String>,

    pub notes: Option<String>,

    #[validate(range(min = -90.0, max = 90.0, message = "must be between -90 and 90"))]
    pub latitude: Option<f64>,

    #[validate(range(min = -180.0, max = 180.0, message = "must be between -180 and 180"))]
    pub longitude: Option<f64>,
}

// Cambio de estado vía PATCH /api/transports/:id/status
#[derive(Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct UpdateTransportStatusRequest {
    #[validate(custom = "crate::utils::validation::validate_transport_status")]
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> CreateTransportRequest {
        CreateTransportRequest {
            unit_number: "TRK001".to_string(),
            driver_id: 1,
            depot_id: None,
            terminal_id: None,
            destination: "Terminal A".to_string(),
            fuel_type: "diesel".to_string(),
            volume: 5000.0,
            status: None,
            notes: None,
            latitude: None,
            longitude: None,
        }
    }

    #[test]
    fn test_valid_transport_passes() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_zero_volume_fails() {
        let mut request = valid_request();
        request.volume = 0.0;
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_negative_volume_fails() {
        let mut request = valid_request();
        request.volume = -1.0;
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_unknown_fuel_type_fails() {
        let mut request = valid_request();
        request.fuel_type = "plutonium".to_string();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_explicit_status_must_be_enum_member() {
        let mut request = valid_request();
        request.status = Some("teleported".to_string());
        assert!(request.validate().is_err());

        request.status = Some("in_transit".to_string());
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_out_of_range_latitude_fails() {
        let mut request = valid_request();
        request.latitude = Some(95.0);
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_status_injection_of_unknown_field_is_rejected() {
        let body = r#"{
            "unit_number": "TRK001",
            "driver_id": 1,
            "destination": "Terminal A",
            "fuel_type": "diesel",
            "volume": 5000,
            "owner_override": true
        }"#;
        assert!(serde_json::from_str::<CreateTransportRequest>(body).is_err());
    }

    #[test]
    fn test_update_status_rejects_bogus_value() {
        let request = UpdateTransportStatusRequest {
            status: "bogus".to_string(),
        };
        assert!(request.validate().is_err());
    }
}
