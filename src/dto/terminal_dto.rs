use serde::Deserialize;
use validator::Validate;

// Request para crear/actualizar una terminal (overwrite completo en PUT)
#[derive(Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct CreateTerminalRequest {
    #[validate(length(min = 1, message = "is required"))]
    pub name: String,

    #[validate(length(min = 1, message = "is required"))]
    pub location: String,

    #[serde(rename = "type")]
    #[validate(custom = "crate::utils::validation::validate_terminal_type")]
    pub terminal_type: String,

    #[validate(custom = "crate::utils::validation::validate_positive_number")]
    pub capacity: f64,

    #[validate(custom = "crate::utils::validation::validate_positive_id")]
    pub operator_id: Option<i64>,

    #[validate(range(min = -90.0, max = 90.0, message = "must be between -90 and 90"))]
    pub latitude: Option<f64>,

    #[validate(range(min = -180.0, max = 180.0, message = "must be between -180 and 180"))]
    pub longitude: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> CreateTerminalRequest {
        CreateTerminalRequest {
            name: "Terminal A".to_string(),
            location: "Surabaya".to_string(),
            terminal_type: "loading".to_string(),
            capacity: 50000.0,
            operator_id: None,
            latitude: None,
            longitude: None,
        }
    }

    #[test]
    fn test_type_field_uses_json_name() {
        let body = r#"{
            "name": "Terminal A",
            "location": "Surabaya",
            "type": "both",
            "capacity": 50000
        }"#;
        let request: CreateTerminalRequest = serde_json::from_str(body).unwrap();
        assert_eq!(request.terminal_type, "both");
    }

    #[test]
    fn test_unknown_terminal_type_fails() {
        let mut request = valid_request();
        request.terminal_type = "floating".to_string();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_valid_terminal_passes() {
        assert!(valid_request().validate().is_ok());
    }
}
