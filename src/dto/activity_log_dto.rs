use serde::Deserialize;
use validator::Validate;

// Request para registrar una entrada de auditoría (append-only:
// sin update ni delete)
#[derive(Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct CreateActivityLogRequest {
    #[validate(custom = "crate::utils::validation::validate_positive_id")]
    pub user_id: i64,

    #[validate(length(min = 1, message = "is required"))]
    pub action: String,

    #[validate(length(min = 1, message = "is required"))]
    pub entity_type: String,

    #[validate(custom = "crate::utils::validation::validate_positive_id")]
    pub entity_id: i64,

    pub details: Option<String>,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_action_fails() {
        let request = CreateActivityLogRequest {
            user_id: 1,
            action: String::new(),
            entity_type: "transport".to_string(),
            entity_id: 7,
            details: None,
            ip_address: None,
            user_agent: None,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_valid_log_entry_passes() {
        let request = CreateActivityLogRequest {
            user_id: 1,
            action: "status_change".to_string(),
            entity_type: "transport".to_string(),
            entity_id: 7,
            details: Some("pending -> in_transit".to_string()),
            ip_address: Some("10.0.0.4".to_string()),
            user_agent: Some("fuel-ops-spa/2.1".to_string()),
        };
        assert!(request.validate().is_ok());
    }
}
