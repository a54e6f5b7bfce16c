use serde::Deserialize;
use validator::Validate;

// Request para crear/actualizar un depósito (overwrite completo en PUT).
// La regla cruzada current_stock <= capacity se verifica en el controller.
#[derive(Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct CreateDepotRequest {
    #[validate(length(min = 1, message = "is required"))]
    pub name: String,

    #[validate(length(min = 1, message = "is required"))]
    pub location: String,

    #[validate(custom = "crate::utils::validation::validate_positive_number")]
    pub capacity: f64,

    // Opcional: por defecto 0
    #[validate(custom = "crate::utils::validation::validate_non_negative_number")]
    pub current_stock: Option<f64>,

    #[validate(custom = "crate::utils::validation::validate_positive_id")]
    pub manager_id: Option<i64>,

    #[validate(range(min = -90.0, max = 90.0, message = "must be between -90 and 90"))]
    pub latitude: Option<f64>,

    #[validate(range(min = -180.0, max = 180.0, message = "must be between -180 and 180"))]
    pub longitude: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_capacity_fails() {
        let request = CreateDepotRequest {
            name: "Depot Utara".to_string(),
            location: "Jakarta".to_string(),
            capacity: 0.0,
            current_stock: None,
            manager_id: None,
            latitude: None,
            longitude: None,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_negative_stock_fails() {
        let request = CreateDepotRequest {
            name: "Depot Utara".to_string(),
            location: "Jakarta".to_string(),
            capacity: 10000.0,
            current_stock: Some(-5.0),
            manager_id: None,
            latitude: None,
            longitude: None,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_valid_depot_passes() {
        let request = CreateDepotRequest {
            name: "Depot Utara".to_string(),
            location: "Jakarta".to_string(),
            capacity: 10000.0,
            current_stock: Some(2500.0),
            manager_id: Some(3),
            latitude: Some(-6.2),
            longitude: Some(106.8),
        };
        assert!(request.validate().is_ok());
    }
}
