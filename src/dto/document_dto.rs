use serde::Deserialize;
use validator::Validate;

// Request para registrar los metadatos de un documento ya almacenado.
// La subida con archivo entra por multipart en el controller, no por aquí.
#[derive(Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct CreateDocumentRequest {
    #[validate(custom = "crate::utils::validation::validate_positive_id")]
    pub transport_id: i64,

    #[serde(rename = "type")]
    #[validate(custom = "crate::utils::validation::validate_document_type")]
    pub document_type: String,

    #[validate(length(min = 1, message = "is required"))]
    pub file_name: String,

    #[validate(length(min = 1, message = "is required"))]
    pub file_path: String,

    #[validate(range(min = 0, message = "must not be negative"))]
    pub file_size: i64,

    #[validate(custom = "crate::utils::validation::validate_positive_id")]
    pub uploaded_by: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_document_type_fails() {
        let request = CreateDocumentRequest {
            transport_id: 1,
            document_type: "selfie".to_string(),
            file_name: "delivery-order.pdf".to_string(),
            file_path: "/uploads/abc.pdf".to_string(),
            file_size: 1024,
            uploaded_by: 2,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_valid_document_passes() {
        let request = CreateDocumentRequest {
            transport_id: 1,
            document_type: "invoice".to_string(),
            file_name: "delivery-order.pdf".to_string(),
            file_path: "/uploads/abc.pdf".to_string(),
            file_size: 1024,
            uploaded_by: 2,
        };
        assert!(request.validate().is_ok());
    }
}
