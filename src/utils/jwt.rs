//! Utilidades JWT
//!
//! Emisión y verificación de tokens firmados (HS256) que transportan
//! (id de usuario, username, rol). El resto del sistema confía en el
//! claim de rol para decisiones de autorización.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::config::environment::EnvironmentConfig;
use crate::utils::errors::AppError;

/// Claims del JWT
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // user id
    pub username: String,
    pub role: String,
    pub exp: usize,
    pub iat: usize,
}

/// Generar un token para un usuario autenticado
pub fn generate_token(
    user_id: i64,
    username: &str,
    role: &str,
    config: &EnvironmentConfig,
) -> Result<String, AppError> {
    let now = chrono::Utc::now();
    let expires_at = now + chrono::Duration::seconds(config.jwt_expiration as i64);

    let claims = Claims {
        sub: user_id.to_string(),
        username: username.to_string(),
        role: role.to_string(),
        exp: expires_at.timestamp() as usize,
        iat: now.timestamp() as usize,
    };

    let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_ref());

    encode(&Header::default(), &claims, &encoding_key)
        .map_err(|e| AppError::Internal(format!("Error generating token: {}", e)))
}

/// Verificar y decodificar un token
pub fn verify_token(token: &str, config: &EnvironmentConfig) -> Result<Claims, AppError> {
    let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_ref());

    let token_data = decode::<Claims>(token, &decoding_key, &Validation::default())
        .map_err(|_| AppError::Unauthorized("Invalid or expired token".to_string()))?;

    Ok(token_data.claims)
}

/// Extraer el token del header Authorization
pub fn extract_token_from_header(auth_header: &str) -> Result<&str, AppError> {
    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::Unauthorized("Authorization header must be 'Bearer <token>'".to_string()))?;

    if token.is_empty() {
        return Err(AppError::Unauthorized("Token cannot be empty".to_string()));
    }

    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> EnvironmentConfig {
        EnvironmentConfig {
            environment: "test".to_string(),
            port: 3000,
            host: "0.0.0.0".to_string(),
            jwt_secret: "test-secret-key".to_string(),
            jwt_expiration: 3600,
            upload_dir: "uploads".to_string(),
            max_upload_size: 5 * 1024 * 1024,
            request_timeout_seconds: 30,
        }
    }

    #[test]
    fn test_token_round_trip() {
        let config = test_config();
        let token = generate_token(42, "budi", "driver", &config).unwrap();
        let claims = verify_token(&token, &config).unwrap();

        assert_eq!(claims.sub, "42");
        assert_eq!(claims.username, "budi");
        assert_eq!(claims.role, "driver");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let config = test_config();
        let token = generate_token(1, "admin1", "admin", &config).unwrap();

        let mut other = test_config();
        other.jwt_secret = "a-different-secret".to_string();
        assert!(verify_token(&token, &other).is_err());
    }

    #[test]
    fn test_extract_token_from_header() {
        assert_eq!(extract_token_from_header("Bearer abc.def.ghi").unwrap(), "abc.def.ghi");
        assert!(extract_token_from_header("Basic abc").is_err());
        assert!(extract_token_from_header("Bearer ").is_err());
        assert!(extract_token_from_header("").is_err());
    }
}
