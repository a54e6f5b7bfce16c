//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno y variables de configuración.

use std::env;

/// Límite por defecto para uploads de documentos (5 MB)
pub const DEFAULT_MAX_UPLOAD_SIZE: usize = 5 * 1024 * 1024;

/// Límite para cuerpos JSON (10 MB, igual que el backend original)
pub const JSON_BODY_LIMIT: usize = 10 * 1024 * 1024;

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    pub jwt_secret: String,
    pub jwt_expiration: u64,
    pub upload_dir: String,
    pub max_upload_size: usize,
    pub request_timeout_seconds: u64,
}

impl EnvironmentConfig {
    /// Leer la configuración desde variables de entorno.
    ///
    /// Solo JWT_SECRET es obligatoria; el resto tiene los defaults del
    /// backend original (puerto 3000, uploads de 5 MB, timeout de 30 s).
    pub fn from_env() -> Self {
        Self {
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            jwt_secret: env::var("JWT_SECRET").expect("JWT_SECRET must be set"),
            jwt_expiration: env::var("JWT_EXPIRATION")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(86_400),
            upload_dir: env::var("UPLOAD_DIR").unwrap_or_else(|_| "uploads".to_string()),
            max_upload_size: env::var("MAX_UPLOAD_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_MAX_UPLOAD_SIZE),
            request_timeout_seconds: env::var("REQUEST_TIMEOUT_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
        }
    }

    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Verificar si estamos en modo producción
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Obtener la dirección del servidor
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Modo desarrollo leído directamente del entorno del proceso.
///
/// Los detalles de errores 500 solo se exponen en este modo; se consulta
/// aquí porque la conversión de errores no tiene acceso al estado.
pub fn is_development() -> bool {
    env::var("ENVIRONMENT")
        .map(|e| e == "development")
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> EnvironmentConfig {
        EnvironmentConfig {
            environment: "test".to_string(),
            port: 3000,
            host: "0.0.0.0".to_string(),
            jwt_secret: "secret".to_string(),
            jwt_expiration: 3600,
            upload_dir: "uploads".to_string(),
            max_upload_size: DEFAULT_MAX_UPLOAD_SIZE,
            request_timeout_seconds: 30,
        }
    }

    #[test]
    fn test_server_addr() {
        let config = test_config();
        assert_eq!(config.server_addr(), "0.0.0.0:3000");
    }

    #[test]
    fn test_environment_flags() {
        let mut config = test_config();
        assert!(!config.is_development());
        config.environment = "development".to_string();
        assert!(config.is_development());
        assert!(!config.is_production());
    }
}
