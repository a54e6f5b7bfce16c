//! Servicio de almacenamiento de archivos subidos
//!
//! Valida nombre, extensión, MIME y tamaño antes de escribir nada en
//! disco. Los archivos se guardan bajo un nombre generado (UUID) dentro
//! de `UPLOAD_DIR` y se sirven en la ruta pública `/uploads`.

use std::path::PathBuf;

use uuid::Uuid;

use crate::config::EnvironmentConfig;
use crate::utils::errors::AppError;

/// Extensiones admitidas para documentos de un transporte
pub const ALLOWED_EXTENSIONS: [&str; 6] = ["pdf", "doc", "docx", "jpg", "jpeg", "png"];

/// MIME types coherentes con las extensiones admitidas
pub const ALLOWED_MIME_TYPES: [&str; 5] = [
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    "image/jpeg",
    "image/png",
];

/// Archivo ya escrito en disco, listo para registrarse como documento
#[derive(Debug)]
pub struct StoredFile {
    /// Nombre original saneado, tal como se mostrará al cliente
    pub file_name: String,
    /// Ruta pública bajo `/uploads`
    pub file_path: String,
    pub file_size: i64,
}

pub struct UploadService {
    upload_dir: PathBuf,
    max_upload_size: usize,
}

impl UploadService {
    pub fn new(config: &EnvironmentConfig) -> Self {
        Self {
            upload_dir: PathBuf::from(&config.upload_dir),
            max_upload_size: config.max_upload_size,
        }
    }

    /// Nombre base sin componentes de ruta ni caracteres de control.
    /// `..\..\evil.pdf` y `/etc/passwd` quedan reducidos a su último
    /// segmento.
    pub fn sanitize_file_name(name: &str) -> String {
        let normalized = name.replace('\\', "/");
        let base = normalized.rsplit('/').next().unwrap_or("");
        base.chars().filter(|c| !c.is_control()).collect::<String>().trim().to_string()
    }

    fn extension_of(name: &str) -> Option<String> {
        let (_, extension) = name.rsplit_once('.')?;
        if extension.is_empty() {
            return None;
        }
        Some(extension.to_ascii_lowercase())
    }

    /// Valida y escribe el archivo; devuelve los datos para la fila de
    /// documento. Cualquier rechazo ocurre antes de tocar el disco.
    pub async fn store(
        &self,
        original_name: &str,
        content_type: Option<&str>,
        data: &[u8],
    ) -> Result<StoredFile, AppError> {
        let file_name = Self::sanitize_file_name(original_name);
        if file_name.is_empty() {
            return Err(AppError::UploadRejected("file name is empty".to_string()));
        }

        let extension = Self::extension_of(&file_name)
            .filter(|e| ALLOWED_EXTENSIONS.contains(&e.as_str()))
            .ok_or_else(|| {
                AppError::UploadRejected(format!(
                    "file type not allowed (allowed: {})",
                    ALLOWED_EXTENSIONS.join(", ")
                ))
            })?;

        if let Some(mime) = content_type {
            if !ALLOWED_MIME_TYPES.contains(&mime) {
                return Err(AppError::UploadRejected(format!(
                    "content type '{}' not allowed",
                    mime
                )));
            }
        }

        if data.len() > self.max_upload_size {
            return Err(AppError::UploadRejected(format!(
                "file exceeds the maximum upload size of {} bytes",
                self.max_upload_size
            )));
        }

        let stored_name = format!("{}.{}", Uuid::new_v4(), extension);
        let disk_path = self.upload_dir.join(&stored_name);

        tokio::fs::create_dir_all(&self.upload_dir)
            .await
            .map_err(|e| AppError::Internal(format!("Error creating upload directory: {}", e)))?;
        tokio::fs::write(&disk_path, data)
            .await
            .map_err(|e| AppError::Internal(format!("Error writing uploaded file: {}", e)))?;

        Ok(StoredFile {
            file_name,
            file_path: format!("/uploads/{}", stored_name),
            file_size: data.len() as i64,
        })
    }

    /// Borrado best-effort del archivo detrás de una ruta pública. Las
    /// rutas que no apunten a un nombre plano generado aquí se ignoran.
    pub async fn remove_public_file(&self, public_path: &str) {
        let Some(stored_name) = public_path.strip_prefix("/uploads/") else {
            return;
        };
        if stored_name.is_empty() || stored_name.contains('/') || stored_name.contains("..") {
            return;
        }

        let disk_path = self.upload_dir.join(stored_name);
        if let Err(e) = tokio::fs::remove_file(&disk_path).await {
            tracing::warn!(
                "Could not remove stored file {}: {}",
                disk_path.display(),
                e
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service_with(dir: PathBuf, max: usize) -> UploadService {
        UploadService {
            upload_dir: dir,
            max_upload_size: max,
        }
    }

    fn temp_dir() -> PathBuf {
        std::env::temp_dir().join(format!("fuel-uploads-{}", Uuid::new_v4()))
    }

    #[test]
    fn test_sanitize_strips_path_components() {
        assert_eq!(
            UploadService::sanitize_file_name("../../etc/passwd"),
            "passwd"
        );
        assert_eq!(
            UploadService::sanitize_file_name("..\\..\\evil.pdf"),
            "evil.pdf"
        );
        assert_eq!(
            UploadService::sanitize_file_name("/tmp/delivery-order.pdf"),
            "delivery-order.pdf"
        );
        assert_eq!(
            UploadService::sanitize_file_name("surat jalan.pdf"),
            "surat jalan.pdf"
        );
    }

    #[test]
    fn test_extension_is_case_insensitive() {
        assert_eq!(
            UploadService::extension_of("SCAN.PDF"),
            Some("pdf".to_string())
        );
        assert_eq!(UploadService::extension_of("noextension"), None);
        assert_eq!(UploadService::extension_of("trailingdot."), None);
    }

    #[tokio::test]
    async fn test_store_rejects_disallowed_extension() {
        let service = service_with(temp_dir(), 1024);
        let err = service
            .store("malware.exe", None, b"MZ")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::UploadRejected(_)));
    }

    #[tokio::test]
    async fn test_store_rejects_disallowed_mime() {
        let service = service_with(temp_dir(), 1024);
        let err = service
            .store("document.pdf", Some("application/x-sh"), b"%PDF")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::UploadRejected(_)));
    }

    #[tokio::test]
    async fn test_store_rejects_oversize_payload() {
        let service = service_with(temp_dir(), 8);
        let err = service
            .store("document.pdf", Some("application/pdf"), &[0u8; 9])
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::UploadRejected(_)));
    }

    #[tokio::test]
    async fn test_store_writes_file_under_generated_name() {
        let dir = temp_dir();
        let service = service_with(dir.clone(), 1024);

        let stored = service
            .store("surat-jalan.PDF", Some("application/pdf"), b"%PDF-1.4")
            .await
            .unwrap();

        assert_eq!(stored.file_name, "surat-jalan.PDF");
        assert_eq!(stored.file_size, 8);
        assert!(stored.file_path.starts_with("/uploads/"));
        assert!(stored.file_path.ends_with(".pdf"));

        let stored_name = stored.file_path.strip_prefix("/uploads/").unwrap();
        let on_disk = tokio::fs::read(dir.join(stored_name)).await.unwrap();
        assert_eq!(on_disk, b"%PDF-1.4");

        tokio::fs::remove_dir_all(&dir).await.ok();
    }

    #[tokio::test]
    async fn test_remove_public_file_ignores_foreign_paths() {
        let dir = temp_dir();
        let service = service_with(dir.clone(), 1024);

        let stored = service
            .store("receipt.png", Some("image/png"), b"\x89PNG")
            .await
            .unwrap();

        // Rutas fuera de /uploads o con traversal no tocan el disco
        service.remove_public_file("/etc/passwd").await;
        service.remove_public_file("/uploads/../escape.png").await;

        let stored_name = stored.file_path.strip_prefix("/uploads/").unwrap();
        assert!(dir.join(stored_name).exists());

        service.remove_public_file(&stored.file_path).await;
        assert!(!dir.join(stored_name).exists());

        tokio::fs::remove_dir_all(&dir).await.ok();
    }
}
