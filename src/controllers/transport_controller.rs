//! Controller de transportes
//!
//! Además del CRUD, aplica las dos reglas que el resto del sistema da
//! por hechas: el conductor referenciado existe y tiene rol `driver`,
//! y los cambios de estado pasan por la máquina de estados con su
//! control de roles.

use sqlx::PgPool;

use crate::config::EnvironmentConfig;
use crate::dto::transport_dto::{CreateTransportRequest, UpdateTransportStatusRequest};
use crate::dto::ApiResponse;
use crate::middleware::auth::AuthenticatedUser;
use crate::models::Transport;
use crate::repositories::{DocumentRepository, TransportRepository, UserRepository};
use crate::services::lifecycle;
use crate::services::UploadService;
use crate::utils::errors::AppError;

pub struct TransportController {
    repository: TransportRepository,
    users: UserRepository,
    documents: DocumentRepository,
    uploads: UploadService,
}

impl TransportController {
    pub fn new(pool: PgPool, config: &EnvironmentConfig) -> Self {
        Self {
            repository: TransportRepository::new(pool.clone()),
            users: UserRepository::new(pool.clone()),
            documents: DocumentRepository::new(pool),
            uploads: UploadService::new(config),
        }
    }

    async fn ensure_driver(&self, driver_id: i64) -> Result<(), AppError> {
        match self.users.find_by_id(driver_id).await? {
            Some(user) if user.role == "driver" => Ok(()),
            _ => Err(AppError::ValidationError(vec![
                "driver_id: must reference an existing user with role driver".to_string(),
            ])),
        }
    }

    pub async fn list(&self) -> Result<ApiResponse<Vec<Transport>>, AppError> {
        let transports = self.repository.find_all().await?;
        Ok(ApiResponse::success(transports))
    }

    pub async fn get_by_id(&self, id: i64) -> Result<ApiResponse<Transport>, AppError> {
        let transport = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Transport not found".to_string()))?;

        Ok(ApiResponse::success(transport))
    }

    pub async fn create(
        &self,
        request: CreateTransportRequest,
    ) -> Result<ApiResponse<Transport>, AppError> {
        self.ensure_driver(request.driver_id).await?;

        let transport = self.repository.create(&request).await?;

        Ok(ApiResponse::success_with_message(
            transport,
            "Transport created successfully".to_string(),
        ))
    }

    pub async fn update(
        &self,
        id: i64,
        request: CreateTransportRequest,
    ) -> Result<ApiResponse<Transport>, AppError> {
        self.ensure_driver(request.driver_id).await?;

        let transport = self
            .repository
            .update(id, &request)
            .await?
            .ok_or_else(|| AppError::NotFound("Transport not found".to_string()))?;

        Ok(ApiResponse::success_with_message(
            transport,
            "Transport updated successfully".to_string(),
        ))
    }

    /// Cambio de estado: enum (400) → existencia (404) → legalidad (409)
    /// → rol (403). El UPDATE queda condicionado al estado observado; si
    /// otra transición gana la carrera el resultado es un conflicto, nunca
    /// una doble transición.
    pub async fn update_status(
        &self,
        id: i64,
        actor: &AuthenticatedUser,
        request: UpdateTransportStatusRequest,
    ) -> Result<ApiResponse<Transport>, AppError> {
        let transport = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Transport not found".to_string()))?;

        let (from, to) =
            lifecycle::authorize_transition(&transport.status, &request.status, &actor.role)?;

        let updated = self
            .repository
            .update_status(id, from.as_str(), to.as_str())
            .await?
            .ok_or_else(|| {
                AppError::Conflict("Transport status changed concurrently".to_string())
            })?;

        Ok(ApiResponse::success_with_message(
            updated,
            "Transport status updated successfully".to_string(),
        ))
    }

    pub async fn delete(&self, id: i64) -> Result<ApiResponse<()>, AppError> {
        // Los archivos de los documentos dependientes se limpian después
        // del commit, best-effort
        let documents = self.documents.find_by_transport(id).await?;

        let deleted = self.repository.delete(id).await?;
        if !deleted {
            return Err(AppError::NotFound("Transport not found".to_string()));
        }

        for document in &documents {
            self.uploads.remove_public_file(&document.file_path).await;
        }

        Ok(ApiResponse::message_only(
            "Transport deleted successfully".to_string(),
        ))
    }
}
