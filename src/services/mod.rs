//! Servicios de dominio

pub mod lifecycle;
pub mod upload;

pub use lifecycle::TransportStatus;
pub use upload::UploadService;
