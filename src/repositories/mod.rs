//! Repositorios: acceso a datos por entidad
//!
//! Cada repositorio liga únicamente los campos de un request ya validado;
//! nunca se persiste un cuerpo de petición tal cual llega.

pub mod activity_log_repository;
pub mod checkpoint_repository;
pub mod depot_repository;
pub mod document_repository;
pub mod flow_meter_repository;
pub mod fuel_quality_repository;
pub mod terminal_repository;
pub mod transport_repository;
pub mod user_repository;

pub use activity_log_repository::ActivityLogRepository;
pub use checkpoint_repository::CheckpointRepository;
pub use depot_repository::DepotRepository;
pub use document_repository::DocumentRepository;
pub use flow_meter_repository::FlowMeterRepository;
pub use fuel_quality_repository::FuelQualityRepository;
pub use terminal_repository::TerminalRepository;
pub use transport_repository::TransportRepository;
pub use user_repository::UserRepository;
