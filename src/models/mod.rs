//! Modelos de dominio mapeados a las tablas de PostgreSQL

pub mod activity_log;
pub mod checkpoint;
pub mod depot;
pub mod document;
pub mod flow_meter;
pub mod fuel_quality;
pub mod terminal;
pub mod transport;
pub mod user;

pub use activity_log::ActivityLog;
pub use checkpoint::Checkpoint;
pub use depot::Depot;
pub use document::Document;
pub use flow_meter::FlowMeterReading;
pub use fuel_quality::FuelQualityTest;
pub use terminal::Terminal;
pub use transport::Transport;
pub use user::User;
