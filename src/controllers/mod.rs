//! Controllers: orquestan validación, reglas de negocio y repositorios

pub mod activity_log_controller;
pub mod checkpoint_controller;
pub mod depot_controller;
pub mod document_controller;
pub mod flow_meter_controller;
pub mod fuel_quality_controller;
pub mod terminal_controller;
pub mod transport_controller;
pub mod user_controller;

pub use activity_log_controller::ActivityLogController;
pub use checkpoint_controller::CheckpointController;
pub use depot_controller::DepotController;
pub use document_controller::DocumentController;
pub use flow_meter_controller::FlowMeterController;
pub use fuel_quality_controller::FuelQualityController;
pub use terminal_controller::TerminalController;
pub use transport_controller::TransportController;
pub use user_controller::UserController;
