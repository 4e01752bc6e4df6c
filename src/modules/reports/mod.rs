pub mod controllers;
pub mod models;
pub mod services;

pub use controllers::configure;
pub use models::{CommissionReport, ConsolidatedReport};
pub use services::{ReportService, CARD_MOVEMENT_LIMIT};
