pub mod commission_report;
pub mod consolidated_report;

pub use commission_report::CommissionReport;
pub use consolidated_report::ConsolidatedReport;
