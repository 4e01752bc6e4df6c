pub mod reports;
pub mod upstream;
