pub mod config;
pub mod error;
pub mod scholarship;
pub mod telemetry;
