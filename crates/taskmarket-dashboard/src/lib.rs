/*
[INPUT]:  Public API exports for taskmarket-dashboard crate
[OUTPUT]: Module declarations and public re-exports
[POS]:    Crate root - library entry point
[UPDATE]: When adding new modules or public exports
*/

pub mod app;
pub mod cli;
pub mod config;
pub mod tui;
pub mod view;

// Re-export main types for convenience
pub use app::{CreateTaskInput, Dashboard, DelegationOutcome};
pub use config::DashboardConfig;
