// Pass/fail validation report for the dashboard bundle
pub mod checks;
pub mod summary;

// Re-export commonly used types
pub use checks::{Check, CheckReport, check_bundle_files, check_fixture_sample, check_kpis};
pub use summary::render_report;
