// Metric aggregation over campaign records
pub mod metrics;

// Re-export commonly used types
pub use metrics::{DashboardKpis, PlatformBreakdown};
