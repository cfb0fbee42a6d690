// Core modules
pub mod analysis;
pub mod config;
pub mod data;
pub mod domain;
pub mod error;
pub mod export;
pub mod report;

// Re-export commonly used types
pub use analysis::{DashboardKpis, PlatformBreakdown};
pub use data::load_campaigns;
pub use domain::{CampaignRecord, Platform};
pub use error::FixtureError;

// CLI argument parsing
use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Root of the dashboard bundle to validate
    #[arg(long, default_value = config::DASHBOARD_ROOT_DEFAULT)]
    pub dashboard_root: PathBuf,

    /// Skip the bundle file-structure checks (fixture-only run)
    #[arg(long, default_value_t = false)]
    pub skip_files: bool,
}
