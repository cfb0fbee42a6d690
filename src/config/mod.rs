//! Configuration module for the K2Motor demo toolkit.

pub mod company;
pub mod dashboard;
pub mod demo;
pub mod metrics;
pub mod persistence;
pub mod theme;

// Re-export commonly used items
pub use company::COMPANY;
pub use dashboard::{DASHBOARD, DashboardConfig};
pub use demo::DEMO_SETTINGS;
pub use metrics::{ATTRIBUTION_FACTOR, MARGIN_FACTOR, ROAS_SANITY_MAX, ROAS_SANITY_MIN};
pub use persistence::{
    BUNDLE_REQUIRED_FILES, CAMPAIGN_FIXTURE_PATH, CONFIG_JS_PATH, DASHBOARD_ROOT_DEFAULT,
};
pub use theme::UI_THEME;
