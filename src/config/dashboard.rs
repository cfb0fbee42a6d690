//! The full nested configuration exported to the front-end.

use serde::Serialize;

use crate::config::company::{COMPANY, CompanyInfo};
use crate::config::demo::{DEMO_SETTINGS, DemoSettings, MOCK_DATA, MockDataConfig, SCENARIOS, ScenarioConfig};
use crate::config::theme::{UI_THEME, UiTheme};

/// Everything the web page reads from `DASHBOARD_CONFIG`. Field names here
/// become the JSON keys in the exported constant, so renames break the
/// front-end.
#[derive(Serialize)]
pub struct DashboardConfig {
    pub company_info: CompanyInfo,
    pub mock_data: MockDataConfig,
    pub scenarios: ScenarioConfig,
    pub ui_theme: UiTheme,
    pub demo_settings: DemoSettings,
}

pub const DASHBOARD: DashboardConfig = DashboardConfig {
    company_info: COMPANY,
    mock_data: MOCK_DATA,
    scenarios: SCENARIOS,
    ui_theme: UI_THEME,
    demo_settings: DEMO_SETTINGS,
};
