//! Serializes the dashboard configuration to a script-usable constant.
//!
//! The front-end is a static page with no build step, so it cannot fetch
//! and parse JSON at load time without CORS headaches on `file://`. It
//! just includes `assets/js/config.js` and reads `DASHBOARD_CONFIG`.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;

use crate::config::{DASHBOARD, DashboardConfig};

/// Render the config constant file as a string.
pub fn render_config_js(config: &DashboardConfig) -> Result<String> {
    let json = serde_json::to_string_pretty(config).context("Failed to serialize config")?;
    let generated_at = Utc::now().format("%Y-%m-%d %H:%M UTC");
    Ok(format!(
        "/**\n * K2Motor Dashboard Configuration\n * Auto-generated by export_config on {generated_at} - do not edit by hand\n */\n\nconst DASHBOARD_CONFIG = {json};\n"
    ))
}

/// Write `DASHBOARD_CONFIG` to the given path, creating parent directories
/// as needed.
pub fn write_config_js(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .context(format!("Failed to create directory: {}", parent.display()))?;
    }
    let file =
        File::create(path).context(format!("Failed to create file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    let rendered = render_config_js(&DASHBOARD)?;
    writer
        .write_all(rendered.as_bytes())
        .context(format!("Failed to write config to: {}", path.display()))
}
