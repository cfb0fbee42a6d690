use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use k2motor_demo::config::{CONFIG_JS_PATH, DASHBOARD, DASHBOARD_ROOT_DEFAULT};
use k2motor_demo::export::write_config_js;

/// Exports `DASHBOARD_CONFIG` as a JavaScript constant for the front-end.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct ExportArgs {
    /// Root of the dashboard bundle to write into
    #[arg(long, default_value = DASHBOARD_ROOT_DEFAULT)]
    dashboard_root: PathBuf,
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args = ExportArgs::parse();
    let output_path = args.dashboard_root.join(CONFIG_JS_PATH);

    write_config_js(&output_path)
        .with_context(|| format!("Failed to export config to {:?}", output_path))?;

    println!(
        "✅ Configuration for {} exported to {:?}",
        DASHBOARD.company_info.name, output_path
    );
    Ok(())
}
