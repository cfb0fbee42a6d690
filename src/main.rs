use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use k2motor_demo::config::{CAMPAIGN_FIXTURE_PATH, persistence::bundle_path};
use k2motor_demo::report::{
    CheckReport, check_bundle_files, check_fixture_sample, check_kpis, render_report,
};
use k2motor_demo::{Cli, DashboardKpis, PlatformBreakdown, load_campaigns};

fn main() -> ExitCode {
    // A. Init Logging
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    // B. Parse Args
    let args = Cli::parse();
    #[cfg(debug_assertions)]
    log::info!("Parsed arguments: {:?}", args);

    match run_validation(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            log::error!("⚠️  Validation aborted: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Runs every check and prints the report. `Ok(true)` means all green.
fn run_validation(args: &Cli) -> Result<bool> {
    let mut report = CheckReport::default();

    // C. Bundle structure
    if !args.skip_files {
        report.add_section(
            "📁 File Structure Check",
            check_bundle_files(&args.dashboard_root),
        );
    }

    // D. Fixture loading + structural sample check
    let fixture_path = bundle_path(&args.dashboard_root, CAMPAIGN_FIXTURE_PATH);
    let raw_fixture: serde_json::Value = serde_json::from_str(
        &std::fs::read_to_string(&fixture_path)
            .context(format!("Failed to read fixture {:?}", fixture_path))?,
    )
    .context("Fixture is not valid JSON")?;
    report.add_section(
        "📊 Campaign Data Validation",
        check_fixture_sample(&raw_fixture),
    );

    let campaigns = load_campaigns(&fixture_path)
        .context(format!("Failed to load campaigns from {:?}", fixture_path))?;
    log::info!("Loaded {} campaigns from {:?}", campaigns.len(), fixture_path);

    // E. Aggregate + KPI expectation checks
    let kpis = DashboardKpis::from_records(&campaigns);
    let breakdown = PlatformBreakdown::from_records(&campaigns);
    report.add_section("📈 KPI Expectation Checks", check_kpis(&kpis));

    // F. Render
    let mut stdout = std::io::stdout().lock();
    render_report(&mut stdout, &report, &kpis, &breakdown)?;

    Ok(report.all_passed())
}
