//! Terminal rendering of the validation report.
//!
//! Output is aimed at a human running the demo checklist, so it mirrors
//! the dashboard's own vocabulary: ✅/❌ per check, then the headline KPI
//! cards as text, then the per-platform comparison.

use std::io::{self, Write};

use crate::analysis::{DashboardKpis, PlatformBreakdown};
use crate::report::checks::CheckReport;

/// Format a dollar amount with thousands separators, e.g. `$12,345.67`.
pub fn format_usd(amount: f64) -> String {
    let cents = format!("{:.2}", amount.abs());
    let (whole, frac) = cents.split_once('.').unwrap_or((cents.as_str(), "00"));

    let mut grouped = String::new();
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{sign}${grouped}.{frac}")
}

/// Write the full report. Returns the underlying io error only; check
/// failures are the caller's business via `report.all_passed()`.
pub fn render_report(
    out: &mut impl Write,
    report: &CheckReport,
    kpis: &DashboardKpis,
    breakdown: &[PlatformBreakdown],
) -> io::Result<()> {
    writeln!(out, "K2Motor Dashboard - Validation Report")?;
    writeln!(out, "=====================================")?;

    for (title, checks) in &report.sections {
        writeln!(out)?;
        writeln!(out, "{title}:")?;
        for check in checks {
            let mark = if check.passed { "✅" } else { "❌" };
            writeln!(out, "  {mark} {}", check.label)?;
        }
    }

    writeln!(out)?;
    writeln!(out, "📈 Calculated Metrics:")?;
    writeln!(out, "   Total Spend:   {}", format_usd(kpis.total_spend))?;
    writeln!(out, "   Total Revenue: {}", format_usd(kpis.total_revenue))?;
    writeln!(out, "   Blended ROAS:  {:.2}x", kpis.roas)?;
    writeln!(out, "   Real ROI:      {:.2}x", kpis.real_roi)?;
    writeln!(out, "   POAS:          {:.2}x", kpis.poas)?;

    if !breakdown.is_empty() {
        writeln!(out)?;
        writeln!(out, "🏁 Platform Performance:")?;
        for row in breakdown {
            writeln!(
                out,
                "   {:<12} {:>2} campaigns  spend {:>12}  revenue {:>12}  ROAS {:.2}x",
                row.platform.to_string(),
                row.campaigns,
                format_usd(row.spend),
                format_usd(row.revenue),
                row.roas,
            )?;
        }
    }

    writeln!(out)?;
    if report.all_passed() {
        writeln!(out, "🚀 All checks passed - dashboard ready for visual testing")?;
    } else {
        writeln!(
            out,
            "⚠️  {} check(s) failed - fix before demoing",
            report.failure_count()
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::checks::Check;

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(0.0), "$0.00");
        assert_eq!(format_usd(75.5), "$75.50");
        assert_eq!(format_usd(1500.0), "$1,500.00");
        assert_eq!(format_usd(1234567.891), "$1,234,567.89");
        assert_eq!(format_usd(-42.0), "-$42.00");
    }

    #[test]
    fn test_render_report_contents() {
        let mut report = CheckReport::default();
        report.add_section("📁 File Structure Check", vec![Check::pass("index.html")]);

        let kpis = DashboardKpis {
            total_spend: 1500.0,
            total_revenue: 5500.0,
            roas: 5500.0 / 1500.0,
            real_roi: 2.2,
            poas: 5500.0 * 0.25 / 1500.0,
        };

        let mut buffer = Vec::new();
        render_report(&mut buffer, &report, &kpis, &[]).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert!(text.contains("✅ index.html"));
        assert!(text.contains("Total Spend:   $1,500.00"));
        assert!(text.contains("Blended ROAS:  3.67x"));
        assert!(text.contains("All checks passed"));
    }

    #[test]
    fn test_render_report_failure_summary() {
        let mut report = CheckReport::default();
        report.add_section("checks", vec![Check::fail("main.css - MISSING")]);

        let kpis = DashboardKpis {
            total_spend: 0.0,
            total_revenue: 0.0,
            roas: 0.0,
            real_roi: 0.0,
            poas: 0.0,
        };

        let mut buffer = Vec::new();
        render_report(&mut buffer, &report, &kpis, &[]).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert!(text.contains("❌ main.css - MISSING"));
        assert!(text.contains("1 check(s) failed"));
    }
}
