//! The individual pass/fail checks behind the validator report.

use std::path::Path;

use serde_json::Value;

use crate::analysis::DashboardKpis;
use crate::config::metrics::{
    ATTRIBUTION_FACTOR, MARGIN_FACTOR, RATIO_CHECK_EPSILON, ROAS_SANITY_MAX, ROAS_SANITY_MIN,
};
use crate::config::{BUNDLE_REQUIRED_FILES, persistence::bundle_path};

/// One line of the report.
#[derive(Debug, Clone)]
pub struct Check {
    pub passed: bool,
    pub label: String,
}

impl Check {
    pub fn pass(label: impl Into<String>) -> Self {
        Check {
            passed: true,
            label: label.into(),
        }
    }

    pub fn fail(label: impl Into<String>) -> Self {
        Check {
            passed: false,
            label: label.into(),
        }
    }
}

/// All checks from one validator run, grouped by report section.
#[derive(Debug, Default)]
pub struct CheckReport {
    pub sections: Vec<(String, Vec<Check>)>,
}

impl CheckReport {
    pub fn add_section(&mut self, title: impl Into<String>, checks: Vec<Check>) {
        self.sections.push((title.into(), checks));
    }

    pub fn all_passed(&self) -> bool {
        self.sections
            .iter()
            .flat_map(|(_, checks)| checks)
            .all(|c| c.passed)
    }

    pub fn failure_count(&self) -> usize {
        self.sections
            .iter()
            .flat_map(|(_, checks)| checks)
            .filter(|c| !c.passed)
            .count()
    }
}

/// Existence check for every file the bundle cannot render without.
pub fn check_bundle_files(root: &Path) -> Vec<Check> {
    BUNDLE_REQUIRED_FILES
        .iter()
        .map(|relative| {
            if bundle_path(root, relative).exists() {
                Check::pass(*relative)
            } else {
                Check::fail(format!("{relative} - MISSING"))
            }
        })
        .collect()
}

/// Fields the front-end reads off every campaign row. Checked on the raw
/// JSON of the first record, the same way the front-end will see it.
const SAMPLE_REQUIRED_FIELDS: &[&str] = &["campaignId", "campaignName", "platform", "roas", "scenario"];

/// Structural check against the first fixture record.
pub fn check_fixture_sample(fixture: &Value) -> Vec<Check> {
    let Some(sample) = fixture.as_array().and_then(|records| records.first()) else {
        return vec![Check::fail("fixture has no records to sample")];
    };

    SAMPLE_REQUIRED_FIELDS
        .iter()
        .map(|field| match sample.get(*field) {
            Some(value) => Check::pass(format!("field '{field}': {value}")),
            None => Check::fail(format!("missing field: {field}")),
        })
        .collect()
}

/// Range and consistency checks on the aggregated KPIs.
pub fn check_kpis(kpis: &DashboardKpis) -> Vec<Check> {
    let mut checks = Vec::new();

    let roas_in_band = kpis.roas >= ROAS_SANITY_MIN && kpis.roas <= ROAS_SANITY_MAX;
    if kpis.total_spend == 0.0 {
        // Division guard case: zero spend is legal and forces zero ratios
        checks.push(Check::pass("zero spend fixture: ratios defined as 0"));
    } else if roas_in_band {
        checks.push(Check::pass(format!(
            "blended ROAS {:.2}x within [{ROAS_SANITY_MIN}, {ROAS_SANITY_MAX}]",
            kpis.roas
        )));
    } else {
        checks.push(Check::fail(format!(
            "blended ROAS {:.2}x outside [{ROAS_SANITY_MIN}, {ROAS_SANITY_MAX}]",
            kpis.roas
        )));
    }

    // Derived ratios are fixed multiples of ROAS; anything else means the
    // aggregation drifted from the named constants
    let real_roi_consistent =
        (kpis.real_roi - ATTRIBUTION_FACTOR * kpis.roas).abs() < RATIO_CHECK_EPSILON;
    checks.push(if real_roi_consistent {
        Check::pass(format!(
            "Real ROI {:.2}x = {ATTRIBUTION_FACTOR} x ROAS",
            kpis.real_roi
        ))
    } else {
        Check::fail(format!(
            "Real ROI {:.2}x inconsistent with attribution factor {ATTRIBUTION_FACTOR}",
            kpis.real_roi
        ))
    });

    let poas_consistent = (kpis.poas - MARGIN_FACTOR * kpis.roas).abs() < RATIO_CHECK_EPSILON;
    checks.push(if poas_consistent {
        Check::pass(format!("POAS {:.2}x = {MARGIN_FACTOR} x ROAS", kpis.poas))
    } else {
        Check::fail(format!(
            "POAS {:.2}x inconsistent with margin factor {MARGIN_FACTOR}",
            kpis.poas
        ))
    });

    checks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::parse_campaigns;

    #[test]
    fn test_bundle_check_flags_missing_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<html></html>").unwrap();

        let checks = check_bundle_files(dir.path());
        assert_eq!(checks.len(), BUNDLE_REQUIRED_FILES.len());
        assert!(checks[0].passed, "index.html was written");
        assert!(checks[1..].iter().all(|c| !c.passed));
    }

    #[test]
    fn test_fixture_sample_check() {
        let fixture: Value = serde_json::from_str(
            r#"[{"campaignId": "A", "campaignName": "n", "platform": "Amazon",
                 "roas": 4.0, "scenario": 1, "spend": 1.0, "revenue": 2.0}]"#,
        )
        .unwrap();
        assert!(check_fixture_sample(&fixture).iter().all(|c| c.passed));

        let incomplete: Value = serde_json::from_str(r#"[{"campaignId": "A"}]"#).unwrap();
        let checks = check_fixture_sample(&incomplete);
        assert_eq!(checks.iter().filter(|c| !c.passed).count(), 4);
    }

    #[test]
    fn test_empty_fixture_sample_fails() {
        let empty: Value = serde_json::from_str("[]").unwrap();
        let checks = check_fixture_sample(&empty);
        assert_eq!(checks.len(), 1);
        assert!(!checks[0].passed);
    }

    #[test]
    fn test_kpi_checks_pass_on_plausible_fixture() {
        let records = parse_campaigns(
            r#"[{"campaignId": "A", "spend": 1000.0, "revenue": 4000.0},
                {"campaignId": "B", "spend": 500.0, "revenue": 1500.0}]"#,
        )
        .unwrap();
        let kpis = DashboardKpis::from_records(&records);
        assert!(check_kpis(&kpis).iter().all(|c| c.passed));
    }

    #[test]
    fn test_kpi_checks_flag_absurd_roas() {
        let records =
            parse_campaigns(r#"[{"campaignId": "A", "spend": 1.0, "revenue": 4000.0}]"#).unwrap();
        let kpis = DashboardKpis::from_records(&records);
        let checks = check_kpis(&kpis);
        assert!(!checks[0].passed, "4000x ROAS should trip the sanity band");
        assert!(checks[1].passed);
        assert!(checks[2].passed);
    }

    #[test]
    fn test_zero_spend_passes_as_division_guard() {
        let kpis = DashboardKpis::from_records(&[]);
        assert!(check_kpis(&kpis).iter().all(|c| c.passed));
    }

    #[test]
    fn test_report_bookkeeping() {
        let mut report = CheckReport::default();
        report.add_section("one", vec![Check::pass("a"), Check::fail("b")]);
        report.add_section("two", vec![Check::pass("c")]);
        assert!(!report.all_passed());
        assert_eq!(report.failure_count(), 1);
    }
}
