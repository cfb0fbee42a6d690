//! Campaign fixture loading.
//!
//! The fixture is a JSON array of campaign objects maintained by hand for
//! the demo, so the loader is strict where it matters: a record without
//! `spend` or `revenue` fails the load instead of silently counting as
//! zero, and negative money fails outright. Everything else gets a lenient
//! default so cosmetic fixture edits do not brick the demo.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::domain::{CampaignRecord, Platform};
use crate::error::FixtureError;

/// Fixture-shaped record before validation. Only `campaignId` is required
/// at the serde level; the interesting checks happen in `validate`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawCampaign {
    campaign_id: String,
    #[serde(default)]
    campaign_name: String,
    #[serde(default)]
    platform: Platform,
    spend: Option<f64>,
    revenue: Option<f64>,
    #[serde(default)]
    scenario: u8,
    #[serde(default)]
    roas: f64,
}

impl RawCampaign {
    fn validate(self) -> Result<CampaignRecord, FixtureError> {
        let spend = require_money(&self.campaign_id, "spend", self.spend)?;
        let revenue = require_money(&self.campaign_id, "revenue", self.revenue)?;

        Ok(CampaignRecord {
            campaign_id: self.campaign_id,
            campaign_name: self.campaign_name,
            platform: self.platform,
            spend,
            revenue,
            scenario: self.scenario,
            roas: self.roas,
        })
    }
}

fn require_money(
    campaign_id: &str,
    field: &'static str,
    value: Option<f64>,
) -> Result<f64, FixtureError> {
    let value = value.ok_or_else(|| FixtureError::MissingField {
        campaign_id: campaign_id.to_string(),
        field,
    })?;
    if value < 0.0 {
        return Err(FixtureError::NegativeValue {
            campaign_id: campaign_id.to_string(),
            field,
            value,
        });
    }
    Ok(value)
}

/// Parse fixture text into validated campaign records. Single pass,
/// all-or-nothing: the first bad record aborts the load.
pub fn parse_campaigns(json: &str) -> Result<Vec<CampaignRecord>, FixtureError> {
    let raw: Vec<RawCampaign> = serde_json::from_str(json)?;
    raw.into_iter().map(RawCampaign::validate).collect()
}

/// Load and validate the campaign fixture from disk.
pub fn load_campaigns(path: &Path) -> Result<Vec<CampaignRecord>, FixtureError> {
    let json = fs::read_to_string(path).map_err(|source| FixtureError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("Read campaign fixture from {:?}", path);
    parse_campaigns(&json)
}

#[cfg(test)]
mod tests {
    use super::*;

    const GOOD_FIXTURE: &str = r#"[
        {
            "campaignId": "AMZ-TURBO-001",
            "campaignName": "Turbo Kit - Subaru WRX",
            "platform": "Amazon",
            "spend": 1000.0,
            "revenue": 4000.0,
            "scenario": 1,
            "roas": 4.0,
            "adFrequency": 3.2
        },
        {
            "campaignId": "EBAY-BRAKE-002",
            "campaignName": "Big Brake Kit - Civic Type R",
            "platform": "eBay",
            "spend": 500.0,
            "revenue": 1500.0,
            "scenario": 7,
            "roas": 3.0
        }
    ]"#;

    #[test]
    fn test_parses_fixture_and_ignores_extra_fields() {
        let records = parse_campaigns(GOOD_FIXTURE).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].campaign_id, "AMZ-TURBO-001");
        assert_eq!(records[0].platform, Platform::Amazon);
        assert_eq!(records[1].spend, 500.0);
        assert_eq!(records[1].revenue, 1500.0);
    }

    #[test]
    fn test_missing_spend_is_a_validation_error() {
        let json = r#"[{"campaignId": "X-1", "revenue": 100.0}]"#;
        let err = parse_campaigns(json).unwrap_err();
        match err {
            FixtureError::MissingField { campaign_id, field } => {
                assert_eq!(campaign_id, "X-1");
                assert_eq!(field, "spend");
            }
            other => panic!("expected MissingField, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_revenue_is_a_validation_error() {
        let json = r#"[{"campaignId": "X-2", "spend": 100.0}]"#;
        let err = parse_campaigns(json).unwrap_err();
        assert!(matches!(
            err,
            FixtureError::MissingField { field: "revenue", .. }
        ));
    }

    #[test]
    fn test_negative_spend_rejected() {
        let json = r#"[{"campaignId": "X-3", "spend": -5.0, "revenue": 10.0}]"#;
        let err = parse_campaigns(json).unwrap_err();
        assert!(matches!(
            err,
            FixtureError::NegativeValue { field: "spend", .. }
        ));
    }

    #[test]
    fn test_non_array_input_is_malformed() {
        let err = parse_campaigns(r#"{"campaignId": "X-4"}"#).unwrap_err();
        assert!(matches!(err, FixtureError::Malformed(_)));

        let err = parse_campaigns("not json at all").unwrap_err();
        assert!(matches!(err, FixtureError::Malformed(_)));
    }

    #[test]
    fn test_empty_array_is_fine() {
        let records = parse_campaigns("[]").unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_load_from_disk() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(GOOD_FIXTURE.as_bytes()).unwrap();
        let records = load_campaigns(file.path()).unwrap();
        assert_eq!(records.len(), 2);
    }
}
