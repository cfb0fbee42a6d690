use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

/// Ad platforms the demo retailer runs campaigns on. The set is open:
/// fixture labels we do not recognize land in `Other` instead of failing
/// the whole load. Declaration order is the dashboard's display order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
pub enum Platform {
    Amazon,
    #[serde(rename = "eBay")]
    #[strum(serialize = "eBay")]
    Ebay,
    #[serde(rename = "Google Ads")]
    #[strum(serialize = "Google Ads")]
    GoogleAds,
    Facebook,
    Walmart,
    /// Fixture label we do not recognize (or an omitted platform column)
    #[default]
    #[serde(other)]
    Other,
}

/// One campaign row from the fixture. Read-only once loaded; the validator
/// never writes these back.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignRecord {
    pub campaign_id: String,
    pub campaign_name: String,
    pub platform: Platform,
    /// Ad spend in dollars, validated non-negative at load time
    pub spend: f64,
    /// Attributed revenue in dollars, validated non-negative at load time
    pub revenue: f64,
    /// Alerting scenario tag (1..=10 in the mock data); carried, not interpreted
    pub scenario: u8,
    /// Platform-reported ROAS as shipped in the fixture. Never trusted for
    /// the summary; the aggregator recomputes from spend and revenue.
    pub roas: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_labels_round_trip() {
        let labels = ["Amazon", "eBay", "Google Ads", "Facebook", "Walmart"];
        for label in labels {
            let json = format!("\"{label}\"");
            let platform: Platform = serde_json::from_str(&json).unwrap();
            assert_eq!(platform.to_string(), label);
        }
    }

    #[test]
    fn test_unknown_platform_maps_to_other() {
        let platform: Platform = serde_json::from_str("\"TikTok Shop\"").unwrap();
        assert_eq!(platform, Platform::Other);
    }
}
