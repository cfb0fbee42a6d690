//! Aggregate advertising KPIs.
//!
//! The dashboard headline numbers: total spend and revenue summed across
//! campaigns, plus three spend ratios. ROAS is the raw revenue multiple;
//! Real ROI discounts it by the attribution factor (how much revenue the
//! ads actually caused); POAS discounts it by the margin factor (how much
//! of the revenue is profit).

use itertools::Itertools;
use serde::Serialize;
use strum::IntoEnumIterator;

use crate::config::metrics::{ATTRIBUTION_FACTOR, MARGIN_FACTOR};
use crate::domain::{CampaignRecord, Platform};

/// Aggregate KPIs for one pass over the campaign fixture.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DashboardKpis {
    pub total_spend: f64,
    pub total_revenue: f64,
    pub roas: f64,
    pub real_roi: f64,
    pub poas: f64,
}

impl DashboardKpis {
    /// Pure reduction over the records. Order-insensitive (commutative sums)
    /// and total: zero spend defines every ratio as 0 instead of faulting.
    pub fn from_records(records: &[CampaignRecord]) -> Self {
        let total_spend: f64 = records.iter().map(|c| c.spend).sum();
        let total_revenue: f64 = records.iter().map(|c| c.revenue).sum();

        let incremental_revenue = total_revenue * ATTRIBUTION_FACTOR;
        let profit = total_revenue * MARGIN_FACTOR;

        Self {
            total_spend,
            total_revenue,
            roas: spend_ratio(total_revenue, total_spend),
            real_roi: spend_ratio(incremental_revenue, total_spend),
            poas: spend_ratio(profit, total_spend),
        }
    }
}

/// Division guard: a campaign set with zero spend has nothing to amortize
/// against, so every per-spend ratio is defined as 0.
fn spend_ratio(numerator: f64, total_spend: f64) -> f64 {
    if total_spend == 0.0 {
        0.0
    } else {
        numerator / total_spend
    }
}

/// Per-platform spend/revenue rollup for the report's comparison table.
#[derive(Debug, Clone, Serialize)]
pub struct PlatformBreakdown {
    pub platform: Platform,
    pub campaigns: usize,
    pub spend: f64,
    pub revenue: f64,
    pub roas: f64,
}

impl PlatformBreakdown {
    /// Group records by platform, in the dashboard's platform display
    /// order. Platforms with no campaigns are omitted.
    pub fn from_records(records: &[CampaignRecord]) -> Vec<Self> {
        let mut grouped = records
            .iter()
            .map(|c| (c.platform, c))
            .into_group_map();

        Platform::iter()
            .filter_map(|platform| {
                let campaigns = grouped.remove(&platform)?;
                let spend: f64 = campaigns.iter().map(|c| c.spend).sum();
                let revenue: f64 = campaigns.iter().map(|c| c.revenue).sum();
                Some(PlatformBreakdown {
                    platform,
                    campaigns: campaigns.len(),
                    spend,
                    revenue,
                    roas: spend_ratio(revenue, spend),
                })
            })
            .collect()
    }
}
