//! Company branding and business parameters for the demo.

use serde::Serialize;

/// Commercial targets the dashboard grades campaigns against.
#[derive(Serialize)]
pub struct BusinessTargets {
    /// Monthly ad budget in whole dollars (higher budget for performance parts)
    pub monthly_ad_budget: u32,
    /// Target ROAS (higher targets for premium products)
    pub target_roas: f64,
    /// Target ACoS percentage
    pub target_acos: f64,
}

/// Static company identity for the fictional retailer.
#[derive(Serialize)]
pub struct CompanyInfo {
    pub name: &'static str,
    pub business_type: &'static str,
    pub established: &'static str,
    pub specialties: &'static [&'static str],

    #[serde(flatten)]
    pub targets: BusinessTargets,
}

pub const COMPANY: CompanyInfo = CompanyInfo {
    name: "K2Motor",
    business_type: "High-Performance Sports Car Parts",
    established: "2018",
    specialties: &[
        "Turbo Systems",
        "Brake Upgrades",
        "Suspension",
        "ECU Tuning",
    ],

    targets: BusinessTargets {
        monthly_ad_budget: 75_000,
        target_roas: 4.2,
        target_acos: 24.0,
    },
};
