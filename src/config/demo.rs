//! config/demo.rs Demo presentation knobs.
//!
//! These keep the guided demo deterministic and presentation-safe: no
//! sound, fast animations, and a curated list of walkthrough scenarios.

use serde::Serialize;

/// Mock-data shape the front-end renders from.
#[derive(Serialize)]
pub struct MockDataConfig {
    pub date_range: &'static str,
    pub platforms: &'static [&'static str],
    pub product_categories: &'static [&'static str],
    pub vehicle_brands: &'static [&'static str],
    pub performance_metrics: PerformanceKnobs,
}

/// Performance assumptions for the sports-car parts market.
#[derive(Serialize)]
pub struct PerformanceKnobs {
    /// Higher AOV for performance parts
    pub avg_order_value: u32,
    /// Lower but higher value conversions
    pub conversion_rate: f64,
    /// Premium margins (percent)
    pub avg_margin: u32,
    /// High customer lifetime value
    pub customer_ltv: u32,
}

/// Scenario-driven alerting configuration.
#[derive(Serialize)]
pub struct ScenarioConfig {
    pub active_scenarios: &'static [u8],
    pub performance_alerts: &'static [&'static str],
}

/// The Master Demo Settings
#[derive(Serialize)]
pub struct DemoSettings {
    pub tour_enabled: bool,
    pub popups_enabled: bool,
    pub data_source_indicators: bool,
    pub animation_speed: &'static str,
    pub sound_effects: bool,
    pub guided_scenarios: &'static [&'static str],
}

pub const MOCK_DATA: MockDataConfig = MockDataConfig {
    date_range: "2025-07-01 to 2025-07-28",
    platforms: &["Amazon", "eBay", "Google Ads", "Facebook"],

    product_categories: &[
        "Turbo Systems",
        "Cold Air Intakes",
        "Exhaust Systems",
        "Performance Brakes",
        "Coilovers",
        "ECU Chips",
        "Intercoolers",
        "Racing Seats",
        "Roll Bars",
        "Aerodynamic Kits",
    ],

    vehicle_brands: &[
        "Subaru WRX/STI",
        "Honda Civic Type R",
        "Ford Focus ST/RS",
        "Volkswagen Golf R",
        "BMW M3/M4",
        "Audi S3/RS3",
        "Nissan 370Z/GT-R",
        "Toyota Supra",
        "Mazda MX-5",
    ],

    performance_metrics: PerformanceKnobs {
        avg_order_value: 450,
        conversion_rate: 2.8,
        avg_margin: 35,
        customer_ltv: 2_800,
    },
};

pub const SCENARIOS: ScenarioConfig = ScenarioConfig {
    // Key scenarios for the sports-car market
    active_scenarios: &[1, 2, 6, 7, 10],
    performance_alerts: &["critical", "warning", "opportunity"],
};

pub const DEMO_SETTINGS: DemoSettings = DemoSettings {
    tour_enabled: true,
    popups_enabled: true,
    data_source_indicators: true,
    animation_speed: "fast", // Fast for sports car theme
    sound_effects: false,    // Professional demo
    guided_scenarios: &[
        "Morning Performance Review",
        "Turbo Kit Campaign Analysis",
        "Budget Reallocation Demo",
        "Attribution Deep Dive",
    ],
};
