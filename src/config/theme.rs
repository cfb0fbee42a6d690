//! config/theme.rs Dashboard color palette.
//!
//! Hex strings go straight into the exported config constant; the
//! front-end applies them as CSS custom properties.

use serde::Serialize;

#[derive(Serialize)]
pub struct UiTheme {
    pub primary_color: &'static str,
    pub secondary_color: &'static str,
    pub accent_color: &'static str,
    pub success_color: &'static str,
    pub warning_color: &'static str,
    pub danger_color: &'static str,
    pub background: &'static str,
    pub surface: &'static str,
    pub text_primary: &'static str,
    pub text_secondary: &'static str,
}

pub const UI_THEME: UiTheme = UiTheme {
    primary_color: "#FF6B35",   // Racing orange
    secondary_color: "#1A1A2E", // Dark navy
    accent_color: "#00D4FF",    // Electric blue
    success_color: "#00FF88",   // Neon green
    warning_color: "#FFB800",   // Amber warning
    danger_color: "#FF3366",    // Racing red
    background: "#0F0F23",      // Deep dark blue
    surface: "#16213E",         // Card background
    text_primary: "#FFFFFF",
    text_secondary: "#B8BCC8",
};
