// Core domain types for campaign data
pub mod campaign;

// Re-export commonly used types
pub use campaign::{CampaignRecord, Platform};
