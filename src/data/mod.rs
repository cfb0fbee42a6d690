// Fixture loading and validation
pub mod fixture;

// Re-export commonly used items
pub use fixture::{load_campaigns, parse_campaigns};
