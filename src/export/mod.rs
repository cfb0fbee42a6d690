// Front-end config export
pub mod config_js;

// Re-export commonly used items
pub use config_js::{render_config_js, write_config_js};
