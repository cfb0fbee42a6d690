//! File layout of the dashboard bundle.

use std::path::{Path, PathBuf};

/// Default dashboard bundle root, relative to the working directory.
pub const DASHBOARD_ROOT_DEFAULT: &str = "dashboard";

/// Campaign fixture the validator aggregates, relative to the bundle root.
pub const CAMPAIGN_FIXTURE_PATH: &str = "assets/data/campaign-data.json";

/// Where the exported `DASHBOARD_CONFIG` constant lands, relative to the
/// bundle root. The front-end loads this with a plain `<script>` tag.
pub const CONFIG_JS_PATH: &str = "assets/js/config.js";

/// Files the bundle cannot render without. Checked by the validator before
/// anything else; a missing entry fails the run early.
pub const BUNDLE_REQUIRED_FILES: &[&str] = &[
    "index.html",
    "assets/css/main.css",
    "assets/css/dashboard-content.css",
    "assets/js/dashboard-content.js",
    "assets/js/main.js",
    CAMPAIGN_FIXTURE_PATH,
];

/// Resolve a bundle-relative path against the chosen dashboard root.
pub fn bundle_path(root: &Path, relative: &str) -> PathBuf {
    root.join(relative)
}
