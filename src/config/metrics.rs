//! Metric computation configuration.

/// Fraction of observed revenue assumed causally attributable to ad spend.
/// Cross-brand control group methodology puts true incrementality around 60%
/// for this catalog; the demo bakes it in as a constant.
pub const ATTRIBUTION_FACTOR: f64 = 0.60;

/// Blended profit margin applied to revenue when deriving POAS.
pub const MARGIN_FACTOR: f64 = 0.25;

/// Plausible blended-ROAS window for the demo fixture. A value outside this
/// band almost always means the fixture was hand-edited badly, not that the
/// campaigns are genuinely this good or bad.
pub const ROAS_SANITY_MIN: f64 = 1.0;
pub const ROAS_SANITY_MAX: f64 = 10.0;

/// Tolerance for the derived-ratio consistency checks (real_roi vs roas,
/// poas vs roas). Pure f64 arithmetic, so this only absorbs rounding noise.
pub const RATIO_CHECK_EPSILON: f64 = 1e-9;
