//! Output types for coverage computation.

use chrono::NaiveDate;

/// Coverage figures for one product.
#[derive(Debug, Clone, PartialEq)]
pub struct CoverageResult {
    /// Product identifier.
    pub product_id: String,
    /// Count of consecutive forward days whose forecasted demand the
    /// current stock can fully satisfy before the first shortfall.
    pub days_forward_coverage: u32,
    /// Total unexpired stock at the reference date. A snapshot, not a
    /// post-simulation residual.
    pub total_inventory: f64,
    /// False when the product had no forecast records on or after the
    /// reference date. Internal flag; not part of the persisted table.
    pub has_forecast: bool,
}

/// One anchor date of a per-product coverage time series.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelinePoint {
    /// Anchor date the simulation was re-run from.
    pub date: NaiveDate,
    /// Coverage as measured from the anchor date.
    pub days_forward_coverage: u32,
    /// Unexpired stock at the anchor date.
    pub total_inventory: f64,
}
