//! Input record types for the coverage engine.

use chrono::NaiveDate;

/// One day of forecasted demand for a product.
///
/// Records need not be contiguous, but are assumed to represent daily
/// demand. `forecasted_sales` must be finite and non-negative; this is
/// enforced at the [`compute_coverage`](crate::compute_coverage) boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastRecord {
    /// Product identifier.
    pub product_id: String,
    /// Calendar date the demand applies to.
    pub date: NaiveDate,
    /// Forecasted demand for that date.
    pub forecasted_sales: f64,
}

/// A dated batch of stock for a product.
///
/// A batch is usable up to and including its expiry date. `batch_id` is
/// unique within a product and serves as the deterministic tie-break when
/// two batches share an expiry date.
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryBatch {
    /// Product identifier.
    pub product_id: String,
    /// Batch identifier, unique within a product.
    pub batch_id: String,
    /// Last date on which the batch may be consumed.
    pub expiry_date: NaiveDate,
    /// Available quantity. Must be finite and non-negative.
    pub quantity: f64,
}
