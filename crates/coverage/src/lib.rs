//! # dfc-coverage
//!
//! Days Forward Coverage: for each product, the number of consecutive
//! future days whose forecasted demand the current stock can satisfy
//! before running out or expiring.
//!
//! # Quick start
//!
//! ```
//! use chrono::NaiveDate;
//! use dfc_coverage::{CoverageConfig, ForecastRecord, InventoryBatch, compute_coverage};
//!
//! let forecast = vec![ForecastRecord {
//!     product_id: "P0001".to_string(),
//!     date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
//!     forecasted_sales: 5.0,
//! }];
//! let inventory = vec![InventoryBatch {
//!     product_id: "P0001".to_string(),
//!     batch_id: "P0001_B1".to_string(),
//!     expiry_date: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
//!     quantity: 12.0,
//! }];
//!
//! let rows = compute_coverage(&forecast, &inventory, &CoverageConfig::default()).unwrap();
//! assert_eq!(rows[0].days_forward_coverage, 1);
//! assert_eq!(rows[0].total_inventory, 12.0);
//! ```
//!
//! # Architecture
//!
//! ```text
//! compute_coverage()
//!   ├─ validate_inputs()       (validate.rs)
//!   ├─ resolve reference date
//!   ├─ partition_products()    (partition.rs)
//!   └─ per product ──────────┐ (worker pool when config.parallel())
//!        run_depletion()      │ (simulate.rs)
//!   ┌─────────────────────────┘
//!   └─ Vec<CoverageResult>, ascending by product id
//! ```
//!
//! Per-product simulations share no mutable state: each owns a transient
//! arena of batch quantities, and caller inputs are never mutated. The
//! produced rows are identical whether the pool is enabled or not.

mod config;
mod error;
mod partition;
mod record;
mod result;
mod simulate;
mod summary;
mod validate;

use chrono::NaiveDate;
use rayon::prelude::*;

pub use config::CoverageConfig;
pub use error::CoverageError;
pub use record::{ForecastRecord, InventoryBatch};
pub use result::{CoverageResult, TimelinePoint};
pub use summary::{CoverageSummary, summarize};

use partition::ProductInputs;

/// Computes Days Forward Coverage for every product present in either
/// input.
///
/// The reference date is taken from `config`, defaulting to the minimum
/// date in `forecast`. Forecast records dated before it and batches
/// expiring before it are discarded; the reported products are the union
/// of ids surviving that filter on either side. A product with no
/// remaining forecast yields `{0, 0.0, has_forecast: false}`; one with no
/// remaining batches yields `{0, 0.0, has_forecast: true}`; otherwise the
/// depletion simulation runs and `total_inventory` is the unexpired stock
/// at the reference date.
///
/// Rows come back ascending by product id.
///
/// # Errors
///
/// Returns [`CoverageError::Validation`] if any quantity is negative or
/// non-finite.
/// Returns [`CoverageError::MissingReferenceDate`] if the forecast is
/// empty and no explicit reference date was configured.
pub fn compute_coverage(
    forecast: &[ForecastRecord],
    inventory: &[InventoryBatch],
    config: &CoverageConfig,
) -> Result<Vec<CoverageResult>, CoverageError> {
    // Step 1: reject malformed quantities up front.
    validate::validate_inputs(forecast, inventory)?;

    // Step 2: resolve the reference date.
    let as_of = match config.reference_date() {
        Some(date) => date,
        None => forecast
            .iter()
            .map(|r| r.date)
            .min()
            .ok_or(CoverageError::MissingReferenceDate)?,
    };

    // Step 3: group by product, dropping expired batches and past demand.
    let products = partition::partition_products(forecast, inventory, as_of);
    let entries: Vec<(&str, &ProductInputs<'_>)> =
        products.iter().map(|(id, inputs)| (*id, inputs)).collect();

    // Step 4: per-product simulation. Products are independent, so the
    // pool needs no coordination; collect preserves the key order.
    let rows = if config.parallel() {
        entries
            .par_iter()
            .map(|(id, inputs)| product_row(id, inputs, as_of))
            .collect()
    } else {
        entries
            .iter()
            .map(|(id, inputs)| product_row(id, inputs, as_of))
            .collect()
    };

    Ok(rows)
}

/// Produces the coverage row for one product.
fn product_row(product_id: &str, inputs: &ProductInputs<'_>, as_of: NaiveDate) -> CoverageResult {
    if inputs.forecast.is_empty() {
        // No forecast: coverage is undefined, reported as zero. The total
        // is also zeroed even when batches exist.
        return CoverageResult {
            product_id: product_id.to_string(),
            days_forward_coverage: 0,
            total_inventory: 0.0,
            has_forecast: false,
        };
    }
    if inputs.batches.is_empty() {
        return CoverageResult {
            product_id: product_id.to_string(),
            days_forward_coverage: 0,
            total_inventory: 0.0,
            has_forecast: true,
        };
    }

    let outcome = simulate::run_depletion(&inputs.forecast, &inputs.batches, as_of);
    CoverageResult {
        product_id: product_id.to_string(),
        days_forward_coverage: outcome.days_covered,
        total_inventory: outcome.total_inventory,
        has_forecast: true,
    }
}

/// Traces how coverage evolves for one product by re-running the
/// simulation with each of its distinct forecast dates (ascending) as the
/// reference date.
///
/// Each anchor re-filters both inputs against itself, so the
/// `total_inventory` snapshot shrinks as batches expire. A product absent
/// from either input yields an empty vector, not an error.
///
/// The re-simulation is quadratic in the number of forecast days; it is
/// meant for single-product, on-demand use, never for bulk computation.
///
/// # Errors
///
/// Returns [`CoverageError::Validation`] if any quantity is negative or
/// non-finite.
pub fn coverage_over_time(
    forecast: &[ForecastRecord],
    inventory: &[InventoryBatch],
    product_id: &str,
) -> Result<Vec<TimelinePoint>, CoverageError> {
    validate::validate_inputs(forecast, inventory)?;

    let product_forecast: Vec<&ForecastRecord> = forecast
        .iter()
        .filter(|r| r.product_id == product_id)
        .collect();
    let product_batches: Vec<&InventoryBatch> = inventory
        .iter()
        .filter(|b| b.product_id == product_id)
        .collect();

    if product_forecast.is_empty() || product_batches.is_empty() {
        return Ok(Vec::new());
    }

    let mut anchors: Vec<NaiveDate> = product_forecast.iter().map(|r| r.date).collect();
    anchors.sort_unstable();
    anchors.dedup();

    Ok(anchors
        .into_iter()
        .map(|anchor| {
            let outcome = simulate::run_depletion(&product_forecast, &product_batches, anchor);
            TimelinePoint {
                date: anchor,
                days_forward_coverage: outcome.days_covered,
                total_inventory: outcome.total_inventory,
            }
        })
        .collect())
}
