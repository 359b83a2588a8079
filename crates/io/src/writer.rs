//! CSV writers for the toolkit's tables.

use std::path::Path;

use tracing::debug;

use dfc_coverage::{CoverageResult, ForecastRecord, InventoryBatch, TimelinePoint};

use crate::error::IoError;

/// Date format used by every table this crate writes.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Writes a forecast table with columns
/// `product_id, date, forecasted_sales`.
///
/// # Errors
///
/// Returns [`IoError::Csv`] when the file cannot be created or written.
pub fn write_forecast(path: &Path, records: &[ForecastRecord]) -> Result<(), IoError> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["product_id", "date", "forecasted_sales"])?;
    for record in records {
        writer.write_record([
            record.product_id.clone(),
            record.date.format(DATE_FORMAT).to_string(),
            format_quantity(record.forecasted_sales),
        ])?;
    }
    writer.flush()?;

    debug!(path = %path.display(), n_records = records.len(), "forecast written");
    Ok(())
}

/// Writes an inventory table with columns
/// `product_id, batch_id, expiry_date, quantity`.
///
/// # Errors
///
/// Returns [`IoError::Csv`] when the file cannot be created or written.
pub fn write_inventory(path: &Path, batches: &[InventoryBatch]) -> Result<(), IoError> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["product_id", "batch_id", "expiry_date", "quantity"])?;
    for batch in batches {
        writer.write_record([
            batch.product_id.clone(),
            batch.batch_id.clone(),
            batch.expiry_date.format(DATE_FORMAT).to_string(),
            format_quantity(batch.quantity),
        ])?;
    }
    writer.flush()?;

    debug!(path = %path.display(), n_batches = batches.len(), "inventory written");
    Ok(())
}

/// Writes a coverage table with columns
/// `product_id, days_forward_coverage, total_inventory`.
///
/// The in-memory `has_forecast` flag is intentionally not persisted.
///
/// # Errors
///
/// Returns [`IoError::Csv`] when the file cannot be created or written.
pub fn write_coverage(path: &Path, results: &[CoverageResult]) -> Result<(), IoError> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["product_id", "days_forward_coverage", "total_inventory"])?;
    for result in results {
        writer.write_record([
            result.product_id.clone(),
            result.days_forward_coverage.to_string(),
            format_quantity(result.total_inventory),
        ])?;
    }
    writer.flush()?;

    debug!(path = %path.display(), n_products = results.len(), "coverage written");
    Ok(())
}

/// Writes a per-product time series with columns
/// `date, days_forward_coverage, total_inventory`.
///
/// # Errors
///
/// Returns [`IoError::Csv`] when the file cannot be created or written.
pub fn write_timeline(path: &Path, points: &[TimelinePoint]) -> Result<(), IoError> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["date", "days_forward_coverage", "total_inventory"])?;
    for point in points {
        writer.write_record([
            point.date.format(DATE_FORMAT).to_string(),
            point.days_forward_coverage.to_string(),
            format_quantity(point.total_inventory),
        ])?;
    }
    writer.flush()?;

    debug!(path = %path.display(), n_points = points.len(), "timeline written");
    Ok(())
}

/// Renders a quantity without a trailing `.0` on whole numbers, so files
/// holding unit counts stay integer-looking.
fn format_quantity(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}
