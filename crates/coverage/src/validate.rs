//! Accumulated validation of input records.
//!
//! All quantity fields are checked up front; any violation rejects the
//! whole call with a single [`CoverageError::Validation`] summarising
//! every offending record.

use crate::error::CoverageError;
use crate::record::{ForecastRecord, InventoryBatch};

/// Accumulates validation errors and converts them into a single
/// [`CoverageError::Validation`].
pub(crate) struct ValidationCollector {
    errors: Vec<String>,
}

impl ValidationCollector {
    /// Create an empty collector.
    pub(crate) fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Record one validation error.
    pub(crate) fn push(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    /// Consume the collector and return `Ok(())` if no errors were
    /// recorded, or `Err(CoverageError::Validation { .. })` otherwise.
    ///
    /// The `details` string joins all messages with `"; "`.
    pub(crate) fn finish(self) -> Result<(), CoverageError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(CoverageError::Validation {
                count: self.errors.len(),
                details: self.errors.join("; "),
            })
        }
    }
}

/// Check that every quantity in both inputs is finite and non-negative.
pub(crate) fn validate_inputs(
    forecast: &[ForecastRecord],
    inventory: &[InventoryBatch],
) -> Result<(), CoverageError> {
    let mut c = ValidationCollector::new();

    for (i, record) in forecast.iter().enumerate() {
        if !record.forecasted_sales.is_finite() {
            c.push(format!(
                "forecast row {i} (product '{}'): non-finite forecasted_sales {}",
                record.product_id, record.forecasted_sales,
            ));
        } else if record.forecasted_sales < 0.0 {
            c.push(format!(
                "forecast row {i} (product '{}'): negative forecasted_sales {}",
                record.product_id, record.forecasted_sales,
            ));
        }
    }

    for (i, batch) in inventory.iter().enumerate() {
        if !batch.quantity.is_finite() {
            c.push(format!(
                "inventory row {i} (batch '{}'): non-finite quantity {}",
                batch.batch_id, batch.quantity,
            ));
        } else if batch.quantity < 0.0 {
            c.push(format!(
                "inventory row {i} (batch '{}'): negative quantity {}",
                batch.batch_id, batch.quantity,
            ));
        }
    }

    c.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn forecast(sales: f64) -> ForecastRecord {
        ForecastRecord {
            product_id: "P0001".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            forecasted_sales: sales,
        }
    }

    fn batch(quantity: f64) -> InventoryBatch {
        InventoryBatch {
            product_id: "P0001".to_string(),
            batch_id: "P0001_B1".to_string(),
            expiry_date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            quantity,
        }
    }

    #[test]
    fn valid_inputs_pass() {
        assert!(validate_inputs(&[forecast(5.0)], &[batch(10.0)]).is_ok());
    }

    #[test]
    fn zero_quantities_pass() {
        assert!(validate_inputs(&[forecast(0.0)], &[batch(0.0)]).is_ok());
    }

    #[test]
    fn negative_sales_rejected() {
        let err = validate_inputs(&[forecast(-1.0)], &[]).unwrap_err();
        match err {
            CoverageError::Validation { count, details } => {
                assert_eq!(count, 1);
                assert!(details.contains("negative forecasted_sales"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn non_finite_quantity_rejected() {
        let err = validate_inputs(&[], &[batch(f64::NAN)]).unwrap_err();
        match err {
            CoverageError::Validation { count, details } => {
                assert_eq!(count, 1);
                assert!(details.contains("non-finite quantity"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn errors_accumulate_across_inputs() {
        let err = validate_inputs(&[forecast(-2.0)], &[batch(-3.0)]).unwrap_err();
        match err {
            CoverageError::Validation { count, .. } => assert_eq!(count, 2),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
