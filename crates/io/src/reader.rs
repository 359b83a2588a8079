//! CSV reader configuration and orchestration.

use std::path::Path;

use chrono::NaiveDate;
use csv::StringRecord;
use tracing::debug;

use dfc_coverage::{ForecastRecord, InventoryBatch};

use crate::error::IoError;

// ---------------------------------------------------------------------------
// ReaderConfig
// ---------------------------------------------------------------------------

/// Configuration for reading forecast and inventory tables from CSV.
///
/// Use the builder methods (`with_*`) to adapt to foreign column layouts;
/// the [`Default`] implementation matches the column names this toolkit's
/// own generator writes.
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    /// Forecast column holding the product id.
    forecast_product_col: String,
    /// Forecast column holding the demand date.
    forecast_date_col: String,
    /// Forecast column holding the forecasted demand.
    forecast_sales_col: String,
    /// Inventory column holding the product id.
    inventory_product_col: String,
    /// Inventory column holding the batch id.
    inventory_batch_col: String,
    /// Inventory column holding the batch expiry date.
    inventory_expiry_col: String,
    /// Inventory column holding the batch quantity.
    inventory_quantity_col: String,
    /// strftime-style format shared by both date columns.
    date_format: String,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            forecast_product_col: "product_id".into(),
            forecast_date_col: "date".into(),
            forecast_sales_col: "forecasted_sales".into(),
            inventory_product_col: "product_id".into(),
            inventory_batch_col: "batch_id".into(),
            inventory_expiry_col: "expiry_date".into(),
            inventory_quantity_col: "quantity".into(),
            date_format: "%Y-%m-%d".into(),
        }
    }
}

impl ReaderConfig {
    /// Set the forecast product id column name.
    pub fn with_forecast_product_col(mut self, name: impl Into<String>) -> Self {
        self.forecast_product_col = name.into();
        self
    }

    /// Set the forecast date column name.
    pub fn with_forecast_date_col(mut self, name: impl Into<String>) -> Self {
        self.forecast_date_col = name.into();
        self
    }

    /// Set the forecast demand column name.
    pub fn with_forecast_sales_col(mut self, name: impl Into<String>) -> Self {
        self.forecast_sales_col = name.into();
        self
    }

    /// Set the inventory product id column name.
    pub fn with_inventory_product_col(mut self, name: impl Into<String>) -> Self {
        self.inventory_product_col = name.into();
        self
    }

    /// Set the inventory batch id column name.
    pub fn with_inventory_batch_col(mut self, name: impl Into<String>) -> Self {
        self.inventory_batch_col = name.into();
        self
    }

    /// Set the inventory expiry date column name.
    pub fn with_inventory_expiry_col(mut self, name: impl Into<String>) -> Self {
        self.inventory_expiry_col = name.into();
        self
    }

    /// Set the inventory quantity column name.
    pub fn with_inventory_quantity_col(mut self, name: impl Into<String>) -> Self {
        self.inventory_quantity_col = name.into();
        self
    }

    /// Set the date format used by both tables.
    pub fn with_date_format(mut self, format: impl Into<String>) -> Self {
        self.date_format = format.into();
        self
    }

    /// Returns the date format.
    pub fn date_format(&self) -> &str {
        &self.date_format
    }
}

// ---------------------------------------------------------------------------
// Readers
// ---------------------------------------------------------------------------

/// Reads a forecast table from `path`.
///
/// Columns are resolved by header name, so their order in the file does
/// not matter.
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`] when the file is absent,
/// [`IoError::MissingColumn`] when a configured column is not in the
/// header, and a line-numbered [`IoError::InvalidDate`] or
/// [`IoError::InvalidQuantity`] on the first malformed row.
pub fn read_forecast(path: &Path, config: &ReaderConfig) -> Result<Vec<ForecastRecord>, IoError> {
    let mut reader = open(path)?;
    let headers = reader.headers()?.clone();
    let product_idx = resolve_column(&headers, &config.forecast_product_col, path)?;
    let date_idx = resolve_column(&headers, &config.forecast_date_col, path)?;
    let sales_idx = resolve_column(&headers, &config.forecast_sales_col, path)?;

    let mut records = Vec::new();
    for (i, row) in reader.records().enumerate() {
        let row = row?;
        let line = i + 2; // line 1 is the header

        records.push(ForecastRecord {
            product_id: field(&row, product_idx, line, &config.forecast_product_col)?.to_string(),
            date: parse_date(
                field(&row, date_idx, line, &config.forecast_date_col)?,
                &config.date_format,
                line,
            )?,
            forecasted_sales: parse_quantity(
                field(&row, sales_idx, line, &config.forecast_sales_col)?,
                &config.forecast_sales_col,
                line,
            )?,
        });
    }

    debug!(path = %path.display(), n_records = records.len(), "forecast read");
    Ok(records)
}

/// Reads an inventory table from `path`.
///
/// # Errors
///
/// Same taxonomy as [`read_forecast`].
pub fn read_inventory(path: &Path, config: &ReaderConfig) -> Result<Vec<InventoryBatch>, IoError> {
    let mut reader = open(path)?;
    let headers = reader.headers()?.clone();
    let product_idx = resolve_column(&headers, &config.inventory_product_col, path)?;
    let batch_idx = resolve_column(&headers, &config.inventory_batch_col, path)?;
    let expiry_idx = resolve_column(&headers, &config.inventory_expiry_col, path)?;
    let quantity_idx = resolve_column(&headers, &config.inventory_quantity_col, path)?;

    let mut batches = Vec::new();
    for (i, row) in reader.records().enumerate() {
        let row = row?;
        let line = i + 2;

        batches.push(InventoryBatch {
            product_id: field(&row, product_idx, line, &config.inventory_product_col)?.to_string(),
            batch_id: field(&row, batch_idx, line, &config.inventory_batch_col)?.to_string(),
            expiry_date: parse_date(
                field(&row, expiry_idx, line, &config.inventory_expiry_col)?,
                &config.date_format,
                line,
            )?,
            quantity: parse_quantity(
                field(&row, quantity_idx, line, &config.inventory_quantity_col)?,
                &config.inventory_quantity_col,
                line,
            )?,
        });
    }

    debug!(path = %path.display(), n_batches = batches.len(), "inventory read");
    Ok(batches)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn open(path: &Path) -> Result<csv::Reader<std::fs::File>, IoError> {
    if !path.exists() {
        return Err(IoError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    Ok(csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)?)
}

fn resolve_column(headers: &StringRecord, name: &str, path: &Path) -> Result<usize, IoError> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| IoError::MissingColumn {
            name: name.to_string(),
            path: path.to_path_buf(),
        })
}

fn field<'r>(
    row: &'r StringRecord,
    idx: usize,
    line: usize,
    column: &str,
) -> Result<&'r str, IoError> {
    row.get(idx).ok_or_else(|| IoError::MissingField {
        line,
        column: column.to_string(),
    })
}

fn parse_date(value: &str, format: &str, line: usize) -> Result<NaiveDate, IoError> {
    NaiveDate::parse_from_str(value, format).map_err(|_| IoError::InvalidDate {
        line,
        value: value.to_string(),
        format: format.to_string(),
    })
}

fn parse_quantity(value: &str, column: &str, line: usize) -> Result<f64, IoError> {
    value.parse::<f64>().map_err(|_| IoError::InvalidQuantity {
        line,
        value: value.to_string(),
        column: column.to_string(),
    })
}
