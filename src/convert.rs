//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;

use dfc_coverage::CoverageConfig;
use dfc_io::ReaderConfig;

use crate::config::{CoverageToml, GenerateToml, IoToml};
use crate::generate::GenerateParams;

/// Parses a YYYY-MM-DD date string.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("invalid date {s:?}, expected YYYY-MM-DD"))
}

/// Builds a [`ReaderConfig`] from the TOML I/O configuration.
pub fn build_reader_config(io: &IoToml) -> ReaderConfig {
    let mut cfg = ReaderConfig::default();
    if let Some(ref v) = io.columns.forecast_product {
        cfg = cfg.with_forecast_product_col(v);
    }
    if let Some(ref v) = io.columns.forecast_date {
        cfg = cfg.with_forecast_date_col(v);
    }
    if let Some(ref v) = io.columns.forecast_sales {
        cfg = cfg.with_forecast_sales_col(v);
    }
    if let Some(ref v) = io.columns.inventory_product {
        cfg = cfg.with_inventory_product_col(v);
    }
    if let Some(ref v) = io.columns.inventory_batch {
        cfg = cfg.with_inventory_batch_col(v);
    }
    if let Some(ref v) = io.columns.inventory_expiry {
        cfg = cfg.with_inventory_expiry_col(v);
    }
    if let Some(ref v) = io.columns.inventory_quantity {
        cfg = cfg.with_inventory_quantity_col(v);
    }
    if let Some(ref v) = io.columns.date_format {
        cfg = cfg.with_date_format(v);
    }
    cfg
}

/// Builds a [`CoverageConfig`] from the TOML coverage configuration.
///
/// A CLI-supplied reference date wins over the config file; the CLI
/// `--sequential` flag forces the single-threaded path.
pub fn build_coverage_config(
    coverage: &CoverageToml,
    cli_reference_date: Option<NaiveDate>,
    sequential: bool,
) -> Result<CoverageConfig> {
    let mut cfg = CoverageConfig::default().with_parallel(coverage.parallel && !sequential);

    let reference_date = match cli_reference_date {
        Some(date) => Some(date),
        None => coverage
            .reference_date
            .as_deref()
            .map(parse_date)
            .transpose()?,
    };
    if let Some(date) = reference_date {
        cfg = cfg.with_reference_date(date);
    }
    Ok(cfg)
}

/// Builds [`GenerateParams`] from the TOML generate configuration,
/// validating the ranges the generator draws from.
pub fn build_generate_params(generate: &GenerateToml) -> Result<GenerateParams> {
    let start_date = parse_date(&generate.start_date)?;
    let end_date = parse_date(&generate.end_date)?;

    if end_date <= start_date {
        bail!(
            "end_date {} must be after start_date {}",
            generate.end_date,
            generate.start_date
        );
    }
    if generate.num_products == 0 {
        bail!("num_products must be >= 1");
    }
    if generate.base_demand_min > generate.base_demand_max {
        bail!(
            "base_demand_min {} exceeds base_demand_max {}",
            generate.base_demand_min,
            generate.base_demand_max
        );
    }
    if generate.min_batches_per_product == 0 {
        bail!("min_batches_per_product must be >= 1");
    }
    if generate.min_batches_per_product > generate.max_batches_per_product {
        bail!(
            "min_batches_per_product {} exceeds max_batches_per_product {}",
            generate.min_batches_per_product,
            generate.max_batches_per_product
        );
    }
    if generate.base_inventory_min > generate.base_inventory_max {
        bail!(
            "base_inventory_min {} exceeds base_inventory_max {}",
            generate.base_inventory_min,
            generate.base_inventory_max
        );
    }

    let span_days = (end_date - start_date).num_days();
    if span_days < i64::from(generate.max_batches_per_product) {
        bail!(
            "date span of {span_days} day(s) is too short for up to {} batches per product",
            generate.max_batches_per_product
        );
    }

    Ok(GenerateParams {
        num_products: generate.num_products,
        forecast_days: generate.forecast_days,
        start_date,
        end_date,
        base_demand: generate.base_demand_min..=generate.base_demand_max,
        batches_per_product: generate.min_batches_per_product..=generate.max_batches_per_product,
        base_inventory: generate.base_inventory_min..=generate.base_inventory_max,
    })
}
