//! Synthetic dataset generation.
//!
//! Produces a toy forecast (per-product base demand with weekend lift and
//! clamped noise) and a batched inventory whose earlier batches tend to
//! expire sooner. All randomness flows through one seeded RNG passed down
//! explicitly, so a fixed seed reproduces the datasets byte for byte.

use std::ops::RangeInclusive;

use anyhow::{Context, Result};
use chrono::{Datelike, Days, NaiveDate, Weekday};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::Normal;
use tracing::{info, info_span, warn};

use dfc_coverage::{ForecastRecord, InventoryBatch};
use dfc_io::{write_forecast, write_inventory};

use crate::cli::GenerateArgs;
use crate::config::DfcConfig;
use crate::convert;

/// Validated generation parameters, built by
/// [`convert::build_generate_params`].
#[derive(Debug, Clone)]
pub struct GenerateParams {
    pub num_products: usize,
    pub forecast_days: u32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub base_demand: RangeInclusive<u32>,
    pub batches_per_product: RangeInclusive<u32>,
    pub base_inventory: RangeInclusive<u32>,
}

/// Run the dataset generation pipeline.
pub fn run(args: GenerateArgs) -> Result<()> {
    let _cmd = info_span!("generate").entered();

    let toml_str = std::fs::read_to_string(&args.config)
        .with_context(|| format!("failed to read config file: {}", args.config.display()))?;
    let mut config: DfcConfig = toml::from_str(&toml_str).context("failed to parse TOML config")?;

    if let Some(dir) = args.data_dir {
        config.io.data_dir = dir;
    }
    let params = convert::build_generate_params(&config.generate)?;

    let seed = args.seed.or(config.seed);
    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    };

    let product_ids = product_ids(params.num_products);
    info!(n_products = product_ids.len(), seed = ?seed, "generating datasets");

    let forecast = generate_forecast(&product_ids, &params, &mut rng)?;
    info!(
        n_records = forecast.len(),
        n_days = params.forecast_days,
        "forecast generated"
    );

    let inventory = generate_inventory(&product_ids, &params, &mut rng);
    info!(n_batches = inventory.len(), "inventory generated");

    std::fs::create_dir_all(&config.io.data_dir).with_context(|| {
        format!(
            "failed to create data directory: {}",
            config.io.data_dir.display()
        )
    })?;

    let forecast_path = config.io.forecast_path();
    write_forecast(&forecast_path, &forecast)
        .with_context(|| format!("failed to write forecast: {}", forecast_path.display()))?;
    info!(path = %forecast_path.display(), "forecast written");

    let inventory_path = config.io.inventory_path();
    write_inventory(&inventory_path, &inventory)
        .with_context(|| format!("failed to write inventory: {}", inventory_path.display()))?;
    info!(path = %inventory_path.display(), "inventory written");

    verify_datasets(&forecast, &inventory, &product_ids);
    Ok(())
}

/// Generates `P0001`-style product ids.
fn product_ids(num_products: usize) -> Vec<String> {
    (1..=num_products).map(|i| format!("P{i:04}")).collect()
}

/// Generates one forecast record per product per day.
///
/// Demand is a per-product base drawn once, lifted by 30% on Thursday
/// through Saturday, and scaled by normal noise clamped to 0.5..=1.5.
fn generate_forecast(
    product_ids: &[String],
    params: &GenerateParams,
    rng: &mut StdRng,
) -> Result<Vec<ForecastRecord>> {
    let mut records = Vec::with_capacity(product_ids.len() * params.forecast_days as usize);

    for product_id in product_ids {
        let base_demand = f64::from(rng.random_range(params.base_demand.clone()));
        let variability = rng.random_range(0.1..0.5);
        let noise = Normal::new(1.0, variability).context("invalid demand noise distribution")?;

        for day in 0..params.forecast_days {
            let date = params.start_date + Days::new(u64::from(day));
            let day_factor = if matches!(date.weekday(), Weekday::Thu | Weekday::Fri | Weekday::Sat)
            {
                1.3
            } else {
                1.0
            };
            let noise_factor: f64 = rng.sample::<f64, _>(noise).clamp(0.5, 1.5);

            records.push(ForecastRecord {
                product_id: product_id.clone(),
                date,
                forecasted_sales: (base_demand * day_factor * noise_factor).round(),
            });
        }
    }

    Ok(records)
}

/// Generates a batched inventory for each product.
///
/// Each product's base stock is split across its batches with some noise;
/// later batch indices get a tighter expiry window, so earlier batches
/// tend to expire sooner.
fn generate_inventory(
    product_ids: &[String],
    params: &GenerateParams,
    rng: &mut StdRng,
) -> Vec<InventoryBatch> {
    let span_days = (params.end_date - params.start_date).num_days();
    let mut batches = Vec::new();

    for product_id in product_ids {
        let n_batches = rng.random_range(params.batches_per_product.clone());
        let base_inventory = f64::from(rng.random_range(params.base_inventory.clone()));

        for batch_idx in 0..n_batches {
            // Range validated non-empty against span_days in convert.
            let days_until_expiry = rng.random_range(i64::from(1 + batch_idx)..=span_days);
            let expiry_date = params.end_date - Days::new(days_until_expiry as u64);

            let quantity_factor = rng.random_range(0.5..1.5) / f64::from(n_batches);

            batches.push(InventoryBatch {
                product_id: product_id.clone(),
                batch_id: format!("{product_id}_B{}", batch_idx + 1),
                expiry_date,
                quantity: (base_inventory * quantity_factor).trunc().max(1.0),
            });
        }
    }

    batches
}

/// Logs post-generation sanity figures: date ranges, minimum batches per
/// product, and products missing from either dataset.
fn verify_datasets(
    forecast: &[ForecastRecord],
    inventory: &[InventoryBatch],
    product_ids: &[String],
) {
    if let (Some(min_date), Some(max_date)) = (
        forecast.iter().map(|r| r.date).min(),
        forecast.iter().map(|r| r.date).max(),
    ) {
        info!(from = %min_date, to = %max_date, "forecast date range");
    }
    if let (Some(min_expiry), Some(max_expiry)) = (
        inventory.iter().map(|b| b.expiry_date).min(),
        inventory.iter().map(|b| b.expiry_date).max(),
    ) {
        info!(from = %min_expiry, to = %max_expiry, "inventory expiry range");
    }

    let min_batches = product_ids
        .iter()
        .map(|id| inventory.iter().filter(|b| &b.product_id == id).count())
        .min()
        .unwrap_or(0);
    info!(min_batches, "minimum batches per product");

    let missing_forecast = product_ids
        .iter()
        .filter(|id| !forecast.iter().any(|r| &r.product_id == *id))
        .count();
    if missing_forecast > 0 {
        warn!(n_products = missing_forecast, "products missing from forecast");
    }
    let missing_inventory = product_ids
        .iter()
        .filter(|id| !inventory.iter().any(|b| &b.product_id == *id))
        .count();
    if missing_inventory > 0 {
        warn!(
            n_products = missing_inventory,
            "products missing from inventory"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> GenerateParams {
        GenerateParams {
            num_products: 4,
            forecast_days: 14,
            start_date: NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 8, 31).unwrap(),
            base_demand: 10..=100,
            batches_per_product: 2..=5,
            base_inventory: 200..=1000,
        }
    }

    #[test]
    fn product_ids_are_zero_padded() {
        let ids = product_ids(3);
        assert_eq!(ids, vec!["P0001", "P0002", "P0003"]);
    }

    #[test]
    fn fixed_seed_reproduces_datasets() {
        let params = params();
        let ids = product_ids(params.num_products);

        let mut rng_a = StdRng::seed_from_u64(42);
        let forecast_a = generate_forecast(&ids, &params, &mut rng_a).unwrap();
        let inventory_a = generate_inventory(&ids, &params, &mut rng_a);

        let mut rng_b = StdRng::seed_from_u64(42);
        let forecast_b = generate_forecast(&ids, &params, &mut rng_b).unwrap();
        let inventory_b = generate_inventory(&ids, &params, &mut rng_b);

        assert_eq!(forecast_a, forecast_b);
        assert_eq!(inventory_a, inventory_b);
    }

    #[test]
    fn forecast_covers_every_product_and_day() {
        let params = params();
        let ids = product_ids(params.num_products);
        let mut rng = StdRng::seed_from_u64(7);

        let forecast = generate_forecast(&ids, &params, &mut rng).unwrap();
        assert_eq!(
            forecast.len(),
            params.num_products * params.forecast_days as usize
        );
        assert!(forecast.iter().all(|r| r.forecasted_sales >= 0.0));
        assert!(
            forecast
                .iter()
                .all(|r| r.date >= params.start_date
                    && r.date < params.start_date + Days::new(u64::from(params.forecast_days)))
        );
    }

    #[test]
    fn inventory_respects_configured_ranges() {
        let params = params();
        let ids = product_ids(params.num_products);
        let mut rng = StdRng::seed_from_u64(7);

        let inventory = generate_inventory(&ids, &params, &mut rng);
        for id in &ids {
            let n = inventory.iter().filter(|b| &b.product_id == id).count() as u32;
            assert!(params.batches_per_product.contains(&n));
        }
        assert!(inventory.iter().all(|b| b.quantity >= 1.0));
        assert!(
            inventory
                .iter()
                .all(|b| b.expiry_date >= params.start_date && b.expiry_date < params.end_date)
        );
    }

    #[test]
    fn batch_ids_are_unique_within_product() {
        let params = params();
        let ids = product_ids(params.num_products);
        let mut rng = StdRng::seed_from_u64(3);

        let inventory = generate_inventory(&ids, &params, &mut rng);
        let mut seen: Vec<(&str, &str)> = inventory
            .iter()
            .map(|b| (b.product_id.as_str(), b.batch_id.as_str()))
            .collect();
        seen.sort_unstable();
        let before = seen.len();
        seen.dedup();
        assert_eq!(seen.len(), before);
    }
}
