//! Cross-cutting properties of the coverage computation.

use chrono::NaiveDate;
use dfc_coverage::{CoverageConfig, ForecastRecord, InventoryBatch, compute_coverage};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// A deterministic multi-product fixture: staggered demand levels, batch
/// counts, and expiry spreads, including an inventory-only product and a
/// forecast-only product.
fn fixture() -> (Vec<ForecastRecord>, Vec<InventoryBatch>) {
    let mut forecast = Vec::new();
    let mut inventory = Vec::new();

    for p in 1..=6u32 {
        let product_id = format!("P{p:04}");
        if p != 5 {
            for day in 1..=14u32 {
                forecast.push(ForecastRecord {
                    product_id: product_id.clone(),
                    date: date(2024, 1, day),
                    forecasted_sales: f64::from(p * 3 + day % 4),
                });
            }
        }
        if p != 6 {
            for b in 1..=3u32 {
                inventory.push(InventoryBatch {
                    product_id: product_id.clone(),
                    batch_id: format!("{product_id}_B{b}"),
                    expiry_date: date(2024, 1, 2 + b * p),
                    quantity: f64::from(20 * b + 5 * p),
                });
            }
        }
    }

    (forecast, inventory)
}

/// Repeated invocation on unmodified inputs yields identical rows.
#[test]
fn computation_is_idempotent() {
    let (forecast, inventory) = fixture();
    let config = CoverageConfig::default();

    let first = compute_coverage(&forecast, &inventory, &config).unwrap();
    let second = compute_coverage(&forecast, &inventory, &config).unwrap();
    assert_eq!(first, second);
}

/// Input record order never changes the result set.
#[test]
fn input_order_is_irrelevant() {
    let (forecast, inventory) = fixture();
    let mut shuffled_forecast = forecast.clone();
    shuffled_forecast.reverse();
    let mut shuffled_inventory = inventory.clone();
    shuffled_inventory.reverse();

    let config = CoverageConfig::default();
    let baseline = compute_coverage(&forecast, &inventory, &config).unwrap();
    let shuffled = compute_coverage(&shuffled_forecast, &shuffled_inventory, &config).unwrap();
    assert_eq!(baseline, shuffled);
}

/// The worker pool and the sequential path produce the same table.
#[test]
fn parallel_matches_sequential() {
    let (forecast, inventory) = fixture();

    let parallel = compute_coverage(&forecast, &inventory, &CoverageConfig::default()).unwrap();
    let sequential = compute_coverage(
        &forecast,
        &inventory,
        &CoverageConfig::default().with_parallel(false),
    )
    .unwrap();
    assert_eq!(parallel, sequential);
}

/// Removing any single batch never increases a product's coverage.
#[test]
fn coverage_is_monotone_in_inventory() {
    let (forecast, inventory) = fixture();
    let config = CoverageConfig::default();
    let baseline = compute_coverage(&forecast, &inventory, &config).unwrap();

    for removed in 0..inventory.len() {
        let mut reduced = inventory.clone();
        let gone = reduced.remove(removed);
        let rows = compute_coverage(&forecast, &reduced, &config).unwrap();

        for row in &rows {
            let before = baseline
                .iter()
                .find(|r| r.product_id == row.product_id)
                .unwrap();
            assert!(
                row.days_forward_coverage <= before.days_forward_coverage,
                "removing batch '{}' raised coverage for {}: {} -> {}",
                gone.batch_id,
                row.product_id,
                before.days_forward_coverage,
                row.days_forward_coverage,
            );
        }
    }
}

/// Products with zero demand on every day and live stock cover the whole
/// horizon.
#[test]
fn zero_demand_covers_full_horizon() {
    let n_days = 21u32;
    let forecast: Vec<ForecastRecord> = (1..=n_days)
        .map(|day| ForecastRecord {
            product_id: "P0001".to_string(),
            date: date(2024, 1, day),
            forecasted_sales: 0.0,
        })
        .collect();
    let inventory = vec![InventoryBatch {
        product_id: "P0001".to_string(),
        batch_id: "P0001_B1".to_string(),
        expiry_date: date(2024, 12, 31),
        quantity: 1.0,
    }];

    let rows = compute_coverage(&forecast, &inventory, &CoverageConfig::default()).unwrap();
    assert_eq!(rows[0].days_forward_coverage, n_days);
}

/// Rows come back ascending by product id on both execution paths.
#[test]
fn rows_are_sorted_by_product() {
    let (forecast, inventory) = fixture();

    for parallel in [true, false] {
        let config = CoverageConfig::default().with_parallel(parallel);
        let rows = compute_coverage(&forecast, &inventory, &config).unwrap();
        let ids: Vec<&str> = rows.iter().map(|r| r.product_id.as_str()).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted);
    }
}
