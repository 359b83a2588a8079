//! Per-product coverage-over-time tests.

use chrono::NaiveDate;
use dfc_coverage::{
    CoverageConfig, CoverageError, ForecastRecord, InventoryBatch, compute_coverage,
    coverage_over_time,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn forecast(product: &str, day: u32, sales: f64) -> ForecastRecord {
    ForecastRecord {
        product_id: product.to_string(),
        date: date(2024, 1, day),
        forecasted_sales: sales,
    }
}

fn batch(product: &str, id: &str, expiry_day: u32, quantity: f64) -> InventoryBatch {
    InventoryBatch {
        product_id: product.to_string(),
        batch_id: id.to_string(),
        expiry_date: date(2024, 1, expiry_day),
        quantity,
    }
}

#[test]
fn one_point_per_distinct_forecast_date_ascending() {
    let f = vec![
        forecast("P0001", 3, 1.0),
        forecast("P0001", 1, 1.0),
        forecast("P0001", 2, 1.0),
    ];
    let b = vec![batch("P0001", "P0001_B1", 31, 10.0)];

    let points = coverage_over_time(&f, &b, "P0001").unwrap();
    let dates: Vec<NaiveDate> = points.iter().map(|p| p.date).collect();
    assert_eq!(
        dates,
        vec![date(2024, 1, 1), date(2024, 1, 2), date(2024, 1, 3)]
    );
}

/// Each anchor measures coverage from itself: a shrinking horizon with
/// ample stock counts down to the last day.
#[test]
fn horizon_shrinks_toward_the_end() {
    let f: Vec<ForecastRecord> = (1..=4).map(|d| forecast("P0001", d, 1.0)).collect();
    let b = vec![batch("P0001", "P0001_B1", 31, 100.0)];

    let points = coverage_over_time(&f, &b, "P0001").unwrap();
    let coverages: Vec<u32> = points.iter().map(|p| p.days_forward_coverage).collect();
    assert_eq!(coverages, vec![4, 3, 2, 1]);
}

/// The snapshot total shrinks as anchors pass batch expiries.
#[test]
fn snapshot_drops_as_batches_expire() {
    let f: Vec<ForecastRecord> = (1..=3).map(|d| forecast("P0001", d, 1.0)).collect();
    let b = vec![
        batch("P0001", "P0001_B1", 1, 5.0),
        batch("P0001", "P0001_B2", 31, 7.0),
    ];

    let points = coverage_over_time(&f, &b, "P0001").unwrap();
    let totals: Vec<f64> = points.iter().map(|p| p.total_inventory).collect();
    assert_eq!(totals, vec![12.0, 7.0, 7.0]);
}

/// The first anchor agrees with a default compute_coverage run restricted
/// to the same product.
#[test]
fn first_anchor_matches_table_row() {
    let f: Vec<ForecastRecord> = (1..=5).map(|d| forecast("P0001", d, 4.0)).collect();
    let b = vec![
        batch("P0001", "P0001_B1", 2, 6.0),
        batch("P0001", "P0001_B2", 31, 6.0),
    ];

    let points = coverage_over_time(&f, &b, "P0001").unwrap();
    let rows = compute_coverage(&f, &b, &CoverageConfig::default()).unwrap();

    assert_eq!(points[0].days_forward_coverage, rows[0].days_forward_coverage);
    assert_eq!(points[0].total_inventory, rows[0].total_inventory);
}

/// A product missing from either input yields an empty series.
#[test]
fn missing_product_yields_empty_series() {
    let f = vec![forecast("P0001", 1, 1.0)];
    let b = vec![batch("P0002", "P0002_B1", 31, 10.0)];

    assert!(coverage_over_time(&f, &b, "P0001").unwrap().is_empty());
    assert!(coverage_over_time(&f, &b, "P0002").unwrap().is_empty());
    assert!(coverage_over_time(&f, &b, "P0003").unwrap().is_empty());
}

/// Validation applies to the whole inputs, not just the chosen product.
#[test]
fn validation_covers_other_products_too() {
    let f = vec![forecast("P0001", 1, 1.0), forecast("P0002", 1, -1.0)];
    let b = vec![batch("P0001", "P0001_B1", 31, 10.0)];

    let err = coverage_over_time(&f, &b, "P0001").unwrap_err();
    assert!(matches!(err, CoverageError::Validation { count: 1, .. }));
}
