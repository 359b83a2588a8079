//! Aggregate statistics over a coverage table.

use crate::result::CoverageResult;

/// Summary figures reported after a coverage run.
#[derive(Debug, Clone, PartialEq)]
pub struct CoverageSummary {
    /// Number of products in the table.
    pub n_products: usize,
    /// Mean days forward coverage. 0.0 for an empty table.
    pub mean_coverage: f64,
    /// Minimum days forward coverage.
    pub min_coverage: u32,
    /// Maximum days forward coverage.
    pub max_coverage: u32,
    /// Products strictly below the low-coverage threshold.
    pub n_low_coverage: usize,
    /// Products with zero inventory at the reference date.
    pub n_no_inventory: usize,
}

/// Summarises a coverage table.
///
/// `low_coverage_threshold` is the stock-out watch level: products with
/// fewer covered days than the threshold are counted as low-coverage.
pub fn summarize(results: &[CoverageResult], low_coverage_threshold: u32) -> CoverageSummary {
    if results.is_empty() {
        return CoverageSummary {
            n_products: 0,
            mean_coverage: 0.0,
            min_coverage: 0,
            max_coverage: 0,
            n_low_coverage: 0,
            n_no_inventory: 0,
        };
    }

    let total: u64 = results
        .iter()
        .map(|r| u64::from(r.days_forward_coverage))
        .sum();

    CoverageSummary {
        n_products: results.len(),
        mean_coverage: total as f64 / results.len() as f64,
        min_coverage: results
            .iter()
            .map(|r| r.days_forward_coverage)
            .min()
            .unwrap_or(0),
        max_coverage: results
            .iter()
            .map(|r| r.days_forward_coverage)
            .max()
            .unwrap_or(0),
        n_low_coverage: results
            .iter()
            .filter(|r| r.days_forward_coverage < low_coverage_threshold)
            .count(),
        n_no_inventory: results
            .iter()
            .filter(|r| r.total_inventory == 0.0)
            .count(),
    }
}
