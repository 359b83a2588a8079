//! Coverage command: compute days forward coverage for every product.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use dfc_coverage::{compute_coverage, summarize};
use dfc_io::{read_forecast, read_inventory, write_coverage};

use crate::cli::CoverageArgs;
use crate::config::DfcConfig;
use crate::convert;

/// How many low-coverage products to name individually in the log.
const LOW_COVERAGE_LOG_LIMIT: usize = 10;

/// Run the coverage pipeline.
pub fn run(args: CoverageArgs) -> Result<()> {
    let _cmd = info_span!("coverage").entered();

    // 1. Load project TOML
    let toml_str = std::fs::read_to_string(&args.config)
        .with_context(|| format!("failed to read config file: {}", args.config.display()))?;
    let config: DfcConfig = toml::from_str(&toml_str).context("failed to parse TOML config")?;

    // 2. Read both tables
    let reader_cfg = convert::build_reader_config(&config.io);

    let forecast_path = args.forecast.unwrap_or_else(|| config.io.forecast_path());
    info!(path = %forecast_path.display(), "reading forecast");
    let forecast = read_forecast(&forecast_path, &reader_cfg)
        .with_context(|| format!("failed to read forecast: {}", forecast_path.display()))?;
    info!(n_records = forecast.len(), "forecast loaded");

    let inventory_path = args.inventory.unwrap_or_else(|| config.io.inventory_path());
    info!(path = %inventory_path.display(), "reading inventory");
    let inventory = read_inventory(&inventory_path, &reader_cfg)
        .with_context(|| format!("failed to read inventory: {}", inventory_path.display()))?;
    info!(n_batches = inventory.len(), "inventory loaded");

    // 3. Compute coverage
    let coverage_cfg =
        convert::build_coverage_config(&config.coverage, args.reference_date, args.sequential)?;
    let results = compute_coverage(&forecast, &inventory, &coverage_cfg)
        .context("coverage computation failed")?;

    // 4. Write the coverage table
    let output = args.output.unwrap_or_else(|| config.io.coverage_path());
    write_coverage(&output, &results)
        .with_context(|| format!("failed to write coverage: {}", output.display()))?;
    info!(path = %output.display(), n_products = results.len(), "coverage written");

    // 5. Log the summary
    let threshold = config.coverage.low_coverage_threshold;
    let summary = summarize(&results, threshold);
    info!(
        n_products = summary.n_products,
        mean = summary.mean_coverage,
        min = summary.min_coverage,
        max = summary.max_coverage,
        "days forward coverage summary"
    );
    info!(
        threshold,
        n_products = summary.n_low_coverage,
        "products below low-coverage threshold"
    );
    for result in results
        .iter()
        .filter(|r| r.days_forward_coverage < threshold)
        .take(LOW_COVERAGE_LOG_LIMIT)
    {
        info!(
            product = %result.product_id,
            days = result.days_forward_coverage,
            total_inventory = result.total_inventory,
            "low coverage"
        );
    }
    info!(
        n_products = summary.n_no_inventory,
        "products with no inventory"
    );

    Ok(())
}
