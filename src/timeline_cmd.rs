//! Timeline command: coverage over time for a single product.

use anyhow::{Context, Result, bail};
use tracing::{info, info_span};

use dfc_coverage::coverage_over_time;
use dfc_io::{read_forecast, read_inventory, write_timeline};

use crate::cli::TimelineArgs;
use crate::config::DfcConfig;
use crate::convert;

/// Run the per-product timeline pipeline.
pub fn run(args: TimelineArgs) -> Result<()> {
    let _cmd = info_span!("timeline").entered();

    let toml_str = std::fs::read_to_string(&args.config)
        .with_context(|| format!("failed to read config file: {}", args.config.display()))?;
    let config: DfcConfig = toml::from_str(&toml_str).context("failed to parse TOML config")?;

    let reader_cfg = convert::build_reader_config(&config.io);

    let forecast_path = config.io.forecast_path();
    info!(path = %forecast_path.display(), "reading forecast");
    let forecast = read_forecast(&forecast_path, &reader_cfg)
        .with_context(|| format!("failed to read forecast: {}", forecast_path.display()))?;

    let inventory_path = config.io.inventory_path();
    info!(path = %inventory_path.display(), "reading inventory");
    let inventory = read_inventory(&inventory_path, &reader_cfg)
        .with_context(|| format!("failed to read inventory: {}", inventory_path.display()))?;

    let points = coverage_over_time(&forecast, &inventory, &args.product)
        .context("timeline computation failed")?;
    if points.is_empty() {
        bail!(
            "no timeline for product '{}': it must appear in both the forecast and the inventory",
            args.product
        );
    }

    let output = args.output.unwrap_or_else(|| config.io.timeline_path());
    write_timeline(&output, &points)
        .with_context(|| format!("failed to write timeline: {}", output.display()))?;
    info!(
        path = %output.display(),
        product = %args.product,
        n_points = points.len(),
        "timeline written"
    );

    Ok(())
}
