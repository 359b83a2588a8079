use std::path::PathBuf;

use serde::Deserialize;

/// Top-level DFC configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct DfcConfig {
    /// Global RNG seed for dataset generation.
    #[serde(default)]
    pub seed: Option<u64>,

    /// File layout settings.
    #[serde(default)]
    pub io: IoToml,

    /// Synthetic dataset settings.
    #[serde(default)]
    pub generate: GenerateToml,

    /// Coverage computation settings.
    #[serde(default)]
    pub coverage: CoverageToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IoToml {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    #[serde(default = "default_forecast_file")]
    pub forecast_file: String,
    #[serde(default = "default_inventory_file")]
    pub inventory_file: String,
    #[serde(default = "default_coverage_file")]
    pub coverage_file: String,
    #[serde(default = "default_timeline_file")]
    pub timeline_file: String,
    /// Column-name overrides for reading foreign files.
    #[serde(default)]
    pub columns: ColumnsToml,
}

impl Default for IoToml {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            forecast_file: default_forecast_file(),
            inventory_file: default_inventory_file(),
            coverage_file: default_coverage_file(),
            timeline_file: default_timeline_file(),
            columns: ColumnsToml::default(),
        }
    }
}

impl IoToml {
    pub fn forecast_path(&self) -> PathBuf {
        self.data_dir.join(&self.forecast_file)
    }

    pub fn inventory_path(&self) -> PathBuf {
        self.data_dir.join(&self.inventory_file)
    }

    pub fn coverage_path(&self) -> PathBuf {
        self.data_dir.join(&self.coverage_file)
    }

    pub fn timeline_path(&self) -> PathBuf {
        self.data_dir.join(&self.timeline_file)
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}
fn default_forecast_file() -> String {
    "forecast.csv".to_string()
}
fn default_inventory_file() -> String {
    "inventory.csv".to_string()
}
fn default_coverage_file() -> String {
    "coverage.csv".to_string()
}
fn default_timeline_file() -> String {
    "timeline.csv".to_string()
}

/// Optional column-name overrides; unset fields keep the reader defaults.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ColumnsToml {
    pub forecast_product: Option<String>,
    pub forecast_date: Option<String>,
    pub forecast_sales: Option<String>,
    pub inventory_product: Option<String>,
    pub inventory_batch: Option<String>,
    pub inventory_expiry: Option<String>,
    pub inventory_quantity: Option<String>,
    pub date_format: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GenerateToml {
    #[serde(default = "default_num_products")]
    pub num_products: usize,
    #[serde(default = "default_forecast_days")]
    pub forecast_days: u32,
    #[serde(default = "default_start_date")]
    pub start_date: String,
    #[serde(default = "default_end_date")]
    pub end_date: String,
    #[serde(default = "default_base_demand_min")]
    pub base_demand_min: u32,
    #[serde(default = "default_base_demand_max")]
    pub base_demand_max: u32,
    #[serde(default = "default_min_batches")]
    pub min_batches_per_product: u32,
    #[serde(default = "default_max_batches")]
    pub max_batches_per_product: u32,
    #[serde(default = "default_base_inventory_min")]
    pub base_inventory_min: u32,
    #[serde(default = "default_base_inventory_max")]
    pub base_inventory_max: u32,
}

impl Default for GenerateToml {
    fn default() -> Self {
        Self {
            num_products: default_num_products(),
            forecast_days: default_forecast_days(),
            start_date: default_start_date(),
            end_date: default_end_date(),
            base_demand_min: default_base_demand_min(),
            base_demand_max: default_base_demand_max(),
            min_batches_per_product: default_min_batches(),
            max_batches_per_product: default_max_batches(),
            base_inventory_min: default_base_inventory_min(),
            base_inventory_max: default_base_inventory_max(),
        }
    }
}

fn default_num_products() -> usize {
    100
}
fn default_forecast_days() -> u32 {
    30
}
fn default_start_date() -> String {
    "2024-07-01".to_string()
}
fn default_end_date() -> String {
    "2024-08-31".to_string()
}
fn default_base_demand_min() -> u32 {
    10
}
fn default_base_demand_max() -> u32 {
    100
}
fn default_min_batches() -> u32 {
    2
}
fn default_max_batches() -> u32 {
    5
}
fn default_base_inventory_min() -> u32 {
    200
}
fn default_base_inventory_max() -> u32 {
    1000
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CoverageToml {
    /// Explicit reference date (YYYY-MM-DD); earliest forecast date when unset.
    #[serde(default)]
    pub reference_date: Option<String>,
    #[serde(default = "default_true")]
    pub parallel: bool,
    /// Products below this many covered days are flagged as stock-out risks.
    #[serde(default = "default_low_coverage_threshold")]
    pub low_coverage_threshold: u32,
}

impl Default for CoverageToml {
    fn default() -> Self {
        Self {
            reference_date: None,
            parallel: true,
            low_coverage_threshold: default_low_coverage_threshold(),
        }
    }
}

fn default_true() -> bool {
    true
}
fn default_low_coverage_threshold() -> u32 {
    7
}
