//! Coverage computation configuration.

use chrono::NaiveDate;

/// Configuration for a coverage run.
#[derive(Debug, Clone)]
pub struct CoverageConfig {
    reference_date: Option<NaiveDate>,
    parallel: bool,
}

impl Default for CoverageConfig {
    fn default() -> Self {
        Self {
            reference_date: None,
            parallel: true,
        }
    }
}

impl CoverageConfig {
    /// Set an explicit reference date.
    ///
    /// When unset, the minimum date present in the forecast is used.
    pub fn with_reference_date(mut self, date: NaiveDate) -> Self {
        self.reference_date = Some(date);
        self
    }

    /// Enable or disable the per-product worker pool.
    ///
    /// The produced rows are identical either way; sequential runs exist
    /// for debugging and for embedding in already-parallel callers.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Returns the explicit reference date, if any.
    pub fn reference_date(&self) -> Option<NaiveDate> {
        self.reference_date
    }

    /// Returns whether per-product simulations run on a worker pool.
    pub fn parallel(&self) -> bool {
        self.parallel
    }
}
