//! Error types for the dfc-coverage crate.

/// Error type for all fallible operations in the dfc-coverage crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CoverageError {
    /// Returned when no reference date was supplied and the forecast is
    /// empty, so no default can be inferred.
    #[error("cannot infer reference date: forecast is empty and no explicit date was given")]
    MissingReferenceDate,

    /// Returned when one or more input records fail validation.
    #[error("{count} validation error(s): {details}")]
    Validation {
        /// Number of accumulated validation failures.
        count: usize,
        /// Human-readable summary of the failures.
        details: String,
    },
}
