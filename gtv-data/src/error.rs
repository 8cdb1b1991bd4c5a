/// Error types for the heat map pipeline
use thiserror::Error;

/// Main error type for loading and transforming temperature data
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HeatMapError {
    /// Network failure or non-2xx HTTP response
    #[error("{0}")]
    Fetch(String),

    /// Response body was not a valid dataset document
    #[error("Failed to parse temperature data: {0}")]
    Parse(String),

    /// The dataset loaded but contains no records
    #[error("No data available")]
    NoData,

    /// Range calculation over zero cells
    #[error("Cannot compute a temperature range over zero cells")]
    EmptyInput,

    /// Month outside 1..=12
    #[error("Month {month} of year {year} is outside 1-12")]
    MonthOutOfRange { year: i32, month: i32 },

    /// A second record for an already seen (year, month) pair
    #[error("Duplicate record for {year}-{month:02}")]
    DuplicateRecord { year: i32, month: i32 },
}

impl From<serde_json::Error> for HeatMapError {
    fn from(err: serde_json::Error) -> Self {
        HeatMapError::Parse(err.to_string())
    }
}

/// Convenience result alias for the heat map pipeline
pub type Result<T> = std::result::Result<T, HeatMapError>;
