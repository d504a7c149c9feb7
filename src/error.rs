//! Error types for the price_forecast crate

use thiserror::Error;

/// Custom error types for the price_forecast crate
#[derive(Debug, Error)]
pub enum ForecastError {
    /// The instrument has no usable observations in the lookback window
    #[error("no price data for {symbol} in the last {lookback_days} days")]
    EmptySeries { symbol: String, lookback_days: u32 },

    /// The observation sequence violates an ordering or value invariant
    #[error("invalid series: {0}")]
    InvalidSeries(String),

    /// A single candidate model could not be estimated
    #[error("model fit failed: {0}")]
    FitFailed(String),

    /// Every candidate in the search grid failed to fit
    #[error("no suitable model found for {symbol}")]
    NoModelFound { symbol: String },

    /// The requested horizon is outside the supported range
    #[error("forecast horizon {horizon} is outside the supported range {min}..={max}")]
    InvalidHorizon {
        horizon: usize,
        min: usize,
        max: usize,
    },

    /// A configuration value is outside its valid range
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Error while projecting a fitted model forward
    #[error("forecasting error: {0}")]
    Forecasting(String),

    /// Error from IO operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error while reading CSV input
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, ForecastError>;
