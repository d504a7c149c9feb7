//! # Price Forecast
//!
//! A Rust library for short-horizon price forecasting with automatic
//! model selection.
//!
//! ## Features
//!
//! - Daily price series handling with strict ordering and missing-value
//!   invariants
//! - Exhaustive grid search over non-seasonal ARIMA and seasonal SARIMA
//!   orders (40 candidates per run)
//! - Closed-form, deterministic estimation scored by AIC
//! - Point forecasts on a business-day calendar (weekends skipped)
//! - A batch boundary that reports per-instrument failures without
//!   aborting the remaining instruments
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::{Days, NaiveDate};
//! use price_forecast::{Engine, ForecastRequest, PricePoint, PriceSeries};
//!
//! # fn main() -> price_forecast::Result<()> {
//! let start = NaiveDate::from_ymd_opt(2025, 6, 2).expect("valid date");
//! let points = (0..60)
//!     .map(|i| PricePoint {
//!         date: start + Days::new(i),
//!         close: 100.0 + 0.05 * i as f64 + (i as f64 * 0.7).sin(),
//!     })
//!     .collect();
//! let series = PriceSeries::from_points(points)?;
//!
//! let engine = Engine::default();
//! let result = engine.forecast_instrument(&ForecastRequest {
//!     symbol: "AAPL".to_string(),
//!     series,
//!     horizon: 30,
//! })?;
//!
//! assert_eq!(result.forecast.len(), 30);
//! println!("selected {} (AIC {:.2})", result.spec, result.aic);
//! # Ok(())
//! # }
//! ```

pub mod calendar;
pub mod candidates;
pub mod data;
pub mod engine;
pub mod error;
pub mod models;
pub mod selection;

// Re-export commonly used types
pub use crate::candidates::{CandidateGrid, DEFAULT_SEASONAL_DIFFERENCING, DEFAULT_SEASONAL_PERIOD};
pub use crate::data::{DataLoader, PricePoint, PriceSeries};
pub use crate::engine::{Engine, EngineConfig, ForecastRequest, InstrumentForecast};
pub use crate::error::{ForecastError, Result};
pub use crate::models::{Forecast, ForecastPoint, ModelFamily, ModelSpec};
pub use crate::selection::{select_best, SelectedModel, Selection};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
