//! Per-instrument forecasting boundary and batch driver

use crate::calendar::business_days_after;
use crate::candidates::{CandidateGrid, DEFAULT_SEASONAL_PERIOD};
use crate::data::PriceSeries;
use crate::error::{ForecastError, Result};
use crate::models::{Forecast, ModelSpec};
use crate::selection::{select_best, Selection};
use serde::Serialize;
use tracing::info;

/// Engine parameters
///
/// `lookback_days` only describes the window the fetch collaborator was
/// asked for; it is echoed in diagnostics, not used to trim the series.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub lookback_days: u32,
    pub seasonal_period: usize,
    pub min_horizon: usize,
    pub max_horizon: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            lookback_days: 60,
            seasonal_period: DEFAULT_SEASONAL_PERIOD,
            min_horizon: 5,
            max_horizon: 90,
        }
    }
}

/// One forecasting job: an instrument, its observed series, and the
/// requested horizon in business days
#[derive(Debug, Clone)]
pub struct ForecastRequest {
    pub symbol: String,
    pub series: PriceSeries,
    pub horizon: usize,
}

/// Result of one forecasting run, ready for presentation
#[derive(Debug, Clone, Serialize)]
pub struct InstrumentForecast {
    pub symbol: String,
    pub spec: ModelSpec,
    pub aic: f64,
    pub forecast: Forecast,
}

/// The model-search and forecasting engine
#[derive(Debug, Clone)]
pub struct Engine {
    config: EngineConfig,
    grid: CandidateGrid,
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            config: EngineConfig::default(),
            grid: CandidateGrid::default(),
        }
    }
}

impl Engine {
    /// Build an engine, rejecting configurations the pipeline cannot
    /// honour: an empty or zero-starting horizon range, or a seasonal
    /// period too short to describe a cycle
    pub fn new(config: EngineConfig) -> Result<Self> {
        if config.min_horizon == 0 || config.min_horizon > config.max_horizon {
            return Err(ForecastError::InvalidParameter(format!(
                "horizon range {}..={} is empty or starts at zero",
                config.min_horizon, config.max_horizon
            )));
        }
        let grid = CandidateGrid::new(config.seasonal_period)?;
        Ok(Self { config, grid })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    fn validate_horizon(&self, horizon: usize) -> Result<()> {
        if horizon < self.config.min_horizon || horizon > self.config.max_horizon {
            return Err(ForecastError::InvalidHorizon {
                horizon,
                min: self.config.min_horizon,
                max: self.config.max_horizon,
            });
        }
        Ok(())
    }

    /// Reject an instrument with no observations before any fitting starts
    fn validate<'a>(&self, symbol: &str, series: &'a PriceSeries) -> Result<&'a PriceSeries> {
        if series.is_empty() {
            return Err(ForecastError::EmptySeries {
                symbol: symbol.to_string(),
                lookback_days: self.config.lookback_days,
            });
        }
        Ok(series)
    }

    /// Run the full pipeline for one instrument: validate, search the
    /// grid, and project the winner over the business-day calendar
    pub fn forecast_instrument(&self, request: &ForecastRequest) -> Result<InstrumentForecast> {
        self.validate_horizon(request.horizon)?;
        let series = self.validate(&request.symbol, &request.series)?;

        let selected = match select_best(series, &self.grid) {
            Selection::Found(selected) => selected,
            Selection::NotFound => {
                return Err(ForecastError::NoModelFound {
                    symbol: request.symbol.clone(),
                })
            }
        };
        info!(
            symbol = %request.symbol,
            model = %selected.spec,
            aic = selected.aic(),
            "model selected"
        );

        let prices = selected.model.forecast(request.horizon)?;
        let last_date = series.last_date().ok_or_else(|| {
            ForecastError::Forecasting("validated series lost its last date".to_string())
        })?;
        let dates = business_days_after(last_date, request.horizon)?;
        let forecast = Forecast::new(dates, prices)?;

        Ok(InstrumentForecast {
            symbol: request.symbol.clone(),
            spec: selected.spec,
            aic: selected.aic(),
            forecast,
        })
    }

    /// Process several instruments, capturing each failure with its
    /// instrument instead of aborting the batch
    pub fn forecast_batch(
        &self,
        requests: &[ForecastRequest],
    ) -> Vec<(String, Result<InstrumentForecast>)> {
        requests
            .iter()
            .map(|request| (request.symbol.clone(), self.forecast_instrument(request)))
            .collect()
    }
}
