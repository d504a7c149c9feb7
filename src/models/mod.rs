//! Model specifications and forecast output types

use crate::error::{ForecastError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

pub mod sarima;

/// The two model families considered during the search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModelFamily {
    /// Non-seasonal autoregressive integrated moving average
    Arima,
    /// Seasonal variant with an additional seasonal order
    Sarima,
}

impl fmt::Display for ModelFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelFamily::Arima => write!(f, "ARIMA"),
            ModelFamily::Sarima => write!(f, "SARIMA"),
        }
    }
}

/// One concrete candidate order considered during the grid search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModelSpec {
    NonSeasonal {
        p: usize,
        d: usize,
        q: usize,
    },
    Seasonal {
        p: usize,
        d: usize,
        q: usize,
        sp: usize,
        sd: usize,
        sq: usize,
        period: usize,
    },
}

impl ModelSpec {
    /// The family this specification belongs to
    pub fn family(&self) -> ModelFamily {
        match self {
            ModelSpec::NonSeasonal { .. } => ModelFamily::Arima,
            ModelSpec::Seasonal { .. } => ModelFamily::Sarima,
        }
    }
}

impl fmt::Display for ModelSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelSpec::NonSeasonal { p, d, q } => write!(f, "ARIMA({},{},{})", p, d, q),
            ModelSpec::Seasonal {
                p,
                d,
                q,
                sp,
                sd,
                sq,
                period,
            } => write!(
                f,
                "SARIMA({},{},{})({},{},{})[{}]",
                p, d, q, sp, sd, sq, period
            ),
        }
    }
}

/// One forecasted observation: future trading date and predicted price
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub date: NaiveDate,
    pub price: f64,
}

/// An ordered sequence of point forecasts on a business-day calendar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    points: Vec<ForecastPoint>,
}

impl Forecast {
    /// Pair future dates with predicted prices
    pub fn new(dates: Vec<NaiveDate>, prices: Vec<f64>) -> Result<Self> {
        if dates.len() != prices.len() {
            return Err(ForecastError::Forecasting(format!(
                "date count ({}) does not match prediction count ({})",
                dates.len(),
                prices.len()
            )));
        }
        let points = dates
            .into_iter()
            .zip(prices)
            .map(|(date, price)| ForecastPoint { date, price })
            .collect();
        Ok(Self { points })
    }

    /// The forecasted observations in date order
    pub fn points(&self) -> &[ForecastPoint] {
        &self.points
    }

    /// Predicted prices in date order
    pub fn prices(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.price).collect()
    }

    /// Future dates in order
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.points.iter().map(|p| p.date).collect()
    }

    /// Number of forecasted periods
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the forecast holds no entries
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Render the forecast as JSON for downstream presentation
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(&self.points)
            .map_err(|e| ForecastError::Forecasting(format!("JSON serialization failed: {}", e)))
    }
}
