//! Daily price series handling for forecasting

use crate::error::{ForecastError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use statrs::statistics::Statistics;
use std::path::Path;

/// One daily observation: trading date and closing price
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub close: f64,
}

/// Ordered sequence of daily price observations
///
/// Construction enforces strictly increasing dates and finite closing
/// prices, so a `PriceSeries` never carries missing or out-of-order
/// values. An empty series is representable; rejecting it is the
/// responsibility of the engine boundary, which knows the instrument
/// and lookback window being processed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSeries {
    points: Vec<PricePoint>,
}

/// Data loader for price series files
#[derive(Debug)]
pub struct DataLoader;

impl DataLoader {
    /// Load a price series from a CSV file with `date,close` columns
    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<PriceSeries> {
        let mut reader = csv::Reader::from_path(path)?;
        let mut points = Vec::new();
        for record in reader.deserialize() {
            let point: PricePoint = record?;
            points.push(point);
        }
        PriceSeries::from_points(points)
    }
}

impl PriceSeries {
    /// Create a series from observations, checking the ordering and
    /// finite-value invariants
    pub fn from_points(points: Vec<PricePoint>) -> Result<Self> {
        for pair in points.windows(2) {
            if pair[1].date <= pair[0].date {
                return Err(ForecastError::InvalidSeries(format!(
                    "dates must be strictly increasing, found {} after {}",
                    pair[1].date, pair[0].date
                )));
            }
        }
        if let Some(point) = points.iter().find(|p| !p.close.is_finite()) {
            return Err(ForecastError::InvalidSeries(format!(
                "non-finite closing price on {}",
                point.date
            )));
        }
        Ok(Self { points })
    }

    /// The observations in date order
    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    /// Closing prices in date order
    pub fn closes(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.close).collect()
    }

    /// Observation dates in order
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.points.iter().map(|p| p.date).collect()
    }

    /// The last observed trading date, if any
    pub fn last_date(&self) -> Option<NaiveDate> {
        self.points.last().map(|p| p.date)
    }

    /// The last `n` observations (fewer when the series is shorter)
    pub fn tail(&self, n: usize) -> &[PricePoint] {
        &self.points[self.points.len().saturating_sub(n)..]
    }

    /// Number of observations
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the series holds no observations
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Mean closing price
    pub fn mean(&self) -> Result<f64> {
        if self.is_empty() {
            return Err(ForecastError::InvalidSeries(
                "cannot take the mean of an empty series".to_string(),
            ));
        }
        Ok(self.closes().mean())
    }

    /// Sample standard deviation of the closing prices
    pub fn std_dev(&self) -> Result<f64> {
        if self.len() < 2 {
            return Err(ForecastError::InvalidSeries(
                "need at least two observations for a standard deviation".to_string(),
            ));
        }
        Ok(self.closes().std_dev())
    }
}
