//! The fixed candidate grid searched on every forecasting run

use crate::error::{ForecastError, Result};
use crate::models::ModelSpec;

/// Default seasonal cycle length: an assumed weekly pattern in daily data
pub const DEFAULT_SEASONAL_PERIOD: usize = 7;

/// Default seasonal differencing order applied to every seasonal candidate
pub const DEFAULT_SEASONAL_DIFFERENCING: usize = 1;

/// The finite grid of candidate model orders
///
/// The grid is a design parameter, not derived from the data: 8
/// non-seasonal orders (p in 1..=2, d in 0..=1, q in 1..=2) followed by
/// the same 8 crossed with seasonal AR and MA orders P, Q in 0..=1, for
/// 40 candidates per run. The seasonal period (default 7, a weekly
/// cycle assumption) and the seasonal differencing order applied to the
/// whole seasonal family (default 1) are per-grid parameters, not
/// searched dimensions.
#[derive(Debug, Clone)]
pub struct CandidateGrid {
    seasonal_period: usize,
    seasonal_d: usize,
}

impl Default for CandidateGrid {
    fn default() -> Self {
        Self {
            seasonal_period: DEFAULT_SEASONAL_PERIOD,
            seasonal_d: DEFAULT_SEASONAL_DIFFERENCING,
        }
    }
}

impl CandidateGrid {
    /// A grid with the given seasonal period
    ///
    /// A cycle needs at least two observations, so periods below 2 are
    /// rejected here instead of failing 32 fits downstream.
    pub fn new(seasonal_period: usize) -> Result<Self> {
        if seasonal_period < 2 {
            return Err(ForecastError::InvalidParameter(format!(
                "seasonal period must be at least 2, got {}",
                seasonal_period
            )));
        }
        Ok(Self {
            seasonal_period,
            seasonal_d: DEFAULT_SEASONAL_DIFFERENCING,
        })
    }

    /// Change the seasonal differencing order applied to the seasonal
    /// family
    pub fn with_seasonal_differencing(mut self, seasonal_d: usize) -> Self {
        self.seasonal_d = seasonal_d;
        self
    }

    pub fn seasonal_period(&self) -> usize {
        self.seasonal_period
    }

    pub fn seasonal_differencing(&self) -> usize {
        self.seasonal_d
    }

    /// Candidate specifications in search order: the non-seasonal family
    /// exhausted first, then the seasonal family
    ///
    /// Each call yields a fresh pass over the same 40 candidates.
    pub fn specs(&self) -> impl Iterator<Item = ModelSpec> {
        let period = self.seasonal_period;
        let sd = self.seasonal_d;
        let non_seasonal = (1..=2usize).flat_map(|p| {
            (0..=1usize)
                .flat_map(move |d| (1..=2usize).map(move |q| ModelSpec::NonSeasonal { p, d, q }))
        });
        let seasonal = (1..=2usize).flat_map(move |p| {
            (0..=1usize).flat_map(move |d| {
                (1..=2usize).flat_map(move |q| {
                    (0..=1usize).flat_map(move |sp| {
                        (0..=1usize).map(move |sq| ModelSpec::Seasonal {
                            p,
                            d,
                            q,
                            sp,
                            sd,
                            sq,
                            period,
                        })
                    })
                })
            })
        });
        non_seasonal.chain(seasonal)
    }
}
