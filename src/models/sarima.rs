//! Seasonal and non-seasonal ARIMA estimation
//!
//! Candidates from both families share one estimator: a non-seasonal
//! specification is fitted with all seasonal orders at zero. Estimation
//! is closed form and deterministic: the series is differenced per the
//! specification and centered on its mean, AR coefficients come from
//! the Yule-Walker equations solved with Levinson-Durbin, seasonal AR
//! terms from autocorrelations at seasonal lags, and MA terms from
//! residual autocorrelations. The Gaussian log-likelihood of the
//! in-sample residuals yields the AIC used for candidate comparison.

use crate::data::PriceSeries;
use crate::error::{ForecastError, Result};
use crate::models::ModelSpec;

/// Below this residual or series variance the model is unidentifiable
const MIN_VARIANCE: f64 = 1e-12;

/// Keeps moment-based coefficient estimates inside the invertible range
const COEFF_CLAMP: f64 = 0.99;

/// An unfitted candidate model
#[derive(Debug, Clone)]
pub struct SarimaModel {
    spec: ModelSpec,
    p: usize,
    d: usize,
    q: usize,
    sp: usize,
    sd: usize,
    sq: usize,
    period: usize,
}

/// State needed to undo one differencing pass when re-integrating
/// forecasts back to the price level
#[derive(Debug, Clone)]
enum IntegrationStep {
    /// Regular differencing: the last value of the pre-differenced series
    Level { last: f64 },
    /// Seasonal differencing: the last `period` values of the
    /// pre-differenced series
    Seasonal { tail: Vec<f64> },
}

/// A fitted model: estimated coefficients plus the differenced training
/// state required to project forward
#[derive(Debug, Clone)]
pub struct FittedSarima {
    spec: ModelSpec,
    period: usize,
    ar: Vec<f64>,
    ma: Vec<f64>,
    seasonal_ar: Vec<f64>,
    seasonal_ma: Vec<f64>,
    working: Vec<f64>,
    residuals: Vec<f64>,
    offset: f64,
    integration: Vec<IntegrationStep>,
    sigma2: f64,
    log_likelihood: f64,
    aic: f64,
}

impl SarimaModel {
    pub fn new(spec: ModelSpec) -> Self {
        match spec {
            ModelSpec::NonSeasonal { p, d, q } => Self {
                spec,
                p,
                d,
                q,
                sp: 0,
                sd: 0,
                sq: 0,
                period: 1,
            },
            ModelSpec::Seasonal {
                p,
                d,
                q,
                sp,
                sd,
                sq,
                period,
            } => Self {
                spec,
                p,
                d,
                q,
                sp,
                sd,
                sq,
                period,
            },
        }
    }

    pub fn spec(&self) -> ModelSpec {
        self.spec
    }

    /// Fewest observations the orders admit
    fn min_observations(&self) -> usize {
        self.p + self.d + self.q + self.period * (self.sp + self.sd + self.sq) + 1
    }

    /// Estimate the model against the closing prices of `series`
    ///
    /// Any infeasibility (too few observations, a constant stretch after
    /// differencing, a degenerate likelihood) is reported as
    /// [`ForecastError::FitFailed`]; estimation never panics and is not
    /// retried.
    pub fn fit(&self, series: &PriceSeries) -> Result<FittedSarima> {
        if matches!(self.spec, ModelSpec::Seasonal { .. }) && self.period < 2 {
            return Err(ForecastError::FitFailed(format!(
                "{} has a seasonal period below 2, no cycle to model",
                self.spec
            )));
        }
        let closes = series.closes();
        let min = self.min_observations();
        if closes.len() < min {
            return Err(ForecastError::FitFailed(format!(
                "{} needs at least {} observations, series has {}",
                self.spec,
                min,
                closes.len()
            )));
        }

        // Difference the series, remembering what each pass needs for
        // re-integration later.
        let mut working = closes;
        let mut integration = Vec::with_capacity(self.d + self.sd);
        for _ in 0..self.d {
            let last = match working.last() {
                Some(&value) => value,
                None => {
                    return Err(ForecastError::FitFailed(
                        "series exhausted by differencing".to_string(),
                    ))
                }
            };
            integration.push(IntegrationStep::Level { last });
            working = difference(&working);
        }
        for _ in 0..self.sd {
            if working.len() <= self.period {
                return Err(ForecastError::FitFailed(format!(
                    "{} observations remain, seasonal differencing needs more than {}",
                    working.len(),
                    self.period
                )));
            }
            let tail = working[working.len() - self.period..].to_vec();
            integration.push(IntegrationStep::Seasonal { tail });
            working = seasonal_difference(&working, self.period);
        }

        let max_lag = self
            .p
            .max(self.q)
            .max(self.sp * self.period)
            .max(self.sq * self.period);
        if working.len() < max_lag + 2 {
            return Err(ForecastError::FitFailed(format!(
                "{} observations remain after differencing, {} needs at least {}",
                working.len(),
                self.spec,
                max_lag + 2
            )));
        }

        // Center the differenced series; the recursion and the
        // coefficient estimates then share the same zero-mean domain.
        let offset = working.iter().sum::<f64>() / working.len() as f64;
        let working: Vec<f64> = working.iter().map(|v| v - offset).collect();

        // AR coefficients from the Yule-Walker equations.
        let ar = if self.p > 0 {
            let acf = autocorrelations(&working, self.p)?;
            levinson_durbin(&acf, self.p)
        } else {
            Vec::new()
        };

        // Seasonal AR terms from autocorrelations at seasonal lags.
        let seasonal_ar = if self.sp > 0 {
            let acf = autocorrelations(&working, self.sp * self.period)?;
            (1..=self.sp)
                .map(|j| acf[j * self.period].clamp(-COEFF_CLAMP, COEFF_CLAMP))
                .collect()
        } else {
            Vec::new()
        };

        // MA terms from the autocorrelations of the AR-only residuals.
        let (ma, seasonal_ma) = if self.q > 0 || self.sq > 0 {
            let ar_residuals = ar_residuals(&working, &ar);
            let res_acf = autocorrelations(&ar_residuals, self.q.max(self.sq * self.period))?;
            let ma = (1..=self.q)
                .map(|j| res_acf[j].clamp(-COEFF_CLAMP, COEFF_CLAMP))
                .collect();
            let seasonal_ma = (1..=self.sq)
                .map(|j| res_acf[j * self.period].clamp(-COEFF_CLAMP, COEFF_CLAMP))
                .collect();
            (ma, seasonal_ma)
        } else {
            (Vec::new(), Vec::new())
        };

        // In-sample one-step predictions and residuals.
        let n = working.len();
        let mut residuals = Vec::with_capacity(n);
        for t in 0..n {
            let mut prediction = 0.0;
            for (j, &phi) in ar.iter().enumerate() {
                if t > j {
                    prediction += phi * working[t - j - 1];
                }
            }
            for (j, &theta) in ma.iter().enumerate() {
                if t > j {
                    prediction += theta * residuals[t - j - 1];
                }
            }
            for (j, &phi) in seasonal_ar.iter().enumerate() {
                let lag = (j + 1) * self.period;
                if t >= lag {
                    prediction += phi * working[t - lag];
                }
            }
            for (j, &theta) in seasonal_ma.iter().enumerate() {
                let lag = (j + 1) * self.period;
                if t >= lag {
                    prediction += theta * residuals[t - lag];
                }
            }
            residuals.push(working[t] - prediction);
        }

        let sigma2 = residuals.iter().map(|r| r * r).sum::<f64>() / n as f64;
        if !sigma2.is_finite() || sigma2 < MIN_VARIANCE {
            return Err(ForecastError::FitFailed(format!(
                "degenerate residual variance for {}",
                self.spec
            )));
        }

        let log_likelihood =
            -0.5 * n as f64 * ((2.0 * std::f64::consts::PI).ln() + sigma2.ln() + 1.0);
        let k = (self.p + self.q + self.sp + self.sq + 1) as f64;
        let aic = -2.0 * log_likelihood + 2.0 * k;
        if !aic.is_finite() {
            return Err(ForecastError::FitFailed(format!(
                "non-finite AIC for {}",
                self.spec
            )));
        }

        Ok(FittedSarima {
            spec: self.spec,
            period: self.period,
            ar,
            ma,
            seasonal_ar,
            seasonal_ma,
            working,
            residuals,
            offset,
            integration,
            sigma2,
            log_likelihood,
            aic,
        })
    }
}

impl FittedSarima {
    pub fn spec(&self) -> ModelSpec {
        self.spec
    }

    /// Akaike information criterion of the fit; lower is better
    pub fn aic(&self) -> f64 {
        self.aic
    }

    pub fn log_likelihood(&self) -> f64 {
        self.log_likelihood
    }

    pub fn residual_variance(&self) -> f64 {
        self.sigma2
    }

    /// Project the model `horizon` steps past the end of the training
    /// series, returning one predicted price per step
    ///
    /// Future shocks enter at their zero expectation; the projection runs
    /// in the differenced domain and is then re-integrated back to price
    /// levels, so the result length always equals `horizon`.
    pub fn forecast(&self, horizon: usize) -> Result<Vec<f64>> {
        if horizon == 0 {
            return Err(ForecastError::Forecasting(
                "forecast horizon must be positive".to_string(),
            ));
        }

        let mut extended = self.working.clone();
        let mut shocks = self.residuals.clone();
        let mut projected = Vec::with_capacity(horizon);
        for _ in 0..horizon {
            let t = extended.len();
            let mut next = 0.0;
            for (j, &phi) in self.ar.iter().enumerate() {
                if t > j {
                    next += phi * extended[t - j - 1];
                }
            }
            for (j, &theta) in self.ma.iter().enumerate() {
                if t > j {
                    next += theta * shocks[t - j - 1];
                }
            }
            for (j, &phi) in self.seasonal_ar.iter().enumerate() {
                let lag = (j + 1) * self.period;
                if t >= lag {
                    next += phi * extended[t - lag];
                }
            }
            for (j, &theta) in self.seasonal_ma.iter().enumerate() {
                let lag = (j + 1) * self.period;
                if t >= lag {
                    next += theta * shocks[t - lag];
                }
            }
            projected.push(next);
            extended.push(next);
            shocks.push(0.0);
        }

        // Leave the zero-mean domain, then undo the differencing passes
        // in reverse order.
        let mut projected: Vec<f64> = projected.iter().map(|v| v + self.offset).collect();
        for step in self.integration.iter().rev() {
            projected = match step {
                IntegrationStep::Level { last } => {
                    let mut level = *last;
                    projected
                        .iter()
                        .map(|delta| {
                            level += delta;
                            level
                        })
                        .collect()
                }
                IntegrationStep::Seasonal { tail } => {
                    let mut history = tail.clone();
                    let mut levels = Vec::with_capacity(projected.len());
                    for delta in &projected {
                        let base = history[history.len() - self.period];
                        let value = delta + base;
                        history.push(value);
                        levels.push(value);
                    }
                    levels
                }
            };
        }
        Ok(projected)
    }
}

/// First difference of a series
fn difference(values: &[f64]) -> Vec<f64> {
    values.windows(2).map(|w| w[1] - w[0]).collect()
}

/// Difference at the seasonal lag
fn seasonal_difference(values: &[f64], period: usize) -> Vec<f64> {
    values
        .iter()
        .skip(period)
        .zip(values.iter())
        .map(|(current, lagged)| current - lagged)
        .collect()
}

/// Residuals of an AR-only prediction, used to seed MA estimation
fn ar_residuals(values: &[f64], ar: &[f64]) -> Vec<f64> {
    let mut residuals = Vec::with_capacity(values.len());
    for t in 0..values.len() {
        let mut prediction = 0.0;
        for (j, &phi) in ar.iter().enumerate() {
            if t > j {
                prediction += phi * values[t - j - 1];
            }
        }
        residuals.push(values[t] - prediction);
    }
    residuals
}

/// Sample autocorrelations for lags `0..=max_lag`
fn autocorrelations(values: &[f64], max_lag: usize) -> Result<Vec<f64>> {
    let n = values.len();
    if n == 0 || max_lag >= n {
        return Err(ForecastError::FitFailed(format!(
            "{} observations are too few for autocorrelation at lag {}",
            n, max_lag
        )));
    }

    let mean = values.iter().sum::<f64>() / n as f64;
    let centered: Vec<f64> = values.iter().map(|v| v - mean).collect();
    let variance = centered.iter().map(|v| v * v).sum::<f64>() / n as f64;
    if variance < MIN_VARIANCE {
        return Err(ForecastError::FitFailed(
            "constant series after differencing".to_string(),
        ));
    }

    Ok((0..=max_lag)
        .map(|lag| {
            let covariance = centered[..n - lag]
                .iter()
                .zip(&centered[lag..])
                .map(|(a, b)| a * b)
                .sum::<f64>()
                / n as f64;
            covariance / variance
        })
        .collect())
}

/// Solve the Yule-Walker equations with the Levinson-Durbin recursion
fn levinson_durbin(acf: &[f64], order: usize) -> Vec<f64> {
    if order == 0 {
        return Vec::new();
    }

    let mut phi = vec![vec![0.0; order]; order];
    phi[0][0] = acf[1];

    for k in 1..order {
        let mut numerator = acf[k + 1];
        let mut denominator = 1.0;
        for j in 0..k {
            numerator -= phi[k - 1][j] * acf[k - j];
            denominator -= phi[k - 1][j] * acf[j + 1];
        }

        let reflection = if denominator.abs() < MIN_VARIANCE {
            0.0
        } else {
            numerator / denominator
        };

        phi[k][k] = reflection;
        for j in 0..k {
            phi[k][j] = phi[k - 1][j] - reflection * phi[k - 1][k - 1 - j];
        }
    }

    phi[order - 1].clone()
}
