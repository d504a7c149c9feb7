//! Exhaustive best-by-AIC search over the candidate grid

use crate::candidates::CandidateGrid;
use crate::data::PriceSeries;
use crate::models::sarima::{FittedSarima, SarimaModel};
use crate::models::{ModelFamily, ModelSpec};
use tracing::{debug, trace};

/// Outcome of one search over the grid
#[derive(Debug)]
pub enum Selection {
    /// At least one candidate fitted; the global AIC minimum
    Found(SelectedModel),
    /// Every candidate failed to fit
    NotFound,
}

/// The winning candidate with its fitted handle
#[derive(Debug)]
pub struct SelectedModel {
    pub spec: ModelSpec,
    pub model: FittedSarima,
}

impl SelectedModel {
    pub fn family(&self) -> ModelFamily {
        self.spec.family()
    }

    pub fn aic(&self) -> f64 {
        self.model.aic()
    }
}

/// Fit every candidate in the grid and keep the AIC minimum
///
/// Every candidate is always attempted; individual fit failures are
/// logged and excluded, never propagated. A candidate replaces the
/// incumbent only on strictly lower AIC, so an exact tie goes to the
/// first candidate in generation order.
pub fn select_best(series: &PriceSeries, grid: &CandidateGrid) -> Selection {
    let best = grid.specs().fold(None::<SelectedModel>, |best, spec| {
        match SarimaModel::new(spec).fit(series) {
            Ok(model) => {
                trace!(candidate = %spec, aic = model.aic(), "candidate fitted");
                match best {
                    Some(incumbent) if incumbent.aic() <= model.aic() => Some(incumbent),
                    _ => Some(SelectedModel { spec, model }),
                }
            }
            Err(err) => {
                debug!(candidate = %spec, %err, "candidate excluded");
                best
            }
        }
    });

    match best {
        Some(winner) => Selection::Found(winner),
        None => Selection::NotFound,
    }
}
