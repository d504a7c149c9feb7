use chrono::{Days, NaiveDate};
use price_forecast::models::sarima::SarimaModel;
use price_forecast::{select_best, CandidateGrid, PricePoint, PriceSeries, Selection};

fn noisy_series(n: usize) -> PriceSeries {
    let start = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
    let points = (0..n)
        .map(|i| PricePoint {
            date: start + Days::new(i as u64),
            close: 100.0 + 0.05 * i as f64 + (i as f64 * 0.7).sin(),
        })
        .collect();
    PriceSeries::from_points(points).unwrap()
}

#[test]
fn winner_is_the_global_aic_minimum() {
    let series = noisy_series(60);
    let grid = CandidateGrid::default();

    let best = match select_best(&series, &grid) {
        Selection::Found(best) => best,
        Selection::NotFound => panic!("expected at least one candidate to fit"),
    };

    let mut fitted_candidates = 0;
    for spec in grid.specs() {
        if let Ok(fitted) = SarimaModel::new(spec).fit(&series) {
            fitted_candidates += 1;
            assert!(
                best.aic() <= fitted.aic(),
                "{} (AIC {}) beats the winner {} (AIC {})",
                spec,
                fitted.aic(),
                best.spec,
                best.aic()
            );
        }
    }
    assert!(fitted_candidates > 0);
}

#[test]
fn exact_ties_go_to_the_first_candidate_seen() {
    let series = noisy_series(60);
    let grid = CandidateGrid::default();

    let best = match select_best(&series, &grid) {
        Selection::Found(best) => best,
        Selection::NotFound => panic!("expected a winner"),
    };

    // The first candidate in generation order with the winning AIC must
    // be the winner itself.
    for spec in grid.specs() {
        if let Ok(fitted) = SarimaModel::new(spec).fit(&series) {
            if fitted.aic() == best.aic() {
                assert_eq!(spec, best.spec);
                break;
            }
        }
    }
}

#[test]
fn all_failures_yield_not_found() {
    // Two observations cannot satisfy any candidate's minimum order
    // requirement, so all 40 fits fail.
    let series = noisy_series(2);
    let grid = CandidateGrid::default();
    assert!(matches!(select_best(&series, &grid), Selection::NotFound));
}

#[test]
fn selection_is_idempotent() {
    let series = noisy_series(60);
    let grid = CandidateGrid::default();

    let first = match select_best(&series, &grid) {
        Selection::Found(best) => best,
        Selection::NotFound => panic!("expected a winner"),
    };
    let second = match select_best(&series, &grid) {
        Selection::Found(best) => best,
        Selection::NotFound => panic!("expected a winner"),
    };

    assert_eq!(first.spec, second.spec);
    assert_eq!(first.aic(), second.aic());
}
