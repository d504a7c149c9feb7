//! Batch forecasting demo
//!
//! Generates a synthetic 60-day price history per symbol, runs the model
//! search, and prints the winning model with a forecast table.
//!
//! ```text
//! cargo run --example forecast_demo
//! ```

use chrono::{Days, NaiveDate};
use price_forecast::{Engine, ForecastRequest, PricePoint, PriceSeries};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};
use tracing_subscriber::EnvFilter;

fn synthetic_series(seed: u64, start_price: f64) -> PriceSeries {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise = Normal::new(0.0, 1.2).unwrap();
    let start = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();

    let mut price = start_price;
    let points = (0..60)
        .map(|i| {
            price += noise.sample(&mut rng);
            PricePoint {
                date: start + Days::new(i),
                close: price,
            }
        })
        .collect();
    PriceSeries::from_points(points).unwrap()
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let engine = Engine::default();
    let requests = vec![
        ForecastRequest {
            symbol: "AAPL".to_string(),
            series: synthetic_series(7, 192.0),
            horizon: 30,
        },
        ForecastRequest {
            symbol: "MSFT".to_string(),
            series: synthetic_series(11, 415.0),
            horizon: 30,
        },
        ForecastRequest {
            symbol: "GHOST".to_string(),
            series: PriceSeries::from_points(Vec::new()).unwrap(),
            horizon: 30,
        },
    ];

    for (symbol, outcome) in engine.forecast_batch(&requests) {
        println!("{}", "=".repeat(60));
        println!("{}", symbol);
        println!("{}", "=".repeat(60));

        let result = match outcome {
            Ok(result) => result,
            Err(err) => {
                println!("  error: {}\n", err);
                continue;
            }
        };

        println!("  selected model: {} (AIC {:.2})", result.spec, result.aic);
        println!("\n  {:>12} {:>12}", "Date", "Forecast");
        println!("  {}", "-".repeat(25));
        for point in result.forecast.points().iter().take(10) {
            println!("  {:>12} {:>12.2}", point.date.to_string(), point.price);
        }
        let remaining = result.forecast.len().saturating_sub(10);
        if remaining > 0 {
            println!("  ... {} more rows", remaining);
        }
        println!();
    }
}
