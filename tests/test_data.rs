use assert_approx_eq::assert_approx_eq;
use chrono::{Days, NaiveDate};
use pretty_assertions::assert_eq;
use price_forecast::{DataLoader, ForecastError, PricePoint, PriceSeries};
use std::io::Write;
use tempfile::NamedTempFile;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn sample_points(n: usize) -> Vec<PricePoint> {
    let start = date(2025, 6, 2);
    (0..n)
        .map(|i| PricePoint {
            date: start + Days::new(i as u64),
            close: 100.0 + i as f64,
        })
        .collect()
}

#[test]
fn builds_a_series_from_ordered_points() {
    let series = PriceSeries::from_points(sample_points(5)).unwrap();
    assert_eq!(series.len(), 5);
    assert!(!series.is_empty());
    assert_eq!(series.closes(), vec![100.0, 101.0, 102.0, 103.0, 104.0]);
    assert_eq!(series.last_date(), Some(date(2025, 6, 6)));
}

#[test]
fn allows_an_empty_series() {
    let series = PriceSeries::from_points(Vec::new()).unwrap();
    assert!(series.is_empty());
    assert_eq!(series.last_date(), None);
}

#[test]
fn rejects_out_of_order_dates() {
    let mut points = sample_points(3);
    points.swap(0, 2);
    let result = PriceSeries::from_points(points);
    assert!(matches!(result, Err(ForecastError::InvalidSeries(_))));
}

#[test]
fn rejects_duplicate_dates() {
    let mut points = sample_points(3);
    points[1].date = points[0].date;
    let result = PriceSeries::from_points(points);
    assert!(matches!(result, Err(ForecastError::InvalidSeries(_))));
}

#[test]
fn rejects_non_finite_prices() {
    let mut points = sample_points(3);
    points[1].close = f64::NAN;
    let result = PriceSeries::from_points(points);
    assert!(matches!(result, Err(ForecastError::InvalidSeries(_))));
}

#[test]
fn tail_returns_the_most_recent_observations() {
    let series = PriceSeries::from_points(sample_points(10)).unwrap();
    let tail = series.tail(3);
    assert_eq!(tail.len(), 3);
    assert_eq!(tail[0].close, 107.0);
    assert_eq!(tail[2].close, 109.0);

    // Asking for more than the series holds returns everything
    assert_eq!(series.tail(50).len(), 10);
}

#[test]
fn mean_and_std_dev() {
    let series = PriceSeries::from_points(sample_points(5)).unwrap();
    assert_approx_eq!(series.mean().unwrap(), 102.0);
    // Sample standard deviation of 100..=104
    assert_approx_eq!(series.std_dev().unwrap(), 2.5f64.sqrt(), 1e-9);

    let empty = PriceSeries::from_points(Vec::new()).unwrap();
    assert!(empty.mean().is_err());
    assert!(empty.std_dev().is_err());
}

#[test]
fn loads_a_series_from_csv() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "date,close").unwrap();
    writeln!(file, "2025-06-02,100.0").unwrap();
    writeln!(file, "2025-06-03,101.5").unwrap();
    writeln!(file, "2025-06-04,99.75").unwrap();

    let series = DataLoader::from_csv(file.path()).unwrap();
    assert_eq!(series.len(), 3);
    assert_eq!(series.closes(), vec![100.0, 101.5, 99.75]);
    assert_eq!(series.last_date(), Some(date(2025, 6, 4)));
}

#[test]
fn csv_loader_reports_missing_files() {
    let result = DataLoader::from_csv("/nonexistent/prices.csv");
    assert!(matches!(result, Err(ForecastError::Csv(_))));
}

#[test]
fn csv_loader_rejects_unordered_rows() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "date,close").unwrap();
    writeln!(file, "2025-06-03,101.5").unwrap();
    writeln!(file, "2025-06-02,100.0").unwrap();

    let result = DataLoader::from_csv(file.path());
    assert!(matches!(result, Err(ForecastError::InvalidSeries(_))));
}
