//! Business-day calendar helpers

use crate::error::{ForecastError, Result};
use chrono::{Datelike, NaiveDate, Weekday};

/// Whether a date falls on a weekday
pub fn is_business_day(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// The next `horizon` business days strictly after `last`
///
/// Weekends are skipped; no holiday calendar is applied. The returned
/// dates are strictly increasing and the result always holds exactly
/// `horizon` entries.
pub fn business_days_after(last: NaiveDate, horizon: usize) -> Result<Vec<NaiveDate>> {
    let mut dates = Vec::with_capacity(horizon);
    let mut current = last;
    while dates.len() < horizon {
        current = current
            .succ_opt()
            .ok_or_else(|| ForecastError::Forecasting("calendar range exhausted".to_string()))?;
        if is_business_day(current) {
            dates.push(current);
        }
    }
    Ok(dates)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn skips_weekends() {
        // 2024-01-05 is a Friday
        let dates = business_days_after(date(2024, 1, 5), 3).unwrap();
        assert_eq!(
            dates,
            vec![date(2024, 1, 8), date(2024, 1, 9), date(2024, 1, 10)]
        );
    }

    #[test]
    fn starts_strictly_after_last_date() {
        let dates = business_days_after(date(2024, 1, 3), 1).unwrap();
        assert_eq!(dates, vec![date(2024, 1, 4)]);
    }

    #[test]
    fn counts_from_a_weekend_last_date() {
        // 2024-01-06 is a Saturday
        let dates = business_days_after(date(2024, 1, 6), 2).unwrap();
        assert_eq!(dates, vec![date(2024, 1, 8), date(2024, 1, 9)]);
    }
}
