//! Calendar-day helpers for reservation windows.

use chrono::{Days, NaiveDate};

/// Returns every calendar day from `start` to `end`, inclusive of both
/// endpoints.
///
/// When `start > end` the result is an empty vec rather than an error; an
/// inverted range simply spans no days.
pub fn days_between(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let mut days = Vec::new();
    let mut current = start;

    while current <= end {
        days.push(current);
        current = match current.checked_add_days(Days::new(1)) {
            Some(next) => next,
            None => break,
        };
    }

    days
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn spans_both_endpoints() {
        let days = days_between(date(2024, 6, 10), date(2024, 6, 12));

        assert_eq!(
            days,
            vec![date(2024, 6, 10), date(2024, 6, 11), date(2024, 6, 12)]
        );
    }

    #[test]
    fn single_day_range() {
        let days = days_between(date(2024, 6, 10), date(2024, 6, 10));

        assert_eq!(days, vec![date(2024, 6, 10)]);
    }

    #[test]
    fn inverted_range_is_empty() {
        let days = days_between(date(2024, 6, 12), date(2024, 6, 10));

        assert!(days.is_empty());
    }

    #[test]
    fn crosses_month_boundary() {
        let days = days_between(date(2024, 1, 30), date(2024, 2, 2));

        assert_eq!(days.len(), 4);
        assert_eq!(days[0], date(2024, 1, 30));
        assert_eq!(days[3], date(2024, 2, 2));
    }
}
