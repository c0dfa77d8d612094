//! Temporal position scale.

use chrono::{Duration, NaiveDate};

/// Horizontal inset of the axis from each viewport edge.
pub const AXIS_INSET: f64 = 50.0;

/// Linear map from a date domain onto a horizontal pixel range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeScale {
    domain_start: NaiveDate,
    domain_end: NaiveDate,
    range_start: f64,
    range_end: f64,
}

impl TimeScale {
    /// Builds a scale spanning the min/max of `dates`.
    ///
    /// Returns `None` when no dates are supplied — an empty domain draws no
    /// markers.
    pub fn from_dates(
        dates: impl IntoIterator<Item = NaiveDate>,
        range_start: f64,
        range_end: f64,
    ) -> Option<Self> {
        let mut iter = dates.into_iter();
        let first = iter.next()?;
        let (mut min, mut max) = (first, first);
        for date in iter {
            min = min.min(date);
            max = max.max(date);
        }
        Some(Self {
            domain_start: min,
            domain_end: max,
            range_start,
            range_end,
        })
    }

    pub fn domain(&self) -> (NaiveDate, NaiveDate) {
        (self.domain_start, self.domain_end)
    }

    pub fn range(&self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    /// Position of a date along the range.
    ///
    /// A degenerate domain (single distinct date) collapses every position
    /// to the midpoint of the range.
    pub fn position(&self, date: NaiveDate) -> f64 {
        let span = (self.domain_end - self.domain_start).num_days();
        if span == 0 {
            return (self.range_start + self.range_end) / 2.0;
        }
        let offset = (date - self.domain_start).num_days() as f64;
        self.range_start + offset / span as f64 * (self.range_end - self.range_start)
    }

    /// Up to `count` evenly spaced tick dates, always including both domain
    /// endpoints. A degenerate domain yields a single tick.
    pub fn ticks(&self, count: usize) -> Vec<NaiveDate> {
        let span = (self.domain_end - self.domain_start).num_days();
        if span == 0 {
            return vec![self.domain_start];
        }
        let count = count.max(2);
        let mut dates = Vec::with_capacity(count);
        for step in 0..count {
            let days = span * step as i64 / (count - 1) as i64;
            dates.push(self.domain_start + Duration::days(days));
        }
        dates.dedup();
        dates
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn endpoints_map_to_range_bounds() {
        let scale =
            TimeScale::from_dates([date(2024, 1, 1), date(2024, 12, 31)], 50.0, 750.0).unwrap();
        assert_eq!(scale.position(date(2024, 1, 1)), 50.0);
        assert_eq!(scale.position(date(2024, 12, 31)), 750.0);
    }

    #[test]
    fn degenerate_domain_collapses_to_midpoint() {
        let scale = TimeScale::from_dates([date(2024, 6, 1)], 50.0, 750.0).unwrap();
        assert_eq!(scale.position(date(2024, 6, 1)), 400.0);
        assert_eq!(scale.ticks(5), vec![date(2024, 6, 1)]);
    }

    #[test]
    fn empty_domain_yields_no_scale() {
        assert!(TimeScale::from_dates(std::iter::empty(), 50.0, 750.0).is_none());
    }

    #[test]
    fn ticks_cover_both_endpoints() {
        let scale =
            TimeScale::from_dates([date(2024, 1, 1), date(2024, 1, 9)], 0.0, 100.0).unwrap();
        let ticks = scale.ticks(5);
        assert_eq!(ticks.first(), Some(&date(2024, 1, 1)));
        assert_eq!(ticks.last(), Some(&date(2024, 1, 9)));
        assert_eq!(ticks.len(), 5);
    }
}
