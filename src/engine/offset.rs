//! Offset accumulator.
//!
//! An [`Offset`] is a sparse per-unit delta from the reference instant.
//! "Not specified" (`None`) and "zero" (`Some(0.0)`) are different things:
//! "сейчас" sets seconds to zero, which pins the clock, while an offset that
//! never touched the clock lets the result fall back to the default time.

use std::fmt;

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};

/// Units an offset can carry. Decades, centuries and millennia are folded
/// into years by the rules that read them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TimeUnit {
    Microseconds,
    Milliseconds,
    Seconds,
    Minutes,
    Hours,
    Days,
    Weeks,
    Months,
    Years,
}

impl TimeUnit {
    pub const ALL: [TimeUnit; 9] = [
        TimeUnit::Microseconds,
        TimeUnit::Milliseconds,
        TimeUnit::Seconds,
        TimeUnit::Minutes,
        TimeUnit::Hours,
        TimeUnit::Days,
        TimeUnit::Weeks,
        TimeUnit::Months,
        TimeUnit::Years,
    ];

    pub fn name(self) -> &'static str {
        match self {
            TimeUnit::Microseconds => "microseconds",
            TimeUnit::Milliseconds => "milliseconds",
            TimeUnit::Seconds => "seconds",
            TimeUnit::Minutes => "minutes",
            TimeUnit::Hours => "hours",
            TimeUnit::Days => "days",
            TimeUnit::Weeks => "weeks",
            TimeUnit::Months => "months",
            TimeUnit::Years => "years",
        }
    }

    /// Fixed length in microseconds. Calendar units have none.
    fn micros(self) -> Option<f64> {
        match self {
            TimeUnit::Microseconds => Some(1.0),
            TimeUnit::Milliseconds => Some(1e3),
            TimeUnit::Seconds => Some(1e6),
            TimeUnit::Minutes => Some(60e6),
            TimeUnit::Hours => Some(3600e6),
            TimeUnit::Days => Some(86_400e6),
            TimeUnit::Weeks => Some(7.0 * 86_400e6),
            TimeUnit::Months | TimeUnit::Years => None,
        }
    }

    /// Units that describe the time of day rather than the date.
    pub fn is_clock(self) -> bool {
        matches!(
            self,
            TimeUnit::Microseconds | TimeUnit::Milliseconds | TimeUnit::Seconds | TimeUnit::Minutes | TimeUnit::Hours
        )
    }
}

/// Sparse signed delta per [`TimeUnit`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Offset {
    values: [Option<f64>; 9],
}

impl Offset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style single unit offset.
    pub fn with(unit: TimeUnit, value: f64) -> Self {
        let mut offset = Offset::new();
        offset.set(unit, value);
        offset
    }

    pub fn get(&self, unit: TimeUnit) -> Option<f64> {
        self.values[unit as usize]
    }

    pub fn set(&mut self, unit: TimeUnit, value: f64) {
        self.values[unit as usize] = Some(value);
    }

    /// Add `value` to `unit`, treating an unset unit as zero.
    pub fn add(&mut self, unit: TimeUnit, value: f64) {
        let slot = &mut self.values[unit as usize];
        *slot = Some(slot.unwrap_or(0.0) + value);
    }

    /// Unit-wise sum. Units absent from `other` are left untouched.
    pub fn merge(&mut self, other: &Offset) {
        for unit in TimeUnit::ALL {
            if let Some(value) = other.get(unit) {
                self.add(unit, value);
            }
        }
    }

    /// Every set unit multiplied by `factor`.
    pub fn scaled(&self, factor: f64) -> Offset {
        let mut scaled = *self;
        for value in scaled.values.iter_mut().flatten() {
            *value *= factor;
        }
        scaled
    }

    pub fn is_empty(&self) -> bool {
        self.values.iter().all(Option::is_none)
    }

    /// Whether any time-of-day unit was set (even to zero).
    pub fn has_clock(&self) -> bool {
        TimeUnit::ALL.iter().any(|u| u.is_clock() && self.get(*u).is_some())
    }

    /// Units that are set, smallest first.
    pub fn iter(&self) -> impl Iterator<Item = (TimeUnit, f64)> + '_ {
        TimeUnit::ALL.into_iter().filter_map(|u| self.get(u).map(|v| (u, v)))
    }

    /// Shift `reference` by this offset. Years and months move along the
    /// calendar (clamping the day of month); a fractional month counts as 30
    /// days. Returns `None` when the result leaves chrono's range.
    pub fn apply(&self, reference: NaiveDateTime) -> Option<NaiveDateTime> {
        let months = self.get(TimeUnit::Years).unwrap_or(0.0) * 12.0 + self.get(TimeUnit::Months).unwrap_or(0.0);
        let whole_months = months.trunc();
        let mut micros = (months - whole_months) * 30.0 * 86_400e6;
        for (unit, value) in self.iter() {
            if let Some(length) = unit.micros() {
                micros += value * length;
            }
        }
        if !micros.is_finite() || micros.abs() >= i64::MAX as f64 || whole_months.abs() >= i32::MAX as f64 {
            return None;
        }
        let shifted = add_months(reference, whole_months as i32)?;
        shifted.checked_add_signed(Duration::microseconds(micros.round() as i64))
    }

    /// Total length as a duration. Calendar units count as 30-day months and
    /// 365-day years. `None` when no unit is set.
    pub fn to_duration(&self) -> Option<Duration> {
        if self.is_empty() {
            return None;
        }
        let micros: f64 = self
            .iter()
            .map(|(unit, value)| {
                let length = match unit {
                    TimeUnit::Months => 30.0 * 86_400e6,
                    TimeUnit::Years => 365.0 * 86_400e6,
                    other => other.micros().unwrap_or(0.0),
                };
                value * length
            })
            .sum();
        Some(Duration::microseconds(micros.round() as i64))
    }
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("{}");
        }
        let parts: Vec<String> = self.iter().map(|(u, v)| format!("{}: {v}", u.name())).collect();
        write!(f, "{{{}}}", parts.join(", "))
    }
}

/// Move `dt` by whole calendar months, clamping the day to the target
/// month's length.
pub fn add_months(dt: NaiveDateTime, months: i32) -> Option<NaiveDateTime> {
    let zero_based = (dt.month0() as i32).checked_add(months)?;
    let year = dt.year().checked_add(zero_based.div_euclid(12))?;
    let month = zero_based.rem_euclid(12) as u32 + 1;
    let day = dt.day().min(days_in_month(year, month)?);
    let date = NaiveDate::from_ymd_opt(year, month, day)?;
    Some(NaiveDateTime::new(date, dt.time()))
}

fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let (next_year, next_month) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
    let first_next = NaiveDate::from_ymd_opt(next_year, next_month, 1)?;
    first_next.pred_opt().map(|d| d.day())
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(h, min, 0).unwrap()
    }

    #[test]
    fn add_months_clamps_day() {
        assert_eq!(add_months(at(2024, 1, 31, 8, 0), 1), Some(at(2024, 2, 29, 8, 0)));
        assert_eq!(add_months(at(2023, 11, 15, 0, 0), 3), Some(at(2024, 2, 15, 0, 0)));
        assert_eq!(add_months(at(2024, 3, 31, 0, 0), -13), Some(at(2023, 2, 28, 0, 0)));
    }

    #[test]
    fn merge_keeps_unset_distinct_from_zero() {
        let mut acc = Offset::with(TimeUnit::Days, 1.0);
        acc.merge(&Offset::with(TimeUnit::Seconds, 0.0));
        assert_eq!(acc.get(TimeUnit::Days), Some(1.0));
        assert_eq!(acc.get(TimeUnit::Seconds), Some(0.0));
        assert_eq!(acc.get(TimeUnit::Hours), None);
        assert!(acc.has_clock());

        acc.merge(&Offset::with(TimeUnit::Days, -3.0));
        assert_eq!(acc.get(TimeUnit::Days), Some(-2.0));
        assert!(!Offset::with(TimeUnit::Weeks, 1.0).has_clock());
    }

    #[test]
    fn apply_moves_calendar_then_clock() {
        let reference = at(2017, 6, 27, 13, 4);
        let mut offset = Offset::with(TimeUnit::Years, 1.0);
        offset.set(TimeUnit::Months, 2.0);
        offset.set(TimeUnit::Hours, 2.0);
        assert_eq!(offset.apply(reference), Some(at(2018, 8, 27, 15, 4)));

        let half_month = Offset::with(TimeUnit::Months, 0.5);
        assert_eq!(half_month.apply(reference), Some(at(2017, 7, 12, 13, 4)));

        let decade_back = Offset::with(TimeUnit::Years, -10.0);
        assert_eq!(decade_back.apply(reference), Some(at(2007, 6, 27, 13, 4)));
    }

    #[test]
    fn apply_rejects_overflow() {
        let reference = at(2017, 6, 27, 13, 4);
        assert_eq!(Offset::with(TimeUnit::Years, 1e12).apply(reference), None);
    }

    #[test]
    fn to_duration_sums_units() {
        assert_eq!(Offset::new().to_duration(), None);
        let mut offset = Offset::with(TimeUnit::Minutes, 5.0);
        offset.set(TimeUnit::Seconds, 30.0);
        assert_eq!(offset.to_duration(), Some(Duration::seconds(330)));
        assert_eq!(Offset::with(TimeUnit::Hours, 1.5).to_duration(), Some(Duration::minutes(90)));
    }

    #[test]
    fn display_lists_set_units() {
        let mut offset = Offset::with(TimeUnit::Hours, 2.0);
        offset.set(TimeUnit::Days, -1.0);
        assert_eq!(offset.to_string(), "{hours: 2, days: -1}");
        assert_eq!(Offset::new().to_string(), "{}");
    }
}
