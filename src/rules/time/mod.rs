//! Russian durations and datetimes.
//!
//! The datetime rules are run by the engine chain in the order [`get`]
//! returns them. Each rule reads the current word list and reports the
//! positions it consumed in that list.

pub(crate) mod datetime;
pub(crate) mod duration;
pub(crate) mod helpers;
pub(crate) mod rules_clock;
pub(crate) mod rules_dates;
pub(crate) mod rules_intervals;
pub(crate) mod rules_now;
pub(crate) mod rules_parts_of_day;
pub(crate) mod rules_relative_days;
pub(crate) mod rules_terms;
pub(crate) mod rules_weekdays;
pub(crate) mod tables;


use crate::Rule;

/// Datetime rules in priority order.
pub fn get() -> Vec<Rule> {
    vec![
        rules_now::rule_now(),
        rules_intervals::rule_interval_forward(),
        rules_intervals::rule_interval_backward(),
        rules_terms::rule_next_last_term(),
        rules_weekdays::rule_weekday(),
        rules_relative_days::rule_relative_day(),
        rules_dates::rule_absolute_date(),
        rules_clock::rule_colon_time(),
        rules_clock::rule_pronounced_time(),
        rules_parts_of_day::rule_daypart(),
    ]
}
