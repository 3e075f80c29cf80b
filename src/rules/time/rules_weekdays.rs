//! Weekday-based rules (WEEKDAYISH bucket)

use chrono::Datelike;

use crate::engine::{BucketMask, Offset, TimeUnit};
use crate::rules::time::helpers::with_preposition;
use crate::rules::time::tables::{self, Qualifier};
use crate::{PartialMatch, Rule};

/// Days from `reference_weekday` to `target` (both Monday = 0).
///
/// A bare weekday means the nearest one from today on; "этот" keeps the
/// current week, "следующий" and "прошлый" move a week either way.
pub fn weekday_delta(reference_weekday: u32, target: u32, qualifier: Option<Qualifier>) -> i64 {
    let base = target as i64 - reference_weekday as i64;
    match qualifier {
        None if base < 0 => base + 7,
        None | Some(Qualifier::This) => base,
        Some(Qualifier::Next) => base + 7,
        Some(Qualifier::Prev) => base - 7,
    }
}

/// "в пятницу", "в следующий вторник", "в прошлую среду", "в эту субботу"
pub fn rule_weekday() -> Rule {
    rule! {
        name: "<weekday>",
        buckets: BucketMask::WEEKDAYISH.bits(),
        extract: |words, ctx| {
            let (pos, target) = words.iter().find_map(|t| tables::weekday(&t.word).map(|d| (t.index, d)))?;
            let qualifier = pos.checked_sub(1).and_then(|p| tables::qualifier(&words[p].word));
            let (first, mut consumed) = match qualifier {
                Some(_) => (pos - 1, vec![pos - 1, pos]),
                None => (pos, vec![pos]),
            };
            consumed = with_preposition(words, first, consumed);

            let today = ctx.reference_time.weekday().num_days_from_monday();
            let days = weekday_delta(today, target, qualifier);
            Some(PartialMatch::new(Offset::with(TimeUnit::Days, days as f64), consumed, false))
        },
    }
}
