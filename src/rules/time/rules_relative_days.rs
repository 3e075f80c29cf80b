//! Fixed relative days.

use crate::engine::{Offset, TimeUnit};
use crate::rules::time::tables;
use crate::{PartialMatch, Rule};

/// "позавчера", "вчера", "сегодня", "завтра", "послезавтра"
pub fn rule_relative_day() -> Rule {
    rule! {
        name: "<relative day>",
        extract: |words, _ctx| {
            let (pos, days) = words.iter().find_map(|t| tables::relative_day(&t.word).map(|d| (t.index, d)))?;
            Some(PartialMatch::new(Offset::with(TimeUnit::Days, days as f64), vec![pos], false))
        },
    }
}
