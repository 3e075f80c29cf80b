//! Named parts of the day.

use crate::rules::time::helpers::{clock_offset, word_at};
use crate::rules::time::tables;
use crate::{PartialMatch, Rule};

/// "утром", "в полдень", "вечером", "в полночь"
pub fn rule_daypart() -> Rule {
    rule! {
        name: "<part of day>",
        extract: |words, ctx| {
            let (pos, hour) = words.iter().find_map(|t| tables::daypart_hour(&t.word).map(|h| (t.index, h)))?;
            let mut consumed = vec![pos];
            if pos > 0 && word_at(words, pos - 1, &["в"]) {
                consumed.push(pos - 1);
            }
            Some(PartialMatch::new(clock_offset(ctx.reference_time, hour, 0, 0), consumed, true))
        },
    }
}
