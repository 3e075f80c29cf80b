//! "next <unit>" / "last <unit>"

use crate::engine::Offset;
use crate::rules::time::helpers::with_preposition;
use crate::rules::time::tables::{self, Qualifier};
use crate::{PartialMatch, Rule};

/// "на следующей неделе", "в прошлом году", "в следующем веке"
pub fn rule_next_last_term() -> Rule {
    rule! {
        name: "next/last <unit>",
        extract: |words, _ctx| {
            words.windows(2).find_map(|pair| {
                let sign = match tables::qualifier(&pair[0].word)? {
                    Qualifier::Next => 1.0,
                    Qualifier::Prev => -1.0,
                    Qualifier::This => return None,
                };
                let (unit, factor) = tables::interval_unit(&pair[1].word)?;
                let pos = pair[0].index;
                let consumed = with_preposition(words, pos, vec![pos, pos + 1]);
                Some(PartialMatch::new(Offset::with(unit, sign * factor), consumed, false))
            })
        },
    }
}
