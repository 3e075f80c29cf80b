//! Counted intervals from the reference ("через два часа", "три дня назад").

use crate::rules::time::helpers::{scan_units, word_at};
use crate::rules::time::tables::{ANCHOR_FOLLOWERS, BACKWARD_MARKER, FORWARD_MARKERS};
use crate::{PartialMatch, Rule, Token};

/// "через пару часов", "спустя 3 дня", "через час и двадцать минут"
///
/// Terminal unless another anchor follows ("через два дня в пять вечера").
pub fn rule_interval_forward() -> Rule {
    rule! {
        name: "через <duration>",
        extract: |words, _ctx| {
            words.iter().enumerate().filter(|(_, t)| FORWARD_MARKERS.contains(&t.word.as_str())).find_map(
                |(marker, _)| {
                    let (offset, end) = scan_units(words, marker + 1)?;
                    let terminal = !word_at(words, end, ANCHOR_FOLLOWERS);
                    Some(PartialMatch::new(offset, (marker..end).collect(), terminal))
                },
            )
        },
    }
}

/// "два часа назад", "неделю назад"
pub fn rule_interval_backward() -> Rule {
    rule! {
        name: "<duration> назад",
        extract: |words, _ctx| {
            let marker = words.iter().position(|t| t.word == BACKWARD_MARKER)?;
            let (start, offset) = backward_span(words, marker)?;
            Some(PartialMatch::new(offset.scaled(-1.0), (start..=marker).collect(), true))
        },
    }
}

/// Earliest start from which the counted units run exactly up to `marker`.
fn backward_span(words: &[Token], marker: usize) -> Option<(usize, crate::engine::Offset)> {
    (0..marker).find_map(|start| match scan_units(&words[..marker], start) {
        Some((offset, end)) if end == marker => Some((start, offset)),
        _ => None,
    })
}
