//! Duration extraction ("10 секунд", "два часа и пять минут").

use chrono::Duration;
use tracing::debug;

use crate::engine::{Offset, prepare};
use crate::rules::time::helpers::{is_number_word, unit_count};
use crate::rules::time::tables;
use crate::{Options, Token};

/// Sum every "<number> <unit>" pair in `text`.
///
/// Returns `None` for empty input. Otherwise returns the duration (`None`
/// when no unit was counted) and the words that were not part of it.
pub fn extract_duration(text: &str) -> Option<(Option<Duration>, String)> {
    if text.trim().is_empty() {
        return None;
    }
    let opts = Options::default();
    let mut offset = Offset::new();
    // Number words waiting for a unit, with the text they were written as.
    let mut pending: Vec<(Token, &str)> = Vec::new();
    let mut leftover: Vec<&str> = Vec::new();

    for (index, original) in text.split_whitespace().enumerate() {
        let prepared = prepare(original);
        if prepared.is_empty() {
            leftover.push(original);
            continue;
        }
        let token = Token::new(prepared, index);
        if let Some((unit, factor)) = tables::duration_unit(&token.word) {
            let words: Vec<Token> = pending.iter().map(|(t, _)| t.clone()).collect();
            let count = if !words.is_empty() {
                unit_count(&words, &opts)
            } else if factor != 1.0 {
                // "полчаса" carries its own count
                Some(1.0)
            } else {
                None
            };
            match count {
                Some(count) => offset.add(unit, count * factor),
                None => {
                    leftover.extend(pending.iter().map(|(_, o)| *o));
                    leftover.push(original);
                }
            }
            pending.clear();
        } else if is_number_word(&token.word, &opts) {
            pending.push((token, original));
        } else {
            leftover.extend(pending.drain(..).map(|(_, o)| o));
            leftover.push(original);
        }
    }
    leftover.extend(pending.into_iter().map(|(_, o)| o));

    debug!(offset = %offset, "duration");
    Some((offset.to_duration(), leftover.join(" ")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn duration(text: &str) -> (Option<Duration>, String) {
        extract_duration(text).unwrap()
    }

    #[test]
    fn single_units() {
        assert_eq!(duration("10 секунд"), (Some(Duration::seconds(10)), String::new()));
        assert_eq!(duration("5 минут"), (Some(Duration::minutes(5)), String::new()));
        assert_eq!(duration("два часа"), (Some(Duration::hours(2)), String::new()));
        assert_eq!(duration("три дня"), (Some(Duration::days(3)), String::new()));
        assert_eq!(duration("неделю назад"), (None, "неделю назад".to_string()));
        assert_eq!(duration("одну неделю"), (Some(Duration::weeks(1)), String::new()));
        assert_eq!(duration("200 миллисекунд"), (Some(Duration::milliseconds(200)), String::new()));
        assert_eq!(duration("полчаса"), (Some(Duration::minutes(30)), String::new()));
        assert_eq!(duration("пол часа"), (Some(Duration::minutes(30)), String::new()));
        assert_eq!(duration("упал на пол"), (None, "упал на пол".to_string()));
    }

    #[test]
    fn mixed_units_and_leftover() {
        assert_eq!(
            duration("поставь таймер на 5 минут и 30 секунд"),
            (Some(Duration::seconds(330)), "поставь таймер на".to_string())
        );
        assert_eq!(
            duration("полтора часа до конца"),
            (Some(Duration::minutes(90)), "до конца".to_string())
        );
        assert_eq!(
            duration("через двадцать пять минут будет готово"),
            (Some(Duration::minutes(25)), "через будет готово".to_string())
        );
    }

    #[test]
    fn numbers_without_units_stay_in_leftover() {
        assert_eq!(duration("три кота"), (None, "три кота".to_string()));
        assert_eq!(duration("просто текст"), (None, "просто текст".to_string()));
        assert_eq!(duration("в 7 часов"), (Some(Duration::hours(7)), "в".to_string()));
    }

    #[test]
    fn leftover_keeps_the_words_as_written() {
        assert_eq!(
            duration("Поставь таймер на 5 минут, ещё"),
            (Some(Duration::minutes(5)), "Поставь таймер на ещё".to_string())
        );
        assert_eq!(duration("Через ДВА часа, ёлка!"), (Some(Duration::hours(2)), "Через ёлка!".to_string()));
        assert_eq!(duration("Три Кота"), (None, "Три Кота".to_string()));
    }

    #[test]
    fn empty_input_is_not_a_duration() {
        assert_eq!(extract_duration(""), None);
        assert_eq!(extract_duration("   "), None);
    }
}
