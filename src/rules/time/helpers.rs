use chrono::{NaiveDateTime, Timelike};

use super::tables::{self, PartOfDay};
use crate::engine::{Offset, TimeUnit};
use crate::rules::numeral::predicates::{HALF_PREFIX, MINUS, is_plain_word};
use crate::rules::numeral::{Lexicon, number_from_tokens};
use crate::{Options, Token};

/// Move a 12-hour reading into the part of day it was qualified with.
pub fn adjust_hour_for_part_of_day(hour: u32, part: PartOfDay) -> u32 {
    match part {
        PartOfDay::Morning => {
            if hour == 12 {
                0
            } else {
                hour
            }
        }
        PartOfDay::Afternoon | PartOfDay::Evening => {
            if hour < 12 {
                hour + 12
            } else {
                hour
            }
        }
        PartOfDay::Night => match hour {
            12 => 0,
            5..=11 => hour + 12,
            _ => hour,
        },
    }
}

/// Offset that moves `reference` to `hour:minute:00` on the same day, plus
/// `days`.
pub fn clock_offset(reference: NaiveDateTime, hour: u32, minute: u32, days: i64) -> Offset {
    let mut offset = Offset::new();
    offset.set(TimeUnit::Hours, hour as f64 - reference.hour() as f64);
    offset.set(TimeUnit::Minutes, minute as f64 - reference.minute() as f64);
    offset.set(TimeUnit::Seconds, -(reference.second() as f64));
    offset.set(TimeUnit::Microseconds, -((reference.nanosecond() / 1000) as f64));
    if days != 0 {
        offset.set(TimeUnit::Days, days as f64);
    }
    offset
}

/// A word that may be part of a spoken number.
pub fn is_number_word(word: &str, opts: &Options) -> bool {
    word == HALF_PREFIX || (word != MINUS && !is_plain_word(Lexicon::get(), word, opts))
}

/// Count spelled by the number words right before a unit.
pub fn unit_count(words: &[Token], opts: &Options) -> Option<f64> {
    match words {
        [only] if only.word == HALF_PREFIX => Some(0.5),
        _ => number_from_tokens(words, opts),
    }
}

/// Counted units from `start` onwards: "два часа и тридцать минут",
/// "неделю". A unit word without a number counts once. Returns the summed
/// offset and the position right after the last unit word.
pub fn scan_units(words: &[Token], start: usize) -> Option<(Offset, usize)> {
    let opts = Options::default();
    let mut offset = Offset::new();
    let mut end = None;
    let mut i = start;
    loop {
        let run_start = i;
        while i < words.len() && tables::interval_unit(&words[i].word).is_none() && is_number_word(&words[i].word, &opts)
        {
            i += 1;
        }
        let Some((unit, factor)) = words.get(i).and_then(|t| tables::interval_unit(&t.word)) else {
            break;
        };
        let count = if run_start == i {
            1.0
        } else {
            match unit_count(&words[run_start..i], &opts) {
                Some(value) => value,
                None => break,
            }
        };
        offset.add(unit, count * factor);
        i += 1;
        end = Some(i);
    }
    end.map(|end| (offset, end))
}

/// Whether the word at `pos` is one of `words`.
pub fn word_at(tokens: &[Token], pos: usize, words: &[&str]) -> bool {
    tokens.get(pos).is_some_and(|t| words.contains(&t.word.as_str()))
}

/// `pos` preceded by a consumed preposition, when there is one.
pub fn with_preposition(tokens: &[Token], pos: usize, mut consumed: Vec<usize>) -> Vec<usize> {
    if pos > 0 && word_at(tokens, pos - 1, tables::PREPOSITIONS) {
        consumed.push(pos - 1);
    }
    consumed
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::engine::tokenize;

    #[test]
    fn part_of_day_adjustments() {
        assert_eq!(adjust_hour_for_part_of_day(7, PartOfDay::Morning), 7);
        assert_eq!(adjust_hour_for_part_of_day(12, PartOfDay::Morning), 0);
        assert_eq!(adjust_hour_for_part_of_day(3, PartOfDay::Afternoon), 15);
        assert_eq!(adjust_hour_for_part_of_day(7, PartOfDay::Evening), 19);
        assert_eq!(adjust_hour_for_part_of_day(19, PartOfDay::Evening), 19);
        assert_eq!(adjust_hour_for_part_of_day(3, PartOfDay::Night), 3);
        assert_eq!(adjust_hour_for_part_of_day(11, PartOfDay::Night), 23);
        assert_eq!(adjust_hour_for_part_of_day(12, PartOfDay::Night), 0);
    }

    #[test]
    fn clock_offset_lands_on_the_minute() {
        let reference = NaiveDate::from_ymd_opt(2017, 6, 27).unwrap().and_hms_micro_opt(13, 4, 30, 250).unwrap();
        let offset = clock_offset(reference, 22, 0, 0);
        let expected = NaiveDate::from_ymd_opt(2017, 6, 27).unwrap().and_hms_opt(22, 0, 0).unwrap();
        assert_eq!(offset.apply(reference), Some(expected));

        let next_day = clock_offset(reference, 5, 15, 1);
        let expected = NaiveDate::from_ymd_opt(2017, 6, 28).unwrap().and_hms_opt(5, 15, 0).unwrap();
        assert_eq!(next_day.apply(reference), Some(expected));
    }

    #[test]
    fn scan_units_sums_counted_units() {
        let words = tokenize("пару часов и тридцать минут потом");
        let (offset, end) = scan_units(&words, 0).unwrap();
        assert_eq!(offset.get(TimeUnit::Hours), Some(2.0));
        assert_eq!(offset.get(TimeUnit::Minutes), Some(30.0));
        assert_eq!(end, 5);

        let words = tokenize("неделю");
        let (offset, end) = scan_units(&words, 0).unwrap();
        assert_eq!(offset.get(TimeUnit::Weeks), Some(1.0));
        assert_eq!(end, 1);

        let words = tokenize("полтора века");
        let (offset, _) = scan_units(&words, 0).unwrap();
        assert_eq!(offset.get(TimeUnit::Years), Some(150.0));

        let words = tokenize("пол часа");
        let (offset, end) = scan_units(&words, 0).unwrap();
        assert_eq!((offset.get(TimeUnit::Hours), end), (Some(0.5), 2));

        assert!(scan_units(&tokenize("мост"), 0).is_none());
        assert!(scan_units(&tokenize("пять"), 0).is_none());
    }
}
