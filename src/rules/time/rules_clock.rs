//! Clock readings: "13:30", "в пять часов тридцать минут", "ровно десять".

use chrono::{NaiveDateTime, Timelike};

use crate::engine::BucketMask;
use crate::rules::numeral::Lexicon;
use crate::rules::numeral::helpers::{is_integral, numeric_literal};
use crate::rules::time::helpers::{adjust_hour_for_part_of_day, clock_offset, word_at};
use crate::rules::time::tables::{self, CLOCK_ANCHORS, HOUR_WORDS, MINUTE_WORDS, PartOfDay};
use crate::{PartialMatch, Rule, Token};

/// A clock reading found in the word list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ClockReading {
    hour: u32,
    minute: u32,
    /// Position right after the last word of the reading.
    end: usize,
    /// Whether the hour was followed by "час"/"часа"/"часов".
    hour_unit: bool,
    /// Whether minutes were read after the hour.
    has_minute: bool,
}

/// Integral value of a single digit literal or cardinal word.
fn small_number(word: &str) -> Option<u32> {
    let value = if word.bytes().all(|b| b.is_ascii_digit()) {
        numeric_literal(word)?
    } else {
        Lexicon::get().cardinal(word)?
    };
    (is_integral(value) && (0.0..100.0).contains(&value)).then_some(value as u32)
}

/// Hour at `pos`: one word, or "двадцать" + 1..3.
fn parse_hour(words: &[Token], pos: usize) -> Option<(u32, usize)> {
    let hour = small_number(&words.get(pos)?.word)?;
    if hour == 20 {
        if let Some(unit) = words.get(pos + 1).and_then(|t| small_number(&t.word)).filter(|u| (1..=3).contains(u)) {
            return Some((20 + unit, pos + 2));
        }
    }
    (hour <= 23).then_some((hour, pos + 1))
}

/// Minutes at `pos`: digits, "ноль" + unit, tens + unit, a teen or a tens
/// word, or a single unit word followed by a minute word.
fn parse_minute(words: &[Token], pos: usize) -> Option<(u32, usize)> {
    let first = words.get(pos)?;
    let value = small_number(&first.word)?;
    let next = words.get(pos + 1).and_then(|t| small_number(&t.word));

    let (minute, end) = if first.word.bytes().all(|b| b.is_ascii_digit()) {
        (value, pos + 1)
    } else if value == 0 {
        let unit = next.filter(|u| (1..=9).contains(u))?;
        (unit, pos + 2)
    } else if value >= 20 && value % 10 == 0 {
        match next.filter(|u| (1..=9).contains(u)) {
            Some(unit) => (value + unit, pos + 2),
            None => (value, pos + 1),
        }
    } else if value >= 10 {
        (value, pos + 1)
    } else if word_at(words, pos + 1, MINUTE_WORDS) {
        (value, pos + 1)
    } else {
        return None;
    };

    if minute > 59 {
        return None;
    }
    let end = if word_at(words, end, MINUTE_WORDS) { end + 1 } else { end };
    Some((minute, end))
}

/// Clock reading starting at `pos`.
fn parse_reading(words: &[Token], pos: usize) -> Option<ClockReading> {
    // "в час" is one o'clock
    if word_at(words, pos, &["час"]) {
        return Some(ClockReading { hour: 1, minute: 0, end: pos + 1, hour_unit: true, has_minute: false });
    }
    let (hour, mut end) = parse_hour(words, pos)?;
    let hour_unit = word_at(words, end, HOUR_WORDS);
    if hour_unit {
        end += 1;
    } else if words.get(end).is_some_and(|t| tables::interval_unit(&t.word).is_some()) {
        return None;
    }
    let mut minute = 0;
    let mut has_minute = false;
    if let Some((m, after)) = parse_minute(words, end) {
        minute = m;
        end = after;
        has_minute = true;
    }
    Some(ClockReading { hour, minute, end, hour_unit, has_minute })
}

/// Part of day written right after the reading, or right before it (or
/// before its anchor).
fn part_of_day_around(words: &[Token], first: usize, end: usize) -> Option<(PartOfDay, usize)> {
    if let Some(part) = words.get(end).and_then(|t| tables::part_of_day(&t.word)) {
        return Some((part, end));
    }
    (first.saturating_sub(2)..first)
        .rev()
        .find_map(|p| tables::part_of_day(&words[p].word).map(|part| (part, p)))
}

/// Resolve an unqualified 12-hour reading to the first of `h` and `h + 12`
/// that is not in the past; if both are, to `h` tomorrow. The second
/// candidate for twelve is the coming midnight.
fn nearest_hour(reference: NaiveDateTime, hour: u32, minute: u32) -> (u32, i64) {
    if !(1..=12).contains(&hour) {
        return (hour, 0);
    }
    let now = reference.hour() * 60 + reference.minute();
    let later = if hour == 12 { 24 } else { hour + 12 };
    [hour, later]
        .into_iter()
        .find(|h| h * 60 + minute >= now)
        .map_or((hour, 1), |h| (h % 24, i64::from(h / 24)))
}

fn clock_match(
    reference: NaiveDateTime,
    reading: ClockReading,
    part: Option<PartOfDay>,
    consumed: Vec<usize>,
) -> PartialMatch {
    let (hour, days) = match part {
        Some(part) => (adjust_hour_for_part_of_day(reading.hour, part), 0),
        None => nearest_hour(reference, reading.hour, reading.minute),
    };
    PartialMatch::new(clock_offset(reference, hour, reading.minute, days), consumed, true)
}

/// "в 13:30", "19:45 вечера"
pub fn rule_colon_time() -> Rule {
    rule! {
        name: "<hh:mm>",
        buckets: (BucketMask::HAS_COLON | BucketMask::HAS_DIGITS).bits(),
        extract: |words, ctx| {
            words.iter().find_map(|t| {
                let caps = regex!(r"^(\d{1,2}):(\d{2})$").captures(&t.word)?;
                let hour: u32 = caps.get(1)?.as_str().parse().ok()?;
                let minute: u32 = caps.get(2)?.as_str().parse().ok()?;
                if hour > 23 || minute > 59 {
                    return None;
                }
                let pos = t.index;
                let anchored = pos > 0 && word_at(words, pos - 1, CLOCK_ANCHORS);
                let first = if anchored { pos - 1 } else { pos };
                let mut consumed: Vec<usize> = (first..=pos).collect();
                let part = part_of_day_around(words, first, pos + 1);
                if let Some((_, p)) = part {
                    consumed.push(p);
                }
                let part = part.map(|(part, _)| part);
                let hour = part.map_or(hour, |part| adjust_hour_for_part_of_day(hour, part));
                Some(PartialMatch::new(clock_offset(ctx.reference_time, hour, minute, 0), consumed, true))
            })
        },
    }
}

/// "в пять часов тридцать минут", "в час дня", "ровно десять", "в 7 вечера",
/// "пять часов вечера"
pub fn rule_pronounced_time() -> Rule {
    rule! {
        name: "<spoken time>",
        extract: |words, ctx| {
            (0..words.len()).find_map(|pos| {
                let anchored = word_at(words, pos, CLOCK_ANCHORS);
                let start = if anchored { pos + 1 } else { pos };
                let reading = parse_reading(words, start)?;
                if !anchored && !reading.hour_unit {
                    return None;
                }
                let part = part_of_day_around(words, pos, reading.end);
                // A bare "два часа" is a duration, not a time of day.
                if !anchored && !reading.has_minute && part.is_none() {
                    return None;
                }
                let mut consumed: Vec<usize> = (pos..reading.end).collect();
                if let Some((_, p)) = part {
                    consumed.push(p);
                }
                Some(clock_match(ctx.reference_time, reading, part.map(|(part, _)| part), consumed))
            })
        },
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::engine::tokenize;

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2017, 6, 27).unwrap().and_hms_opt(h, m, 0).unwrap()
    }

    fn reading(text: &str) -> Option<(u32, u32, usize)> {
        parse_reading(&tokenize(text), 0).map(|r| (r.hour, r.minute, r.end))
    }

    #[test]
    fn readings() {
        assert_eq!(reading("пять часов тридцать минут"), Some((5, 30, 4)));
        assert_eq!(reading("пять тридцать"), Some((5, 30, 2)));
        assert_eq!(reading("двадцать два сорок пять"), Some((22, 45, 4)));
        assert_eq!(reading("семь ноль пять"), Some((7, 5, 3)));
        assert_eq!(reading("восемь пять минут"), Some((8, 5, 3)));
        assert_eq!(reading("восемь пять"), Some((8, 0, 1)));
        assert_eq!(reading("десять пятнадцать"), Some((10, 15, 2)));
        assert_eq!(reading("7 15"), Some((7, 15, 2)));
        assert_eq!(reading("час"), Some((1, 0, 1)));
        assert_eq!(reading("пять минут"), None);
        assert_eq!(reading("тридцать"), None);
        assert_eq!(reading("2017"), None);
    }

    #[test]
    fn unanchored_hours_need_minutes_or_a_part_of_day() {
        let rule = rule_pronounced_time();
        let found = |text: &str| (rule.extract)(&tokenize(text), &crate::Context::default()).map(|m| m.consumed);
        assert_eq!(found("таймер на два часа"), None);
        assert_eq!(found("я спал два часа"), None);
        assert_eq!(found("пять часов вечера"), Some(vec![0, 1, 2]));
        assert_eq!(found("встреча пять часов тридцать минут"), Some(vec![1, 2, 3, 4]));
        assert_eq!(found("в два часа"), Some(vec![0, 1, 2]));
    }

    #[test]
    fn twelve_hour_readings_pick_the_nearest() {
        assert_eq!(nearest_hour(at(13, 4), 10, 0), (22, 0));
        assert_eq!(nearest_hour(at(8, 0), 10, 0), (10, 0));
        assert_eq!(nearest_hour(at(23, 0), 5, 0), (5, 1));
        assert_eq!(nearest_hour(at(13, 4), 12, 0), (0, 1));
        assert_eq!(nearest_hour(at(23, 50), 12, 30), (0, 1));
        assert_eq!(nearest_hour(at(9, 0), 12, 0), (12, 0));
        assert_eq!(nearest_hour(at(13, 4), 18, 0), (18, 0));
        assert_eq!(nearest_hour(at(13, 4), 0, 30), (0, 0));
    }
}
