//! Calendar dates (MONTHISH bucket)

use chrono::{Datelike, NaiveDate, NaiveDateTime};

use crate::engine::{BucketMask, Offset, TimeUnit, add_months};
use crate::rules::numeral::helpers::is_integral;
use crate::rules::numeral::number_from_tokens;
use crate::rules::time::helpers::{is_number_word, with_preposition, word_at};
use crate::rules::time::tables;
use crate::{Options, PartialMatch, Rule, Token};

const YEAR_WORDS: &[&str] = &["год", "года", "году", "г"];

/// Day of month spelled by the one or two words right before `month_pos`.
/// Returns the day and the position it starts at.
fn day_before(words: &[Token], month_pos: usize) -> Option<(u32, usize)> {
    let opts = Options { ordinals: true, ..Options::default() };
    for len in [2usize, 1] {
        let Some(start) = month_pos.checked_sub(len) else {
            continue;
        };
        let run = &words[start..month_pos];
        if !run.iter().all(|t| is_number_word(&t.word, &opts)) {
            continue;
        }
        let Some(value) = number_from_tokens(run, &opts) else {
            continue;
        };
        if is_integral(value) && (1.0..=31.0).contains(&value) {
            return Some((value as u32, start));
        }
    }
    None
}

/// Four-digit year right after `month_pos`, and how many words it spans.
fn year_after(words: &[Token], month_pos: usize) -> Option<(i32, usize)> {
    let word = &words.get(month_pos + 1)?.word;
    if !regex!(r"^\d{4}$").is_match(word) {
        return None;
    }
    let year = word.parse().ok()?;
    let span = if word_at(words, month_pos + 2, YEAR_WORDS) { 2 } else { 1 };
    Some((year, span))
}

/// Calendar offset from `reference` to `target`: whole months along the
/// calendar, then the remaining days.
pub fn date_offset(reference: NaiveDateTime, target: NaiveDate) -> Option<Offset> {
    let months = (target.year() - reference.year()) * 12 + target.month() as i32 - reference.month() as i32;
    let shifted = add_months(reference, months)?;
    let days = (target - shifted.date()).num_days();
    let mut offset = Offset::with(TimeUnit::Months, months as f64);
    offset.set(TimeUnit::Days, days as f64);
    Some(offset)
}

/// Resolve day/month/optional year against `reference`. Without a year a
/// date that already passed this year means next year's.
pub fn resolve_date(reference: NaiveDateTime, day: Option<u32>, month: u32, year: Option<i32>) -> Option<NaiveDate> {
    if let Some(year) = year {
        return NaiveDate::from_ymd_opt(year, month, day.unwrap_or(1));
    }
    let this_year = reference.year();
    let passed = match day {
        Some(day) => (month, day) < (reference.month(), reference.day()),
        None => month < reference.month(),
    };
    let year = if passed { this_year + 1 } else { this_year };
    NaiveDate::from_ymd_opt(year, month, day.unwrap_or(1))
}

/// "5 июля", "двадцать пятого июня 2018 года", "в марте"
pub fn rule_absolute_date() -> Rule {
    rule! {
        name: "<day> <month> <year>",
        buckets: BucketMask::MONTHISH.bits(),
        extract: |words, ctx| {
            let (pos, month) = words.iter().find_map(|t| tables::month(&t.word).map(|m| (t.index, m)))?;
            let day = day_before(words, pos);
            let year = year_after(words, pos);

            let target = resolve_date(ctx.reference_time, day.map(|(d, _)| d), month, year.map(|(y, _)| y))?;
            let offset = date_offset(ctx.reference_time, target)?;

            let first = day.map_or(pos, |(_, start)| start);
            let last = pos + year.map_or(0, |(_, span)| span);
            let consumed = with_preposition(words, first, (first..=last).collect());
            Some(PartialMatch::new(offset, consumed, false))
        },
    }
}
