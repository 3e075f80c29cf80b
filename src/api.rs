use std::time::Duration as Elapsed;

use chrono::{Duration, Local, NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::{Error, Result};
use crate::format::{self, DEFAULT_DENOMINATORS, FormatOptions, Number, TimeFormat};
use crate::rules::{numeral, time};

/// Extraction context.
///
/// Holds what is needed to resolve relative expressions ("завтра", "через
/// час") into absolute datetimes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Context {
    /// Reference datetime relative expressions are resolved against.
    pub reference_time: NaiveDateTime,
    /// Time of day used when the text names a day but no clock time.
    pub default_time: Option<NaiveTime>,
}

impl Default for Context {
    fn default() -> Self {
        if cfg!(test) {
            let reference_time =
                NaiveDate::from_ymd_opt(2017, 6, 27).and_then(|d| d.and_hms_opt(13, 4, 0)).unwrap_or_default();
            Self { reference_time, default_time: None }
        } else {
            Self { reference_time: Local::now().naive_local(), default_time: None }
        }
    }
}

/// Options that affect number extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Short scale (биллион = 10^9) or long scale (биллион = 10^12).
    pub short_scale: bool,
    /// Read ordinals ("пятый") as numbers too.
    pub ordinals: bool,
}

impl Default for Options {
    fn default() -> Self {
        Options { short_scale: true, ordinals: false }
    }
}

/// Supported languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lang {
    Ru,
}

impl Lang {
    /// Accepts "ru" and "ru-ru" in any case, with `-` or `_`.
    pub fn parse(tag: &str) -> Result<Lang> {
        match tag.trim().to_lowercase().replace('_', "-").as_str() {
            "ru" | "ru-ru" => Ok(Lang::Ru),
            _ => Err(Error::UnsupportedLanguage(tag.to_string())),
        }
    }
}

/// One rule that matched during a verbose datetime run.
#[derive(Debug, Clone)]
pub struct RuleStep {
    pub rule: String,
    /// Words the rule removed from the working list.
    pub consumed: Vec<String>,
    /// Partial offset, e.g. `{hours: 2}`.
    pub offset: String,
    pub terminal: bool,
}

/// Additional details returned by [`extract_datetime_verbose_with`].
///
/// Compact on purpose: enough to see which rules fired and what they cost.
#[derive(Debug, Clone)]
pub struct DateTimeDetails {
    /// Total elapsed time of the chain run.
    pub total: Elapsed,
    /// Rules that matched, in order.
    pub steps: Vec<RuleStep>,
    /// Every rule attempt with its timing and whether it matched.
    pub attempts: Vec<(String, Elapsed, bool)>,
    /// Rules skipped by the trigger scan.
    pub skipped: usize,
    /// Folded offset of the whole run.
    pub offset: String,
}

/// Result from [`extract_datetime_verbose_with`].
#[derive(Debug, Clone)]
pub struct DateTimeResultVerbose {
    pub text: String,
    /// Resolved datetime and leftover words, as [`extract_datetime_with`]
    /// returns them.
    pub result: Option<(NaiveDateTime, String)>,
    pub elapsed: Elapsed,
    pub details: DateTimeDetails,
}

/// First number in `text`, short scale, no ordinals.
///
/// `None` means no number at all; "ноль" is `Some(0.0)`.
///
/// # Example
/// ```
/// assert_eq!(chislitel::extract_number("две тысячи двадцать"), Some(2020.0));
/// assert_eq!(chislitel::extract_number("парусник"), None);
/// ```
pub fn extract_number(text: &str) -> Option<f64> {
    extract_number_with(text, &Options::default())
}

/// First number in `text` with explicit [`Options`].
pub fn extract_number_with(text: &str, options: &Options) -> Option<f64> {
    numeral::extract_first_number(text, options)
}

/// All numbers in `text`, in order; `None` when there are none.
pub fn extract_numbers(text: &str) -> Option<Vec<f64>> {
    extract_numbers_with(text, &Options::default())
}

pub fn extract_numbers_with(text: &str, options: &Options) -> Option<Vec<f64>> {
    let found = numeral::extract_numbers(text, options);
    (!found.is_empty()).then_some(found)
}

/// Sum of the durations named in `text` and the words left over.
///
/// `None` for empty input. The duration itself is `None` when no time unit
/// was found.
pub fn extract_duration(text: &str) -> Option<(Option<Duration>, String)> {
    time::duration::extract_duration(text)
}

/// Datetime named in `text`, resolved against the local clock.
pub fn extract_datetime(text: &str) -> Option<(NaiveDateTime, String)> {
    extract_datetime_with(text, &Context::default())
}

/// Datetime named in `text` and the words that were not part of it.
///
/// Use this for deterministic extraction by supplying a reference time.
///
/// # Example
/// ```
/// use chislitel::{Context, extract_datetime_with};
/// use chrono::NaiveDate;
///
/// let reference_time = NaiveDate::from_ymd_opt(2017, 6, 27).unwrap().and_hms_opt(13, 4, 0).unwrap();
/// let ctx = Context { reference_time, default_time: None };
/// let (when, rest) = extract_datetime_with("через пару часов", &ctx).unwrap();
/// assert_eq!(when.to_string(), "2017-06-27 15:04:00");
/// assert_eq!(rest, "");
/// ```
pub fn extract_datetime_with(text: &str, context: &Context) -> Option<(NaiveDateTime, String)> {
    time::datetime::extract_datetime(text, context).map(|found| (found.datetime, found.leftover))
}

/// Like [`extract_datetime_with`], plus the rule trace and timings.
pub fn extract_datetime_verbose_with(text: &str, context: &Context) -> DateTimeResultVerbose {
    let outcome = time::datetime::run_rules(text, context);
    let result = time::datetime::resolve(&outcome, context).map(|datetime| (datetime, outcome.leftover_text()));

    let steps = outcome
        .steps
        .iter()
        .map(|step| RuleStep {
            rule: step.rule.to_string(),
            consumed: step.consumed.clone(),
            offset: step.offset.to_string(),
            terminal: step.terminal,
        })
        .collect();
    let attempts = outcome.metrics.steps.iter().map(|s| (s.rule.to_string(), s.duration, s.matched)).collect();

    let details = DateTimeDetails {
        total: outcome.metrics.total,
        steps,
        attempts,
        skipped: outcome.metrics.skipped,
        offset: outcome.offset.to_string(),
    };
    DateTimeResultVerbose { text: text.to_string(), result, elapsed: outcome.metrics.total, details }
}

/// `number` as a spoken mixed fraction, trying denominators 1..=20.
///
/// ```
/// assert_eq!(chislitel::nice_number(1.25), "1 и 1 четверть");
/// ```
pub fn nice_number(number: f64) -> String {
    nice_number_with(number, true, &DEFAULT_DENOMINATORS)
}

/// `number` as a mixed fraction for speech or display ("6 7/9").
pub fn nice_number_with(number: f64, speech: bool, denominators: &[u32]) -> String {
    format::nice_number(number, speech, denominators)
}

/// Spoken time of day of `dt` in 12-hour form.
pub fn nice_time(dt: NaiveDateTime) -> String {
    nice_time_with(dt, &TimeFormat::default())
}

pub fn nice_time_with(dt: NaiveDateTime, time_format: &TimeFormat) -> String {
    format::nice_time(dt, time_format)
}

/// Lowercase, strip `- ? ! . ,` and write small cardinals as digits.
///
/// `remove_articles` is accepted for interface parity; Russian has no
/// articles.
pub fn normalize(text: &str, remove_articles: bool) -> String {
    let _ = remove_articles;
    numeral::normalize::normalize(text)
}

/// `number` in words, masculine, two decimal places, short scale.
///
/// ```
/// assert_eq!(chislitel::pronounce_number(1_000_001), "один миллион, один");
/// ```
pub fn pronounce_number(number: impl Into<Number>) -> String {
    pronounce_number_with(number, &FormatOptions::default())
}

pub fn pronounce_number_with(number: impl Into<Number>, options: &FormatOptions) -> String {
    format::pronounce(number.into(), options)
}

/// Parse a `YYYY-MM-DDTHH:MM:SS` reference timestamp.
pub fn parse_reference(value: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value.trim(), "%Y-%m-%dT%H:%M:%S")
        .map_err(|_| Error::InvalidReference(value.to_string()))
}

/// Parse an `HH:MM` or `HH:MM:SS` time of day.
pub fn parse_default_time(value: &str) -> Result<NaiveTime> {
    let value = value.trim();
    NaiveTime::parse_from_str(value, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M"))
        .map_err(|_| Error::InvalidDefaultTime(value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_context() -> Context {
        let reference_time = NaiveDate::from_ymd_opt(2017, 6, 27).unwrap().and_hms_opt(13, 4, 0).unwrap();
        Context { reference_time, default_time: None }
    }

    #[test]
    fn absence_is_not_zero() {
        assert_eq!(extract_number("причал ноль"), Some(0.0));
        assert_eq!(extract_number("парусник"), None);
        assert_eq!(extract_numbers("парусник"), None);
        assert_eq!(extract_numbers("один кот и два кота"), Some(vec![1.0, 2.0]));
    }

    #[test]
    fn scale_choice() {
        let long = Options { short_scale: false, ..Options::default() };
        assert_eq!(extract_number("триллион"), Some(1e12));
        assert_eq!(extract_number_with("триллион", &long), Some(1e18));
    }

    #[test]
    fn durations() {
        assert_eq!(extract_duration("10 секунд"), Some((Some(Duration::seconds(10)), String::new())));
        assert_eq!(extract_duration(""), None);
        assert_eq!(extract_duration("ничего"), Some((None, "ничего".to_string())));
    }

    #[test]
    fn datetime_with_context() {
        let ctx = reference_context();
        let (when, rest) = extract_datetime_with("через пару часов", &ctx).unwrap();
        assert_eq!(when, NaiveDate::from_ymd_opt(2017, 6, 27).unwrap().and_hms_opt(15, 4, 0).unwrap());
        assert_eq!(rest, "");
        assert_eq!(extract_datetime_with("просто слова", &ctx), None);
    }

    #[test]
    fn verbose_datetime_includes_steps_and_metrics() {
        let ctx = reference_context();
        let res = extract_datetime_verbose_with("завтра в 7 утра", &ctx);

        assert_eq!(res.text, "завтра в 7 утра");
        assert_eq!(res.elapsed, res.details.total);
        assert_eq!(res.result, extract_datetime_with("завтра в 7 утра", &ctx));
        let rules: Vec<_> = res.details.steps.iter().map(|s| s.rule.as_str()).collect();
        assert_eq!(rules, vec!["<relative day>", "<spoken time>"]);
        assert_eq!(res.details.attempts.iter().filter(|a| a.2).count(), 2);
        assert_eq!(res.details.steps[0].offset, "{days: 1}");

        let none = extract_datetime_verbose_with("просто слова", &ctx);
        assert!(none.result.is_none());
        assert!(none.details.steps.is_empty());
    }

    #[test]
    fn formatting_entry_points() {
        assert_eq!(nice_number(0.5), "половина");
        assert_eq!(nice_number_with(6.777, false, &DEFAULT_DENOMINATORS), "6 7/9");
        assert_eq!(pronounce_number(21), "двадцать один");
        assert_eq!(pronounce_number(2.5), "две целых, пять десятых");
        let dt = NaiveDate::from_ymd_opt(2017, 1, 31).unwrap().and_hms_opt(13, 22, 3).unwrap();
        assert_eq!(nice_time(dt), "час двадцать две");
        assert_eq!(normalize("Это тест, два и три!", true), "это тест 2 и 3");
    }

    #[test]
    fn edge_parsers() {
        assert!(parse_reference("2017-06-27T13:04:00").is_ok());
        assert!(matches!(parse_reference("вчера"), Err(Error::InvalidReference(_))));
        assert_eq!(parse_default_time("09:30").unwrap(), NaiveTime::from_hms_opt(9, 30, 0).unwrap());
        assert_eq!(parse_default_time("09:30:15").unwrap(), NaiveTime::from_hms_opt(9, 30, 15).unwrap());
        assert!(matches!(parse_default_time("25:00"), Err(Error::InvalidDefaultTime(_))));
        assert_eq!(Lang::parse("ru-RU").unwrap(), Lang::Ru);
        assert_eq!(Lang::parse("ru").unwrap(), Lang::Ru);
        assert!(matches!(Lang::parse("en-us"), Err(Error::UnsupportedLanguage(_))));
    }
}
