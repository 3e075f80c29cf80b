//! Date and time vocabulary.
//!
//! Lookup only; every form is lowercase with `е` for `ё`.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::engine::TimeUnit;

/// Weekday forms, Monday first.
const WEEKDAYS: &[&[&str]] = &[
    &["понедельник", "понедельника", "понедельнику", "понедельником", "понедельнике"],
    &["вторник", "вторника", "вторнику", "вторником", "вторнике"],
    &["среда", "среды", "среде", "среду", "средой"],
    &["четверг", "четверга", "четвергу", "четвергом", "четверге"],
    &["пятница", "пятницы", "пятнице", "пятницу", "пятницей"],
    &["суббота", "субботы", "субботе", "субботу", "субботой"],
    &["воскресенье", "воскресенья", "воскресенью", "воскресеньем"],
];

/// Month forms (nominative, genitive, prepositional), January first.
const MONTHS: &[&[&str]] = &[
    &["январь", "января", "январе"],
    &["февраль", "февраля", "феврале"],
    &["март", "марта", "марте"],
    &["апрель", "апреля", "апреле"],
    &["май", "мая", "мае"],
    &["июнь", "июня", "июне"],
    &["июль", "июля", "июле"],
    &["август", "августа", "августе"],
    &["сентябрь", "сентября", "сентябре"],
    &["октябрь", "октября", "октябре"],
    &["ноябрь", "ноября", "ноябре"],
    &["декабрь", "декабря", "декабре"],
];

/// Units a duration can be made of, with the factor each word applies.
/// "полчаса" and friends carry their half in the factor.
const DURATION_UNITS: &[(TimeUnit, f64, &[&str])] = &[
    (
        TimeUnit::Microseconds,
        1.0,
        &["микросекунда", "микросекунды", "микросекунд", "микросекунду", "микросекундой", "микросекундами"],
    ),
    (
        TimeUnit::Milliseconds,
        1.0,
        &["миллисекунда", "миллисекунды", "миллисекунд", "миллисекунду", "миллисекундой", "миллисекундами"],
    ),
    (TimeUnit::Seconds, 1.0, &["секунда", "секунды", "секунд", "секунду", "секундой", "секундами"]),
    (TimeUnit::Minutes, 1.0, &["минута", "минуты", "минут", "минуту", "минутой", "минутами"]),
    (TimeUnit::Minutes, 0.5, &["полминуты"]),
    (TimeUnit::Hours, 1.0, &["час", "часа", "часов", "часу", "часом", "часами"]),
    (TimeUnit::Hours, 0.5, &["полчаса"]),
    (TimeUnit::Days, 1.0, &["день", "дня", "дней", "дню", "дни", "днями", "сутки", "суток", "суткам"]),
    (TimeUnit::Weeks, 1.0, &["неделя", "недели", "недель", "неделю", "неделей", "неделе", "неделями"]),
];

/// Calendar units, only meaningful relative to a date.
const CALENDAR_UNITS: &[(TimeUnit, f64, &[&str])] = &[
    (TimeUnit::Months, 1.0, &["месяц", "месяца", "месяцев", "месяце", "месяцу", "месяцами"]),
    (TimeUnit::Months, 6.0, &["полгода"]),
    (TimeUnit::Years, 1.0, &["год", "года", "лет", "году", "годы", "годам", "годами"]),
    (TimeUnit::Years, 10.0, &["десятилетие", "десятилетия", "десятилетий", "десятилетию", "десятилетии"]),
    (TimeUnit::Years, 100.0, &["век", "века", "веков", "веке", "столетие", "столетия", "столетий", "столетии"]),
    (TimeUnit::Years, 1000.0, &["тысячелетие", "тысячелетия", "тысячелетий", "тысячелетии"]),
];

/// Words naming the hour unit in a clock reading ("пять часов").
pub const HOUR_WORDS: &[&str] = &["час", "часа", "часов"];

/// Words naming the minute unit in a clock reading ("десять минут").
pub const MINUTE_WORDS: &[&str] = &["минута", "минуты", "минут", "минуту"];

/// Markers of a future interval ("через час").
pub const FORWARD_MARKERS: &[&str] = &["через", "спустя"];

/// Marker of a past interval ("час назад").
pub const BACKWARD_MARKER: &str = "назад";

/// Words after an interval that announce a further anchor ("через день
/// после", "через два дня в пять").
pub const ANCHOR_FOLLOWERS: &[&str] = &["после", "в", "во"];

/// Prepositions consumed together with a date phrase.
pub const PREPOSITIONS: &[&str] = &["в", "во", "на"];

/// Words that introduce a clock reading.
pub const CLOCK_ANCHORS: &[&str] = &["в", "во", "ровно"];

/// Which week/month/year a qualifier points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Qualifier {
    This,
    Next,
    Prev,
}

const QUALIFIERS: &[(Qualifier, &[&str])] = &[
    (Qualifier::This, &["этот", "эта", "это", "эту", "этой", "этом", "этого"]),
    (
        Qualifier::Next,
        &[
            "следующий",
            "следующая",
            "следующее",
            "следующего",
            "следующей",
            "следующем",
            "следующую",
            "следующие",
            "будущий",
            "будущая",
            "будущее",
            "будущего",
            "будущей",
            "будущем",
            "будущую",
        ],
    ),
    (
        Qualifier::Prev,
        &[
            "прошлый",
            "прошлая",
            "прошлое",
            "прошлого",
            "прошлой",
            "прошлом",
            "прошлую",
            "прошлые",
            "предыдущий",
            "предыдущая",
            "предыдущее",
            "предыдущего",
            "предыдущей",
            "предыдущем",
            "предыдущую",
        ],
    ),
];

const RELATIVE_DAYS: &[(&str, i64)] =
    &[("позавчера", -2), ("вчера", -1), ("сегодня", 0), ("завтра", 1), ("послезавтра", 2)];

/// A part of the day, as it qualifies a clock reading ("пять вечера").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartOfDay {
    Morning,
    Afternoon,
    Evening,
    Night,
}

const PART_OF_DAY_SUFFIXES: &[(&str, PartOfDay)] = &[
    ("утра", PartOfDay::Morning),
    ("утром", PartOfDay::Morning),
    ("дня", PartOfDay::Afternoon),
    ("днем", PartOfDay::Afternoon),
    ("вечера", PartOfDay::Evening),
    ("вечером", PartOfDay::Evening),
    ("ночи", PartOfDay::Night),
    ("ночью", PartOfDay::Night),
];

/// Standalone dayparts and the hour each one stands for.
const DAYPARTS: &[(&str, u32)] = &[
    ("утро", 8),
    ("утром", 8),
    ("полдень", 12),
    ("днем", 15),
    ("вечер", 19),
    ("вечером", 19),
    ("ночь", 22),
    ("ночью", 22),
    ("полночь", 0),
    ("полуночи", 0),
];

fn index<T: Copy>(entries: impl IntoIterator<Item = (T, &'static [&'static str])>) -> HashMap<&'static str, T> {
    let mut map = HashMap::new();
    for (value, forms) in entries {
        for form in forms {
            map.insert(*form, value);
        }
    }
    map
}

static WEEKDAY_INDEX: Lazy<HashMap<&'static str, u32>> =
    Lazy::new(|| index(WEEKDAYS.iter().enumerate().map(|(i, forms)| (i as u32, *forms))));

static MONTH_INDEX: Lazy<HashMap<&'static str, u32>> =
    Lazy::new(|| index(MONTHS.iter().enumerate().map(|(i, forms)| (i as u32 + 1, *forms))));

static DURATION_INDEX: Lazy<HashMap<&'static str, (TimeUnit, f64)>> =
    Lazy::new(|| index(DURATION_UNITS.iter().map(|(unit, factor, forms)| ((*unit, *factor), *forms))));

static CALENDAR_INDEX: Lazy<HashMap<&'static str, (TimeUnit, f64)>> =
    Lazy::new(|| index(CALENDAR_UNITS.iter().map(|(unit, factor, forms)| ((*unit, *factor), *forms))));

static QUALIFIER_INDEX: Lazy<HashMap<&'static str, Qualifier>> =
    Lazy::new(|| index(QUALIFIERS.iter().map(|(q, forms)| (*q, *forms))));

/// Weekday number, Monday = 0.
pub fn weekday(word: &str) -> Option<u32> {
    WEEKDAY_INDEX.get(word).copied()
}

/// Month number, January = 1.
pub fn month(word: &str) -> Option<u32> {
    MONTH_INDEX.get(word).copied()
}

/// Fixed-length unit a duration word names, with its factor.
pub fn duration_unit(word: &str) -> Option<(TimeUnit, f64)> {
    DURATION_INDEX.get(word).copied()
}

/// Any unit an interval can be counted in, calendar units included.
pub fn interval_unit(word: &str) -> Option<(TimeUnit, f64)> {
    duration_unit(word).or_else(|| CALENDAR_INDEX.get(word).copied())
}

pub fn qualifier(word: &str) -> Option<Qualifier> {
    QUALIFIER_INDEX.get(word).copied()
}

/// Day offset of "вчера", "завтра" and the like.
pub fn relative_day(word: &str) -> Option<i64> {
    RELATIVE_DAYS.iter().find(|(w, _)| *w == word).map(|(_, d)| *d)
}

pub fn part_of_day(word: &str) -> Option<PartOfDay> {
    PART_OF_DAY_SUFFIXES.iter().find(|(w, _)| *w == word).map(|(_, p)| *p)
}

/// Hour a standalone daypart word stands for.
pub fn daypart_hour(word: &str) -> Option<u32> {
    DAYPARTS.iter().find(|(w, _)| *w == word).map(|(_, h)| *h)
}

/// Every duration unit word, for exhaustive table checks.
pub fn duration_unit_words() -> impl Iterator<Item = (&'static str, TimeUnit)> {
    DURATION_UNITS.iter().flat_map(|(unit, _, forms)| forms.iter().map(move |f| (*f, *unit)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_duration_word_names_a_fixed_unit() {
        let mut seen = 0;
        for (word, unit) in duration_unit_words() {
            let (found, factor) = duration_unit(word).unwrap();
            assert_eq!(found, unit, "'{word}'");
            assert!(factor > 0.0);
            assert!(!matches!(unit, TimeUnit::Months | TimeUnit::Years), "'{word}'");
            assert!(interval_unit(word).is_some());
            seen += 1;
        }
        assert!(seen > 40);
    }

    #[test]
    fn calendar_units_fold_into_years() {
        assert_eq!(interval_unit("лет"), Some((TimeUnit::Years, 1.0)));
        assert_eq!(interval_unit("века"), Some((TimeUnit::Years, 100.0)));
        assert_eq!(interval_unit("десятилетие"), Some((TimeUnit::Years, 10.0)));
        assert_eq!(interval_unit("тысячелетий"), Some((TimeUnit::Years, 1000.0)));
        assert_eq!(duration_unit("месяц"), None);
    }

    #[test]
    fn vocabulary_lookups() {
        assert_eq!(weekday("понедельник"), Some(0));
        assert_eq!(weekday("пятницу"), Some(4));
        assert_eq!(weekday("воскресенье"), Some(6));
        assert_eq!(month("января"), Some(1));
        assert_eq!(month("мае"), Some(5));
        assert_eq!(month("декабрь"), Some(12));
        assert_eq!(qualifier("следующей"), Some(Qualifier::Next));
        assert_eq!(qualifier("прошлом"), Some(Qualifier::Prev));
        assert_eq!(qualifier("эту"), Some(Qualifier::This));
        assert_eq!(relative_day("послезавтра"), Some(2));
        assert_eq!(part_of_day("вечера"), Some(PartOfDay::Evening));
        assert_eq!(daypart_hour("полночь"), Some(0));
        assert_eq!(duration_unit("днем"), None);
    }
}
