//! Clock times for speech and display.

use chrono::{NaiveDateTime, Timelike};

use super::{FormatOptions, Gender, Number, TimeFormat, pronounce};
use crate::rules::numeral::Lexicon;

fn masculine(n: u32) -> String {
    pronounce(Number::Integer(n.into()), &FormatOptions::default())
}

/// Minutes agree with the feminine "минута".
fn feminine(n: u32) -> String {
    pronounce(Number::Integer(n.into()), &FormatOptions { gender: Gender::Feminine, ..FormatOptions::default() })
}

/// One o'clock is just "час".
fn hour_name(hour: u32) -> String {
    if hour == 1 { "час".to_string() } else { masculine(hour) }
}

/// "ноль две", "ноль ноль", "сорок".
fn minute_words(minute: u32) -> String {
    match minute {
        0 => "ноль ноль".to_string(),
        1..=9 => format!("ноль {}", feminine(minute)),
        _ => feminine(minute),
    }
}

fn display(dt: NaiveDateTime, fmt: &TimeFormat) -> String {
    if fmt.use_24hour {
        return dt.format("%H:%M").to_string();
    }
    let pattern = if fmt.use_ampm { "%I:%M %p" } else { "%I:%M" };
    let formatted = dt.format(pattern).to_string();
    match formatted.strip_prefix('0') {
        Some(rest) => rest.to_string(),
        None => formatted,
    }
}

/// Render the time of day of `dt`.
pub fn nice_time(dt: NaiveDateTime, fmt: &TimeFormat) -> String {
    if !fmt.speech {
        return display(dt, fmt);
    }
    let (hour, minute) = (dt.hour(), dt.minute());

    if fmt.use_24hour {
        return format!("{} {}", hour_name(hour), minute_words(minute));
    }

    let hour_12 = if hour > 12 { hour - 12 } else { hour };
    // The hour in progress is named by the next one: 12:15 is "пятнадцать
    // минут первого".
    let next = hour_12 % 12 + 1;

    if !fmt.use_ampm {
        let lex = Lexicon::get();
        let next_genitive = lex.ordinal_genitive(next).unwrap_or_default();
        match (hour, minute) {
            (0, 0) => return "полночь".to_string(),
            (12, 0) => return "полдень".to_string(),
            (_, 5 | 10 | 15) => return format!("{} минут {next_genitive}", masculine(minute)),
            (_, 45) => return format!("без пятнадцати {}", hour_name(next)),
            (_, 50) => return format!("без десяти {}", hour_name(next)),
            (_, 55) => return format!("без пяти {}", hour_name(next)),
            (_, 30) => return format!("половина {next_genitive}"),
            (_, 0) => return format!("ровно {}", hour_name(hour_12)),
            _ => {}
        }
    }

    let spoken_hour = if hour == 0 { masculine(12) } else { hour_name(hour_12) };
    let mut speak = format!("{spoken_hour} {}", minute_words(minute));
    if fmt.use_ampm {
        speak.push_str(if hour > 11 { " после полудня" } else { " до полудня" });
    }
    speak
}
