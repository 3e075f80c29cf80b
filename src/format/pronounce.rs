//! Number to speech.
//!
//! Integer parts are rendered from their decimal digits, so any magnitude the
//! scale tables name can be spoken; anything larger is "бесконечность".

use super::{FormatOptions, Gender, Number};
use crate::rules::numeral::Lexicon;
use crate::rules::numeral::tables::Agreement;

const MINUS: &str = "минус ";
const INFINITY: &str = "бесконечность";
const NOT_A_NUMBER: &str = "не число";
const TIMES_TEN_TO_THE: &str = " на десять в степени ";

/// Digits of a number after rounding: integer part and the significant
/// fractional digits (trailing zeros stripped, leading zeros kept).
#[derive(Debug, Clone, PartialEq, Eq)]
struct Digits {
    negative: bool,
    whole: String,
    fraction: Option<String>,
}

impl Digits {
    fn of(number: Number, places: usize) -> Self {
        match number {
            Number::Integer(n) => Digits { negative: n < 0, whole: n.unsigned_abs().to_string(), fraction: None },
            Number::Decimal(x) => {
                // Round, then keep only the digits needed to name the nearest
                // double, so 0.1 stays "0.1" however many places are allowed.
                let fixed = format!("{:.*}", places, x.abs());
                let rounded = fixed.parse::<f64>().map(|v| v.to_string()).unwrap_or(fixed);
                let (whole, fraction) = match rounded.split_once('.') {
                    Some((whole, fraction)) => (whole.to_string(), fraction.trim_end_matches('0')),
                    None => (rounded.clone(), ""),
                };
                let fraction = (!fraction.is_empty()).then(|| fraction.to_string());
                let negative = x < 0.0 && (fraction.is_some() || whole.bytes().any(|b| b != b'0'));
                Digits { negative, whole, fraction }
            }
        }
    }
}

/// Value of the last two digits, which is all numeral agreement looks at.
fn tail(digits: &str) -> u128 {
    let start = digits.len().saturating_sub(2);
    digits[start..].parse().unwrap_or(0)
}

/// Split a digit string into groups of `width` digits, lowest first.
fn split_groups(digits: &str, width: usize) -> Vec<u32> {
    let bytes = digits.as_bytes();
    let mut groups = Vec::with_capacity(bytes.len() / width + 1);
    let mut end = bytes.len();
    while end > 0 {
        let start = end.saturating_sub(width);
        let value = bytes[start..end].iter().fold(0u32, |acc, b| acc * 10 + u32::from(b - b'0'));
        groups.push(value);
        end = start;
    }
    groups
}

/// 1..=999 in words; the units take the feminine form when asked.
fn sub_thousand(lex: &Lexicon, n: u32, feminine: bool) -> String {
    let pick = |value: u32| {
        lex.cardinal_name(value).map(|name| if feminine { name.feminine } else { name.masculine }).unwrap_or_default()
    };
    let mut words = Vec::with_capacity(3);
    let (hundreds, rest) = (n / 100 * 100, n % 100);
    if hundreds > 0 {
        words.push(pick(hundreds));
    }
    if rest >= 20 {
        words.push(pick(rest / 10 * 10));
        if rest % 10 > 0 {
            words.push(pick(rest % 10));
        }
    } else if rest > 0 {
        words.push(pick(rest));
    }
    words.join(" ")
}

/// Short scale: groups of three digits, each followed by its tier name.
/// Thousands are feminine ("две тысячи"); the lowest group is feminine when
/// `feminine_low` is set. `None` when the number outgrows the tier table.
fn short_scale(lex: &Lexicon, digits: &str, feminine_low: bool) -> Option<String> {
    let names = lex.scale_names(true);
    let mut parts = Vec::new();
    for (i, group) in split_groups(digits, 3).into_iter().enumerate().rev() {
        if group == 0 {
            continue;
        }
        let feminine = i == 1 || (i == 0 && feminine_low);
        let mut part = sub_thousand(lex, group, feminine);
        if i > 0 {
            let scale = names.get(i - 1)?;
            part.push(' ');
            part.push_str(scale.form(Agreement::for_count(group.into())));
        }
        parts.push(part);
    }
    Some(parts.join(", "))
}

/// Long scale: groups of six digits, each spoken in the short scale and
/// followed by its tier name (миллион, биллион, триллион...).
fn long_scale(lex: &Lexicon, digits: &str, feminine_low: bool) -> Option<String> {
    let names = lex.scale_names(false);
    let mut parts = Vec::new();
    for (j, group) in split_groups(digits, 6).into_iter().enumerate().rev() {
        if group == 0 {
            continue;
        }
        let mut part = short_scale(lex, &group.to_string(), j == 0 && feminine_low)?;
        if j > 0 {
            let scale = names.get(j)?;
            part.push(' ');
            part.push_str(scale.form(Agreement::for_count(group.into())));
        }
        parts.push(part);
    }
    Some(parts.join(", "))
}

fn integer_words(lex: &Lexicon, digits: &str, short: bool, feminine: bool) -> Option<String> {
    if digits.bytes().all(|b| b == b'0') {
        return Some("ноль".to_string());
    }
    if short { short_scale(lex, digits, feminine) } else { long_scale(lex, digits, feminine) }
}

/// Spoken form of `number`.
pub fn pronounce(number: Number, opts: &FormatOptions) -> String {
    if let Number::Decimal(x) = number {
        if x.is_nan() {
            return NOT_A_NUMBER.to_string();
        }
        if x.is_infinite() {
            return if x < 0.0 { format!("{MINUS}{INFINITY}") } else { INFINITY.to_string() };
        }
    }
    if opts.scientific {
        if let Some(spoken) = scientific(number, opts) {
            return spoken;
        }
    }

    let lex = Lexicon::get();
    let digits = Digits::of(number, opts.places);
    let sign = if digits.negative { MINUS } else { "" };
    let feminine = opts.gender == Gender::Feminine;

    // Numbers with a name of their own.
    if digits.fraction.is_none() {
        if let Some(name) = digits.whole.parse::<u32>().ok().and_then(|n| lex.cardinal_name(n)) {
            return format!("{sign}{}", if feminine { name.feminine } else { name.masculine });
        }
    }

    let Some(whole) = integer_words(lex, &digits.whole, opts.short_scale, feminine || digits.fraction.is_some())
    else {
        return format!("{sign}{INFINITY}");
    };
    let Some(fraction) = digits.fraction else {
        return format!("{sign}{whole}");
    };

    let wholes = if Agreement::for_count(tail(&digits.whole)) == Agreement::Nominative { "целая" } else { "целых" };
    let numerator = fraction.trim_start_matches('0');
    let numerator_words = integer_words(lex, numerator, true, true).unwrap_or_default();
    let mut spoken = format!("{sign}{whole} {wholes}, {numerator_words}");
    if let Some(denominator) = lex.decimal_denominator(fraction.len(), opts.short_scale) {
        let singular = Agreement::for_count(tail(numerator)) == Agreement::Nominative;
        spoken.push(' ');
        spoken.push_str(if singular { &denominator.singular } else { &denominator.plural });
    }
    spoken
}

/// "<mantissa> на десять в степени <exponent>", or `None` when the exponent
/// is zero and the plain rendering applies.
fn scientific(number: Number, opts: &FormatOptions) -> Option<String> {
    let value = match number {
        Number::Integer(n) => n as f64,
        Number::Decimal(x) => x,
    };
    let formatted = format!("{value:.6E}");
    let (mantissa, exponent) = formatted.split_once('E')?;
    let mantissa: f64 = mantissa.parse().ok()?;
    let exponent: i32 = exponent.parse().ok()?;
    if exponent == 0 {
        return None;
    }

    let plain = FormatOptions { scientific: false, gender: Gender::Masculine, ..*opts };
    Some(format!(
        "{}{}{TIMES_TEN_TO_THE}{}{}",
        if mantissa < 0.0 { MINUS } else { "" },
        pronounce(Number::Decimal(mantissa.abs()), &plain),
        if exponent < 0 { MINUS } else { "" },
        pronounce(Number::Integer(exponent.unsigned_abs().into()), &plain),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn say(number: impl Into<Number>) -> String {
        pronounce(number.into(), &FormatOptions::default())
    }

    fn say_with(number: impl Into<Number>, opts: FormatOptions) -> String {
        pronounce(number.into(), &opts)
    }

    #[test]
    fn small_integers() {
        let cases = vec![
            ("один", 1),
            ("десять", 10),
            ("пятнадцать", 15),
            ("двадцать", 20),
            ("двадцать семь", 27),
            ("тридцать", 30),
            ("тридцать три", 33),
            ("семьдесят один", 71),
            ("восемьдесят", 80),
            ("семьдесят четыре", 74),
            ("семьдесят девять", 79),
            ("девяносто один", 91),
            ("девяносто семь", 97),
            ("триста", 300),
            ("ноль", 0),
        ];
        for (expected, n) in cases {
            assert_eq!(say(n), expected, "{n}");
            assert_eq!(say(-n), if n == 0 { "ноль".to_string() } else { format!("минус {expected}") }, "-{n}");
        }
    }

    #[test]
    fn gender_applies_to_the_last_group() {
        let feminine = FormatOptions { gender: Gender::Feminine, ..FormatOptions::default() };
        assert_eq!(say_with(2, feminine), "две");
        assert_eq!(say_with(21, feminine), "двадцать одна");
        assert_eq!(say_with(2002, feminine), "две тысячи, две");
        assert_eq!(say(2002), "две тысячи, два");
    }

    #[test]
    fn decimals() {
        assert_eq!(say(1.234), "одна целая, двадцать три сотых");
        assert_eq!(say(21.234), "двадцать одна целая, двадцать три сотых");
        assert_eq!(say(-21.234), "минус двадцать одна целая, двадцать три сотых");
        assert_eq!(say(1.05), "одна целая, пять сотых");
        assert_eq!(say(5.0), "пять");
        assert_eq!(say(0.5), "ноль целых, пять десятых");

        let places = |places| FormatOptions { places, ..FormatOptions::default() };
        assert_eq!(say_with(21.234, places(1)), "двадцать одна целая, две десятых");
        assert_eq!(say_with(21.234, places(0)), "двадцать один");
        for p in [3, 4, 5] {
            assert_eq!(say_with(21.234, places(p)), "двадцать одна целая, двести тридцать четыре тысячных");
        }
    }

    #[test]
    fn scientific_notation() {
        let sci = |places| FormatOptions { places, scientific: true, ..FormatOptions::default() };
        assert_eq!(say_with(0, sci(2)), "ноль");
        assert_eq!(say_with(33, sci(2)), "три целых, три десятых на десять в степени один");
        assert_eq!(say_with(299292458, sci(2)), "две целых, девяносто девять сотых на десять в степени восемь");
        assert_eq!(
            say_with(299792458, sci(6)),
            "две целых, девятьсот девяносто семь тысяч, девятьсот двадцать пять миллионных на десять в степени восемь"
        );
        assert_eq!(
            say_with(1.672e-27, sci(3)),
            "одна целая, шестьсот семьдесят две тысячных на десять в степени минус двадцать семь"
        );
    }

    #[test]
    fn large_numbers() {
        let long = FormatOptions { short_scale: false, ..FormatOptions::default() };
        let spoken = "двести девяносто девять миллионов, семьсот девяносто две тысячи, четыреста пятьдесят восемь";
        assert_eq!(say(299792458), spoken);
        assert_eq!(say_with(299792458, long), spoken);

        assert_eq!(
            say(100034000000299792458i128),
            "сто квинтиллионов, тридцать четыре квадриллиона, двести девяносто девять миллионов, семьсот \
             девяносто две тысячи, четыреста пятьдесят восемь"
        );
        assert_eq!(
            say_with(100034000000299792458i128, long),
            "сто триллионов, тридцать четыре тысячи биллионов, двести девяносто девять миллионов, семьсот \
             девяносто две тысячи, четыреста пятьдесят восемь"
        );
        assert_eq!(say(10000000000i64), "десять биллионов");
        assert_eq!(say(1000000000000i64), "один триллион");
        assert_eq!(say(1000001), "один миллион, один");
        assert_eq!(say(1000), "одна тысяча");
        assert_eq!(say(11000), "одиннадцать тысяч");
        assert_eq!(say(22_000_000), "двадцать два миллиона");
    }

    #[test]
    fn scale_names_agree_with_their_count() {
        let long = FormatOptions { short_scale: false, ..FormatOptions::default() };
        let tiers = [
            (1_000i128, FormatOptions::default(), ["тысяча", "тысячи", "тысяч"]),
            (1_000_000, FormatOptions::default(), ["миллион", "миллиона", "миллионов"]),
            (1_000_000_000, FormatOptions::default(), ["биллион", "биллиона", "биллионов"]),
            (1_000_000_000_000, long, ["биллион", "биллиона", "биллионов"]),
            (1_000_000_000_000_000_000, long, ["триллион", "триллиона", "триллионов"]),
        ];
        let counts = [(1, 0), (2, 1), (5, 2), (11, 2), (14, 2), (21, 0), (112, 2), (44, 1)];
        for (unit, opts, forms) in tiers {
            for (count, form) in counts {
                let spoken = say_with(count * unit, opts);
                assert!(spoken.ends_with(&format!(" {}", forms[form])), "{count} x {unit}: '{spoken}'");
            }
        }
    }

    #[test]
    fn many_places_keep_the_shortest_digits() {
        let places = |places| FormatOptions { places, ..FormatOptions::default() };
        assert_eq!(say_with(0.1, places(20)), "ноль целых, одна десятая");
        assert_eq!(say_with(2.5, places(17)), "две целых, пять десятых");
        assert_eq!(say_with(0.000001, places(6)), "ноль целых, одна миллионная");
        assert_eq!(say_with(1.0000012, places(7)), "одна целая, двенадцать десятимиллионных");
    }

    #[test]
    fn non_finite_and_overflow() {
        assert_eq!(say(f64::NAN), "не число");
        assert_eq!(say(f64::INFINITY), "бесконечность");
        assert_eq!(say(f64::NEG_INFINITY), "минус бесконечность");
        assert_eq!(say(1e200), "бесконечность");
        assert_eq!(say_with(1e200, FormatOptions { short_scale: false, ..FormatOptions::default() }), "бесконечность");
    }

    #[test]
    fn digit_groups() {
        assert_eq!(split_groups("1000001", 3), vec![1, 0, 1]);
        assert_eq!(split_groups("12", 3), vec![12]);
        assert_eq!(split_groups("1234567", 6), vec![234567, 1]);
    }
}
