//! Floats as mixed fractions: "1 и 3 четверти", "6 7/9".

use crate::rules::numeral::Lexicon;

/// Closest numerator must land this near an integer to count.
const TOLERANCE: f64 = 0.01;

/// Split `number` into `(whole, numerator, denominator)` using the first of
/// `denominators` that approximates its fractional part. An integral number
/// comes back as `(n, 0, 1)`.
pub fn convert_to_mixed_fraction(number: f64, denominators: &[u32]) -> Option<(i64, u32, u32)> {
    if !number.is_finite() {
        return None;
    }
    let whole = number.trunc();
    if whole == number {
        return Some((whole as i64, 0, 1));
    }
    let fraction = (number - whole).abs();
    let (numerator, denominator) = denominators.iter().filter(|d| **d > 0).find_map(|&d| {
        let numerator = fraction * f64::from(d);
        ((numerator - numerator.round()).abs() < TOLERANCE).then_some((numerator.round() as u32, d))
    })?;

    if numerator == denominator {
        return Some((whole as i64 + number.signum() as i64, 0, 1));
    }
    Some((whole as i64, numerator, denominator))
}

/// Fallback when no denominator fits: three decimal places, decimal comma.
fn decimal_comma(number: f64) -> String {
    let rounded = (number * 1000.0).round() / 1000.0;
    rounded.to_string().replace('.', ",")
}

fn half_third_quarter(denominator: u32) -> Option<&'static str> {
    match denominator {
        2 => Some("половина"),
        3 => Some("треть"),
        4 => Some("четверть"),
        _ => None,
    }
}

/// Render `number` for speech ("2 и 2 третьих") or display ("2 2/3").
pub fn nice_number(number: f64, speech: bool, denominators: &[u32]) -> String {
    if number.is_nan() {
        return "не число".to_string();
    }
    if number.is_infinite() {
        return if number < 0.0 { "минус бесконечность" } else { "бесконечность" }.to_string();
    }
    if number.fract() == 0.0 {
        return format!("{number:.0}");
    }
    let Some((whole, numerator, denominator)) = convert_to_mixed_fraction(number, denominators) else {
        return decimal_comma(number);
    };
    if numerator == 0 {
        return whole.to_string();
    }
    // The sign is lost in the whole part of "-0.5".
    let sign = match (number < 0.0 && whole == 0, speech) {
        (false, _) => "",
        (true, true) => "минус ",
        (true, false) => "-",
    };

    if !speech {
        return format!("{sign}{whole} {numerator}/{denominator}");
    }

    if whole == 0 && numerator == 1 {
        if let Some(name) = half_third_quarter(denominator) {
            return format!("{sign}{name}");
        }
    }
    if whole != 0 && numerator == 1 && denominator == 2 {
        return format!("{whole} с половиной");
    }

    let lead = if whole == 0 { sign.to_string() } else { format!("{whole} и ") };
    if denominator == 4 {
        let quarters = if numerator == 1 { "четверть" } else { "четверти" };
        return format!("{lead}{numerator} {quarters}");
    }
    let Some(name) = Lexicon::get().fraction_name(denominator) else {
        return decimal_comma(number);
    };
    let name = if numerator == 1 { name.singular } else { name.plural };
    format!("{lead}{numerator} {name}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::DEFAULT_DENOMINATORS;

    fn speak(number: f64) -> String {
        nice_number(number, true, &DEFAULT_DENOMINATORS)
    }

    #[test]
    fn mixed_fractions() {
        assert_eq!(convert_to_mixed_fraction(2.0, &DEFAULT_DENOMINATORS), Some((2, 0, 1)));
        assert_eq!(convert_to_mixed_fraction(0.333, &DEFAULT_DENOMINATORS), Some((0, 1, 3)));
        assert_eq!(convert_to_mixed_fraction(2.666, &DEFAULT_DENOMINATORS), Some((2, 2, 3)));
        assert_eq!(convert_to_mixed_fraction(-1.5, &DEFAULT_DENOMINATORS), Some((-1, 1, 2)));
        assert_eq!(convert_to_mixed_fraction(1.999, &DEFAULT_DENOMINATORS), Some((2, 0, 1)));
        assert_eq!(convert_to_mixed_fraction(1.435634, &DEFAULT_DENOMINATORS), None);
        assert_eq!(convert_to_mixed_fraction(f64::NAN, &DEFAULT_DENOMINATORS), None);
    }

    #[test]
    fn speech() {
        let cases = vec![
            ("1,436", 1.435634),
            ("2", 2.0),
            ("5", 5.0),
            ("1234567890", 1234567890.0),
            ("12345,679", 12345.6789),
            ("0,027", 0.027),
            ("половина", 0.5),
            ("треть", 0.333),
            ("1 и 1 третья", 1.333),
            ("2 и 2 третьих", 2.666),
            ("четверть", 0.25),
            ("1 и 1 четверть", 1.25),
            ("3 четверти", 0.75),
            ("1 и 3 четверти", 1.75),
            ("3 и 2 пятых", 3.4),
            ("16 и 5 шестых", 16.8333),
            ("12 и 4 седьмых", 12.5714),
            ("9 и 5 восьмых", 9.625),
            ("6 и 7 девятых", 6.777),
            ("3 и 1 десятая", 3.1),
            ("2 и 3 одиннадцатых", 2.272),
            ("5 и 7 двенадцатых", 5.583),
            ("8 и 5 тринадцатых", 8.384),
            ("1 четырнадцатая", 0.071),
            ("6 и 7 пятнадцатых", 6.466),
            ("8 и 5 шестнадцатых", 8.312),
            ("2 и 3 семнадцатых", 2.176),
            ("200 и 13 восемнадцатых", 200.722),
            ("7 и 8 девятнадцатых", 7.421),
            ("1 двадцатая", 0.05),
            ("1 с половиной", 1.5),
            ("минус половина", -0.5),
        ];
        for (expected, number) in cases {
            assert_eq!(speak(number), expected, "{number}");
        }
    }

    #[test]
    fn custom_denominators() {
        assert_eq!(nice_number(5.5, true, &[1, 2, 3]), "5 с половиной");
        assert_eq!(nice_number(2.333, true, &[1, 2]), "2,333");
    }

    #[test]
    fn display() {
        assert_eq!(nice_number(6.777, false, &DEFAULT_DENOMINATORS), "6 7/9");
        assert_eq!(nice_number(6.0, false, &DEFAULT_DENOMINATORS), "6");
        assert_eq!(nice_number(0.75, false, &DEFAULT_DENOMINATORS), "0 3/4");
        assert_eq!(nice_number(-1.5, false, &DEFAULT_DENOMINATORS), "-1 1/2");
        assert_eq!(nice_number(-0.5, false, &DEFAULT_DENOMINATORS), "-0 1/2");
        assert_eq!(nice_number(2.333, false, &[1, 2]), "2,333");
    }
}
