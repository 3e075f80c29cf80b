/// Parse a digit literal ("20", "-3", "2,5", "0.77").
pub fn numeric_literal(word: &str) -> Option<f64> {
    if !regex!(r"^-?\d+(?:[.,]\d+)?$").is_match(word) {
        return None;
    }
    word.replace(',', ".").parse::<f64>().ok()
}

/// Parse a digit slash fraction ("3/4"). A zero denominator is not a number.
pub fn slash_fraction(word: &str) -> Option<f64> {
    let caps = regex!(r"^(\d+)/(\d+)$").captures(word)?;
    let numerator: f64 = caps.get(1)?.as_str().parse().ok()?;
    let denominator: f64 = caps.get(2)?.as_str().parse().ok()?;
    if denominator == 0.0 {
        return None;
    }
    Some(numerator / denominator)
}

/// Infer the power-of-ten "grain" for a numeral value. For integers that end
/// with at least one zero, the grain is the count of trailing zeros; otherwise
/// `None`.
pub fn infer_grain(value: f64) -> Option<u32> {
    let abs_val = value.abs();

    if abs_val == 0.0 || value.fract().abs() > f64::EPSILON || abs_val >= u64::MAX as f64 {
        return None;
    }

    let mut n = abs_val as u64;
    let mut grain = 0u32;
    while n % 10 == 0 {
        grain += 1;
        n /= 10;
    }

    if grain > 0 { Some(grain) } else { None }
}

/// Convert an integer value into its fractional decimal form (e.g. 12 -> 0.12).
pub fn decimals_to_double(value: f64) -> f64 {
    let abs_val = value.abs();
    if abs_val == 0.0 {
        return 0.0;
    }

    let mut n = abs_val as u64;
    let mut digits = 0u32;
    while n > 0 {
        digits += 1;
        n /= 10;
    }

    value / 10f64.powi(digits as i32)
}

/// Whether `value` has no fractional part.
pub fn is_integral(value: f64) -> bool {
    value.fract().abs() < f64::EPSILON
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_literals() {
        assert_eq!(numeric_literal("20"), Some(20.0));
        assert_eq!(numeric_literal("-3"), Some(-3.0));
        assert_eq!(numeric_literal("2,5"), Some(2.5));
        assert_eq!(numeric_literal("0.77"), Some(0.77));
        assert_eq!(numeric_literal("13:30"), None);
        assert_eq!(numeric_literal("3/4"), None);
        assert_eq!(numeric_literal("два"), None);
    }

    #[test]
    fn slash_fractions() {
        assert_eq!(slash_fraction("3/4"), Some(0.75));
        assert_eq!(slash_fraction("1/0"), None);
        assert_eq!(slash_fraction("3"), None);
    }

    #[test]
    fn grains_and_decimals() {
        assert_eq!(infer_grain(20.0), Some(1));
        assert_eq!(infer_grain(300.0), Some(2));
        assert_eq!(infer_grain(7.0), None);
        assert_eq!(infer_grain(0.0), None);
        assert_eq!(infer_grain(2.5), None);
        assert!((decimals_to_double(5.0) - 0.5).abs() < 1e-12);
        assert!((decimals_to_double(25.0) - 0.25).abs() < 1e-12);
        assert_eq!(decimals_to_double(0.0), 0.0);
    }
}
