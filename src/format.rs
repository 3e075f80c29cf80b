//! Renderers: numbers and clock times back into Russian.
//!
//! All renderers are infallible. They share the numeral [`Lexicon`] with the
//! extractors, so every word they produce is one the extractors read back.
//!
//! [`Lexicon`]: crate::rules::numeral::Lexicon

#[path = "format/clock.rs"]
mod clock;
#[path = "format/fraction.rs"]
mod fraction;
#[path = "format/pronounce.rs"]
mod pronounce;

pub(crate) use clock::nice_time;
pub use fraction::convert_to_mixed_fraction;
pub(crate) use fraction::nice_number;
pub(crate) use pronounce::pronounce;

/// Denominators `nice_number` tries by default.
pub const DEFAULT_DENOMINATORS: [u32; 20] =
    [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20];

/// Grammatical gender a rendered numeral agrees with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Gender {
    #[default]
    Masculine,
    Feminine,
}

/// A number to pronounce. Integers keep their exact digits; decimals are
/// rounded to [`FormatOptions::places`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Integer(i128),
    Decimal(f64),
}

impl From<i128> for Number {
    fn from(n: i128) -> Self {
        Number::Integer(n)
    }
}

impl From<i64> for Number {
    fn from(n: i64) -> Self {
        Number::Integer(n.into())
    }
}

impl From<i32> for Number {
    fn from(n: i32) -> Self {
        Number::Integer(n.into())
    }
}

impl From<u32> for Number {
    fn from(n: u32) -> Self {
        Number::Integer(n.into())
    }
}

impl From<f64> for Number {
    fn from(n: f64) -> Self {
        Number::Decimal(n)
    }
}

/// How [`pronounce_number_with`](crate::pronounce_number_with) renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    /// Maximum number of decimal places spoken.
    pub places: usize,
    /// Short scale (биллион = 10^9) or long scale (биллион = 10^12).
    pub short_scale: bool,
    /// "три целых, три десятых на десять в степени один".
    pub scientific: bool,
    /// Gender of the noun the number counts.
    pub gender: Gender,
}

impl Default for FormatOptions {
    fn default() -> Self {
        FormatOptions { places: 2, short_scale: true, scientific: false, gender: Gender::Masculine }
    }
}

/// How [`nice_time_with`](crate::nice_time_with) renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeFormat {
    /// Words ("семь сорок") or digits ("7:40").
    pub speech: bool,
    pub use_24hour: bool,
    /// Append "до полудня"/"после полудня" (AM/PM in display form).
    pub use_ampm: bool,
}

impl Default for TimeFormat {
    fn default() -> Self {
        TimeFormat { speech: true, use_24hour: false, use_ampm: false }
    }
}
