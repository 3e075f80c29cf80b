//! Word classification for number extraction.
//!
//! Every predicate looks at one prepared word and the extraction mode. A
//! word can sit in more than one class ("тысячная" is never both, but a
//! digit literal is subthousand or term by magnitude alone).

use bitflags::bitflags;

use super::helpers::{numeric_literal, slash_fraction};
use super::tables::Lexicon;
use crate::Options;

/// Negation word that may open a number.
pub const MINUS: &str = "минус";

/// Clipped "половина". Not a number on its own; it only counts the unit
/// written right after it ("пол часа").
pub const HALF_PREFIX: &str = "пол";

/// Words that always join an integer part to a fraction part.
pub const FRACTION_MARKERS: &[&str] = &["целых", "целая", "целой", "запятая", "точка"];

/// Connectors that join a fraction part only when one follows ("два и три
/// четверти", "два с половиной"); otherwise they mean "and" / "with".
pub const MAYBE_FRACTION_MARKERS: &[&str] = &["и", "с"];

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct WordClass: u8 {
        const SUBTHOUSAND = 1 << 0;
        const TERM = 1 << 1;
        const FRACTION = 1 << 2;
        const SPECIAL_FRACTION = 1 << 3;
        const SLASH_FRACTION = 1 << 4;
        const FRACTION_MARKER = 1 << 5;
        const MAYBE_FRACTION_MARKER = 1 << 6;

        /// Classes that carry a value.
        const NUMERAL = Self::SUBTHOUSAND.bits()
            | Self::TERM.bits()
            | Self::FRACTION.bits()
            | Self::SPECIAL_FRACTION.bits()
            | Self::SLASH_FRACTION.bits();
    }
}

/// Values at or above this are scale terms, below it sub-thousand groups.
pub fn term_threshold(short_scale: bool) -> f64 {
    if short_scale { 1e3 } else { 1e6 }
}

/// Value of a word read as a sub-thousand group.
pub fn subthousand_value(lex: &Lexicon, word: &str, opts: &Options) -> Option<f64> {
    let threshold = term_threshold(opts.short_scale);
    if let Some(value) = numeric_literal(word) {
        return (value < threshold).then_some(value);
    }
    lex.number(word, opts.ordinals).filter(|v| *v < threshold)
}

/// Value of a word read as a scale term.
pub fn term_value(lex: &Lexicon, word: &str, opts: &Options) -> Option<f64> {
    if let Some(value) = numeric_literal(word) {
        return (value >= term_threshold(opts.short_scale)).then_some(value);
    }
    lex.term(word, opts.short_scale)
}

/// Denominator of a fraction word. With `ordinals` set an ordinal reading
/// wins ("пятая" is the fifth, not a fifth).
pub fn fraction_value(lex: &Lexicon, word: &str, opts: &Options) -> Option<f64> {
    if opts.ordinals && lex.ordinal(word).is_some() {
        return None;
    }
    lex.fraction(word)
}

pub fn special_fraction_value(lex: &Lexicon, word: &str, opts: &Options) -> Option<f64> {
    if opts.ordinals && lex.ordinal(word).is_some() {
        return None;
    }
    lex.special_fraction(word)
}

pub fn is_subthousand(lex: &Lexicon, word: &str, opts: &Options) -> bool {
    subthousand_value(lex, word, opts).is_some()
}

pub fn is_term(lex: &Lexicon, word: &str, opts: &Options) -> bool {
    term_value(lex, word, opts).is_some()
}

pub fn is_fraction(lex: &Lexicon, word: &str, opts: &Options) -> bool {
    fraction_value(lex, word, opts).is_some()
}

pub fn is_special_fraction(lex: &Lexicon, word: &str, opts: &Options) -> bool {
    special_fraction_value(lex, word, opts).is_some()
}

pub fn is_fraction_marker(word: &str) -> bool {
    FRACTION_MARKERS.contains(&word)
}

pub fn is_maybe_fraction_marker(word: &str) -> bool {
    MAYBE_FRACTION_MARKERS.contains(&word)
}

/// All classes `word` belongs to.
pub fn classify(lex: &Lexicon, word: &str, opts: &Options) -> WordClass {
    let mut class = WordClass::empty();
    class.set(WordClass::SUBTHOUSAND, is_subthousand(lex, word, opts));
    class.set(WordClass::TERM, is_term(lex, word, opts));
    class.set(WordClass::FRACTION, is_fraction(lex, word, opts));
    class.set(WordClass::SPECIAL_FRACTION, is_special_fraction(lex, word, opts));
    class.set(WordClass::SLASH_FRACTION, slash_fraction(word).is_some());
    class.set(WordClass::FRACTION_MARKER, is_fraction_marker(word));
    class.set(WordClass::MAYBE_FRACTION_MARKER, is_maybe_fraction_marker(word));
    class
}

/// A word with no numeral meaning at all.
pub fn is_plain_word(lex: &Lexicon, word: &str, opts: &Options) -> bool {
    classify(lex, word, opts).is_empty()
}
