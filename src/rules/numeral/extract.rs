//! Turning number spans into values.

use super::helpers::{decimals_to_double, slash_fraction};
use super::predicates::{
    FRACTION_MARKERS, MAYBE_FRACTION_MARKERS, MINUS, fraction_value, special_fraction_value, subthousand_value,
    term_value,
};
use super::spans::extract_token_spans;
use super::tables::Lexicon;
use crate::engine::{prepare, tokenize};
use crate::{Options, Token};

/// Sum sub-thousand groups, multiplying each run by the scale term that
/// follows it. A bare term stands for itself ("тысяча" = 1000).
pub fn extract_integer(lex: &Lexicon, tokens: &[Token], opts: &Options) -> f64 {
    let mut result = 0.0;
    let mut pending = 0.0;
    for token in tokens {
        if let Some(term) = term_value(lex, &token.word, opts) {
            result += if pending != 0.0 { pending * term } else { term };
            pending = 0.0;
        } else if let Some(value) = subthousand_value(lex, &token.word, opts) {
            pending += value;
        }
    }
    result + pending
}

/// Value of a span ending in a fraction word, or 0 when it does not end in
/// one. The words before the fraction are its numerator (1 when missing).
pub fn extract_fraction(lex: &Lexicon, tokens: &[Token], opts: &Options) -> f64 {
    let Some((last, rest)) = tokens.split_last() else {
        return 0.0;
    };
    let numerator = || match extract_integer(lex, rest, opts) {
        n if n == 0.0 => 1.0,
        n => n,
    };
    if let Some(value) = special_fraction_value(lex, &last.word, opts) {
        return numerator() * value;
    }
    if let Some(denominator) = fraction_value(lex, &last.word, opts) {
        return numerator() / denominator;
    }
    if rest.is_empty() {
        if let Some(value) = slash_fraction(&last.word) {
            return value;
        }
    }
    0.0
}

/// Value of a whole span: optional leading minus, integer part, optional
/// fraction marker and fraction part. `None` when nothing is left after the
/// minus.
pub fn extract_number(lex: &Lexicon, tokens: &[Token], opts: &Options) -> Option<f64> {
    let (negative, tokens) = match tokens.split_first() {
        Some((first, rest)) if first.word == MINUS => (true, rest),
        _ => (false, tokens),
    };
    if tokens.is_empty() {
        return None;
    }

    let marker = FRACTION_MARKERS
        .iter()
        .chain(MAYBE_FRACTION_MARKERS)
        .find_map(|m| tokens.iter().position(|t| t.word == *m));

    let value = match marker {
        Some(pos) => {
            let integer = extract_integer(lex, &tokens[..pos], opts);
            let fraction_part = &tokens[pos + 1..];
            let mut fraction = extract_fraction(lex, fraction_part, opts);
            if fraction == 0.0 {
                // "три целых пять", "два запятая пять"
                fraction = decimals_to_double(extract_integer(lex, fraction_part, opts));
            }
            integer + fraction
        }
        None => match extract_fraction(lex, tokens, opts) {
            f if f != 0.0 => f,
            _ => extract_integer(lex, tokens, opts),
        },
    };

    Some(if negative { -value } else { value })
}

/// All numbers in `text`, in order.
pub fn extract_numbers(text: &str, opts: &Options) -> Vec<f64> {
    let lex = Lexicon::get();
    let tokens = tokenize(&prepare(text));
    extract_token_spans(lex, &tokens, opts).iter().filter_map(|span| extract_number(lex, span, opts)).collect()
}

/// First number in `text`.
pub fn extract_first_number(text: &str, opts: &Options) -> Option<f64> {
    let lex = Lexicon::get();
    let tokens = tokenize(&prepare(text));
    extract_token_spans(lex, &tokens, opts).iter().find_map(|span| extract_number(lex, span, opts))
}

/// Value of an already tokenized run of words, as the time rules see it.
pub fn number_from_tokens(tokens: &[Token], opts: &Options) -> Option<f64> {
    let lex = Lexicon::get();
    extract_token_spans(lex, tokens, opts).iter().find_map(|span| extract_number(lex, span, opts))
}
