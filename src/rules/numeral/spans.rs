//! Grouping tokens into number spans.
//!
//! A span is a run of consecutive tokens that together spell one number.
//! Plain words close a span; two adjacent numerals that cannot belong to the
//! same number ("двадцать двадцать") start a new one.

use tracing::trace;

use super::helpers::{infer_grain, is_integral};
use super::predicates::{MINUS, WordClass, classify, subthousand_value, term_value};
use super::tables::Lexicon;
use crate::{Options, Token};

/// Group `tokens` into candidate number spans, left to right.
pub fn extract_token_spans(lex: &Lexicon, tokens: &[Token], opts: &Options) -> Vec<Vec<Token>> {
    let classes: Vec<WordClass> = tokens.iter().map(|t| classify(lex, &t.word, opts)).collect();
    let mut spans = Vec::new();
    let mut current: Vec<Token> = Vec::new();
    let mut current_classes: Vec<WordClass> = Vec::new();

    let mut flush = |current: &mut Vec<Token>, current_classes: &mut Vec<WordClass>| {
        if current_classes.iter().any(|c| c.intersects(WordClass::NUMERAL)) {
            trace!(span = ?current.iter().map(|t| t.word.as_str()).collect::<Vec<_>>(), "number span");
            spans.push(std::mem::take(current));
        } else {
            current.clear();
        }
        current_classes.clear();
    };

    for (i, token) in tokens.iter().enumerate() {
        let class = classes[i];
        let next = classes.get(i + 1).copied().unwrap_or(WordClass::empty());

        if token.word == MINUS {
            flush(&mut current, &mut current_classes);
            if next.intersects(WordClass::NUMERAL) {
                current.push(token.clone());
                current_classes.push(class);
            }
            continue;
        }

        if class.contains(WordClass::FRACTION_MARKER) {
            if current_classes.iter().any(|c| c.intersects(WordClass::NUMERAL)) {
                current.push(token.clone());
                current_classes.push(class);
            } else {
                flush(&mut current, &mut current_classes);
            }
            continue;
        }

        if class.contains(WordClass::MAYBE_FRACTION_MARKER) {
            let opened = current_classes.iter().any(|c| c.intersects(WordClass::NUMERAL));
            if opened && fraction_follows(&classes[i + 1..]) {
                current.push(token.clone());
                current_classes.push(class);
            } else {
                flush(&mut current, &mut current_classes);
            }
            continue;
        }

        if !class.intersects(WordClass::NUMERAL) {
            flush(&mut current, &mut current_classes);
            continue;
        }

        if class.contains(WordClass::SLASH_FRACTION) {
            let signed = current.len() == 1 && current[0].word == MINUS;
            if !signed {
                flush(&mut current, &mut current_classes);
            }
            current.push(token.clone());
            current_classes.push(class);
            flush(&mut current, &mut current_classes);
            continue;
        }

        let split = match (current.last(), current_classes.last()) {
            (Some(prev), Some(prev_class)) => {
                different_numbers(lex, opts, (&prev.word, *prev_class), (&token.word, class))
            }
            _ => false,
        };
        if split {
            flush(&mut current, &mut current_classes);
        }
        current.push(token.clone());
        current_classes.push(class);
    }
    flush(&mut current, &mut current_classes);
    spans
}

/// Whether the numeral run starting right after a maybe-marker ends in a
/// fraction word.
fn fraction_follows(rest: &[WordClass]) -> bool {
    let run: Vec<&WordClass> = rest
        .iter()
        .take_while(|c| c.intersects(WordClass::NUMERAL) && !c.contains(WordClass::SLASH_FRACTION))
        .collect();
    run.last().is_some_and(|c| c.intersects(WordClass::FRACTION | WordClass::SPECIAL_FRACTION))
}

/// Whether `cur` cannot continue the number that `prev` belongs to. Markers
/// and the minus word never split.
fn different_numbers(lex: &Lexicon, opts: &Options, prev: (&str, WordClass), cur: (&str, WordClass)) -> bool {
    let (prev_word, prev_class) = prev;
    let (cur_word, cur_class) = cur;

    if !prev_class.intersects(WordClass::NUMERAL) || prev_word == MINUS {
        return false;
    }
    if prev_class.intersects(WordClass::FRACTION | WordClass::SPECIAL_FRACTION | WordClass::SLASH_FRACTION) {
        return true;
    }

    let prev_sub = subthousand_value(lex, prev_word, opts);
    let cur_sub = subthousand_value(lex, cur_word, opts);
    if let (Some(p), Some(c)) = (prev_sub, cur_sub) {
        if p == 0.0 || c == 0.0 || !is_integral(p) || !is_integral(c) {
            return true;
        }
        let grain = infer_grain(p).unwrap_or(0);
        return c >= 10f64.powi(grain as i32);
    }

    if cur_class.intersects(WordClass::FRACTION | WordClass::SPECIAL_FRACTION) {
        return false;
    }

    match (term_value(lex, prev_word, opts), term_value(lex, cur_word, opts)) {
        (Some(p), Some(c)) => c >= p,
        _ => false,
    }
}
