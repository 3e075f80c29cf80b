//! Text preparation and tokenization.

use crate::Token;

/// Characters stripped from both ends of every word.
const EDGE_PUNCTUATION: &[char] = &['.', ',', '?', '!', ';', ':', '"', '\'', '«', '»', '(', ')'];

/// Lowercase `text`, fold `ё` into `е` and strip punctuation hanging off word
/// edges. Words are rejoined with single spaces; words made only of
/// punctuation disappear.
///
/// Inner punctuation survives, so "13:30", "3/4" and "2,5" stay intact.
pub(crate) fn prepare(text: &str) -> String {
    let folded = text.to_lowercase().replace('ё', "е");
    folded
        .split_whitespace()
        .map(|w| w.trim_matches(EDGE_PUNCTUATION))
        .filter(|w| !w.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Split `text` on whitespace into tokens carrying their 0-based position.
pub(crate) fn tokenize(text: &str) -> Vec<Token> {
    text.split_whitespace().enumerate().map(|(i, w)| Token::new(w, i)).collect()
}
