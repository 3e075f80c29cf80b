//! Russian numerals: vocabulary, word classes, span grouping and value
//! extraction.

pub(crate) mod extract;
pub(crate) mod helpers;
pub(crate) mod normalize;
pub(crate) mod predicates;
pub(crate) mod spans;
pub(crate) mod tables;

#[cfg(test)]
mod tests;

pub(crate) use extract::{extract_first_number, extract_numbers, number_from_tokens};
pub(crate) use tables::Lexicon;
