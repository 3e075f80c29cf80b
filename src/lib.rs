extern crate self as chislitel;

#[macro_use]
mod macros;
mod api;
mod engine;
mod error;
mod format;
mod rules;

pub use api::{
    Context, DateTimeDetails, DateTimeResultVerbose, Lang, Options, RuleStep, extract_datetime,
    extract_datetime_verbose_with, extract_datetime_with, extract_duration, extract_number, extract_number_with,
    extract_numbers, extract_numbers_with, nice_number, nice_number_with, nice_time, nice_time_with, normalize,
    parse_default_time, parse_reference, pronounce_number, pronounce_number_with,
};
pub use error::{Error, Result};
pub use format::{DEFAULT_DENOMINATORS, FormatOptions, Gender, Number, TimeFormat, convert_to_mixed_fraction};

use crate::engine::Offset;

// --- Internal types ---------------------------------------------------------

/// A single word of the (prepared) input and its position in the word list
/// it was taken from.
///
/// `index` is only meaningful for the list the token was produced from: the
/// datetime chain removes consumed words between rules and re-numbers the
/// remaining tokens, so rules must never hold on to indices across runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Token {
    pub word: String,
    pub index: usize,
}

impl Token {
    pub fn new(word: impl Into<String>, index: usize) -> Self {
        Token { word: word.into(), index }
    }
}

/// What a datetime rule found: the offset it contributes, the positions (in
/// the word list the rule observed) it consumed, and whether the chain may
/// stop after it.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PartialMatch {
    pub offset: Offset,
    pub consumed: Vec<usize>,
    pub terminal: bool,
}

impl PartialMatch {
    pub fn new(offset: Offset, consumed: Vec<usize>, terminal: bool) -> Self {
        PartialMatch { offset, consumed, terminal }
    }
}

pub(crate) type Extraction = Box<dyn Fn(&[Token], &Context) -> Option<PartialMatch> + Send + Sync>;

/// A datetime extraction rule: a name, the trigger buckets it needs and the
/// extraction function run against the current word list.
pub(crate) struct Rule {
    pub name: &'static str,
    /// Bucket mask - rule only activates if the input has all of these buckets.
    pub buckets: u32,
    pub extract: Extraction,
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("extract", &"<function>")
            .field("buckets", &self.buckets)
            .finish()
    }
}
