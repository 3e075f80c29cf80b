//! Datetime extraction: run the rule chain and resolve its offset.

use chrono::{NaiveDateTime, NaiveTime};
use once_cell::sync::Lazy;

use crate::engine::{ChainOutcome, prepare, run_chain, tokenize};
use crate::{Context, Rule};

static RULES: Lazy<Vec<Rule>> = Lazy::new(super::get);

/// A resolved datetime with everything the chain did to get there.
#[derive(Debug, Clone)]
pub struct DateTimeExtraction {
    pub datetime: NaiveDateTime,
    pub leftover: String,
    pub outcome: ChainOutcome,
}

/// Run the rule chain over `text`.
pub fn run_rules(text: &str, ctx: &Context) -> ChainOutcome {
    run_chain(&RULES, tokenize(&prepare(text)), ctx)
}

/// Absolute datetime for a chain outcome, or `None` when no rule matched.
///
/// When no clock unit was set, the time of day comes from
/// `ctx.default_time`, or midnight.
pub fn resolve(outcome: &ChainOutcome, ctx: &Context) -> Option<NaiveDateTime> {
    if !outcome.matched() {
        return None;
    }
    let shifted = outcome.offset.apply(ctx.reference_time)?;
    if outcome.offset.has_clock() {
        return Some(shifted);
    }
    Some(shifted.date().and_time(ctx.default_time.unwrap_or(NaiveTime::MIN)))
}

/// Find a date and/or time in `text` relative to `ctx.reference_time`.
pub fn extract_datetime(text: &str, ctx: &Context) -> Option<DateTimeExtraction> {
    let outcome = run_rules(text, ctx);
    let datetime = resolve(&outcome, ctx)?;
    Some(DateTimeExtraction { datetime, leftover: outcome.leftover_text(), outcome })
}
