//! The datetime extraction chain.
//!
//! Rules run once each, in priority order, over a shrinking word list. The
//! fold is explicit: every match merges its partial offset into the
//! accumulator and its consumed positions are removed from the working list
//! before the next rule looks at it.

use std::time::Instant;

use tracing::{debug, trace};

use super::metrics::{RunMetrics, StepMetrics};
use super::offset::Offset;
use super::trigger::TriggerInfo;
use crate::{Context, Rule, Token};

/// One successful rule application.
#[derive(Debug, Clone, PartialEq)]
pub struct ChainStep {
    pub rule: &'static str,
    pub consumed: Vec<String>,
    pub offset: Offset,
    pub terminal: bool,
}

/// Result of a chain run.
#[derive(Debug, Clone)]
pub struct ChainOutcome {
    pub offset: Offset,
    pub leftover: Vec<Token>,
    pub steps: Vec<ChainStep>,
    pub metrics: RunMetrics,
}

impl ChainOutcome {
    pub fn matched(&self) -> bool {
        !self.steps.is_empty()
    }

    pub fn leftover_text(&self) -> String {
        self.leftover.iter().map(|t| t.word.as_str()).collect::<Vec<_>>().join(" ")
    }
}

/// Run `rules` over `tokens` and fold their partial matches.
pub fn run_chain(rules: &[Rule], tokens: Vec<Token>, ctx: &Context) -> ChainOutcome {
    let start = Instant::now();
    let trigger = TriggerInfo::scan(&tokens);
    debug!(buckets = ?trigger.buckets, words = tokens.len(), "datetime chain start");

    let mut words = tokens;
    let mut offset = Offset::new();
    let mut steps = Vec::new();
    let mut metrics = RunMetrics::default();

    for rule in rules {
        if words.is_empty() {
            break;
        }
        if !trigger.admits(rule.buckets) {
            trace!(rule = rule.name, "skipped by trigger");
            metrics.skipped += 1;
            continue;
        }

        let attempt = Instant::now();
        let found = (rule.extract)(&words, ctx);
        metrics.steps.push(StepMetrics { rule: rule.name, duration: attempt.elapsed(), matched: found.is_some() });

        let Some(partial) = found else {
            trace!(rule = rule.name, "no match");
            continue;
        };

        let consumed = remove_positions(&mut words, &partial.consumed);
        debug!(
            rule = rule.name,
            consumed = ?consumed,
            offset = %partial.offset,
            terminal = partial.terminal,
            "rule matched"
        );
        offset.merge(&partial.offset);
        steps.push(ChainStep { rule: rule.name, consumed, offset: partial.offset, terminal: partial.terminal });

        if partial.terminal {
            break;
        }
    }

    metrics.total = start.elapsed();
    debug!(offset = %offset, matched = steps.len(), "datetime chain done");
    ChainOutcome { offset, leftover: words, steps, metrics }
}

/// Remove `positions` from `words` (highest first, duplicates and
/// out-of-range positions ignored) and re-number what is left. Returns the
/// removed words in sentence order.
fn remove_positions(words: &mut Vec<Token>, positions: &[usize]) -> Vec<String> {
    let mut positions: Vec<usize> = positions.iter().copied().filter(|&p| p < words.len()).collect();
    positions.sort_unstable_by(|a, b| b.cmp(a));
    positions.dedup();

    let mut removed: Vec<String> = positions.iter().map(|&p| words.remove(p).word).collect();
    removed.reverse();
    for (i, token) in words.iter_mut().enumerate() {
        token.index = i;
    }
    removed
}
