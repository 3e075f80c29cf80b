//! Extraction engine.
//!
//! The engine owns everything that is not Russian vocabulary: turning text
//! into tokens, coarse pre-classification of the input, the offset
//! accumulator and the datetime extraction chain.
//!
//! ## How the parts work together
//!
//! ```text
//! text ── prepare + tokenize ──> Vec<Token>            (tokenize.rs)
//!                                   │
//!                 TriggerInfo::scan ┼─ select active rules by bucket
//!                    (trigger.rs)   │
//!                                   v
//!                          chain::run (chain.rs)
//!                            - run each rule once, in priority order
//!                            - merge its partial Offset (offset.rs)
//!                            - drop consumed words, re-number the rest
//!                            - stop after a terminal match
//!                                   │
//!                                   v
//!                   Offset::apply(reference) + leftover words
//! ```
//!
//! Rules never see stale positions: each one observes the word list as left
//! by the rules before it and reports consumed positions relative to that
//! list.
//!
//! ## Debugging
//!
//! Every rule attempt is reported through `tracing` (target `chislitel`).
//! Set `CHISLITEL_LOG=chislitel=trace` when running the CLI to see them.

#[path = "engine/chain.rs"]
mod chain;
#[path = "engine/metrics.rs"]
mod metrics;
#[path = "engine/offset.rs"]
mod offset;
#[path = "engine/tokenize.rs"]
mod tokenize;
#[path = "engine/trigger.rs"]
mod trigger;

pub(crate) use chain::{ChainOutcome, ChainStep, run_chain};
pub(crate) use metrics::{RunMetrics, StepMetrics};
pub(crate) use offset::{Offset, TimeUnit, add_months};
pub(crate) use tokenize::{prepare, tokenize};
pub(crate) use trigger::{BucketMask, TriggerInfo};
