//! "сейчас"

use crate::engine::{Offset, TimeUnit};
use crate::{PartialMatch, Rule};

/// "сейчас": the reference instant itself. Pins the clock so the default
/// time never overrides it.
pub fn rule_now() -> Rule {
    rule! {
        name: "now",
        extract: |words, _ctx| {
            let pos = words.iter().position(|t| t.word == "сейчас")?;
            Some(PartialMatch::new(Offset::with(TimeUnit::Seconds, 0.0), vec![pos], true))
        },
    }
}
