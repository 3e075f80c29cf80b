//! Trigger scanning (input pre-classification).
//!
//! Before the datetime chain runs, the token list is scanned once for coarse
//! signals: does it contain digits, a colon, a weekday or a month name. Rules
//! declare the buckets they need and are skipped when the input lacks them.
//!
//! The scan is a heuristic. False positives are fine because every rule
//! still has to match its full pattern.

use bitflags::bitflags;

use crate::Token;
use crate::rules::time::tables;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct BucketMask: u32 {
        const HAS_DIGITS = 1 << 0;
        const HAS_COLON = 1 << 1;
        const WEEKDAYISH = 1 << 2;
        const MONTHISH = 1 << 3;
    }
}

/// Input characteristics detected from the token list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriggerInfo {
    pub buckets: BucketMask,
}

impl TriggerInfo {
    /// Scan prepared tokens for coarse buckets.
    pub fn scan(tokens: &[Token]) -> Self {
        let mut buckets = BucketMask::empty();
        for token in tokens {
            let word = token.word.as_str();
            if word.bytes().any(|b| b.is_ascii_digit()) {
                buckets |= BucketMask::HAS_DIGITS;
            }
            if word.contains(':') {
                buckets |= BucketMask::HAS_COLON;
            }
            if tables::weekday(word).is_some() {
                buckets |= BucketMask::WEEKDAYISH;
            }
            if tables::month(word).is_some() {
                buckets |= BucketMask::MONTHISH;
            }
        }
        TriggerInfo { buckets }
    }

    /// Whether a rule requiring `required` bucket bits may run on this input.
    pub fn admits(&self, required: u32) -> bool {
        let required = BucketMask::from_bits_truncate(required);
        self.buckets.contains(required)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::tokenize;

    #[test]
    fn scan_detects_buckets() {
        let info = TriggerInfo::scan(&tokenize("в пятницу 5 июля в 13:30"));
        assert!(info.buckets.contains(BucketMask::HAS_DIGITS));
        assert!(info.buckets.contains(BucketMask::HAS_COLON));
        assert!(info.buckets.contains(BucketMask::WEEKDAYISH));
        assert!(info.buckets.contains(BucketMask::MONTHISH));

        let info = TriggerInfo::scan(&tokenize("через пару часов"));
        assert!(info.buckets.is_empty());
    }

    #[test]
    fn admits_requires_every_bucket() {
        let info = TriggerInfo::scan(&tokenize("10:30"));
        assert!(info.admits(0));
        assert!(info.admits(BucketMask::HAS_COLON.bits()));
        assert!(info.admits((BucketMask::HAS_COLON | BucketMask::HAS_DIGITS).bits()));
        assert!(!info.admits(BucketMask::MONTHISH.bits()));
    }
}
