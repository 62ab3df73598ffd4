//! Passport strategy - letter followed by seven digits.

use super::{keep_ends, MaskKind, Strategy, REDACTED};
use once_cell::sync::Lazy;
use regex::Regex;

static PASSPORT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z][0-9]{7}$").unwrap());

/// Strategy for passport numbers such as `A1234567`.
///
/// Keeps the first and last character; lowercase prefixes and any other
/// shape are fully redacted. The digits must be ASCII.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassportStrategy;

impl Strategy for PassportStrategy {
    fn apply(&self, value: &str) -> String {
        if !PASSPORT_RE.is_match(value) {
            return REDACTED.to_string();
        }
        let chars: Vec<char> = value.chars().collect();
        keep_ends(&chars, 1, 1)
    }

    fn kind(&self) -> MaskKind {
        MaskKind::Passport
    }
}
