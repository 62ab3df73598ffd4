//! Name strategy - keep the initial of every word.

use super::{mask_run, MaskKind, Strategy};

/// Strategy for personal names: `John Doe` → `JXXX DXX`.
///
/// Words are split on any whitespace and rejoined with single spaces.
/// Single-character words become `X`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NameStrategy;

impl NameStrategy {
    fn mask_word(word: &str) -> String {
        let mut chars = word.chars();
        let first = chars.next();
        let rest = chars.count();
        match first {
            Some(first) if rest > 0 => {
                let mut out = String::with_capacity(word.len());
                out.push(first);
                out.push_str(&mask_run(rest));
                out
            }
            _ => mask_run(1),
        }
    }
}

impl Strategy for NameStrategy {
    fn apply(&self, value: &str) -> String {
        value
            .split_whitespace()
            .map(Self::mask_word)
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn kind(&self) -> MaskKind {
        MaskKind::Name
    }
}
