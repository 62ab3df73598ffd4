//! Handle strategy - `local@domain` identifiers.

use super::{keep_ends, mask_run, MaskKind, Strategy, REDACTED};

/// Strategy for values shaped like `local@domain`.
///
/// Only the local part (before the first `@`) is masked; the domain is
/// kept verbatim. Local parts no longer than `short_len` are masked
/// entirely, longer ones keep two leading chars and `keep_tail` trailing
/// chars.
#[derive(Debug, Clone, Copy)]
pub struct HandleStrategy {
    kind: MaskKind,
    short_len: usize,
    keep_tail: usize,
}

impl HandleStrategy {
    /// UPI payment handle: `abcdef@bank` → `abXXef@bank`
    pub const UPI: HandleStrategy = HandleStrategy {
        kind: MaskKind::Upi,
        short_len: 4,
        keep_tail: 2,
    };

    /// Email address: `alice@example.com` → `alXXX@example.com`
    pub const EMAIL: HandleStrategy = HandleStrategy {
        kind: MaskKind::Email,
        short_len: 2,
        keep_tail: 0,
    };

    const KEEP_HEAD: usize = 2;
}

impl Strategy for HandleStrategy {
    fn apply(&self, value: &str) -> String {
        let Some((local, domain)) = value.split_once('@') else {
            return REDACTED.to_string();
        };

        let chars: Vec<char> = local.chars().collect();
        let masked = if chars.len() <= self.short_len {
            mask_run(chars.len())
        } else {
            keep_ends(&chars, Self::KEEP_HEAD, self.keep_tail)
        };

        format!("{}@{}", masked, domain)
    }

    fn kind(&self) -> MaskKind {
        self.kind
    }
}
