//! Constant strategy - replace values with a fixed string.

use super::{MaskKind, Strategy, REDACTED};

/// Strategy that replaces every value with a constant.
///
/// Used for fields with no safe partial representation.
#[derive(Debug, Clone, Copy)]
pub struct ConstantStrategy {
    value: &'static str,
    kind: MaskKind,
}

impl ConstantStrategy {
    /// Full redaction of postal addresses
    pub const SENTINEL: ConstantStrategy = ConstantStrategy {
        value: REDACTED,
        kind: MaskKind::Address,
    };
}

impl Strategy for ConstantStrategy {
    fn apply(&self, _value: &str) -> String {
        self.value.to_string()
    }

    fn kind(&self) -> MaskKind {
        self.kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_always_redacted() {
        let strategy = ConstantStrategy::SENTINEL;
        assert_eq!(strategy.apply("221B Baker Street, London"), REDACTED);
        assert_eq!(strategy.apply(""), REDACTED);
        assert_eq!(strategy.apply(REDACTED), REDACTED);
    }
}
