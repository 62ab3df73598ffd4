//! Digit strategy - fixed-length numeric identifiers.

use super::{keep_ends, MaskKind, Strategy, REDACTED};

/// Strategy for identifiers made of a fixed number of digits.
///
/// Separators are ignored: every non-digit is stripped before the length
/// check, and the masked output is digits and `X` only. Only ASCII digits
/// count; digits from other scripts are stripped like separators.
#[derive(Debug, Clone, Copy)]
pub struct DigitStrategy {
    kind: MaskKind,
    length: usize,
    keep_head: usize,
    keep_tail: usize,
}

impl DigitStrategy {
    /// 10-digit phone number, keeps 2 + 2 digits
    pub const PHONE: DigitStrategy = DigitStrategy {
        kind: MaskKind::Phone,
        length: 10,
        keep_head: 2,
        keep_tail: 2,
    };

    /// 12-digit aadhar number, keeps 4 + 4 digits
    pub const AADHAR: DigitStrategy = DigitStrategy {
        kind: MaskKind::Aadhar,
        length: 12,
        keep_head: 4,
        keep_tail: 4,
    };
}

impl Strategy for DigitStrategy {
    fn apply(&self, value: &str) -> String {
        let digits: Vec<char> = value.chars().filter(char::is_ascii_digit).collect();
        if digits.len() != self.length {
            return REDACTED.to_string();
        }
        keep_ends(&digits, self.keep_head, self.keep_tail)
    }

    fn kind(&self) -> MaskKind {
        self.kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_plain() {
        assert_eq!(DigitStrategy::PHONE.apply("9876543210"), "98XXXXXX10");
    }

    #[test]
    fn test_phone_with_separators() {
        assert_eq!(DigitStrategy::PHONE.apply("98-765 43210"), "98XXXXXX10");
        assert_eq!(DigitStrategy::PHONE.apply("(987) 654-3210"), "98XXXXXX10");
    }

    #[test]
    fn test_phone_wrong_length() {
        assert_eq!(DigitStrategy::PHONE.apply("987654321"), REDACTED);
        assert_eq!(DigitStrategy::PHONE.apply("+91 9876543210"), REDACTED);
        assert_eq!(DigitStrategy::PHONE.apply(""), REDACTED);
        assert_eq!(DigitStrategy::PHONE.apply("not a number"), REDACTED);
    }

    #[test]
    fn test_aadhar() {
        assert_eq!(DigitStrategy::AADHAR.apply("234567890123"), "2345XXXX0123");
        assert_eq!(
            DigitStrategy::AADHAR.apply("2345 6789 0123"),
            "2345XXXX0123"
        );
    }

    #[test]
    fn test_aadhar_wrong_length() {
        assert_eq!(DigitStrategy::AADHAR.apply("23456789012"), REDACTED);
        assert_eq!(DigitStrategy::AADHAR.apply("2345678901234"), REDACTED);
    }

    #[test]
    fn test_non_ascii_digits_are_stripped() {
        // Devanagari digits do not count toward the length
        assert_eq!(DigitStrategy::PHONE.apply("९८७६५४३२१०"), REDACTED);
    }
}
