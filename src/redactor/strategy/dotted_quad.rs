//! Dotted-quad strategy - IPv4-shaped identifiers.

use super::{MaskKind, Strategy, MASK_CHAR, REDACTED};

/// Strategy for values with four dot-separated numeric segments.
///
/// `192.168.1.42` → `192.168.1.X`. Segments must be ASCII digits; their
/// values are not range-checked.
/// Anything else (MAC addresses, UUIDs, serials) is fully redacted.
#[derive(Debug, Clone, Copy, Default)]
pub struct DottedQuadStrategy;

impl DottedQuadStrategy {
    fn is_numeric(segment: &str) -> bool {
        !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit())
    }
}

impl Strategy for DottedQuadStrategy {
    fn apply(&self, value: &str) -> String {
        let segments: Vec<&str> = value.split('.').collect();
        if segments.len() != 4 || !segments.iter().all(|s| Self::is_numeric(s)) {
            return REDACTED.to_string();
        }
        format!(
            "{}.{}.{}.{}",
            segments[0], segments[1], segments[2], MASK_CHAR
        )
    }

    fn kind(&self) -> MaskKind {
        MaskKind::DottedQuad
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ipv4() {
        assert_eq!(DottedQuadStrategy.apply("192.168.1.42"), "192.168.1.X");
        assert_eq!(DottedQuadStrategy.apply("10.0.0.1"), "10.0.0.X");
    }

    #[test]
    fn test_out_of_range_segments_still_mask() {
        assert_eq!(DottedQuadStrategy.apply("999.1.2.3"), "999.1.2.X");
    }

    #[test]
    fn test_device_identifiers_redacted() {
        assert_eq!(DottedQuadStrategy.apply("DEV-12345"), REDACTED);
        assert_eq!(DottedQuadStrategy.apply("aa:bb:cc:dd:ee:ff"), REDACTED);
    }

    #[test]
    fn test_bad_segments() {
        assert_eq!(DottedQuadStrategy.apply("1.2.3"), REDACTED);
        assert_eq!(DottedQuadStrategy.apply("1.2.3.4.5"), REDACTED);
        assert_eq!(DottedQuadStrategy.apply("1.2..4"), REDACTED);
        assert_eq!(DottedQuadStrategy.apply("1.2.3.x"), REDACTED);
        assert_eq!(DottedQuadStrategy.apply("1.2.3.-4"), REDACTED);
        assert_eq!(DottedQuadStrategy.apply(""), REDACTED);
    }

    #[test]
    fn test_non_ascii_segments_redacted() {
        assert_eq!(DottedQuadStrategy.apply("१९२.168.1.42"), REDACTED);
    }
}
