//! Record transformation: classify, then mask.

use crate::redactor::classifier::classify;
use crate::redactor::field::PiiField;
use crate::redactor::record::Record;

/// Result of redacting one record
#[derive(Debug, Clone, PartialEq)]
pub struct Redaction {
    /// The redacted record
    pub record: Record,
    /// Whether any field was masked
    pub pii_found: bool,
    /// Fields that were overwritten, in masking order
    pub masked: Vec<PiiField>,
}

/// Mask the PII fields of a record.
///
/// Standalone fields are masked whenever present. Combinatorial fields are
/// masked only when at least two of them are present. The input record is
/// left untouched.
pub fn transform(record: &Record) -> Redaction {
    let classification = classify(record);

    let mut masked = Vec::new();
    let mut overrides = Vec::new();
    for field in classification.fields_to_mask() {
        let Some(raw) = record.text(field.key()) else {
            continue;
        };
        overrides.push((field.key().to_string(), field.mask_kind().apply(&raw)));
        masked.push(field);
    }

    Redaction {
        record: record.with_overrides(overrides),
        pii_found: classification.is_pii(),
        masked,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::redactor::strategy::REDACTED;
    use serde_json::json;

    fn redact(payload: &str) -> Redaction {
        transform(&Record::parse(payload).unwrap())
    }

    #[test]
    fn test_lone_name_untouched() {
        let r = redact(r#"{"name": "John Doe"}"#);
        assert!(!r.pii_found);
        assert!(r.masked.is_empty());
        assert_eq!(r.record.get("name"), Some(&json!("John Doe")));
    }

    #[test]
    fn test_name_and_email_masked() {
        let r = redact(r#"{"name": "John Doe", "email": "a@b.com"}"#);
        assert!(r.pii_found);
        assert_eq!(r.record.get("name"), Some(&json!("JXXX DXX")));
        assert_eq!(r.record.get("email"), Some(&json!("X@b.com")));
    }

    #[test]
    fn test_phone_alone_masked() {
        let r = redact(r#"{"phone": "9876543210", "notes": "hello"}"#);
        assert!(r.pii_found);
        assert_eq!(r.masked, vec![PiiField::Phone]);
        assert_eq!(r.record.get("phone"), Some(&json!("98XXXXXX10")));
        assert_eq!(r.record.get("notes"), Some(&json!("hello")));
    }

    #[test]
    fn test_invalid_standalone_still_flags() {
        let r = redact(r#"{"passport": "a1234567"}"#);
        assert!(r.pii_found);
        assert_eq!(r.record.get("passport"), Some(&json!(REDACTED)));
    }

    #[test]
    fn test_all_combinatorial_fields() {
        let r = redact(
            r#"{"name": "Asha Rao", "email": "asha@x.in", "address": "12 MG Road",
                "device_id": "DEV-9", "ip_address": "10.1.2.3"}"#,
        );
        assert!(r.pii_found);
        assert_eq!(r.masked.len(), 5);
        assert_eq!(r.record.get("name"), Some(&json!("AXXX RXX")));
        assert_eq!(r.record.get("email"), Some(&json!("asXX@x.in")));
        assert_eq!(r.record.get("address"), Some(&json!(REDACTED)));
        assert_eq!(r.record.get("device_id"), Some(&json!(REDACTED)));
        assert_eq!(r.record.get("ip_address"), Some(&json!("10.1.2.X")));
    }

    #[test]
    fn test_lone_name_with_phone_keeps_name() {
        let r = redact(r#"{"name": "John Doe", "phone": "9876543210"}"#);
        assert!(r.pii_found);
        assert_eq!(r.record.get("name"), Some(&json!("John Doe")));
        assert_eq!(r.record.get("phone"), Some(&json!("98XXXXXX10")));
    }

    #[test]
    fn test_empty_fields_pass_through() {
        let r = redact(r#"{"phone": "", "name": "John", "email": ""}"#);
        assert!(!r.pii_found);
        assert_eq!(r.record.get("phone"), Some(&json!("")));
        assert_eq!(r.record.get("email"), Some(&json!("")));
    }

    #[test]
    fn test_numeric_phone_masked_as_string() {
        let r = redact(r#"{"phone": 9876543210}"#);
        assert_eq!(r.record.get("phone"), Some(&json!("98XXXXXX10")));
    }

    #[test]
    fn test_boolean_name_masked_from_text_form() {
        let r = redact(r#"{"name": true, "email": "a@b.com"}"#);
        assert!(r.pii_found);
        assert_eq!(r.record.get("name"), Some(&json!("TXXX")));
    }

    #[test]
    fn test_large_numbers_pass_through() {
        let r = redact(
            r#"{"phone": "9876543210", "account": 123456789012345678901234567890, "amount": 1e-07}"#,
        );
        assert_eq!(
            r.record.to_compact_json().unwrap(),
            r#"{"phone":"98XXXXXX10","account":123456789012345678901234567890,"amount":1e-07}"#
        );
    }

    #[test]
    fn test_unrecognized_fields_untouched() {
        let r = redact(r#"{"Phone": "9876543210", "notes": "hello", "n": 1.5}"#);
        assert!(!r.pii_found);
        assert_eq!(
            r.record.to_compact_json().unwrap(),
            r#"{"Phone":"9876543210","notes":"hello","n":1.5}"#
        );
    }

    #[test]
    fn test_mask_of_mask_is_not_stable() {
        let first = redact(r#"{"phone": "9876543210"}"#);
        let second = transform(&first.record);
        assert_eq!(second.record.get("phone"), Some(&json!(REDACTED)));
    }
}
