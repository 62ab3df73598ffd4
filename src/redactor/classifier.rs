//! Per-record PII classification.

use crate::redactor::field::PiiField;
use crate::redactor::record::Record;

/// Minimum number of distinct combinatorial fields that makes a record PII
pub const COMBINATION_THRESHOLD: usize = 2;

/// Which recognized fields are present in a record
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    /// Present standalone fields, in [`PiiField::STANDALONE`] order
    pub standalone: Vec<PiiField>,
    /// Present combinatorial fields, in [`PiiField::COMBINATORIAL`] order
    pub combinatorial: Vec<PiiField>,
}

impl Classification {
    /// Whether enough quasi-identifiers co-occur to mask them
    pub fn combination_triggered(&self) -> bool {
        self.combinatorial.len() >= COMBINATION_THRESHOLD
    }

    /// Fields that must be masked for this record
    pub fn fields_to_mask(&self) -> impl Iterator<Item = PiiField> + '_ {
        let combinatorial: &[PiiField] = if self.combination_triggered() {
            &self.combinatorial
        } else {
            &[]
        };
        self.standalone.iter().chain(combinatorial).copied()
    }

    pub fn is_pii(&self) -> bool {
        !self.standalone.is_empty() || self.combination_triggered()
    }
}

/// Classify the recognized fields of a record
pub fn classify(record: &Record) -> Classification {
    Classification {
        standalone: present_fields(record, &PiiField::STANDALONE),
        combinatorial: present_fields(record, &PiiField::COMBINATORIAL),
    }
}

fn present_fields(record: &Record, fields: &[PiiField]) -> Vec<PiiField> {
    fields
        .iter()
        .copied()
        .filter(|field| record.is_present(field.key()))
        .collect()
}
