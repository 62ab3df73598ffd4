//! Recognized PII field names.

use crate::redactor::strategy::MaskKind;
use std::fmt;

/// A recognized PII field. Any other field name is passed through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PiiField {
    Phone,
    Aadhar,
    Passport,
    UpiId,
    Name,
    Email,
    Address,
    DeviceId,
    IpAddress,
}

impl PiiField {
    /// Standalone fields, in masking order
    pub const STANDALONE: [PiiField; 4] = [
        PiiField::Phone,
        PiiField::Aadhar,
        PiiField::Passport,
        PiiField::UpiId,
    ];

    /// Combinatorial fields, in masking order
    pub const COMBINATORIAL: [PiiField; 5] = [
        PiiField::Name,
        PiiField::Email,
        PiiField::Address,
        PiiField::DeviceId,
        PiiField::IpAddress,
    ];

    /// JSON key for this field
    pub fn key(self) -> &'static str {
        match self {
            PiiField::Phone => "phone",
            PiiField::Aadhar => "aadhar",
            PiiField::Passport => "passport",
            PiiField::UpiId => "upi_id",
            PiiField::Name => "name",
            PiiField::Email => "email",
            PiiField::Address => "address",
            PiiField::DeviceId => "device_id",
            PiiField::IpAddress => "ip_address",
        }
    }

    /// Masking rule applied to values of this field
    pub fn mask_kind(self) -> MaskKind {
        match self {
            PiiField::Phone => MaskKind::Phone,
            PiiField::Aadhar => MaskKind::Aadhar,
            PiiField::Passport => MaskKind::Passport,
            PiiField::UpiId => MaskKind::Upi,
            PiiField::Name => MaskKind::Name,
            PiiField::Email => MaskKind::Email,
            PiiField::Address => MaskKind::Address,
            PiiField::DeviceId | PiiField::IpAddress => MaskKind::DottedQuad,
        }
    }
}

impl fmt::Display for PiiField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
