//! Masking strategies for PII values.
//!
//! Each strategy turns a raw field value into a masked value:
//! - `digits`: fixed-length digit identifiers (phone, aadhar)
//! - `passport`: one uppercase letter followed by seven digits
//! - `handle`: `local@domain` identifiers (UPI handles, email addresses)
//! - `name`: per-word initials
//! - `constant`: full replacement with the redaction sentinel (address)
//! - `dotted_quad`: IPv4-shaped identifiers (device ids, IP addresses)
//!
//! Strategies never fail. A value that does not have the expected shape
//! is replaced by [`REDACTED`].

mod constant;
mod digits;
mod dotted_quad;
mod handle;
mod name;
mod passport;

pub use constant::ConstantStrategy;
pub use digits::DigitStrategy;
pub use dotted_quad::DottedQuadStrategy;
pub use handle::HandleStrategy;
pub use name::NameStrategy;
pub use passport::PassportStrategy;

/// Sentinel written in place of values that cannot be partially masked.
pub const REDACTED: &str = "[REDACTED_PII]";

/// Character used for masked positions.
pub const MASK_CHAR: char = 'X';

/// Masking rule, one per PII value shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaskKind {
    /// 10-digit phone number
    Phone,
    /// 12-digit national ID
    Aadhar,
    /// Letter + 7 digits
    Passport,
    /// Payment handle (`local@bank`)
    Upi,
    /// Personal name
    Name,
    /// Email address
    Email,
    /// Postal address, always fully redacted
    Address,
    /// Dotted-quad device id or IP address
    DottedQuad,
}

impl MaskKind {
    /// Get the strategy implementing this rule
    pub fn strategy(self) -> &'static dyn Strategy {
        match self {
            MaskKind::Phone => &DigitStrategy::PHONE,
            MaskKind::Aadhar => &DigitStrategy::AADHAR,
            MaskKind::Passport => &PassportStrategy,
            MaskKind::Upi => &HandleStrategy::UPI,
            MaskKind::Name => &NameStrategy,
            MaskKind::Email => &HandleStrategy::EMAIL,
            MaskKind::Address => &ConstantStrategy::SENTINEL,
            MaskKind::DottedQuad => &DottedQuadStrategy,
        }
    }

    /// Mask a value with this rule
    pub fn apply(self, value: &str) -> String {
        self.strategy().apply(value)
    }
}

/// Trait for masking strategies
pub trait Strategy: Send + Sync {
    /// Mask a raw value. Must return a value for every input.
    fn apply(&self, value: &str) -> String;

    /// Get the rule this strategy implements
    fn kind(&self) -> MaskKind;
}

/// Build a string of `count` mask characters.
pub(crate) fn mask_run(count: usize) -> String {
    std::iter::repeat(MASK_CHAR).take(count).collect()
}

/// Keep `head` leading and `tail` trailing chars, masking everything between.
///
/// Callers guarantee `head + tail <= chars.len()`.
pub(crate) fn keep_ends(chars: &[char], head: usize, tail: usize) -> String {
    let hidden = chars.len() - head - tail;
    let mut out = String::with_capacity(chars.len());
    out.extend(&chars[..head]);
    out.push_str(&mask_run(hidden));
    out.extend(&chars[chars.len() - tail..]);
    out
}
