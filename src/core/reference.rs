//! ISR / ISR-B / QRR reference numbers.
//!
//! A reference is 27 digits: a 26-digit body and a mod10r check digit.
//!
//! * **ISR** (PostFinance): the body is the invoice number's digits,
//!   zero-padded on the left.
//!
//!   ```text
//!   120000000000234478943216899
//!   \________________________/|
//!              body           check digit
//!   ```
//!
//! * **ISR-B** (indirect through a bank): the body starts with the
//!   customer ID at the issuer's bank (usually 6 digits), followed by the
//!   zero-padded invoice digits.
//!
//!   ```text
//!   150001123456789012345678905
//!   \____/\__________________/|
//!   customer ID   reference   check digit
//!   ```
//!
//! QRR references on QR-bills use the same structure.

use serde::{Deserialize, Serialize};

use super::checksum::checksum;
use super::error::IsrError;

/// Digits in a reference body, without the check digit.
pub const REFERENCE_BODY_LEN: usize = 26;

/// Digits in a complete reference.
pub const REFERENCE_LEN: usize = REFERENCE_BODY_LEN + 1;

/// Width the ISR-B customer ID is zero-padded to.
pub const ISR_ID_NUM_LENGTH: usize = 6;

/// A complete 27-digit reference number with a valid check digit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ReferenceNumber(String);

impl ReferenceNumber {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The 26-digit body without the check digit.
    pub fn body(&self) -> &str {
        &self.0[..REFERENCE_BODY_LEN]
    }

    /// The trailing check digit.
    pub fn check_digit(&self) -> u8 {
        self.0.as_bytes()[REFERENCE_BODY_LEN] - b'0'
    }

    /// Reference split in blocks of 5 for display.
    pub fn spaced(&self) -> String {
        space_reference(&self.0)
    }
}

impl std::fmt::Display for ReferenceNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ReferenceNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ReferenceNumber {
    type Error = IsrError;

    /// Accepts a 27-digit reference, spaces allowed, with a valid check digit.
    fn try_from(value: String) -> Result<Self, Self::Error> {
        let compact: String = value.chars().filter(|c| *c != ' ').collect();
        if compact.len() != REFERENCE_LEN || !is_valid_reference(&compact) {
            return Err(IsrError::InvalidInput(format!(
                "'{value}' is not a valid {REFERENCE_LEN}-digit reference"
            )));
        }
        Ok(Self(compact))
    }
}

impl std::str::FromStr for ReferenceNumber {
    type Err = IsrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s.to_string())
    }
}

impl From<ReferenceNumber> for String {
    fn from(value: ReferenceNumber) -> Self {
        value.0
    }
}

/// Build the reference of an invoice.
///
/// Non-digit characters of `invoice_name` are dropped. If a customer ID
/// is given (ISR-B) it is zero-padded to 6 digits and put in front. When
/// the digits don't fit into 26, the leading invoice digits are dropped
/// so the most recent part of the sequence survives.
///
/// ```
/// let reference = einzahlung::build_reference("INV/2021/0001", None).unwrap();
/// assert_eq!(reference.as_str(), "000000000000000000202100018");
/// ```
pub fn build_reference(
    invoice_name: &str,
    customer_id: Option<&str>,
) -> Result<ReferenceNumber, IsrError> {
    let id_part = match customer_id.filter(|id| !id.is_empty()) {
        Some(id) => {
            if !id.bytes().all(|b| b.is_ascii_digit()) {
                return Err(IsrError::InvalidInput(format!(
                    "customer ID '{id}' must contain only digits"
                )));
            }
            if id.len() > REFERENCE_BODY_LEN {
                return Err(IsrError::InvalidInput(format!(
                    "customer ID '{id}' is longer than {REFERENCE_BODY_LEN} digits"
                )));
            }
            format!("{id:0>width$}", width = ISR_ID_NUM_LENGTH)
        }
        None => String::new(),
    };

    let invoice_digits: String = invoice_name
        .chars()
        .filter(|c| c.is_ascii_digit())
        .collect();

    let available = REFERENCE_BODY_LEN - id_part.len();
    let kept = &invoice_digits[invoice_digits.len().saturating_sub(available)..];

    let body = format!("{id_part}{kept:0>available$}");
    debug_assert_eq!(body.len(), REFERENCE_BODY_LEN);
    Ok(ReferenceNumber(checksum(&body)?))
}

/// Split `reference` in blocks of 5 characters from the right, separated
/// by single spaces. The leftmost block may be shorter.
///
/// ```
/// assert_eq!(einzahlung::space_reference("123456789"), "1234 56789");
/// ```
pub fn space_reference(reference: &str) -> String {
    let chars: Vec<char> = reference.chars().collect();
    let head = chars.len() % 5;

    let mut out = String::with_capacity(reference.len() + chars.len() / 5);
    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (i + 5 - head) % 5 == 0 {
            out.push(' ');
        }
        out.push(*c);
    }
    out
}

/// Make a QRR reference human-friendly. Same grouping as [`space_reference`].
pub fn space_qrr_reference(qrr_reference: &str) -> String {
    space_reference(qrr_reference)
}

/// Check an externally supplied reference: spaces are ignored, it must
/// be 2 to 27 digits and end with the mod10r check digit of the rest.
///
/// ```
/// assert!(einzahlung::is_valid_reference("21 00000 00003 13947 14300 09017"));
/// assert!(!einzahlung::is_valid_reference("21 00000 00003 13947 14300 09018"));
/// ```
pub fn is_valid_reference(candidate: &str) -> bool {
    let compact: String = candidate.chars().filter(|c| *c != ' ').collect();
    if !(2..=REFERENCE_LEN).contains(&compact.len())
        || !compact.bytes().all(|b| b.is_ascii_digit())
    {
        return false;
    }
    checksum(&compact[..compact.len() - 1]).is_ok_and(|expected| expected == compact)
}
