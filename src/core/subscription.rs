use serde::{Deserialize, Serialize};

use super::checksum::checksum;
use super::error::IsrError;

/// Width of the creditor part of a subscription number in its scanline form.
pub const SCANLINE_MIDDLE_LEN: usize = 6;

/// Subscription number of an ISR creditor, in both printed forms.
///
/// `01-162-8` is displayed on the slip, `010001628` goes into the optical line.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FormattedSubscription {
    /// `CC-<creditor>-T`, creditor digits without leading zeros.
    pub display: String,
    /// `CC<creditor padded to 6>T`, always 9 digits.
    pub scanline: String,
}

impl FormattedSubscription {
    /// Length of the scanline form.
    pub const SCANLINE_LEN: usize = 2 + SCANLINE_MIDDLE_LEN + 1;
}

/// Split a raw subscription number into currency code, creditor digits
/// and trailing cipher. Hyphens are ignored.
fn split_subscription(raw: &str) -> Result<(String, String, char), IsrError> {
    let cleaned: String = raw.chars().filter(|c| *c != '-').collect();

    if cleaned.len() < 3 {
        return Err(IsrError::InvalidInput(format!(
            "subscription number '{raw}' is too short, expected at least 3 digits"
        )));
    }
    if !cleaned.bytes().all(|b| b.is_ascii_digit()) {
        return Err(IsrError::InvalidInput(format!(
            "subscription number '{raw}' must contain only digits and hyphens"
        )));
    }

    let currency = cleaned[..2].to_string();
    let middle = cleaned[2..cleaned.len() - 1].to_string();
    let trailing = char::from(cleaned.as_bytes()[cleaned.len() - 1]);
    Ok((currency, middle, trailing))
}

/// Normalise a raw subscription number (e.g. `010001628` or `01-162-8`)
/// into its display and scanline forms.
///
/// A creditor part longer than 6 digits cannot be represented in the
/// scanline and is rejected.
pub fn format_subscription(raw: &str) -> Result<FormattedSubscription, IsrError> {
    let (currency, middle, trailing) = split_subscription(raw)?;

    if middle.len() > SCANLINE_MIDDLE_LEN {
        return Err(IsrError::InvalidInput(format!(
            "subscription number '{raw}' has more than {SCANLINE_MIDDLE_LEN} creditor digits"
        )));
    }

    let display = format!("{currency}-{}-{trailing}", middle.trim_start_matches('0'));
    let scanline = format!(
        "{currency}{middle:0>width$}{trailing}",
        width = SCANLINE_MIDDLE_LEN
    );

    Ok(FormattedSubscription { display, scanline })
}

/// Whether `account` is a postal account able to issue ISRs: a CHF (`01`)
/// or EUR (`03`) subscription number with a valid mod10r check digit.
pub fn is_isr_issuer(account: &str) -> bool {
    let Ok(formatted) = format_subscription(account) else {
        return false;
    };
    let scanline = &formatted.scanline;
    if !(scanline.starts_with("01") || scanline.starts_with("03")) {
        return false;
    }
    checksum(&scanline[..scanline.len() - 1]).is_ok_and(|full| full == *scanline)
}
