use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::checksum::checksum;
use super::currencies::SwissCurrency;
use super::error::IsrError;

/// Width of the amount field of an optical line, in digits (units + cents).
pub const OPTICAL_AMOUNT_DIGITS: usize = 10;

/// Currency code, amount and check digit as printed at the start of an
/// optical line, e.g. `0100003949753` for CHF 3949.75.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct OpticalAmount(String);

impl OpticalAmount {
    /// Total length: currency code (2) + amount (10) + check digit (1).
    pub const LEN: usize = 2 + OPTICAL_AMOUNT_DIGITS + 1;

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Currency encoded in the first two digits.
    pub fn currency(&self) -> Option<SwissCurrency> {
        SwissCurrency::from_isr_code(&self.0[..2])
    }
}

impl std::fmt::Display for OpticalAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for OpticalAmount {
    type Error = IsrError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.len() != Self::LEN || !value.bytes().all(|b| b.is_ascii_digit()) {
            return Err(IsrError::InvalidInput(format!(
                "optical amount '{value}' must be {} digits",
                Self::LEN
            )));
        }
        if checksum(&value[..Self::LEN - 1])? != value {
            return Err(IsrError::InvalidInput(format!(
                "optical amount '{value}' has a wrong check digit"
            )));
        }
        Ok(Self(value))
    }
}

impl From<OpticalAmount> for String {
    fn from(value: OpticalAmount) -> Self {
        value.0
    }
}

/// Split an amount into units and cents strings, rounded half-up to
/// two decimals. Cents always have two digits.
///
/// ```
/// use rust_decimal_macros::dec;
/// let (units, cents) = einzahlung::split_amount(dec!(3949.75));
/// assert_eq!((units.as_str(), cents.as_str()), ("3949", "75"));
/// ```
pub fn split_amount(amount: Decimal) -> (String, String) {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let abs = rounded.abs();
    let units = abs.trunc();
    let cents = ((abs - units) * Decimal::ONE_HUNDRED).trunc();

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    (format!("{sign}{units}"), format!("{:0>2}", cents.to_string()))
}

/// Build the optical amount block: ISR currency code, amount in cents
/// zero-padded to 10 digits, mod10r check digit.
///
/// Amounts needing more than 10 digits are rejected rather than truncated.
pub fn format_amount(amount: Decimal, currency: SwissCurrency) -> Result<OpticalAmount, IsrError> {
    let (units, cents) = split_amount(amount);
    if units.starts_with('-') {
        return Err(IsrError::InvalidInput(format!(
            "amount {amount} must not be negative"
        )));
    }

    let digits = format!("{units}{cents}");
    if digits.len() > OPTICAL_AMOUNT_DIGITS {
        return Err(IsrError::Overflow(format!(
            "amount {amount} does not fit into {OPTICAL_AMOUNT_DIGITS} digits"
        )));
    }

    let body = format!(
        "{}{:0>width$}",
        currency.isr_code(),
        digits,
        width = OPTICAL_AMOUNT_DIGITS
    );
    Ok(OpticalAmount(checksum(&body)?))
}
