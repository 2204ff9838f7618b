//! Currencies an ISR can be issued in.
//!
//! Only Swiss francs and euros exist on ISR slips. Each has a two-digit
//! code used in front of subscription numbers and optical amounts.

use serde::{Deserialize, Serialize};

/// Currency of an ISR payment slip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SwissCurrency {
    /// Swiss franc, ISR code "01".
    Chf,
    /// Euro, ISR code "03".
    Eur,
}

impl SwissCurrency {
    /// Two-digit ISR currency code.
    pub fn isr_code(&self) -> &'static str {
        match self {
            Self::Chf => "01",
            Self::Eur => "03",
        }
    }

    /// ISO 4217 code.
    pub fn iso_code(&self) -> &'static str {
        match self {
            Self::Chf => "CHF",
            Self::Eur => "EUR",
        }
    }

    /// Parse from an ISO 4217 code. Other currencies are not supported on ISR.
    pub fn from_iso(code: &str) -> Option<Self> {
        match code {
            "CHF" => Some(Self::Chf),
            "EUR" => Some(Self::Eur),
            _ => None,
        }
    }

    /// Parse from a two-digit ISR currency code.
    pub fn from_isr_code(code: &str) -> Option<Self> {
        match code {
            "01" => Some(Self::Chf),
            "03" => Some(Self::Eur),
            _ => None,
        }
    }
}

impl std::fmt::Display for SwissCurrency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.iso_code())
    }
}

/// Check whether `code` is an ISO 4217 code usable on an ISR.
pub fn is_isr_currency(code: &str) -> bool {
    SwissCurrency::from_iso(code).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn isr_codes() {
        assert_eq!(SwissCurrency::Chf.isr_code(), "01");
        assert_eq!(SwissCurrency::Eur.isr_code(), "03");
    }

    #[test]
    fn supported_currencies() {
        assert!(is_isr_currency("CHF"));
        assert!(is_isr_currency("EUR"));
    }

    #[test]
    fn unsupported_currencies() {
        assert!(!is_isr_currency("USD"));
        assert!(!is_isr_currency(""));
        assert!(!is_isr_currency("chf"));
        assert!(!is_isr_currency("CHFX"));
    }

    #[test]
    fn isr_code_roundtrip() {
        for cur in [SwissCurrency::Chf, SwissCurrency::Eur] {
            assert_eq!(SwissCurrency::from_isr_code(cur.isr_code()), Some(cur));
            assert_eq!(SwissCurrency::from_iso(cur.iso_code()), Some(cur));
        }
        assert_eq!(SwissCurrency::from_isr_code("02"), None);
    }
}
