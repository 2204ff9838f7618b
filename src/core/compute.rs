use rust_decimal::Decimal;
use tracing::{debug, warn};

use super::amount::format_amount;
use super::currencies::SwissCurrency;
use super::optical::assemble_optical_line;
use super::reference::{ReferenceNumber, build_reference, is_valid_reference, space_reference};
use super::subscription::{FormattedSubscription, format_subscription};

/// Subscription number of the creditor for an invoice in `currency`.
///
/// `None` when no subscription is configured, the currency is neither
/// CHF nor EUR, or the configured number is malformed.
pub fn compute_subscription(raw: Option<&str>, currency: &str) -> Option<FormattedSubscription> {
    SwissCurrency::from_iso(currency)?;
    let raw = raw.filter(|r| !r.is_empty())?;

    match format_subscription(raw) {
        Ok(formatted) => Some(formatted),
        Err(e) => {
            warn!(subscription = raw, error = %e, "ignoring malformed ISR subscription number");
            None
        }
    }
}

/// Reference number of an invoice, or `None` while it cannot be derived.
///
/// A reference needs a QR-IBAN capable account or an ISR subscription,
/// and an invoice that already has its sequence name.
pub fn compute_reference_number(
    invoice_name: Option<&str>,
    customer_id: Option<&str>,
    has_qr_iban: bool,
    subscription_present: bool,
) -> Option<ReferenceNumber> {
    if !(has_qr_iban || subscription_present) {
        return None;
    }
    let name = invoice_name.filter(|n| !n.is_empty())?;

    match build_reference(name, customer_id) {
        Ok(reference) => {
            debug!(invoice = name, reference = %reference, "derived ISR reference");
            Some(reference)
        }
        Err(e) => {
            warn!(invoice = name, error = %e, "cannot derive ISR reference");
            None
        }
    }
}

/// Optical line for a slip, or an empty string when any part is missing
/// or the amount cannot be encoded.
pub fn compute_optical_line(
    amount: Decimal,
    currency: &str,
    reference: Option<&ReferenceNumber>,
    subscription: Option<&FormattedSubscription>,
) -> String {
    let (Some(reference), Some(subscription)) = (reference, subscription) else {
        return String::new();
    };
    let Some(currency) = SwissCurrency::from_iso(currency) else {
        return String::new();
    };

    let optical_amount = match format_amount(amount, currency) {
        Ok(a) => a,
        Err(e) => {
            warn!(%amount, %currency, error = %e, "cannot encode amount for optical line");
            return String::new();
        }
    };

    let line = assemble_optical_line(
        optical_amount.as_str(),
        reference.as_str(),
        &subscription.scanline,
    );
    debug!(optical_line = %line, "assembled ISR optical line");
    line
}

/// Whether `candidate` is a well-formed ISR/QRR reference.
pub fn is_reference_valid(candidate: &str) -> bool {
    is_valid_reference(candidate)
}

/// Group `s` in blocks of 5 characters from the right.
pub fn group_in_blocks_of_5(s: &str) -> String {
    space_reference(s)
}
