use super::types::*;
use crate::core::{ValidationError, build_reference, format_subscription, is_isr_currency};

/// Collect every reason why an ISR cannot be generated for `invoice`.
/// Returns all blockers found (not just the first).
pub fn validate_isr(invoice: &IsrInvoice) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    match &invoice.partner_bank {
        None => errors.push(ValidationError::new(
            "partner_bank",
            "Invoice's 'Bank Account' is empty. You need to create or select a valid ISR account",
        )),
        Some(bank) => {
            let subscription = bank
                .isr_subscription_for(&invoice.currency_code)
                .filter(|s| !s.is_empty());
            match subscription {
                None => errors.push(ValidationError::new(
                    "partner_bank.isr_subscription",
                    "No ISR Subscription number is set on your company bank account. Please fill it in.",
                )),
                Some(raw) => {
                    if let Err(e) = format_subscription(raw) {
                        errors.push(ValidationError::new(
                            "partner_bank.isr_subscription",
                            format!("The ISR Subscription number of your bank account is not usable ({e})."),
                        ));
                    }
                }
            }
            if let Some(id) = bank.isr_customer_id.as_deref().filter(|id| !id.is_empty()) {
                if let Err(e) = build_reference("", Some(id)) {
                    errors.push(ValidationError::new(
                        "partner_bank.isr_customer_id",
                        format!("The ISR-B customer ID of your bank account is not usable ({e})."),
                    ));
                }
            }
        }
    }

    if invoice.move_type != MoveType::OutInvoice {
        errors.push(ValidationError::new(
            "move_type",
            "You can only print Customer ISR.",
        ));
    }

    if !is_isr_currency(&invoice.currency_code) {
        errors.push(ValidationError::new(
            "currency_code",
            "Currency must be CHF or EUR.",
        ));
    }

    if invoice.sequence_name().is_none() {
        errors.push(ValidationError::new(
            "name",
            "The invoice is missing a name.",
        ));
    }

    errors
}

/// Render blockers as the multi-line message shown to the user.
pub fn blocking_message(errors: &[ValidationError]) -> String {
    let lines = errors
        .iter()
        .map(|e| format!("- {}", e.message))
        .collect::<Vec<_>>()
        .join("\n");
    format!("You cannot generate an ISR yet.\nHere is what is blocking:\n{lines}")
}
