use serde::{Deserialize, Serialize};
use tracing::info;

use super::types::*;
use super::validation::{blocking_message, validate_isr};
use crate::core::{
    FormattedSubscription, IsrError, OpticalAmount, ReferenceNumber, SwissCurrency,
    assemble_optical_line, compute_optical_line, compute_reference_number, compute_subscription,
    format_amount, is_valid_reference, split_amount,
};

/// Everything printed on an ISR slip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IsrSlip {
    pub currency: SwissCurrency,
    /// Amount units, as printed in the amount boxes.
    pub amount_units: String,
    /// Amount cents, always two digits.
    pub amount_cents: String,
    pub subscription: FormattedSubscription,
    pub reference: ReferenceNumber,
    /// Reference in blocks of 5.
    pub reference_spaced: String,
    pub optical_line: String,
}

impl IsrInvoice {
    /// ISR-B customer ID of the bank account, if any.
    fn isr_customer_id(&self) -> Option<&str> {
        self.partner_bank
            .as_ref()
            .and_then(|b| b.isr_customer_id.as_deref())
    }

    /// Creditor subscription number matching the invoice currency.
    pub fn isr_subscription(&self) -> Option<FormattedSubscription> {
        let bank = self.partner_bank.as_ref()?;
        compute_subscription(
            bank.isr_subscription_for(&self.currency_code),
            &self.currency_code,
        )
    }

    /// ISR or QRR reference of this invoice.
    pub fn isr_number(&self) -> Option<ReferenceNumber> {
        let has_qr_iban = self.partner_bank.as_ref().is_some_and(|b| b.qr_iban);
        compute_reference_number(
            self.sequence_name(),
            self.isr_customer_id(),
            has_qr_iban,
            self.isr_subscription().is_some(),
        )
    }

    /// Reference split in blocks of 5, for the slip.
    pub fn isr_number_spaced(&self) -> Option<String> {
        self.isr_number().map(|r| r.spaced())
    }

    /// Currency, amount and check digit block of the optical line.
    pub fn isr_optical_amount(&self) -> Result<OpticalAmount, IsrError> {
        let currency = SwissCurrency::from_iso(&self.currency_code).ok_or_else(|| {
            IsrError::InvalidInput(format!(
                "currency '{}' cannot be used on an ISR",
                self.currency_code
            ))
        })?;
        format_amount(self.amount_residual, currency)
    }

    /// Optical reading line, empty while the ISR is not ready.
    pub fn isr_optical_line(&self) -> String {
        compute_optical_line(
            self.amount_residual,
            &self.currency_code,
            self.isr_number().as_ref(),
            self.isr_subscription().as_ref(),
        )
    }

    /// Whether all the data required to generate the ISR is present.
    pub fn isr_valid(&self) -> bool {
        validate_isr(self).is_empty()
    }

    /// Residual amount as (units, cents) strings for the slip boxes.
    pub fn split_total_amount(&self) -> (String, String) {
        split_amount(self.amount_residual)
    }

    /// Payment reference to communicate when the journal uses the Swiss
    /// communication standard.
    pub fn payment_reference_ch(&self) -> Option<ReferenceNumber> {
        self.isr_number()
    }

    /// Whether the payment reference (or vendor reference) of this
    /// invoice is a valid ISR reference.
    pub fn has_isr_ref(&self) -> bool {
        self.payment_reference
            .as_deref()
            .filter(|r| !r.is_empty())
            .or(self.reference.as_deref())
            .is_some_and(is_valid_reference)
    }

    /// A Swiss vendor bill paid to an ISR issuer needs a valid ISR
    /// reference; true when it is missing.
    pub fn isr_needs_fixing(&self) -> bool {
        self.move_type == MoveType::InInvoice
            && self.company_country.as_deref() == Some("CH")
            && self.partner_bank.as_ref().is_some_and(|b| b.is_isr_issuer())
            && !self.has_isr_ref()
    }

    /// Print the ISR: returns the slip content and marks the ISR as sent.
    ///
    /// Fails with [`IsrError::Validation`] listing every blocker when the
    /// invoice is not ready.
    pub fn isr_print(&mut self) -> Result<IsrSlip, IsrError> {
        let errors = validate_isr(self);
        if !errors.is_empty() {
            return Err(IsrError::Validation(blocking_message(&errors)));
        }

        let slip = self.build_slip()?;
        self.isr_sent = true;
        info!(
            invoice = self.sequence_name().unwrap_or_default(),
            reference = %slip.reference,
            "ISR printed"
        );
        Ok(slip)
    }

    /// Called when the invoice is sent by mail: marks the ISR as sent if
    /// it could be generated. Returns whether the flag is set afterwards.
    pub fn mark_isr_sent(&mut self) -> bool {
        if !self.isr_sent && self.isr_valid() {
            self.isr_sent = true;
        }
        self.isr_sent
    }

    fn build_slip(&self) -> Result<IsrSlip, IsrError> {
        let subscription = self.isr_subscription().ok_or_else(|| {
            IsrError::Validation("no usable ISR subscription number is set".into())
        })?;
        let reference = self
            .isr_number()
            .ok_or_else(|| IsrError::Validation("the ISR reference cannot be derived".into()))?;
        let optical_amount = self.isr_optical_amount()?;
        let currency = optical_amount.currency().ok_or_else(|| {
            IsrError::InvalidInput(format!("unknown currency in '{optical_amount}'"))
        })?;
        let (amount_units, amount_cents) = self.split_total_amount();

        let optical_line = assemble_optical_line(
            optical_amount.as_str(),
            reference.as_str(),
            &subscription.scanline,
        );

        Ok(IsrSlip {
            currency,
            amount_units,
            amount_cents,
            reference_spaced: reference.spaced(),
            subscription,
            reference,
            optical_line,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::invoice::{BankAccountBuilder, IsrInvoiceBuilder};
    use rust_decimal_macros::dec;

    fn chf_invoice() -> IsrInvoice {
        IsrInvoiceBuilder::new("CHF")
            .name("INV/2021/0001")
            .amount_residual(dec!(3949.75))
            .partner_bank(BankAccountBuilder::new().isr_subscription_chf("01-162-8").build())
            .build()
            .unwrap()
    }

    #[test]
    fn derived_fields() {
        let inv = chf_invoice();
        assert_eq!(inv.isr_subscription().unwrap().display, "01-162-8");
        assert_eq!(
            inv.isr_number().unwrap().as_str(),
            "000000000000000000202100018"
        );
        assert_eq!(
            inv.isr_number_spaced().unwrap(),
            "00 00000 00000 00000 02021 00018"
        );
        assert_eq!(
            inv.isr_optical_line(),
            "0100003949753>000000000000000000202100018+ 010001628>"
        );
        assert_eq!(inv.isr_optical_amount().unwrap().as_str(), "0100003949753");
        assert_eq!(inv.payment_reference_ch(), inv.isr_number());
        assert!(inv.isr_valid());
    }

    #[test]
    fn qr_iban_alone_gives_reference_but_no_optical_line() {
        let inv = IsrInvoiceBuilder::new("CHF")
            .name("INV/2021/0001")
            .partner_bank(BankAccountBuilder::new().qr_iban(true).build())
            .build()
            .unwrap();
        assert!(inv.isr_number().is_some());
        assert!(inv.isr_subscription().is_none());
        assert_eq!(inv.isr_optical_line(), "");
        assert!(!inv.isr_valid());
    }

    #[test]
    fn isrb_customer_id_prefixes_reference() {
        let inv = IsrInvoiceBuilder::new("CHF")
            .name("12345678901234567890")
            .partner_bank(
                BankAccountBuilder::new()
                    .isr_subscription_chf("01-162-8")
                    .isr_customer_id("150001")
                    .build(),
            )
            .build()
            .unwrap();
        assert_eq!(
            inv.isr_number().unwrap().as_str(),
            "150001123456789012345678905"
        );
    }

    #[test]
    fn print_marks_sent() {
        let mut inv = chf_invoice();
        let slip = inv.isr_print().unwrap();
        assert!(inv.isr_sent);
        assert_eq!(slip.amount_units, "3949");
        assert_eq!(slip.amount_cents, "75");
        assert_eq!(slip.optical_line, inv.isr_optical_line());
        assert_eq!(slip.currency, SwissCurrency::Chf);
    }

    #[test]
    fn print_blocked() {
        let mut inv = IsrInvoiceBuilder::new("USD").build().unwrap();
        let err = inv.isr_print().unwrap_err();
        let msg = err.to_string();
        assert!(msg.starts_with("You cannot generate an ISR yet."));
        assert!(msg.contains("- Currency must be CHF or EUR."));
        assert!(msg.contains("- The invoice is missing a name."));
        assert!(!inv.isr_sent);
    }

    #[test]
    fn print_overflowing_amount_fails() {
        let mut inv = chf_invoice();
        inv.amount_residual = dec!(123456789.00);
        assert!(matches!(inv.isr_print(), Err(IsrError::Overflow(_))));
        assert!(!inv.isr_sent);
    }

    #[test]
    fn empty_name_cannot_be_printed() {
        for name in ["", "  "] {
            let mut inv = chf_invoice();
            inv.name = Some(name.into());
            assert!(inv.isr_number().is_none());
            assert!(!inv.isr_valid());

            let err = inv.isr_print().unwrap_err();
            assert!(err.to_string().contains("- The invoice is missing a name."));
            assert!(!inv.isr_sent);
            assert!(!inv.mark_isr_sent());
        }
    }

    #[test]
    fn bad_customer_id_blocks_print() {
        let mut inv = chf_invoice();
        if let Some(bank) = inv.partner_bank.as_mut() {
            bank.isr_customer_id = Some("ABC".into());
        }
        assert!(inv.isr_number().is_none());
        assert!(matches!(inv.isr_print(), Err(IsrError::Validation(_))));
        assert!(!inv.isr_sent);
    }

    #[test]
    fn mark_sent_only_when_valid() {
        let mut inv = chf_invoice();
        assert!(inv.mark_isr_sent());

        let mut draft = IsrInvoiceBuilder::new("CHF").build().unwrap();
        assert!(!draft.mark_isr_sent());
        assert!(!draft.isr_sent);
    }

    #[test]
    fn vendor_bill_needs_fixing() {
        let issuer = BankAccountBuilder::new().postal("01-162-8").build();
        let mut bill = IsrInvoiceBuilder::new("CHF")
            .move_type(MoveType::InInvoice)
            .partner_bank(issuer)
            .build()
            .unwrap();
        assert!(bill.isr_needs_fixing());

        bill.payment_reference = Some("21 00000 00003 13947 14300 09017".into());
        assert!(bill.has_isr_ref());
        assert!(!bill.isr_needs_fixing());
    }

    #[test]
    fn vendor_reference_used_as_fallback() {
        let bill = IsrInvoiceBuilder::new("CHF")
            .move_type(MoveType::InInvoice)
            .reference("000000000000000000000012371")
            .build()
            .unwrap();
        assert!(bill.has_isr_ref());
    }

    #[test]
    fn foreign_company_never_needs_fixing() {
        let bill = IsrInvoiceBuilder::new("CHF")
            .move_type(MoveType::InInvoice)
            .company_country("DE")
            .partner_bank(BankAccountBuilder::new().postal("01-162-8").build())
            .build()
            .unwrap();
        assert!(!bill.isr_needs_fixing());
    }
}
