use rust_decimal::Decimal;

use super::types::*;
use crate::core::IsrError;

/// Builder for invoice snapshots.
///
/// ```
/// use einzahlung::invoice::*;
/// use rust_decimal_macros::dec;
///
/// let invoice = IsrInvoiceBuilder::new("CHF")
///     .name("INV/2021/0001")
///     .amount_residual(dec!(3949.75))
///     .partner_bank(BankAccountBuilder::new().isr_subscription_chf("01-162-8").build())
///     .build()
///     .unwrap();
///
/// assert!(invoice.isr_valid());
/// ```
pub struct IsrInvoiceBuilder {
    name: Option<String>,
    move_type: MoveType,
    currency_code: String,
    amount_residual: Decimal,
    partner_bank: Option<BankAccount>,
    payment_reference: Option<String>,
    reference: Option<String>,
    company_country: Option<String>,
    isr_sent: bool,
}

impl IsrInvoiceBuilder {
    /// Start a customer invoice in `currency_code` with nothing left to pay.
    ///
    /// The company country defaults to `"CH"`, so vendor bills built here
    /// are checked by [`IsrInvoice::isr_needs_fixing`]. Use
    /// [`company_country`](Self::company_country) for companies elsewhere.
    pub fn new(currency_code: impl Into<String>) -> Self {
        Self {
            name: None,
            move_type: MoveType::OutInvoice,
            currency_code: currency_code.into(),
            amount_residual: Decimal::ZERO,
            partner_bank: None,
            payment_reference: None,
            reference: None,
            company_country: Some("CH".into()),
            isr_sent: false,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn move_type(mut self, move_type: MoveType) -> Self {
        self.move_type = move_type;
        self
    }

    pub fn amount_residual(mut self, amount: Decimal) -> Self {
        self.amount_residual = amount;
        self
    }

    pub fn partner_bank(mut self, bank: BankAccount) -> Self {
        self.partner_bank = Some(bank);
        self
    }

    pub fn payment_reference(mut self, reference: impl Into<String>) -> Self {
        self.payment_reference = Some(reference.into());
        self
    }

    pub fn reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = Some(reference.into());
        self
    }

    pub fn company_country(mut self, country_code: impl Into<String>) -> Self {
        self.company_country = Some(country_code.into());
        self
    }

    pub fn isr_sent(mut self, sent: bool) -> Self {
        self.isr_sent = sent;
        self
    }

    /// Build the snapshot. Only structural limits are checked here;
    /// ISR readiness is reported by [`validate_isr`](super::validate_isr).
    pub fn build(self) -> Result<IsrInvoice, IsrError> {
        if self.currency_code.len() != 3
            || !self.currency_code.bytes().all(|b| b.is_ascii_uppercase())
        {
            return Err(IsrError::Builder(format!(
                "currency code '{}' must be 3 uppercase letters (ISO 4217)",
                self.currency_code
            )));
        }
        if self.name.as_ref().is_some_and(|n| n.len() > 200) {
            return Err(IsrError::Builder(
                "invoice name cannot exceed 200 characters".into(),
            ));
        }

        Ok(IsrInvoice {
            name: self.name.filter(|n| !n.trim().is_empty()),
            move_type: self.move_type,
            currency_code: self.currency_code,
            amount_residual: self.amount_residual,
            partner_bank: self.partner_bank,
            payment_reference: self.payment_reference,
            reference: self.reference,
            company_country: self.company_country,
            isr_sent: self.isr_sent,
        })
    }
}

/// Builder for bank accounts.
#[derive(Default)]
pub struct BankAccountBuilder {
    account: BankAccount,
}

impl BankAccountBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn isr_subscription_chf(mut self, subscription: impl Into<String>) -> Self {
        self.account.isr_subscription_chf = Some(subscription.into());
        self
    }

    pub fn isr_subscription_eur(mut self, subscription: impl Into<String>) -> Self {
        self.account.isr_subscription_eur = Some(subscription.into());
        self
    }

    pub fn postal(mut self, postal: impl Into<String>) -> Self {
        self.account.postal = Some(postal.into());
        self
    }

    /// ISR-B customer ID, put in front of every reference.
    pub fn isr_customer_id(mut self, id: impl Into<String>) -> Self {
        self.account.isr_customer_id = Some(id.into());
        self
    }

    pub fn qr_iban(mut self, qr_iban: bool) -> Self {
        self.account.qr_iban = qr_iban;
        self
    }

    pub fn build(self) -> BankAccount {
        self.account
    }
}
