use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{SwissCurrency, is_isr_issuer};

/// Kind of accounting document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveType {
    /// Customer invoice. The only kind an ISR can be printed for.
    OutInvoice,
    /// Customer credit note.
    OutRefund,
    /// Vendor bill.
    InInvoice,
    /// Vendor credit note.
    InRefund,
    /// Plain journal entry.
    Entry,
}

/// Bank account the invoice is paid to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankAccount {
    /// ISR subscription number used for CHF invoices (e.g. "01-162-8").
    pub isr_subscription_chf: Option<String>,
    /// ISR subscription number used for EUR invoices (e.g. "03-162-5").
    pub isr_subscription_eur: Option<String>,
    /// Postal account number of the account holder.
    pub postal: Option<String>,
    /// ISR-B customer ID at the issuing bank.
    pub isr_customer_id: Option<String>,
    /// Whether the account is a QR-IBAN, able to receive QRR payments.
    pub qr_iban: bool,
}

impl BankAccount {
    /// Subscription number configured for the given ISO currency code.
    pub fn isr_subscription_for(&self, currency_code: &str) -> Option<&str> {
        match SwissCurrency::from_iso(currency_code)? {
            SwissCurrency::Chf => self.isr_subscription_chf.as_deref(),
            SwissCurrency::Eur => self.isr_subscription_eur.as_deref(),
        }
    }

    /// Whether the postal account of this bank account issues ISRs.
    pub fn is_isr_issuer(&self) -> bool {
        self.postal.as_deref().is_some_and(is_isr_issuer)
    }
}

/// Snapshot of the invoice fields ISR generation depends on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IsrInvoice {
    /// Sequence name (e.g. "INV/2021/0001"). `None` while still a draft.
    pub name: Option<String>,
    /// Kind of document.
    pub move_type: MoveType,
    /// ISO 4217 currency code.
    pub currency_code: String,
    /// Amount still to be paid.
    pub amount_residual: Decimal,
    /// Bank account the payment goes to.
    pub partner_bank: Option<BankAccount>,
    /// Payment reference communicated to the payer, or received on a vendor bill.
    pub payment_reference: Option<String>,
    /// Vendor reference of a bill.
    pub reference: Option<String>,
    /// Country (ISO 3166-1 alpha-2) of the company issuing or receiving the invoice.
    pub company_country: Option<String>,
    /// Whether the ISR of this invoice was printed or sent by mail.
    pub isr_sent: bool,
}

impl IsrInvoice {
    /// Sequence name, unless the invoice is still a draft. A blank name
    /// counts as no name.
    pub fn sequence_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|n| !n.trim().is_empty())
    }
}
