//! Optical reading line printed at the bottom of an ISR.
//!
//! ```text
//! amount>reference+ creditor>
//!
//! 0100003949753>120000000000234478943216899+ 010001628>
//! |/\________/| \________________________/|  \_______/
//! 1     2     3          4                5      6
//! ```
//!
//! 1. currency code, 2. amount in cents, 3. amount check digit,
//! 4. reference body (ISR-B: starts with the customer ID),
//! 5. reference check digit, 6. creditor subscription number.
//!
//! The space after `+` is part of the format.

/// Assemble the optical line from its three blocks.
///
/// Returns an empty string when any block is empty: the slip is not
/// ready to be printed yet.
pub fn assemble_optical_line(amount: &str, reference: &str, subscription_scanline: &str) -> String {
    if amount.is_empty() || reference.is_empty() || subscription_scanline.is_empty() {
        return String::new();
    }
    format!("{amount}>{reference}+ {subscription_scanline}>")
}
