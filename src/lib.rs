//! # einzahlung
//!
//! Swiss payment slip references: ISR (PostFinance), ISR-B (through a
//! bank, with a customer ID) and QRR (QR-bill) reference numbers, the
//! recursive modulo 10 checksum they share, and the optical reading
//! line printed at the bottom of an ISR.
//!
//! All monetary values use [`rust_decimal::Decimal`], never floating point.
//!
//! ## Quick Start
//!
//! ```rust
//! use einzahlung::*;
//! use rust_decimal_macros::dec;
//!
//! let subscription = compute_subscription(Some("01-162-8"), "CHF").unwrap();
//! let reference = compute_reference_number(Some("INV/2021/0001"), None, false, true).unwrap();
//!
//! assert_eq!(reference.as_str(), "000000000000000000202100018");
//! assert_eq!(
//!     compute_optical_line(dec!(3949.75), "CHF", Some(&reference), Some(&subscription)),
//!     "0100003949753>000000000000000000202100018+ 010001628>"
//! );
//! assert!(is_reference_valid("00 00000 00000 00000 02021 00018"));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Checksum, amount, subscription, reference and optical line formatting |
//! | `invoice` (default) | Invoice snapshots, print readiness, sent tracking, vendor bill checks |
//! | `all` | Everything |
//!
//! ## Logging
//!
//! Derivations emit [`tracing`] events; malformed caller data that is
//! turned into "not available" is reported at `warn` level. Install any
//! subscriber to see them.

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "invoice")]
pub mod invoice;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
