//! Invoice-level ISR handling.
//!
//! Works on a snapshot of the invoice and bank account fields an ISR
//! depends on: derives the slip content, reports what blocks printing,
//! tracks whether the ISR was sent and flags vendor bills that lack a
//! valid ISR reference.

mod builder;
mod slip;
mod types;
mod validation;

pub use builder::*;
pub use slip::*;
pub use types::*;
pub use validation::*;
