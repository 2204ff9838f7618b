//! Reference derivation and checksum engine.
//!
//! Every function here is pure: the same inputs always give the same
//! strings, nothing is cached and no state is shared.

mod amount;
mod checksum;
mod compute;
pub mod currencies;
mod error;
mod optical;
mod reference;
mod subscription;

pub use amount::*;
pub use checksum::*;
pub use compute::*;
pub use currencies::{SwissCurrency, is_isr_currency};
pub use error::*;
pub use optical::*;
pub use reference::*;
pub use subscription::*;
