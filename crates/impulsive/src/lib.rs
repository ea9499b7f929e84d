//! Impulsive maneuver estimators: vis-viva speeds and two-burn Hohmann
//! transfers for two-body Keplerian motion with a specified central GM.

mod error;
pub mod hohmann;
pub mod visviva;

pub use error::DomainError;
pub use hohmann::{TransferResult, transfer};
pub use visviva::speed;
