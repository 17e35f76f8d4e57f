#![no_std]
pub mod errors;
pub mod types;
pub mod validation;

pub use errors::*;
pub use types::*;

// Settlement bounds. Rates are per-second prices in the fee token's smallest
// unit; the upper bound keeps elapsed * rate well inside i128.
pub const RATE_UPPER_BOUND: i128 = i128::MAX / 2;
pub const AMOUNT_UPPER_BOUND: i128 = i128::MAX / 2;
