//! Money module (fixed-rate currency conversion).
//!
//! Pure domain logic only: amounts are integer minor units, every conversion
//! step truncates toward zero, and every operation returns a new value.

pub mod currency;
pub mod money;

pub use currency::Currency;
pub use money::Money;
