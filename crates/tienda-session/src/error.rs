//! # Session Error Type
//!
//! Errors raised by the session/checkout orchestration layer. These are the
//! errors a frontend actually sees; the pure cart engine below never fails.

use thiserror::Error;
use tienda_core::Money;

/// Session and checkout orchestration errors.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The selected discount id is not in the fetched discount snapshot.
    #[error("Discount not found: {0}")]
    DiscountNotFound(String),

    /// Checkout requested on an empty cart (the frontend disables the
    /// button, but the session re-checks).
    #[error("Cannot check out an empty cart")]
    EmptyCart,

    /// Cash received is less than the payable total.
    #[error("Amount received {tendered} is less than the total {total}")]
    InsufficientTender { total: Money, tendered: Money },
}
