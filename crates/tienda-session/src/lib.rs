//! # tienda-session: Session-Scoped Cart State
//!
//! The orchestration layer between the web frontend and `tienda-core`.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Frontend (web client)                                                  │
//! │    Catalog click ──► Cart panel ──► Checkout modal                      │
//! └─────────────────────────────┬───────────────────────────────────────────┘
//!                               │ REST
//! ┌─────────────────────────────▼───────────────────────────────────────────┐
//! │               ★ tienda-session (THIS CRATE) ★                           │
//! │                                                                         │
//! │   ┌──────────────────┐           ┌──────────────────────────────┐       │
//! │   │   CartSession    │           │          checkout            │       │
//! │   │  Mutex<cart +    │           │  one SaleSubmission per line │       │
//! │   │  selected promo> │           │  via the SaleSubmitter seam  │       │
//! │   └──────────────────┘           └──────────────────────────────┘       │
//! └─────────────────────────────┬───────────────────────────────────────────┘
//!                               │
//! ┌─────────────────────────────▼───────────────────────────────────────────┐
//! │                  tienda-core (pure pricing engine)                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Session Ownership
//! One [`CartSession`] belongs to exactly one logical checkout session and
//! is passed explicitly to whatever handles that session's requests - never
//! stored as process-wide global state. The internal mutex serializes the
//! host's concurrent request handlers; cross-session sharing stays out of
//! contract.

pub mod checkout;
pub mod error;
pub mod session;

pub use checkout::{submit_cart, CheckoutOutcome, SaleSubmitter, SubmitError};
pub use error::SessionError;
pub use session::{change_due, CartSession, CartView, LineView};
