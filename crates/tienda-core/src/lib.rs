//! # tienda-core: Pure Business Logic for Tienda POS
//!
//! This crate is the **heart** of Tienda POS. It contains all business logic
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Tienda POS Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Frontend (web client)                        │   │
//! │  │    Catalog UI ──► Cart UI ──► Checkout UI ──► Reports UI        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ REST                                   │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    tienda-session                               │   │
//! │  │    per-session cart state, checkout submission sequencing       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ tienda-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐   │   │
//! │  │   │   cart    │  │   money   │  │   stock   │  │  report   │   │   │
//! │  │   │   Cart    │  │   Money   │  │  Status   │  │ Summaries │   │   │
//! │  │   │ LineItem  │  │ Discounts │  │  Alerts   │  │ CSV rows  │   │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘   │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`cart`] - The sales cart and discount pricing engine
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`types`] - Domain types (Product, Discount, SaleRecord, Supply, ...)
//! - [`stock`] - Stock status classification and low-stock alerts
//! - [`report`] - Sales report aggregation and dashboard statistics
//! - [`export`] - CSV export row building (string building only, no files)
//! - [`error`] - Domain error types
//! - [`validation`] - Caller-side input validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use tienda_core::cart::Cart;
//! use tienda_core::types::{Discount, DiscountKind, Product};
//!
//! let americano = Product::catalog_entry("a1", "Americano", 1000);
//! let croissant = Product::catalog_entry("c1", "Croissant", 500);
//!
//! let mut cart = Cart::new();
//! cart.add_or_increment(&americano);
//! cart.add_or_increment(&americano);
//! cart.add_or_increment(&croissant);
//!
//! // 10% off: subtotal $25.00, discount $2.50, total $22.50
//! let promo = Discount::percentage("d1", "Happy hour", 1000);
//! let totals = cart.totals(Some(&promo));
//! assert_eq!(totals.subtotal.cents(), 2500);
//! assert_eq!(totals.discount.cents(), 250);
//! assert_eq!(totals.total.cents(), 2250);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod export;
pub mod money;
pub mod report;
pub mod stock;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use tienda_core::Money` instead of
// `use tienda_core::money::Money`

pub use cart::{Cart, LineItem, PricingTotals};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;
