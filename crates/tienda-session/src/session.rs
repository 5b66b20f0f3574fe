//! # Cart Session
//!
//! Owns the current cart and selected discount for one checkout session.
//!
//! ## Thread Safety
//! The state is wrapped in a `Mutex` because:
//! 1. The host may serve a session's requests from concurrent handlers
//! 2. Only one handler should modify the cart at a time
//! 3. The cart and the selected discount must change together atomically
//!
//! ## Session Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Session Operations                                   │
//! │                                                                         │
//! │  Frontend Action          Session Method          State Change          │
//! │  ───────────────          ──────────────          ────────────          │
//! │                                                                         │
//! │  Click Product ──────────► add_product() ───────► line qty +1 / insert  │
//! │                                                                         │
//! │  Change Quantity ────────► set_quantity() ──────► qty = n (≤0 removes)  │
//! │                                                                         │
//! │  Click Trash ────────────► remove() ────────────► line removed          │
//! │                                                                         │
//! │  Pick Discount ──────────► select_discount() ───► promo = Some(d)       │
//! │                                                                         │
//! │  View Cart ──────────────► view() ──────────────► (read only)           │
//! │                                                                         │
//! │  Complete / Cancel ──────► reset() ─────────────► empty cart, no promo  │
//! │                                                                         │
//! │  NOTE: All write operations acquire the Mutex lock exclusively.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use tienda_core::cart::{Cart, LineItem, PricingTotals};
use tienda_core::types::{Discount, Product, SaleSubmission};
use tienda_core::Money;

use crate::error::SessionError;

// =============================================================================
// Response DTOs
// =============================================================================

/// One cart line as the frontend renders it, with the derived subtotal
/// materialized for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct LineView {
    pub product_id: String,
    pub product_name: String,
    pub quantity: i64,
    pub unit_price: Money,
    pub subtotal: Money,
}

impl From<&LineItem> for LineView {
    fn from(item: &LineItem) -> Self {
        LineView {
            product_id: item.product_id.clone(),
            product_name: item.product_name.clone(),
            quantity: item.quantity,
            unit_price: item.unit_price,
            subtotal: item.subtotal(),
        }
    }
}

/// Cart response including lines, totals, and the applied discount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartView {
    pub items: Vec<LineView>,
    pub totals: PricingTotals,
    pub discount_id: Option<String>,
}

// =============================================================================
// Cart Session
// =============================================================================

struct SessionInner {
    cart: Cart,
    discount: Option<Discount>,
}

/// Session-scoped cart state: one per logical checkout session.
///
/// The discount is stored as a frozen copy of the selected policy so that
/// pricing stays consistent even if the discount list is re-fetched while
/// the cart is open.
pub struct CartSession {
    inner: Mutex<SessionInner>,
}

impl CartSession {
    /// Creates a session with an empty cart and no discount.
    pub fn new() -> Self {
        CartSession {
            inner: Mutex::new(SessionInner {
                cart: Cart::new(),
                discount: None,
            }),
        }
    }

    /// Adds a product (or increments its line) in this session's cart.
    pub fn add_product(&self, product: &Product) {
        debug!(product_id = %product.id, "session: add product");
        self.with_inner(|s| s.cart.add_or_increment(product));
    }

    /// Sets a line's quantity; `<= 0` removes the line, absent id is a no-op.
    pub fn set_quantity(&self, product_id: &str, quantity: i64) {
        debug!(product_id = %product_id, quantity, "session: set quantity");
        self.with_inner(|s| s.cart.set_quantity(product_id, quantity));
    }

    /// Removes a line; idempotent.
    pub fn remove(&self, product_id: &str) {
        debug!(product_id = %product_id, "session: remove line");
        self.with_inner(|s| s.cart.remove(product_id));
    }

    /// Selects a discount by id, validated against the fetched snapshot.
    ///
    /// The matched discount is copied into the session; later changes to
    /// the snapshot do not affect this cart.
    pub fn select_discount(
        &self,
        available: &[Discount],
        discount_id: &str,
    ) -> Result<(), SessionError> {
        let discount = available
            .iter()
            .find(|d| d.id == discount_id)
            .cloned()
            .ok_or_else(|| SessionError::DiscountNotFound(discount_id.to_string()))?;

        debug!(discount_id = %discount_id, name = %discount.name, "session: select discount");
        self.with_inner(|s| s.discount = Some(discount));
        Ok(())
    }

    /// Removes any applied discount ("Sin descuento").
    pub fn clear_discount(&self) {
        debug!("session: clear discount");
        self.with_inner(|s| s.discount = None);
    }

    /// Empties the cart and drops the discount (sale completed or cancelled).
    pub fn reset(&self) {
        debug!("session: reset");
        self.with_inner(|s| {
            s.cart.clear();
            s.discount = None;
        });
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.with_inner(|s| s.cart.is_empty())
    }

    /// Prices the cart and builds the frontend response.
    pub fn view(&self) -> CartView {
        self.with_inner(|s| CartView {
            items: s.cart.items.iter().map(LineView::from).collect(),
            totals: s.cart.totals(s.discount.as_ref()),
            discount_id: s.discount.as_ref().map(|d| d.id.clone()),
        })
    }

    /// Builds the per-line checkout submissions for the current cart.
    ///
    /// Fails on an empty cart; the pricing engine itself would happily
    /// produce an empty list, but submitting nothing is a session-level
    /// mistake worth surfacing.
    pub fn submissions(&self) -> Result<Vec<SaleSubmission>, SessionError> {
        self.with_inner(|s| {
            if s.cart.is_empty() {
                return Err(SessionError::EmptyCart);
            }
            Ok(s.cart.submissions(s.discount.as_ref()))
        })
    }

    fn with_inner<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut SessionInner) -> R,
    {
        let mut inner = self.inner.lock().expect("Cart session mutex poisoned");
        f(&mut inner)
    }
}

impl Default for CartSession {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Cash Tender
// =============================================================================

/// Computes the change due for a cash payment.
///
/// The checkout modal rejects a received amount smaller than the total
/// before it ever submits the sale.
pub fn change_due(total: Money, tendered: Money) -> Result<Money, SessionError> {
    if tendered < total {
        return Err(SessionError::InsufficientTender { total, tendered });
    }
    Ok(tendered - total)
}

// =============================================================================
// Unit Tests
// =============================================================================
