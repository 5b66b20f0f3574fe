//! # Cart Module
//!
//! The sales cart and its pricing/discount engine.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Frontend Action          Operation                Cart State Change    │
//! │  ───────────────          ─────────                ─────────────────    │
//! │                                                                         │
//! │  Click Product ─────────► add_or_increment() ────► qty += 1 or insert   │
//! │                                                                         │
//! │  Edit Quantity ─────────► set_quantity() ────────► qty = n (≤0 removes) │
//! │                                                                         │
//! │  Click Trash ───────────► remove() ──────────────► line removed         │
//! │                                                                         │
//! │  Select Discount ───────► totals(Some(d)) ───────► (read only)          │
//! │                                                                         │
//! │  Complete Sale ─────────► submissions(d) ────────► (read only)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - At most one [`LineItem`] per product id; adding the same product again
//!   increments its quantity.
//! - A line's subtotal is **derived** (`unit_price × quantity`), never stored,
//!   so it can never be stale - not even transiently mid-mutation.
//! - Insertion order is display order and is stable across mutations.
//! - [`Cart::totals`] is a pure function of (cart contents, discount): no
//!   hidden state, bit-identical results for identical inputs, and it never
//!   fails - an empty cart prices to all zeros.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::{Discount, DiscountKind, Product, SaleSubmission};

// =============================================================================
// Line Item
// =============================================================================

/// One product's presence in the cart.
///
/// ## Price Freezing
/// `unit_price` is captured when the product is first added. Later catalog
/// price changes do not retroactively alter existing lines - the cart keeps
/// displaying (and pricing) what the customer was quoted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct LineItem {
    /// Product id - unique key within the cart.
    pub product_id: String,

    /// Product name at time of adding (frozen, display only).
    pub product_name: String,

    /// Units of this product in the cart. Always >= 1 while the line
    /// exists; a quantity of 0 or less means the line is removed instead.
    pub quantity: i64,

    /// Price per unit at time of adding (frozen).
    pub unit_price: Money,
}

impl LineItem {
    fn from_product(product: &Product) -> Self {
        LineItem {
            product_id: product.id.clone(),
            product_name: product.name.clone(),
            quantity: 1,
            unit_price: product.price(),
        }
    }

    /// The line subtotal: `unit_price × quantity`.
    ///
    /// Derived on demand rather than stored, so it is consistent with the
    /// quantity by construction.
    #[inline]
    pub fn subtotal(&self) -> Money {
        self.unit_price.multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Pricing Totals
// =============================================================================

/// The result of pricing a cart against an optional discount.
///
/// Recomputed on demand, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PricingTotals {
    /// Sum of all line subtotals, before any discount.
    pub subtotal: Money,
    /// Amount the discount removes. Reported unclamped: a discount larger
    /// than the subtotal shows its full computed value here.
    pub discount: Money,
    /// Payable amount: `max(0, subtotal - discount)`. The clamp happens
    /// only at this final step, never per line.
    pub total: Money,
}

impl PricingTotals {
    /// All-zero totals (the price of an empty cart).
    pub const fn zero() -> Self {
        PricingTotals {
            subtotal: Money::zero(),
            discount: Money::zero(),
            total: Money::zero(),
        }
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The ordered collection of line items for one in-progress sale.
///
/// One cart belongs to exactly one checkout session. All operations are
/// synchronous and touch the cart in a single step; callers running in a
/// threaded or event-driven host must serialize access themselves (see
/// `tienda-session` for the mutex-owned wrapper).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Cart {
    /// Lines in insertion order. Unique by `product_id`.
    pub items: Vec<LineItem>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Adds a product to the cart, or increments its quantity by 1 if a
    /// line for it already exists.
    ///
    /// ## Behavior
    /// - Product already in cart: quantity += 1
    /// - Product not in cart: new line with quantity 1, price frozen now
    pub fn add_or_increment(&mut self, product: &Product) {
        if let Some(item) = self.find_mut(&product.id) {
            item.quantity += 1;
            return;
        }
        self.items.push(LineItem::from_product(product));
    }

    /// Sets the quantity of an existing line.
    ///
    /// ## Behavior
    /// - `quantity <= 0`: removes the line (same as [`Cart::remove`])
    /// - Product not in cart: no-op
    ///
    /// The quantity is assumed already validated as an integer by the
    /// caller (see [`crate::validation::validate_quantity_input`]); this
    /// operation does not signal precondition violations.
    pub fn set_quantity(&mut self, product_id: &str, quantity: i64) {
        if quantity <= 0 {
            self.remove(product_id);
            return;
        }
        if let Some(item) = self.find_mut(product_id) {
            item.quantity = quantity;
        }
    }

    /// Removes the line with the given product id.
    ///
    /// Idempotent: removing an absent id is a no-op, not an error.
    pub fn remove(&mut self, product_id: &str) {
        self.items.retain(|i| i.product_id != product_id);
    }

    /// Clears all lines (sale cancelled, or a new transaction started).
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of lines (unique products) in the cart.
    pub fn line_count(&self) -> usize {
        self.items.len()
    }

    /// Returns the total number of units across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Prices the cart against an optional discount.
    ///
    /// ## Algorithm
    /// ```text
    /// subtotal = Σ line.subtotal                      (0 for empty cart)
    ///
    /// discount = 0                                    no discount selected
    ///          = subtotal × bps / 10000               Percentage
    ///          = amount × Σ line.quantity             FixedPerUnit - per
    ///                                                 unit across the whole
    ///                                                 cart, not per order
    ///                                                 and not per line
    ///
    /// total    = max(0, subtotal - discount)          clamped here only
    /// ```
    ///
    /// Pure: no hidden state, never fails, and calling it twice with an
    /// unchanged cart yields identical results.
    pub fn totals(&self, discount: Option<&Discount>) -> PricingTotals {
        let subtotal: Money = self.items.iter().map(|i| i.subtotal()).sum();

        let discount_amount = match discount.map(|d| d.kind) {
            None => Money::zero(),
            Some(DiscountKind::Percentage { bps }) => subtotal.percentage_of(bps),
            Some(DiscountKind::FixedPerUnit { amount_cents }) => {
                Money::from_cents(amount_cents).multiply_quantity(self.total_quantity())
            }
        };

        PricingTotals {
            subtotal,
            discount: discount_amount,
            total: subtotal.saturating_sub_floor(discount_amount),
        }
    }

    /// Builds the per-line checkout submissions, in cart order.
    ///
    /// Each line becomes one independent unit of work carrying the applied
    /// discount id (or none); the order-submission collaborator receives
    /// them one at a time and this crate does not batch or group them.
    pub fn submissions(&self, discount: Option<&Discount>) -> Vec<SaleSubmission> {
        let discount_id = discount.map(|d| d.id.clone());
        self.items
            .iter()
            .map(|item| SaleSubmission {
                product_id: item.product_id.clone(),
                quantity: item.quantity,
                discount_id: discount_id.clone(),
            })
            .collect()
    }

    fn find_mut(&mut self, product_id: &str) -> Option<&mut LineItem> {
        self.items.iter_mut().find(|i| i.product_id == product_id)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, price_cents: i64) -> Product {
        Product::catalog_entry(id, &format!("Product {id}"), price_cents)
    }

    /// Builds the reference cart used by several scenarios:
    /// [A: qty 2 × $10.00], [B: qty 1 × $5.00] → subtotal $25.00, 3 units.
    fn two_line_cart() -> Cart {
        let a = product("a", 1000);
        let b = product("b", 500);
        let mut cart = Cart::new();
        cart.add_or_increment(&a);
        cart.add_or_increment(&a);
        cart.add_or_increment(&b);
        cart
    }

    #[test]
    fn test_empty_cart_prices_to_zero() {
        let cart = Cart::new();
        assert_eq!(cart.totals(None), PricingTotals::zero());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_add_same_product_twice_merges_line() {
        let a = product("a", 1000);
        let mut cart = Cart::new();
        cart.add_or_increment(&a);
        cart.add_or_increment(&a);

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.items[0].quantity, 2);
        assert_eq!(cart.items[0].subtotal(), Money::from_cents(2000));
    }

    #[test]
    fn test_subtotal_sums_lines() {
        let cart = two_line_cart();
        let totals = cart.totals(None);
        assert_eq!(totals.subtotal, Money::from_cents(2500));
        assert_eq!(totals.discount, Money::zero());
        assert_eq!(totals.total, Money::from_cents(2500));
    }

    #[test]
    fn test_percentage_discount() {
        let cart = two_line_cart();
        let promo = Discount::percentage("d1", "10% off", 1000);

        let totals = cart.totals(Some(&promo));
        assert_eq!(totals.discount, Money::from_cents(250));
        assert_eq!(totals.total, Money::from_cents(2250));
    }

    #[test]
    fn test_fixed_per_unit_discount_charges_per_unit_across_cart() {
        // $1.00 per unit, 3 units across two lines → $3.00 off
        let cart = two_line_cart();
        let promo = Discount::fixed_per_unit("d2", "$1 off per unit", 100);

        let totals = cart.totals(Some(&promo));
        assert_eq!(totals.discount, Money::from_cents(300));
        assert_eq!(totals.total, Money::from_cents(2200));
    }

    #[test]
    fn test_oversized_discount_clamps_total_at_zero() {
        // $100.00 per unit × 3 units = $300.00 discount on a $25.00 cart
        let cart = two_line_cart();
        let promo = Discount::fixed_per_unit("d3", "Too generous", 10000);

        let totals = cart.totals(Some(&promo));
        assert_eq!(totals.subtotal, Money::from_cents(2500));
        // The discount reports its full computed value...
        assert_eq!(totals.discount, Money::from_cents(30000));
        // ...but the payable total never goes negative.
        assert_eq!(totals.total, Money::zero());
    }

    #[test]
    fn test_set_quantity_updates_line() {
        let mut cart = two_line_cart();
        cart.set_quantity("a", 5);

        assert_eq!(cart.items[0].quantity, 5);
        assert_eq!(cart.totals(None).subtotal, Money::from_cents(5500));
    }

    #[test]
    fn test_set_quantity_zero_or_negative_removes_line() {
        let mut cart = two_line_cart();
        cart.set_quantity("a", 0);
        assert_eq!(cart.line_count(), 1);

        cart.set_quantity("b", -3);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity_on_absent_id_is_noop() {
        let mut cart = two_line_cart();
        let before = cart.clone();
        cart.set_quantity("missing", 7);
        assert_eq!(cart, before);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut cart = two_line_cart();
        cart.remove("a");
        let after_first = cart.clone();

        cart.remove("a"); // absent now - still a no-op
        assert_eq!(cart, after_first);
        assert_eq!(cart.line_count(), 1);
    }

    #[test]
    fn test_price_frozen_at_add_time() {
        let mut catalog_a = product("a", 1000);
        let mut cart = Cart::new();
        cart.add_or_increment(&catalog_a);

        // Catalog price changes upstream; the existing line keeps $10.00.
        catalog_a.price_cents = 9999;
        cart.add_or_increment(&catalog_a);

        assert_eq!(cart.items[0].unit_price, Money::from_cents(1000));
        assert_eq!(cart.totals(None).subtotal, Money::from_cents(2000));
    }

    #[test]
    fn test_insertion_order_is_stable() {
        let mut cart = Cart::new();
        for id in ["c", "a", "b"] {
            cart.add_or_increment(&product(id, 100));
        }
        cart.set_quantity("a", 4); // mutation must not reorder

        let order: Vec<&str> = cart.items.iter().map(|i| i.product_id.as_str()).collect();
        assert_eq!(order, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_totals_is_idempotent() {
        let cart = two_line_cart();
        let promo = Discount::percentage("d1", "10% off", 1000);

        assert_eq!(cart.totals(Some(&promo)), cart.totals(Some(&promo)));
        assert_eq!(cart.totals(None), cart.totals(None));
    }

    #[test]
    fn test_submissions_carry_discount_id_per_line() {
        let cart = two_line_cart();
        let promo = Discount::percentage("d1", "10% off", 1000);

        let submissions = cart.submissions(Some(&promo));
        assert_eq!(submissions.len(), 2);
        assert_eq!(submissions[0].product_id, "a");
        assert_eq!(submissions[0].quantity, 2);
        assert_eq!(submissions[0].discount_id.as_deref(), Some("d1"));
        assert_eq!(submissions[1].product_id, "b");
        assert_eq!(submissions[1].quantity, 1);

        let plain = cart.submissions(None);
        assert!(plain.iter().all(|s| s.discount_id.is_none()));
    }

    #[test]
    fn test_clear_resets_cart() {
        let mut cart = two_line_cart();
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.totals(None), PricingTotals::zero());
    }
}

// =============================================================================
// Property Tests
// =============================================================================
