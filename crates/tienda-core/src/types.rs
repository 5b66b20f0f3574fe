//! # Domain Types
//!
//! Core domain types used throughout Tienda POS.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐        │
//! │  │    Product      │   │    Discount     │   │   SaleRecord    │        │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │        │
//! │  │  id             │   │  id             │   │  id             │        │
//! │  │  name           │   │  name           │   │  product_name   │        │
//! │  │  category_name  │   │  kind + value   │   │  total_cents    │        │
//! │  │  price_cents    │   └─────────────────┘   │  sold_at        │        │
//! │  └─────────────────┘                         └─────────────────┘        │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                              │
//! │  │     Supply      │   │ SaleSubmission  │                              │
//! │  │  ─────────────  │   │  ─────────────  │                              │
//! │  │  stock          │   │  product_id     │                              │
//! │  │  min_stock      │   │  quantity       │                              │
//! │  │  unit           │   │  discount_id?   │                              │
//! │  └─────────────────┘   └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All of these are **read-only snapshots** from this crate's point of view:
//! the catalog, the discount list, and the inventory are fetched by the
//! surrounding application and handed in as immutable inputs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// A product available for sale in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Product {
    /// Unique identifier (UUID v4 as opaque string).
    pub id: String,

    /// Display name shown in the catalog grid and on the cart line.
    pub name: String,

    /// Category this product belongs to, if any.
    pub category_id: Option<String>,

    /// Category display name (denormalized by the catalog endpoint).
    pub category_name: Option<String>,

    /// Price in cents (smallest currency unit). A product with no listed
    /// price upstream is normalized to 0 before it reaches this crate.
    pub price_cents: i64,

    /// Whether product is active (soft delete).
    pub is_active: bool,
}

impl Product {
    /// Builds a minimal catalog entry: an active, uncategorized product.
    ///
    /// Convenience for tests and doc examples; the real catalog arrives
    /// fully populated from the product endpoint.
    pub fn catalog_entry(id: &str, name: &str, price_cents: i64) -> Self {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            category_id: None,
            category_name: None,
            price_cents,
            is_active: true,
        }
    }

    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

// =============================================================================
// Discount
// =============================================================================

/// How a discount reduces the payable total.
///
/// ## FixedPerUnit Semantics
/// A `FixedPerUnit` discount is charged **per unit across the whole cart**:
/// a $1.00 fixed discount on a cart holding 3 units (in any combination of
/// lines) discounts $3.00. This is intentional and differs from a flat
/// per-order discount; do not "fix" it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "snake_case")]
#[ts(export)]
pub enum DiscountKind {
    /// Percentage of the cart subtotal, in basis points (1000 = 10%).
    Percentage { bps: u32 },
    /// Fixed amount in cents, applied once per unit in the cart.
    FixedPerUnit { amount_cents: i64 },
}

/// A named promotional rule reducing the payable total.
///
/// Discounts are defined externally (fetched from the discount endpoint,
/// never created here); the pricing engine only consumes them as read-only
/// inputs. A cart has at most one applied discount at a time, or none.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Discount {
    /// Unique identifier (UUID v4 as opaque string).
    pub id: String,

    /// Display name ("Happy hour", "Empleados", ...).
    pub name: String,

    /// Optional longer description for the admin screen.
    pub description: Option<String>,

    /// The rule itself.
    pub kind: DiscountKind,
}

impl Discount {
    /// Builds a percentage discount. `bps` is basis points: 1000 = 10%.
    pub fn percentage(id: &str, name: &str, bps: u32) -> Self {
        Discount {
            id: id.to_string(),
            name: name.to_string(),
            description: None,
            kind: DiscountKind::Percentage { bps },
        }
    }

    /// Builds a fixed-per-unit discount of `amount_cents` per unit.
    pub fn fixed_per_unit(id: &str, name: &str, amount_cents: i64) -> Self {
        Discount {
            id: id.to_string(),
            name: name.to_string(),
            description: None,
            kind: DiscountKind::FixedPerUnit { amount_cents },
        }
    }
}

// =============================================================================
// Sale Record
// =============================================================================

/// One recorded sale line, as returned by the sales-report endpoint.
///
/// Every checkout submission that succeeds becomes one of these server-side;
/// this crate only aggregates them (see [`crate::report`]).
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SaleRecord {
    pub id: String,
    pub product_id: String,
    /// Product name at time of sale (frozen snapshot).
    pub product_name: String,
    /// Units sold in this line.
    pub quantity: i64,
    /// Amount actually charged, after discount.
    pub total_cents: i64,
    /// Discount applied to this line.
    pub discount_cents: i64,
    #[ts(as = "String")]
    pub sold_at: DateTime<Utc>,
    /// Username of the cashier who rang the sale.
    pub seller: String,
}

impl SaleRecord {
    /// Returns the charged amount as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }

    /// Returns the discount amount as Money.
    #[inline]
    pub fn discount(&self) -> Money {
        Money::from_cents(self.discount_cents)
    }
}

// =============================================================================
// Sale Submission
// =============================================================================

/// The independent unit of work handed to the order-submission collaborator.
///
/// The checkout flow submits one of these **per cart line**; submissions are
/// not batched or transactionally grouped, and the pricing engine has no
/// visibility into partial failure across the set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SaleSubmission {
    pub product_id: String,
    pub quantity: i64,
    /// The applied discount id, if any. The same id is carried on every
    /// line of the cart; the server re-derives the amounts.
    pub discount_id: Option<String>,
}

// =============================================================================
// Supply (Inventory Item)
// =============================================================================

/// A tracked inventory item (ingredient/consumable), as returned by the
/// inventory endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Supply {
    pub id: String,
    pub name: String,
    /// Category display name.
    pub category: String,
    /// Current stock on hand, in `unit`s.
    pub stock: i64,
    /// Restock threshold configured by the admin.
    pub min_stock: i64,
    /// Unit of measure ("kg", "unidad", "litro", ...).
    pub unit: String,
}

// =============================================================================
// Unit Tests
// =============================================================================
