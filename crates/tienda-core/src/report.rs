//! # Report Module
//!
//! Pure aggregation over fetched sale records: report totals, per-product
//! and per-date grouping, and dashboard statistics.
//!
//! ## Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Sales endpoint ──► Vec<SaleRecord> ──► summarize / by_product /        │
//! │                                         by_date / DashboardStats        │
//! │                                                 │                       │
//! │                                                 ▼                       │
//! │                                         Reports UI, charts, CSV         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All functions take the records as an immutable snapshot; date-range
//! filtering is inclusive on both ends and compares UTC calendar dates.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::stock::low_stock_count;
use crate::types::{Product, SaleRecord, Supply};

// =============================================================================
// Report Query
// =============================================================================

/// Inclusive date-range filter for report endpoints.
///
/// `None` on either end leaves that end open, matching the original
/// report screens where both date pickers are optional.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ReportQuery {
    #[ts(as = "Option<String>")]
    pub start: Option<NaiveDate>,
    #[ts(as = "Option<String>")]
    pub end: Option<NaiveDate>,
}

impl ReportQuery {
    /// An unbounded query: every record matches.
    pub const fn all() -> Self {
        ReportQuery {
            start: None,
            end: None,
        }
    }

    fn matches(&self, record: &SaleRecord) -> bool {
        let date = record.sold_at.date_naive();
        self.start.map_or(true, |s| date >= s) && self.end.map_or(true, |e| date <= e)
    }

    fn filter<'a>(&self, records: &'a [SaleRecord]) -> impl Iterator<Item = &'a SaleRecord> + 'a {
        // ReportQuery is Copy, so the iterator borrows only the records.
        let query = *self;
        records.iter().filter(move |r| query.matches(r))
    }
}

// =============================================================================
// Sales Summary
// =============================================================================

/// Totals block at the top of the sales report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SalesSummary {
    /// Sum of charged amounts (post-discount).
    pub total_sales: Money,
    /// Sum of discount amounts given away.
    pub total_discounts: Money,
    /// Number of sale lines in range.
    pub sales_count: usize,
}

/// Summarizes the sales matching `query`.
pub fn summarize(records: &[SaleRecord], query: &ReportQuery) -> SalesSummary {
    let mut total_sales = Money::zero();
    let mut total_discounts = Money::zero();
    let mut sales_count = 0;

    for record in query.filter(records) {
        total_sales += record.total();
        total_discounts += record.discount();
        sales_count += 1;
    }

    SalesSummary {
        total_sales,
        total_discounts,
        sales_count,
    }
}

// =============================================================================
// Per-Product Grouping
// =============================================================================

/// One row of the sales-by-product report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ProductSales {
    pub product_id: String,
    pub product_name: String,
    pub sales_count: usize,
    pub total_quantity: i64,
    pub total_revenue: Money,
    pub total_discount: Money,
}

/// Groups sales by product, sorted by revenue descending.
///
/// Ties keep first-appearance order (stable sort), so repeated renders of
/// the same snapshot produce the same table.
pub fn by_product(records: &[SaleRecord], query: &ReportQuery) -> Vec<ProductSales> {
    let mut rows: Vec<ProductSales> = Vec::new();

    for record in query.filter(records) {
        let row = match rows.iter_mut().find(|r| r.product_id == record.product_id) {
            Some(row) => row,
            None => {
                rows.push(ProductSales {
                    product_id: record.product_id.clone(),
                    product_name: record.product_name.clone(),
                    sales_count: 0,
                    total_quantity: 0,
                    total_revenue: Money::zero(),
                    total_discount: Money::zero(),
                });
                rows.last_mut().unwrap()
            }
        };
        row.sales_count += 1;
        row.total_quantity += record.quantity;
        row.total_revenue += record.total();
        row.total_discount += record.discount();
    }

    rows.sort_by(|a, b| b.total_revenue.cmp(&a.total_revenue));
    rows
}

// =============================================================================
// Per-Date Grouping
// =============================================================================

/// One row of the sales-by-date report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DailySales {
    #[ts(as = "String")]
    pub date: NaiveDate,
    pub sales_count: usize,
    pub total_revenue: Money,
    pub total_discount: Money,
}

/// Groups sales by UTC calendar date, newest first.
pub fn by_date(records: &[SaleRecord], query: &ReportQuery) -> Vec<DailySales> {
    let mut rows: Vec<DailySales> = Vec::new();

    for record in query.filter(records) {
        let date = record.sold_at.date_naive();
        let row = match rows.iter_mut().find(|r| r.date == date) {
            Some(row) => row,
            None => {
                rows.push(DailySales {
                    date,
                    sales_count: 0,
                    total_revenue: Money::zero(),
                    total_discount: Money::zero(),
                });
                rows.last_mut().unwrap()
            }
        };
        row.sales_count += 1;
        row.total_revenue += record.total();
        row.total_discount += record.discount();
    }

    rows.sort_by(|a, b| b.date.cmp(&a.date));
    rows
}

// =============================================================================
// Dashboard Statistics
// =============================================================================

/// The number of recent sales shown on the dashboard.
const RECENT_SALES_LIMIT: usize = 10;

/// The dashboard's top-line statistics block.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DashboardStats {
    /// Active catalog products.
    pub total_products: usize,
    /// Sale lines rung in the given month.
    pub monthly_sales: usize,
    /// Supplies at or below their restock threshold.
    pub low_stock_items: usize,
    /// The most recent sales, newest first.
    pub recent_sales: Vec<SaleRecord>,
}

impl DashboardStats {
    /// Computes the stats from fetched snapshots.
    ///
    /// `today` anchors the "this month" window; the surrounding application
    /// passes the current date so this stays a pure function.
    pub fn compute(
        products: &[Product],
        supplies: &[Supply],
        records: &[SaleRecord],
        today: NaiveDate,
    ) -> Self {
        let monthly_sales = records
            .iter()
            .filter(|r| {
                let d = r.sold_at.date_naive();
                d.year() == today.year() && d.month() == today.month()
            })
            .count();

        let mut recent: Vec<&SaleRecord> = records.iter().collect();
        recent.sort_by(|a, b| b.sold_at.cmp(&a.sold_at));

        DashboardStats {
            total_products: products.iter().filter(|p| p.is_active).count(),
            monthly_sales,
            low_stock_items: low_stock_count(supplies),
            recent_sales: recent
                .into_iter()
                .take(RECENT_SALES_LIMIT)
                .cloned()
                .collect(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
