//! # Stock Module
//!
//! Stock status classification and low-stock alerting.
//!
//! ## Classification Bands
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  stock relative to min_stock              Status    Badge               │
//! │  ─────────────────────────────            ──────    ─────               │
//! │  stock <= min_stock                       Low       red "Bajo"          │
//! │  stock <= min_stock × 1.5                 Medium    yellow "Medio"      │
//! │  otherwise                                Good      green "Bueno"       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The 1.5× band is computed in integer math (`stock × 2 <= min_stock × 3`)
//! so classification stays exact for any stock level.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::Supply;

// =============================================================================
// Stock Status
// =============================================================================

/// Stock health band for one inventory item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum StockStatus {
    /// At or below the restock threshold. Shows in the alert banner.
    Low,
    /// Within 1.5× of the threshold. Restock soon.
    Medium,
    /// Comfortably above the threshold.
    Good,
}

impl StockStatus {
    /// Classifies a stock level against its restock threshold.
    ///
    /// ## Example
    /// ```rust
    /// use tienda_core::stock::StockStatus;
    ///
    /// assert_eq!(StockStatus::classify(10, 10), StockStatus::Low);
    /// assert_eq!(StockStatus::classify(15, 10), StockStatus::Medium);
    /// assert_eq!(StockStatus::classify(16, 10), StockStatus::Good);
    /// ```
    pub fn classify(stock: i64, min_stock: i64) -> Self {
        if stock <= min_stock {
            StockStatus::Low
        } else if stock * 2 <= min_stock * 3 {
            StockStatus::Medium
        } else {
            StockStatus::Good
        }
    }
}

impl Supply {
    /// This supply's stock status band.
    #[inline]
    pub fn status(&self) -> StockStatus {
        StockStatus::classify(self.stock, self.min_stock)
    }

    /// Whether this supply is at or below its restock threshold.
    #[inline]
    pub fn is_low(&self) -> bool {
        self.status() == StockStatus::Low
    }
}

// =============================================================================
// Inventory Queries
// =============================================================================

/// Returns the supplies at or below their restock threshold, in input order.
///
/// Fuels the red alert banner ("N producto(s) con stock bajo") and the
/// dashboard low-stock counter.
pub fn low_stock(supplies: &[Supply]) -> Vec<&Supply> {
    supplies.iter().filter(|s| s.is_low()).collect()
}

/// Counts supplies at or below their restock threshold.
pub fn low_stock_count(supplies: &[Supply]) -> usize {
    supplies.iter().filter(|s| s.is_low()).count()
}

/// Case-insensitive name/category filter for the inventory table.
///
/// An empty term matches everything.
pub fn search<'a>(supplies: &'a [Supply], term: &str) -> Vec<&'a Supply> {
    let term = term.trim().to_lowercase();
    supplies
        .iter()
        .filter(|s| {
            term.is_empty()
                || s.name.to_lowercase().contains(&term)
                || s.category.to_lowercase().contains(&term)
        })
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn supply(name: &str, category: &str, stock: i64, min_stock: i64) -> Supply {
        Supply {
            id: format!("id-{name}"),
            name: name.to_string(),
            category: category.to_string(),
            stock,
            min_stock,
            unit: "unidad".to_string(),
        }
    }

    #[test]
    fn test_classify_bands() {
        // At or below threshold: Low
        assert_eq!(StockStatus::classify(0, 10), StockStatus::Low);
        assert_eq!(StockStatus::classify(10, 10), StockStatus::Low);
        // Within 1.5×: Medium (15 = 10 × 1.5, inclusive)
        assert_eq!(StockStatus::classify(11, 10), StockStatus::Medium);
        assert_eq!(StockStatus::classify(15, 10), StockStatus::Medium);
        // Above: Good
        assert_eq!(StockStatus::classify(16, 10), StockStatus::Good);
        assert_eq!(StockStatus::classify(100, 10), StockStatus::Good);
    }

    #[test]
    fn test_classify_odd_threshold_is_exact() {
        // min_stock 5 → 1.5× = 7.5; 7 is Medium, 8 is Good. Integer math
        // must not truncate the band edge.
        assert_eq!(StockStatus::classify(7, 5), StockStatus::Medium);
        assert_eq!(StockStatus::classify(8, 5), StockStatus::Good);
    }

    #[test]
    fn test_classify_zero_threshold() {
        // No threshold configured: anything on hand is Good, empty is Low.
        assert_eq!(StockStatus::classify(0, 0), StockStatus::Low);
        assert_eq!(StockStatus::classify(1, 0), StockStatus::Good);
    }

    #[test]
    fn test_low_stock_filter_and_count() {
        let supplies = vec![
            supply("Café", "Bebidas", 2, 10),
            supply("Azúcar", "Insumos", 50, 10),
            supply("Vasos", "Descartables", 10, 10),
        ];

        let low = low_stock(&supplies);
        let names: Vec<&str> = low.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Café", "Vasos"]);
        assert_eq!(low_stock_count(&supplies), 2);
    }

    #[test]
    fn test_search_matches_name_and_category() {
        let supplies = vec![
            supply("Café", "Bebidas", 2, 10),
            supply("Azúcar", "Insumos", 50, 10),
            supply("Vasos", "Descartables", 10, 10),
        ];

        assert_eq!(search(&supplies, "café").len(), 1);
        assert_eq!(search(&supplies, "DESCARTABLES").len(), 1);
        assert_eq!(search(&supplies, "").len(), 3);
        assert_eq!(search(&supplies, "zzz").len(), 0);
    }
}
