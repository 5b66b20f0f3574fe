//! # Export Module
//!
//! CSV export building for the admin download button: inventory snapshot
//! and the day's sales. Pure string building - the surrounding application
//! serves the bytes and names the download; nothing here touches a file.
//!
//! Fields are quoted per RFC 4180 when they contain a comma, quote, or
//! newline; embedded quotes are doubled.

use chrono::NaiveDate;

use crate::types::{SaleRecord, Supply};

/// Header row of the inventory sheet.
const INVENTORY_HEADER: &str = "categoria,insumo,cantidad_actual,unidad,stock_minimo";

/// Header row of the daily-sales sheet.
const DAILY_SALES_HEADER: &str = "producto,cantidad_vendida,fecha";

// =============================================================================
// CSV Builders
// =============================================================================

/// Builds the inventory CSV: one row per supply, ordered by category then
/// name (the admin sheet ordering).
pub fn inventory_csv(supplies: &[Supply]) -> String {
    let mut sorted: Vec<&Supply> = supplies.iter().collect();
    sorted.sort_by(|a, b| a.category.cmp(&b.category).then_with(|| a.name.cmp(&b.name)));

    let mut out = String::from(INVENTORY_HEADER);
    out.push('\n');
    for supply in sorted {
        push_row(
            &mut out,
            &[
                &supply.category,
                &supply.name,
                &supply.stock.to_string(),
                &supply.unit,
                &supply.min_stock.to_string(),
            ],
        );
    }
    out
}

/// Builds the daily-sales CSV for `date`: units sold per product on that
/// UTC calendar date, in first-sale order.
pub fn daily_sales_csv(records: &[SaleRecord], date: NaiveDate) -> String {
    let mut rows: Vec<(String, i64)> = Vec::new();
    for record in records.iter().filter(|r| r.sold_at.date_naive() == date) {
        match rows.iter_mut().find(|(name, _)| *name == record.product_name) {
            Some((_, qty)) => *qty += record.quantity,
            None => rows.push((record.product_name.clone(), record.quantity)),
        }
    }

    let date = date.format("%Y-%m-%d").to_string();
    let mut out = String::from(DAILY_SALES_HEADER);
    out.push('\n');
    for (name, qty) in rows {
        push_row(&mut out, &[&name, &qty.to_string(), &date]);
    }
    out
}

/// Builds the download filename: `prefix_YYYY-MM-DD.csv`.
pub fn export_filename(prefix: &str, date: NaiveDate) -> String {
    format!("{}_{}.csv", prefix, date.format("%Y-%m-%d"))
}

// =============================================================================
// Field Quoting
// =============================================================================

fn push_row(out: &mut String, fields: &[&str]) {
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        push_field(out, field);
    }
    out.push('\n');
}

fn push_field(out: &mut String, field: &str) {
    if field.contains([',', '"', '\n', '\r']) {
        out.push('"');
        for c in field.chars() {
            if c == '"' {
                out.push('"');
            }
            out.push(c);
        }
        out.push('"');
    } else {
        out.push_str(field);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn supply(name: &str, category: &str, stock: i64, min_stock: i64) -> Supply {
        Supply {
            id: format!("id-{name}"),
            name: name.to_string(),
            category: category.to_string(),
            stock,
            min_stock,
            unit: "kg".to_string(),
        }
    }

    #[test]
    fn test_inventory_csv_sorted_by_category_then_name() {
        let supplies = vec![
            supply("Vasos", "Descartables", 200, 50),
            supply("Café", "Bebidas", 5, 10),
            supply("Té", "Bebidas", 30, 10),
        ];

        let csv = inventory_csv(&supplies);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(
            lines,
            vec![
                "categoria,insumo,cantidad_actual,unidad,stock_minimo",
                "Bebidas,Café,5,kg,10",
                "Bebidas,Té,30,kg,10",
                "Descartables,Vasos,200,kg,50",
            ]
        );
    }

    #[test]
    fn test_inventory_csv_empty() {
        assert_eq!(
            inventory_csv(&[]),
            "categoria,insumo,cantidad_actual,unidad,stock_minimo\n"
        );
    }

    #[test]
    fn test_fields_with_commas_and_quotes_are_escaped() {
        let supplies = vec![supply("Azúcar \"blanca\", refinada", "Insumos", 10, 5)];
        let csv = inventory_csv(&supplies);
        assert!(csv.contains(r#"Insumos,"Azúcar ""blanca"", refinada",10,kg,5"#));
    }

    #[test]
    fn test_daily_sales_csv_groups_by_product() {
        let sold_at = |day: u32| Utc.with_ymd_and_hms(2025, 3, day, 10, 0, 0).unwrap();
        let records = vec![
            SaleRecord {
                id: "s1".to_string(),
                product_id: "a".to_string(),
                product_name: "Americano".to_string(),
                quantity: 2,
                total_cents: 2000,
                discount_cents: 0,
                sold_at: sold_at(1),
                seller: "ana".to_string(),
            },
            SaleRecord {
                id: "s2".to_string(),
                product_id: "a".to_string(),
                product_name: "Americano".to_string(),
                quantity: 1,
                total_cents: 1000,
                discount_cents: 0,
                sold_at: sold_at(1),
                seller: "ana".to_string(),
            },
            // Different day - excluded
            SaleRecord {
                id: "s3".to_string(),
                product_id: "a".to_string(),
                product_name: "Americano".to_string(),
                quantity: 9,
                total_cents: 9000,
                discount_cents: 0,
                sold_at: sold_at(2),
                seller: "ana".to_string(),
            },
        ];

        let date = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        let csv = daily_sales_csv(&records, date);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(
            lines,
            vec!["producto,cantidad_vendida,fecha", "Americano,3,2025-03-01"]
        );
    }

    #[test]
    fn test_export_filename() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        assert_eq!(export_filename("inventario", date), "inventario_2025-03-01.csv");
    }
}
