//! # Report Rendering
//!
//! Pure text formatting for the sale report and selection listings.
//! Everything here takes read models in and hands a `String` back, so the
//! exact report layout is unit-testable without a terminal or a database.

use tome_core::{SaleReportRow, SaleSummary};

/// Renders one sale as a report block.
///
/// ## Layout
/// ```text
/// ==================== Sale Report ====================
/// Sale #1
/// Date:     2024-01-15
/// Member:   Alice
/// Book:     The Rust Programming Language
/// -----------------------------------------------------
/// Unit Price    Qty    Discount    Subtotal
/// 100           3      50          250
/// -----------------------------------------------------
/// Total: 250
/// =====================================================
/// ```
pub fn sale_block(row: &SaleReportRow) -> String {
    let mut out = String::new();

    out.push_str("\n==================== Sale Report ====================\n");
    out.push_str(&format!("Sale #{}\n", row.id));
    out.push_str(&format!("Date:     {}\n", row.date));
    out.push_str(&format!("Member:   {}\n", row.member_name));
    out.push_str(&format!("Book:     {}\n", row.book_title));
    out.push_str("-----------------------------------------------------\n");
    out.push_str("Unit Price    Qty    Discount    Subtotal\n");
    out.push_str(&format!(
        "{:<14}{:<7}{:<12}{}\n",
        row.unit_price.to_string(),
        row.quantity,
        row.discount.to_string(),
        row.total
    ));
    out.push_str("-----------------------------------------------------\n");
    out.push_str(&format!("Total: {}\n", row.total));
    out.push_str("=====================================================\n");

    out
}

/// Renders the numbered selection listing for update/delete.
pub fn selection_list(sales: &[SaleSummary]) -> String {
    let mut out = String::new();

    out.push_str("\n======== Sales ========\n");
    for (i, sale) in sales.iter().enumerate() {
        out.push_str(&format!(
            "{}. Sale #{} - {} - {}\n",
            i + 1,
            sale.id,
            sale.member_name,
            sale.date
        ));
    }
    out.push_str("=======================\n");

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tome_core::Money;

    fn sample_row() -> SaleReportRow {
        SaleReportRow {
            id: 1,
            date: "2024-01-15".to_string(),
            member_name: "Alice".to_string(),
            book_title: "The Rust Programming Language".to_string(),
            unit_price: Money::from_units(100),
            quantity: 3,
            discount: Money::from_units(50),
            total: Money::from_units(250),
        }
    }

    #[test]
    fn test_sale_block_contains_every_field() {
        let block = sale_block(&sample_row());

        assert!(block.contains("Sale #1"));
        assert!(block.contains("Date:     2024-01-15"));
        assert!(block.contains("Member:   Alice"));
        assert!(block.contains("Book:     The Rust Programming Language"));
        assert!(block.contains("Total: 250"));
    }

    #[test]
    fn test_sale_block_groups_thousands() {
        let mut row = sample_row();
        row.unit_price = Money::from_units(1500);
        row.total = Money::from_units(4450);

        let block = sale_block(&row);
        assert!(block.contains("1,500"));
        assert!(block.contains("Total: 4,450"));
    }

    #[test]
    fn test_selection_list_is_one_based() {
        let sales = vec![
            SaleSummary {
                id: 4,
                date: "2024-01-15".to_string(),
                member_name: "Alice".to_string(),
            },
            SaleSummary {
                id: 9,
                date: "2024-01-16".to_string(),
                member_name: "Bob".to_string(),
            },
        ];

        let listing = selection_list(&sales);
        assert!(listing.contains("1. Sale #4 - Alice - 2024-01-15"));
        assert!(listing.contains("2. Sale #9 - Bob - 2024-01-16"));
    }
}
