//! # Interactive Shell
//!
//! The menu loop driving the ledger.
//!
//! ## Control Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Shell Control Flow                              │
//! │                                                                         │
//! │  ┌──────────────┐   choice    ┌──────────────────────────────────────┐ │
//! │  │  Menu loop   │ ──────────► │ 1. record sale                       │ │
//! │  │              │             │ 2. sale report                       │ │
//! │  │  empty or 5  │             │ 3. update sale (discount)            │ │
//! │  │  ends loop   │             │ 4. delete sale                       │ │
//! │  └──────────────┘             └──────────────────────────────────────┘ │
//! │         ▲                                     │                         │
//! │         │      "=> Error: ..." on failure,    │                         │
//! │         └──────── back to the menu ───────────┘                         │
//! │                                                                         │
//! │  Handler order for record sale (validation before any mutation):       │
//! │  date → member exists → book exists → qty positive → qty ≤ stock       │
//! │  → discount non-negative → one atomic transaction in tome-db           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The shell is generic over its input/output streams so a whole session
//! can be scripted in tests with in-memory buffers.

use std::io::{BufRead, Write};

use tracing::{error, info, warn};

use crate::error::AppError;
use crate::render;
use tome_core::validation::{
    parse_discount, parse_quantity, parse_selection, validate_sale_date,
};
use tome_core::{CoreError, SaleSummary};
use tome_db::{Database, DeleteOutcome};

/// The interactive ledger shell.
///
/// Holds the explicitly passed database handle for the session; the
/// caller owns the handle and closes it after `run` returns.
pub struct Shell<R, W> {
    db: Database,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Creates a shell over the given streams.
    pub fn new(db: Database, input: R, output: W) -> Self {
        Shell { db, input, output }
    }

    /// Runs the menu loop until the operator quits.
    ///
    /// Empty input or option 5 ends the loop. Handler errors are printed
    /// and the menu redisplays; only terminal I/O failures propagate.
    pub async fn run(&mut self) -> Result<(), AppError> {
        loop {
            self.write_menu()?;
            let choice = self.prompt("Choose an option (Enter to quit): ")?;

            match choice.as_str() {
                "" | "5" => break,
                "1" => {
                    if let Err(err) = self.record_sale().await {
                        writeln!(self.output, "=> Error: {}", err)?;
                    }
                }
                "2" => {
                    if let Err(err) = self.print_report().await {
                        writeln!(self.output, "=> Error: {}", err)?;
                    }
                }
                "3" => {
                    if let Err(err) = self.update_sale().await {
                        writeln!(self.output, "=> Error: {}", err)?;
                    }
                }
                "4" => {
                    if let Err(err) = self.delete_sale().await {
                        writeln!(self.output, "=> Error: {}", err)?;
                    }
                }
                _ => {
                    writeln!(self.output, "=> Please enter a valid option (1-5)")?;
                }
            }
        }

        writeln!(self.output, "\n=> Goodbye")?;
        Ok(())
    }

    fn write_menu(&mut self) -> Result<(), AppError> {
        writeln!(self.output, "\n*************** Menu ***************")?;
        writeln!(self.output, "1. Record a sale")?;
        writeln!(self.output, "2. Show sale report")?;
        writeln!(self.output, "3. Update a sale")?;
        writeln!(self.output, "4. Delete a sale")?;
        writeln!(self.output, "5. Quit")?;
        writeln!(self.output, "************************************")?;
        Ok(())
    }

    /// Writes a prompt and reads one trimmed line. EOF reads as empty
    /// input, which every prompt treats as cancel/quit.
    fn prompt(&mut self, message: &str) -> Result<String, AppError> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(line.trim().to_string())
    }

    // =========================================================================
    // Handlers
    // =========================================================================

    /// Records a sale. Validation order: date format → member existence →
    /// book existence → positive quantity → quantity ≤ stock →
    /// non-negative discount. Any failure aborts before any mutation.
    async fn record_sale(&mut self) -> Result<(), AppError> {
        let date = self.prompt("Sale date (YYYY-MM-DD): ")?;
        validate_sale_date(&date)?;

        let member_id = self.prompt("Member id: ")?;
        let member = self
            .db
            .members()
            .get_by_id(&member_id)
            .await?
            .ok_or(CoreError::MemberNotFound(member_id))?;

        let book_id = self.prompt("Book id: ")?;
        let book = self
            .db
            .books()
            .get_by_id(&book_id)
            .await?
            .ok_or(CoreError::BookNotFound(book_id))?;

        let quantity = parse_quantity(&self.prompt("Quantity: ")?)?;
        if book.stock < quantity {
            return Err(CoreError::InsufficientStock {
                book_id: book.id,
                available: book.stock,
                requested: quantity,
            }
            .into());
        }

        let discount = parse_discount(&self.prompt("Discount amount: ")?)?;

        // All inputs validated; the repository commits the sale row and
        // the stock decrement as one transaction.
        let sale = self
            .db
            .sales()
            .create(&date, &member.id, &book.id, quantity, discount)
            .await?;

        info!(sale_id = %sale.id, total = %sale.total, "Sale recorded");
        writeln!(self.output, "=> Sale recorded! (total: {})", sale.total)?;
        Ok(())
    }

    /// Prints the full sale report, one block per sale.
    async fn print_report(&mut self) -> Result<(), AppError> {
        let rows = self.db.sales().report().await?;

        if rows.is_empty() {
            writeln!(self.output, "=> No sale records yet")?;
            return Ok(());
        }

        for row in &rows {
            write!(self.output, "{}", render::sale_block(row))?;
        }
        Ok(())
    }

    /// Updates a selected sale's discount and recomputed total.
    async fn update_sale(&mut self) -> Result<(), AppError> {
        let sales = self.list_or_empty().await;
        if sales.is_empty() {
            writeln!(self.output, "=> No sales available to update")?;
            return Ok(());
        }

        write!(self.output, "{}", render::selection_list(&sales))?;
        let input = self.prompt("Select a sale (number, Enter to cancel): ")?;
        let Some(index) = parse_selection(&input, sales.len())? else {
            writeln!(self.output, "=> Update cancelled")?;
            return Ok(());
        };
        let sale_id = sales[index].id;

        let discount = parse_discount(&self.prompt("New discount amount: ")?)?;

        let total = self.db.sales().update_discount(sale_id, discount).await?;

        info!(sale_id = %sale_id, total = %total, "Sale updated");
        writeln!(
            self.output,
            "=> Sale #{} updated! (total: {})",
            sale_id, total
        )?;
        Ok(())
    }

    /// Deletes a selected sale after explicit confirmation, restoring its
    /// quantity to the book's stock.
    async fn delete_sale(&mut self) -> Result<(), AppError> {
        let sales = self.list_or_empty().await;
        if sales.is_empty() {
            writeln!(self.output, "=> No sales available to delete")?;
            return Ok(());
        }

        write!(self.output, "{}", render::selection_list(&sales))?;
        let input = self.prompt("Select a sale (number, Enter to cancel): ")?;
        let Some(index) = parse_selection(&input, sales.len())? else {
            writeln!(self.output, "=> Delete cancelled")?;
            return Ok(());
        };
        let sale_id = sales[index].id;

        let confirm = self.prompt(&format!("Delete sale #{}? (y/n): ", sale_id))?;
        if !confirm.eq_ignore_ascii_case("y") {
            writeln!(self.output, "=> Delete cancelled")?;
            return Ok(());
        }

        match self.db.sales().delete(sale_id).await? {
            DeleteOutcome::Deleted { .. } => {
                info!(sale_id = %sale_id, "Sale deleted");
                writeln!(self.output, "=> Sale #{} deleted", sale_id)?;
            }
            DeleteOutcome::AlreadyGone => {
                // The row vanished between listing and confirmation; the
                // commit proceeded with nothing to reconcile.
                warn!(sale_id = %sale_id, "Sale already gone at delete time");
                writeln!(
                    self.output,
                    "=> Sale #{} was already removed, nothing to delete",
                    sale_id
                )?;
            }
        }
        Ok(())
    }

    /// Selection listing for update/delete. A read failure is logged and
    /// rendered as an empty listing rather than aborting the operation.
    async fn list_or_empty(&self) -> Vec<SaleSummary> {
        match self.db.sales().list_summaries().await {
            Ok(sales) => sales,
            Err(err) => {
                error!(%err, "Failed to list sales");
                Vec::new()
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tome_core::{Book, Member, Money};
    use tome_db::DbConfig;

    /// In-memory ledger with member M1/Alice and book B1 (price 100,
    /// stock 10).
    async fn ledger() -> Database {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        db.members()
            .insert(&Member {
                id: "M1".to_string(),
                name: "Alice".to_string(),
            })
            .await
            .unwrap();
        db.books()
            .insert(&Book {
                id: "B1".to_string(),
                title: "The Rust Programming Language".to_string(),
                price: Money::from_units(100),
                stock: 10,
            })
            .await
            .unwrap();
        db
    }

    /// Runs a scripted session and returns everything the shell printed.
    async fn run_session(db: &Database, script: &str) -> String {
        let input = Cursor::new(script.as_bytes().to_vec());
        let mut output: Vec<u8> = Vec::new();
        let mut shell = Shell::new(db.clone(), input, &mut output);
        shell.run().await.unwrap();
        String::from_utf8(output).unwrap()
    }

    async fn stock_of(db: &Database, id: &str) -> i64 {
        db.books().get_by_id(id).await.unwrap().unwrap().stock
    }

    #[tokio::test]
    async fn test_record_sale_and_report() {
        let db = ledger().await;

        let out = run_session(&db, "1\n2024-01-15\nM1\nB1\n3\n50\n2\n5\n").await;

        assert!(out.contains("=> Sale recorded! (total: 250)"));
        assert!(out.contains("Member:   Alice"));
        assert!(out.contains("Total: 250"));
        assert!(out.contains("=> Goodbye"));
        assert_eq!(stock_of(&db, "B1").await, 7);
    }

    #[tokio::test]
    async fn test_bad_date_aborts_before_any_other_prompt() {
        let db = ledger().await;

        let out = run_session(&db, "1\n2024-13-01\n5\n").await;

        assert!(out.contains("=> Error: month must be between 1 and 12"));
        assert_eq!(db.sales().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_unknown_member_aborts() {
        let db = ledger().await;

        let out = run_session(&db, "1\n2024-01-15\nM9\n5\n").await;

        assert!(out.contains("=> Error: Member not found: M9"));
        assert_eq!(db.sales().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_insufficient_stock_aborts_without_mutation() {
        let db = ledger().await;

        let out = run_session(&db, "1\n2024-01-15\nM1\nB1\n99\n5\n").await;

        assert!(out.contains("Insufficient stock for B1: available 10, requested 99"));
        assert_eq!(stock_of(&db, "B1").await, 10);
        assert_eq!(db.sales().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_zero_quantity_rejected() {
        let db = ledger().await;

        let out = run_session(&db, "1\n2024-01-15\nM1\nB1\n0\n5\n").await;

        assert!(out.contains("=> Error: quantity must be positive"));
        assert_eq!(db.sales().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_report_on_empty_ledger() {
        let db = ledger().await;

        let out = run_session(&db, "2\n5\n").await;

        assert!(out.contains("=> No sale records yet"));
    }

    #[tokio::test]
    async fn test_update_flow_recomputes_total() {
        let db = ledger().await;
        db.sales()
            .create("2024-01-15", "M1", "B1", 3, Money::from_units(50))
            .await
            .unwrap();

        // Select entry 1, set discount to 20: 100 × 3 − 20 = 280
        let out = run_session(&db, "3\n1\n20\n5\n").await;

        assert!(out.contains("1. Sale #"));
        assert!(out.contains("updated! (total: 280)"));
        assert_eq!(stock_of(&db, "B1").await, 7);
    }

    #[tokio::test]
    async fn test_update_cancel_on_empty_selection() {
        let db = ledger().await;
        db.sales()
            .create("2024-01-15", "M1", "B1", 3, Money::zero())
            .await
            .unwrap();

        let out = run_session(&db, "3\n\n5\n").await;

        assert!(out.contains("=> Update cancelled"));
    }

    #[tokio::test]
    async fn test_delete_flow_restores_stock() {
        let db = ledger().await;
        let sale = db
            .sales()
            .create("2024-01-15", "M1", "B1", 3, Money::from_units(50))
            .await
            .unwrap();
        assert_eq!(stock_of(&db, "B1").await, 7);

        let out = run_session(&db, "4\n1\ny\n5\n").await;

        assert!(out.contains(&format!("=> Sale #{} deleted", sale.id)));
        assert_eq!(stock_of(&db, "B1").await, 10);
        assert!(db.sales().report().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_declined_confirmation() {
        let db = ledger().await;
        db.sales()
            .create("2024-01-15", "M1", "B1", 3, Money::zero())
            .await
            .unwrap();

        let out = run_session(&db, "4\n1\nn\n5\n").await;

        assert!(out.contains("=> Delete cancelled"));
        assert_eq!(stock_of(&db, "B1").await, 7);
        assert_eq!(db.sales().count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_delete_with_no_sales() {
        let db = ledger().await;

        let out = run_session(&db, "4\n5\n").await;

        assert!(out.contains("=> No sales available to delete"));
    }

    #[tokio::test]
    async fn test_invalid_menu_choice_redisplays() {
        let db = ledger().await;

        let out = run_session(&db, "9\n5\n").await;

        assert!(out.contains("=> Please enter a valid option (1-5)"));
        // Menu printed twice: once before the bad choice, once after
        assert_eq!(out.matches("*************** Menu ***************").count(), 2);
    }

    #[tokio::test]
    async fn test_empty_input_quits_with_goodbye() {
        let db = ledger().await;

        let out = run_session(&db, "\n").await;

        assert!(out.contains("=> Goodbye"));
    }
}
