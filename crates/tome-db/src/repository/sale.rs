//! # Sale Repository
//!
//! Database operations for sales. This is where the ledger's one real
//! invariant lives: the sale row and the book's stock always move together.
//!
//! ## Sale Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Sale Lifecycle                                    │
//! │                                                                         │
//! │  1. CREATE                                                             │
//! │     └── create() → INSERT sale + bstock -= qty   (one transaction)     │
//! │                                                                         │
//! │  2. (OPTIONAL) UPDATE DISCOUNT                                         │
//! │     └── update_discount() → recompute total from the book's CURRENT    │
//! │         price × original qty − new discount; qty and stock untouched   │
//! │                                                                         │
//! │  3. (OPTIONAL) DELETE                                                  │
//! │     └── delete() → bstock += qty + DELETE sale   (one transaction)     │
//! │                                                                         │
//! │  Every step is begin → mutate → commit; a failure anywhere rolls the   │
//! │  whole step back, so sale and stock are never observed out of step.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use tome_core::{sale_total, Book, Money, Sale, SaleReportRow, SaleSummary};

/// Outcome of a delete operation.
///
/// A sale can vanish between the selection listing and the confirmed
/// delete. The transaction still commits in that case (nothing to
/// reconcile), but the caller gets a distinct outcome to surface instead
/// of silently claiming success.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// Sale removed and its quantity restored to the book's stock.
    Deleted { restored_quantity: i64 },

    /// No sale matched the id; nothing was changed.
    AlreadyGone,
}

/// Repository for sale database operations.
#[derive(Debug, Clone)]
pub struct SaleRepository {
    pool: SqlitePool,
}

impl SaleRepository {
    /// Creates a new SaleRepository.
    pub fn new(pool: SqlitePool) -> Self {
        SaleRepository { pool }
    }

    /// Records a sale: inserts the sale row and decrements the book's
    /// stock as one atomic unit.
    ///
    /// ## Stock Guard
    /// The shell validates quantity against stock before calling, but the
    /// decrement here carries its own `bstock >= qty` condition. If the
    /// guard fails the transaction rolls back and nothing is persisted.
    ///
    /// ## Returns
    /// The recorded sale with its database-assigned id and computed total.
    pub async fn create(
        &self,
        date: &str,
        member_id: &str,
        book_id: &str,
        quantity: i64,
        discount: Money,
    ) -> DbResult<Sale> {
        debug!(member_id = %member_id, book_id = %book_id, quantity = %quantity, "Recording sale");

        let mut tx = self.pool.begin().await?;

        let book = sqlx::query_as::<_, Book>(
            r#"
            SELECT bid AS id, btitle AS title, bprice AS price, bstock AS stock
            FROM book
            WHERE bid = ?1
            "#,
        )
        .bind(book_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| DbError::not_found("Book", book_id))?;

        if book.stock < quantity {
            return Err(DbError::InsufficientStock {
                book_id: book_id.to_string(),
                available: book.stock,
                requested: quantity,
            });
        }

        let total = sale_total(book.price, quantity, discount);

        let result = sqlx::query(
            r#"
            INSERT INTO sale (sdate, mid, bid, sqty, sdiscount, stotal)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
        )
        .bind(date)
        .bind(member_id)
        .bind(book_id)
        .bind(quantity)
        .bind(discount)
        .bind(total)
        .execute(&mut *tx)
        .await?;
        let id = result.last_insert_rowid();

        // Conditional decrement: the guard re-checks stock inside the
        // transaction, so the pre-check above can never be stale.
        let updated = sqlx::query(
            r#"
            UPDATE book
            SET bstock = bstock - ?1
            WHERE bid = ?2 AND bstock >= ?1
            "#,
        )
        .bind(quantity)
        .bind(book_id)
        .execute(&mut *tx)
        .await?;

        if updated.rows_affected() == 0 {
            // Dropping tx rolls the insert back
            return Err(DbError::InsufficientStock {
                book_id: book_id.to_string(),
                available: book.stock,
                requested: quantity,
            });
        }

        tx.commit()
            .await
            .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

        Ok(Sale {
            id,
            date: date.to_string(),
            member_id: member_id.to_string(),
            book_id: book_id.to_string(),
            quantity,
            discount,
            total,
        })
    }

    /// Reads the full sale report: every sale joined with member name and
    /// book title, ordered by sale id ascending. No mutation.
    pub async fn report(&self) -> DbResult<Vec<SaleReportRow>> {
        let rows = sqlx::query_as::<_, SaleReportRow>(
            r#"
            SELECT
                s.sid       AS id,
                s.sdate     AS date,
                m.mname     AS member_name,
                b.btitle    AS book_title,
                b.bprice    AS unit_price,
                s.sqty      AS quantity,
                s.sdiscount AS discount,
                s.stotal    AS total
            FROM sale s
            JOIN member m ON s.mid = m.mid
            JOIN book b ON s.bid = b.bid
            ORDER BY s.sid
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Lists sale summaries (id, date, member name) for the update/delete
    /// selection menus, ordered by sale id ascending.
    pub async fn list_summaries(&self) -> DbResult<Vec<SaleSummary>> {
        let summaries = sqlx::query_as::<_, SaleSummary>(
            r#"
            SELECT s.sid AS id, s.sdate AS date, m.mname AS member_name
            FROM sale s
            JOIN member m ON s.mid = m.mid
            ORDER BY s.sid
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(summaries)
    }

    /// Updates a sale's discount and recomputes its total.
    ///
    /// The total is recomputed from the sale's original quantity and the
    /// book's price at read time, not the price effective when the sale
    /// was first recorded. Quantity and stock are untouched.
    ///
    /// ## Returns
    /// The new total.
    pub async fn update_discount(&self, id: i64, discount: Money) -> DbResult<Money> {
        debug!(id = %id, discount = %discount, "Updating sale discount");

        let mut tx = self.pool.begin().await?;

        let row: Option<(i64, Money)> = sqlx::query_as(
            r#"
            SELECT s.sqty, b.bprice
            FROM sale s
            JOIN book b ON s.bid = b.bid
            WHERE s.sid = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;

        let (quantity, price) = row.ok_or_else(|| DbError::not_found("Sale", id.to_string()))?;

        let total = sale_total(price, quantity, discount);

        sqlx::query("UPDATE sale SET sdiscount = ?1, stotal = ?2 WHERE sid = ?3")
            .bind(discount)
            .bind(total)
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit()
            .await
            .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

        Ok(total)
    }

    /// Deletes a sale and restores its quantity to the book's stock as
    /// one atomic unit.
    ///
    /// If no sale matches the id, the restore step is skipped and the
    /// commit still proceeds; the caller receives
    /// [`DeleteOutcome::AlreadyGone`] to surface.
    pub async fn delete(&self, id: i64) -> DbResult<DeleteOutcome> {
        debug!(id = %id, "Deleting sale");

        let mut tx = self.pool.begin().await?;

        let row: Option<(String, i64)> =
            sqlx::query_as("SELECT bid, sqty FROM sale WHERE sid = ?1")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;

        let outcome = match row {
            Some((book_id, quantity)) => {
                sqlx::query("UPDATE book SET bstock = bstock + ?1 WHERE bid = ?2")
                    .bind(quantity)
                    .bind(&book_id)
                    .execute(&mut *tx)
                    .await?;

                sqlx::query("DELETE FROM sale WHERE sid = ?1")
                    .bind(id)
                    .execute(&mut *tx)
                    .await?;

                DeleteOutcome::Deleted {
                    restored_quantity: quantity,
                }
            }
            None => DeleteOutcome::AlreadyGone,
        };

        tx.commit()
            .await
            .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

        Ok(outcome)
    }

    /// Counts sales (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM sale")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};
    use tome_core::{Book, Member};

    /// In-memory database seeded with the canonical test fixtures:
    /// member M1/Alice, book B1 priced 100 with stock 10.
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

    async fn stock_of(db: &Database, id: &str) -> i64 {
        db.books().get_by_id(id).await.unwrap().unwrap().stock
    }

    #[tokio::test]
    async fn test_create_decrements_stock_and_computes_total() {
        let db = ledger().await;

        let sale = db
            .sales()
            .create("2024-01-15", "M1", "B1", 3, Money::from_units(50))
            .await
            .unwrap();

        // price 100 × qty 3 − discount 50 = 250, stock 10 → 7
        assert_eq!(sale.total, Money::from_units(250));
        assert_eq!(stock_of(&db, "B1").await, 7);

        let report = db.sales().report().await.unwrap();
        assert_eq!(report.len(), 1);
        assert_eq!(report[0].id, sale.id);
        assert_eq!(report[0].member_name, "Alice");
        assert_eq!(report[0].book_title, "The Rust Programming Language");
        assert_eq!(report[0].unit_price, Money::from_units(100));
        assert_eq!(report[0].quantity, 3);
        assert_eq!(report[0].discount, Money::from_units(50));
        assert_eq!(report[0].total, Money::from_units(250));
    }

    #[tokio::test]
    async fn test_create_with_insufficient_stock_mutates_nothing() {
        let db = ledger().await;

        let err = db
            .sales()
            .create("2024-01-15", "M1", "B1", 99, Money::zero())
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            DbError::InsufficientStock {
                available: 10,
                requested: 99,
                ..
            }
        ));
        assert_eq!(stock_of(&db, "B1").await, 10);
        assert_eq!(db.sales().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_create_against_unknown_book() {
        let db = ledger().await;

        let err = db
            .sales()
            .create("2024-01-15", "M1", "B9", 1, Money::zero())
            .await
            .unwrap_err();

        assert!(matches!(err, DbError::NotFound { .. }));
        assert_eq!(db.sales().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_create_against_unknown_member_rolls_back() {
        let db = ledger().await;

        // The shell pre-checks the member, but the FK constraint is the
        // backstop; the whole transaction must roll back, stock included.
        let err = db
            .sales()
            .create("2024-01-15", "M9", "B1", 3, Money::zero())
            .await
            .unwrap_err();

        assert!(matches!(err, DbError::ForeignKeyViolation { .. }));
        assert_eq!(stock_of(&db, "B1").await, 10);
        assert_eq!(db.sales().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_delete_restores_stock_and_removes_row() {
        let db = ledger().await;

        let sale = db
            .sales()
            .create("2024-01-15", "M1", "B1", 3, Money::from_units(50))
            .await
            .unwrap();
        assert_eq!(stock_of(&db, "B1").await, 7);

        let outcome = db.sales().delete(sale.id).await.unwrap();
        assert_eq!(
            outcome,
            DeleteOutcome::Deleted {
                restored_quantity: 3
            }
        );
        assert_eq!(stock_of(&db, "B1").await, 10);
        assert!(db.sales().report().await.unwrap().is_empty());
        assert!(db.sales().list_summaries().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_vanished_sale_is_surfaced_noop() {
        let db = ledger().await;

        let outcome = db.sales().delete(42).await.unwrap();
        assert_eq!(outcome, DeleteOutcome::AlreadyGone);
        assert_eq!(stock_of(&db, "B1").await, 10);
    }

    #[tokio::test]
    async fn test_update_discount_recomputes_total_only() {
        let db = ledger().await;

        let sale = db
            .sales()
            .create("2024-01-15", "M1", "B1", 3, Money::from_units(50))
            .await
            .unwrap();

        let total = db
            .sales()
            .update_discount(sale.id, Money::from_units(20))
            .await
            .unwrap();

        // 100 × 3 − 20 = 280; quantity and stock untouched
        assert_eq!(total, Money::from_units(280));
        assert_eq!(stock_of(&db, "B1").await, 7);

        let report = db.sales().report().await.unwrap();
        assert_eq!(report[0].quantity, 3);
        assert_eq!(report[0].discount, Money::from_units(20));
        assert_eq!(report[0].total, Money::from_units(280));
    }

    #[tokio::test]
    async fn test_update_discount_uses_current_book_price() {
        let db = ledger().await;

        let sale = db
            .sales()
            .create("2024-01-15", "M1", "B1", 3, Money::zero())
            .await
            .unwrap();
        assert_eq!(sale.total, Money::from_units(300));

        // Reprice the book after the sale was recorded
        sqlx::query("UPDATE book SET bprice = 150 WHERE bid = 'B1'")
            .execute(db.pool())
            .await
            .unwrap();

        let total = db
            .sales()
            .update_discount(sale.id, Money::zero())
            .await
            .unwrap();

        // Recompute uses the CURRENT price: 150 × 3 − 0 = 450
        assert_eq!(total, Money::from_units(450));
    }

    #[tokio::test]
    async fn test_update_discount_on_missing_sale() {
        let db = ledger().await;

        let err = db
            .sales()
            .update_discount(42, Money::zero())
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_report_and_listing_order_by_id() {
        let db = ledger().await;
        let sales = db.sales();

        sales
            .create("2024-01-15", "M1", "B1", 1, Money::zero())
            .await
            .unwrap();
        sales
            .create("2024-01-16", "M1", "B1", 2, Money::zero())
            .await
            .unwrap();
        sales
            .create("2024-01-17", "M1", "B1", 3, Money::zero())
            .await
            .unwrap();

        let report = sales.report().await.unwrap();
        let ids: Vec<i64> = report.iter().map(|r| r.id).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted);

        let summaries = sales.list_summaries().await.unwrap();
        assert_eq!(summaries.len(), 3);
        assert_eq!(summaries[0].member_name, "Alice");
        assert_eq!(summaries[0].date, "2024-01-15");
    }

    #[tokio::test]
    async fn test_report_on_empty_ledger() {
        let db = ledger().await;
        assert!(db.sales().report().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_discount_exceeding_gross_stores_negative_total() {
        let db = ledger().await;

        let sale = db
            .sales()
            .create("2024-01-15", "M1", "B1", 1, Money::from_units(150))
            .await
            .unwrap();

        assert_eq!(sale.total, Money::from_units(-50));
        let report = db.sales().report().await.unwrap();
        assert_eq!(report[0].total, Money::from_units(-50));
    }
}
