//! # Book Repository
//!
//! Database operations for books.
//!
//! ## Stock Updates
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Stock Update Strategy                                │
//! │                                                                         │
//! │  ❌ WRONG: Absolute update (loses interleaved changes)                 │
//! │     UPDATE book SET bstock = 7 WHERE bid = ?                           │
//! │                                                                         │
//! │  ✅ CORRECT: Delta update                                              │
//! │     UPDATE book SET bstock = bstock - 3 WHERE bid = ? AND bstock >= 3  │
//! │                                                                         │
//! │  The WHERE guard keeps bstock from ever going negative, and the        │
//! │  CHECK constraint in the schema backs it up.                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Sale creation/deletion adjust stock inside their own transactions in
//! [`crate::repository::sale`]; `adjust_stock` here is the standalone
//! variant for seeding and restock-style corrections.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use tome_core::Book;

/// Repository for book database operations.
#[derive(Debug, Clone)]
pub struct BookRepository {
    pool: SqlitePool,
}

impl BookRepository {
    /// Creates a new BookRepository.
    pub fn new(pool: SqlitePool) -> Self {
        BookRepository { pool }
    }

    /// Gets a book by business id.
    ///
    /// ## Returns
    /// * `Ok(Some(Book))` - Book found
    /// * `Ok(None)` - Book not found
    pub async fn get_by_id(&self, id: &str) -> DbResult<Option<Book>> {
        let book = sqlx::query_as::<_, Book>(
            r#"
            SELECT bid AS id, btitle AS title, bprice AS price, bstock AS stock
            FROM book
            WHERE bid = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(book)
    }

    /// Inserts a new book.
    ///
    /// ## Errors
    /// * `DbError::UniqueViolation` - Book id already exists
    pub async fn insert(&self, book: &Book) -> DbResult<()> {
        debug!(id = %book.id, title = %book.title, "Inserting book");

        sqlx::query("INSERT INTO book (bid, btitle, bprice, bstock) VALUES (?1, ?2, ?3, ?4)")
            .bind(&book.id)
            .bind(&book.title)
            .bind(book.price)
            .bind(book.stock)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Adjusts book stock by a delta.
    ///
    /// ## Arguments
    /// * `id` - Book id
    /// * `delta` - Change in stock (positive for restocking, negative to
    ///   remove copies; a negative delta that would underflow is rejected
    ///   by the guard and reported as NotFound-style no-op)
    pub async fn adjust_stock(&self, id: &str, delta: i64) -> DbResult<()> {
        debug!(id = %id, delta = %delta, "Adjusting stock");

        let result = sqlx::query(
            r#"
            UPDATE book
            SET bstock = bstock + ?1
            WHERE bid = ?2 AND bstock + ?1 >= 0
            "#,
        )
        .bind(delta)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Book", id));
        }

        Ok(())
    }

    /// Counts books (for diagnostics and the seed binary).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM book")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};
    use tome_core::Money;

    fn sample_book() -> Book {
        Book {
            id: "B1".to_string(),
            title: "The Rust Programming Language".to_string(),
            price: Money::from_units(100),
            stock: 10,
        }
    }

    #[tokio::test]
    async fn test_insert_and_get() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.books();

        repo.insert(&sample_book()).await.unwrap();

        let found = repo.get_by_id("B1").await.unwrap().unwrap();
        assert_eq!(found.price, Money::from_units(100));
        assert_eq!(found.stock, 10);

        assert_eq!(repo.get_by_id("B9").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_adjust_stock_delta() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.books();

        repo.insert(&sample_book()).await.unwrap();

        repo.adjust_stock("B1", -3).await.unwrap();
        assert_eq!(repo.get_by_id("B1").await.unwrap().unwrap().stock, 7);

        repo.adjust_stock("B1", 5).await.unwrap();
        assert_eq!(repo.get_by_id("B1").await.unwrap().unwrap().stock, 12);
    }

    #[tokio::test]
    async fn test_adjust_stock_never_goes_negative() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.books();

        repo.insert(&sample_book()).await.unwrap();

        assert!(repo.adjust_stock("B1", -11).await.is_err());
        assert_eq!(repo.get_by_id("B1").await.unwrap().unwrap().stock, 10);
    }
}
