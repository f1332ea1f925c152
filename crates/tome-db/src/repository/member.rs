//! # Member Repository
//!
//! Database operations for store members.
//!
//! Members are immutable within the ledger's scope: the shell only ever
//! resolves them to validate a sale, so this repository is read-mostly.
//! `insert` exists for the seed binary and tests.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use tome_core::Member;

/// Repository for member database operations.
#[derive(Debug, Clone)]
pub struct MemberRepository {
    pool: SqlitePool,
}

impl MemberRepository {
    /// Creates a new MemberRepository.
    pub fn new(pool: SqlitePool) -> Self {
        MemberRepository { pool }
    }

    /// Gets a member by business id.
    ///
    /// ## Returns
    /// * `Ok(Some(Member))` - Member found
    /// * `Ok(None)` - Member not found
    pub async fn get_by_id(&self, id: &str) -> DbResult<Option<Member>> {
        let member = sqlx::query_as::<_, Member>(
            r#"
            SELECT mid AS id, mname AS name
            FROM member
            WHERE mid = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(member)
    }

    /// Inserts a new member.
    ///
    /// ## Errors
    /// * `DbError::UniqueViolation` - Member id already exists
    pub async fn insert(&self, member: &Member) -> DbResult<()> {
        debug!(id = %member.id, "Inserting member");

        sqlx::query("INSERT INTO member (mid, mname) VALUES (?1, ?2)")
            .bind(&member.id)
            .bind(&member.name)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Counts members (for diagnostics and the seed binary).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM member")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};
    use crate::DbError;

    #[tokio::test]
    async fn test_insert_and_get() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.members();

        let member = Member {
            id: "M001".to_string(),
            name: "Alice".to_string(),
        };
        repo.insert(&member).await.unwrap();

        let found = repo.get_by_id("M001").await.unwrap();
        assert_eq!(found, Some(member));

        assert_eq!(repo.get_by_id("M999").await.unwrap(), None);
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_duplicate_id_rejected() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.members();

        let member = Member {
            id: "M001".to_string(),
            name: "Alice".to_string(),
        };
        repo.insert(&member).await.unwrap();

        let err = repo.insert(&member).await.unwrap_err();
        assert!(matches!(err, DbError::UniqueViolation { .. }));
    }
}
