//! Lending transactions repository for database operations

use sqlx::{Pool, Sqlite};

use crate::{
    error::{AppError, AppResult},
    models::Transaction,
};

#[derive(Clone)]
pub struct TransactionsRepository {
    pool: Pool<Sqlite>,
}

impl TransactionsRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// Get transaction by ID
    pub async fn get_by_id(&self, id: i64) -> AppResult<Transaction> {
        sqlx::query_as::<_, Transaction>(
            "SELECT id, member_id, book_id, issue_date, return_date FROM transactions WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Transaction with id {} not found", id)))
    }

    /// Issue a book: take one copy off the shelf and open a transaction.
    ///
    /// Both writes run inside one store transaction, and availability is a
    /// guarded update rather than a separate read, so quantity can never go
    /// negative and a decrement can never commit without its transaction row.
    /// The member id is recorded as given; nothing checks it refers to an
    /// existing member.
    pub async fn issue(
        &self,
        member_id: i64,
        book_id: i64,
        issue_date: &str,
    ) -> AppResult<Transaction> {
        let mut tx = self.pool.begin().await?;

        let updated =
            sqlx::query("UPDATE books SET quantity = quantity - 1 WHERE id = ?1 AND quantity > 0")
                .bind(book_id)
                .execute(&mut *tx)
                .await?;

        if updated.rows_affected() == 0 {
            let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM books WHERE id = ?1)")
                .bind(book_id)
                .fetch_one(&mut *tx)
                .await?;

            return Err(if exists {
                AppError::Unavailable(format!("Book {} has no copies available", book_id))
            } else {
                AppError::NotFound(format!("Book with id {} not found", book_id))
            });
        }

        let transaction = sqlx::query_as::<_, Transaction>(
            r#"
            INSERT INTO transactions (member_id, book_id, issue_date, return_date)
            VALUES (?1, ?2, ?3, NULL)
            RETURNING id, member_id, book_id, issue_date, return_date
            "#,
        )
        .bind(member_id)
        .bind(book_id)
        .bind(issue_date)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(transaction)
    }

    /// Return a book: close the open transaction and put the copy back.
    pub async fn close(&self, transaction_id: i64, return_date: &str) -> AppResult<Transaction> {
        let mut tx = self.pool.begin().await?;

        let current = sqlx::query_as::<_, Transaction>(
            "SELECT id, member_id, book_id, issue_date, return_date FROM transactions WHERE id = ?1",
        )
        .bind(transaction_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!("Transaction with id {} not found", transaction_id))
        })?;

        if current.return_date.is_some() {
            return Err(AppError::AlreadyReturned(format!(
                "Transaction {} is already closed",
                transaction_id
            )));
        }

        sqlx::query("UPDATE transactions SET return_date = ?1 WHERE id = ?2")
            .bind(return_date)
            .bind(transaction_id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("UPDATE books SET quantity = quantity + 1 WHERE id = ?1")
            .bind(current.book_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(Transaction {
            return_date: Some(return_date.to_string()),
            ..current
        })
    }

    /// Count open transactions for a book.
    pub async fn count_open_for_book(&self, book_id: i64) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM transactions WHERE book_id = ?1 AND return_date IS NULL",
        )
        .bind(book_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }
}
