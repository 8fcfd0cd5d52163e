//! Lending service

use crate::{error::AppResult, models::Transaction, repository::Repository};

#[derive(Clone)]
pub struct LendingService {
    repository: Repository,
}

impl LendingService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Issue a book to a member, recording an open transaction.
    ///
    /// The member id is taken at face value; a transaction may reference
    /// a member that was never registered.
    pub async fn issue_book(
        &self,
        member_id: i64,
        book_id: i64,
        issue_date: &str,
    ) -> AppResult<Transaction> {
        let transaction = self
            .repository
            .transactions
            .issue(member_id, book_id, issue_date)
            .await?;

        tracing::info!(
            "Issued book {} to member {} (transaction {})",
            book_id,
            member_id,
            transaction.id
        );
        Ok(transaction)
    }

    /// Close an open transaction, restoring one copy to the shelf.
    pub async fn return_book(
        &self,
        transaction_id: i64,
        return_date: &str,
    ) -> AppResult<Transaction> {
        let transaction = self
            .repository
            .transactions
            .close(transaction_id, return_date)
            .await?;

        tracing::info!(
            "Returned book {} (transaction {})",
            transaction.book_id,
            transaction.id
        );
        Ok(transaction)
    }
}
