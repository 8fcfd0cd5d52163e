//! Lending transaction model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Lending transaction from database.
///
/// A transaction is open while `return_date` is `None`; returning the
/// book closes it. Dates are stored as the operator typed them.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Transaction {
    pub id: i64,
    pub member_id: i64,
    pub book_id: i64,
    pub issue_date: String,
    pub return_date: Option<String>,
}

impl Transaction {
    pub fn is_open(&self) -> bool {
        self.return_date.is_none()
    }
}
