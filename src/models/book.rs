//! Book model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Book model from database.
///
/// `quantity` counts the copies currently on the shelf; copies out on
/// loan are reconstructed from open transactions, total stock is never
/// stored directly.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub quantity: i64,
}

/// Create book request
#[derive(Debug, Clone)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub quantity: i64,
}
