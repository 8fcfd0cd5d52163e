//! Schema definitions for the embedded store.
//!
//! Tables are created on startup if absent; there is no migration step.

use sqlx::{Pool, Sqlite};

use crate::error::AppResult;

/// Table creation statements, executed in order.
///
/// Foreign keys are declared for documentation of intent; SQLite leaves
/// them unenforced unless the pragma is enabled, and no operation
/// deletes a referenced row anyway.
pub const CREATE_TABLES: [&str; 3] = [
    r#"
    CREATE TABLE IF NOT EXISTS books (
        id INTEGER PRIMARY KEY,
        title TEXT NOT NULL,
        author TEXT NOT NULL,
        isbn TEXT NOT NULL,
        quantity INTEGER NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS members (
        id INTEGER PRIMARY KEY,
        name TEXT NOT NULL,
        email TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS transactions (
        id INTEGER PRIMARY KEY,
        member_id INTEGER NOT NULL,
        book_id INTEGER NOT NULL,
        issue_date TEXT NOT NULL,
        return_date TEXT,
        FOREIGN KEY (member_id) REFERENCES members (id),
        FOREIGN KEY (book_id) REFERENCES books (id)
    )
    "#,
];

/// Create all tables if they do not exist yet.
pub async fn init(pool: &Pool<Sqlite>) -> AppResult<()> {
    // Foreign keys are declared for documentation only (see above); keep
    // them unenforced so operations record ids as given, matching the
    // repository's documented contract. sqlx enables the pragma by
    // default, so turn it off explicitly.
    sqlx::query("PRAGMA foreign_keys = OFF").execute(pool).await?;

    for statement in CREATE_TABLES {
        sqlx::query(statement).execute(pool).await?;
    }
    Ok(())
}
