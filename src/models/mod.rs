//! Data models for Libris

pub mod book;
pub mod member;
pub mod transaction;

// Re-export commonly used types
pub use book::{Book, NewBook};
pub use member::{Member, NewMember};
pub use transaction::Transaction;
