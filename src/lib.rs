//! Libris Library Catalog and Lending Tracker
//!
//! A small library management system keeping books, members, and lending
//! transactions in an embedded SQLite store, driven by an interactive
//! text menu.

pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;
pub mod shell;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
