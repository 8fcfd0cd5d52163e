//! Member model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Member model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Member {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// Create member request
#[derive(Debug, Clone)]
pub struct NewMember {
    pub name: String,
    pub email: String,
}
