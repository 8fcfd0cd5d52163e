//! Members repository for database operations

use sqlx::{Pool, Sqlite};

use crate::{
    error::{AppError, AppResult},
    models::{Member, NewMember},
};

#[derive(Clone)]
pub struct MembersRepository {
    pool: Pool<Sqlite>,
}

impl MembersRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// Insert a new member and return the stored row with its assigned id.
    ///
    /// Email is free text; nothing checks format or uniqueness.
    pub async fn create(&self, member: &NewMember) -> AppResult<Member> {
        let created = sqlx::query_as::<_, Member>(
            r#"
            INSERT INTO members (name, email)
            VALUES (?1, ?2)
            RETURNING id, name, email
            "#,
        )
        .bind(&member.name)
        .bind(&member.email)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    /// Get member by ID
    pub async fn get_by_id(&self, id: i64) -> AppResult<Member> {
        sqlx::query_as::<_, Member>("SELECT id, name, email FROM members WHERE id = ?1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Member with id {} not found", id)))
    }

    /// List all members in insertion order.
    pub async fn list(&self) -> AppResult<Vec<Member>> {
        let members =
            sqlx::query_as::<_, Member>("SELECT id, name, email FROM members ORDER BY id")
                .fetch_all(&self.pool)
                .await?;

        Ok(members)
    }
}
