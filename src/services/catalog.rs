//! Catalog management service

use crate::{
    error::AppResult,
    models::{Book, Member, NewBook, NewMember},
    repository::Repository,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Add a book to the catalog
    pub async fn add_book(&self, book: NewBook) -> AppResult<Book> {
        let created = self.repository.books.create(&book).await?;
        tracing::info!("Added book id={} title={:?}", created.id, created.title);
        Ok(created)
    }

    /// Register a new member
    pub async fn add_member(&self, member: NewMember) -> AppResult<Member> {
        let created = self.repository.members.create(&member).await?;
        tracing::info!("Added member id={} name={:?}", created.id, created.name);
        Ok(created)
    }

    /// List all books
    pub async fn list_books(&self) -> AppResult<Vec<Book>> {
        self.repository.books.list().await
    }

    /// List all members
    pub async fn list_members(&self) -> AppResult<Vec<Member>> {
        self.repository.members.list().await
    }
}
