use crate::domain::author::entity::{Author, AuthorUpdate, AuthorWithArticles, NewAuthor};
use crate::domain::author::value_objects::AuthorId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait AuthorWriteRepository: Send + Sync {
    /// Inserts a new author. The email unique constraint surfaces as
    /// `DomainError::Conflict`.
    async fn insert(&self, author: NewAuthor) -> DomainResult<Author>;
    /// Applies a partial update. Zero rows affected means the id does not
    /// exist and surfaces as `DomainError::NotFound`.
    async fn update(&self, update: AuthorUpdate) -> DomainResult<Author>;
    /// Hard delete. Zero rows affected surfaces as `DomainError::NotFound`.
    async fn delete(&self, id: AuthorId) -> DomainResult<()>;
}

#[async_trait]
pub trait AuthorReadRepository: Send + Sync {
    async fn find_by_id(&self, id: AuthorId) -> DomainResult<Option<Author>>;
    /// Eager variant of `find_by_id` that also loads the author's articles.
    async fn find_with_articles(&self, id: AuthorId) -> DomainResult<Option<AuthorWithArticles>>;
    /// Lists authors without their articles; the article fan-out is unbounded
    /// and only loaded for single-author lookups.
    async fn list(&self) -> DomainResult<Vec<Author>>;
}
