use crate::domain::article::entity::{Article, ArticleUpdate, ArticleWithAuthor, NewArticle};
use crate::domain::article::value_objects::ArticleId;
use crate::domain::author::value_objects::AuthorId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;
    /// Applies a partial update. Zero rows affected means the id does not
    /// exist and surfaces as `DomainError::NotFound`.
    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article>;
    /// Hard delete. Zero rows affected surfaces as `DomainError::NotFound`.
    async fn delete(&self, id: ArticleId) -> DomainResult<()>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    /// Single lookup, eager-joined with the owning author.
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<ArticleWithAuthor>>;
    /// All articles, each eager-joined with its author.
    async fn list(&self) -> DomainResult<Vec<ArticleWithAuthor>>;
    /// Articles owned by one author, without the author embed (the caller
    /// already holds the author).
    async fn list_by_author(&self, author_id: AuthorId) -> DomainResult<Vec<Article>>;
    /// How many articles still reference the author; used to guard deletion.
    async fn count_by_author(&self, author_id: AuthorId) -> DomainResult<u64>;
}
