// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{ArticleContent, ArticleTitle, ArticleWithAuthor, NewArticle},
        author::AuthorId,
    },
};

pub struct CreateArticleCommand {
    pub title: String,
    pub content: String,
    pub author_id: i64,
}

impl ArticleCommandService {
    /// Creates an article. The referenced author is resolved first; the
    /// author fetched here is reused for the returned view rather than
    /// queried again after the insert.
    pub async fn create_article(
        &self,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let title = ArticleTitle::new(command.title)?;
        let content = ArticleContent::new(command.content)?;
        let author_id = AuthorId::new(command.author_id)?;

        let author = self
            .author_repo
            .find_by_id(author_id)
            .await?
            .ok_or_else(|| {
                ApplicationError::unresolved_reference(format!("author {author_id} not found"))
            })?;

        let now = self.clock.now();
        let new_article = NewArticle {
            title,
            content,
            author_id,
            created_at: now,
            updated_at: now,
        };

        let created = self.write_repo.insert(new_article).await?;
        Ok(ArticleWithAuthor {
            article: created,
            author,
        }
        .into())
    }
}
