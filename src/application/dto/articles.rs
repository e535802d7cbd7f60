use crate::application::dto::authors::AuthorDto;
use crate::domain::article::{Article, ArticleWithAuthor};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Public article view; always carries the owning author's public fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleDto {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub author: AuthorDto,
}

impl From<ArticleWithAuthor> for ArticleDto {
    fn from(joined: ArticleWithAuthor) -> Self {
        Self {
            id: joined.article.id.into(),
            title: joined.article.title.into(),
            content: joined.article.content.into(),
            created_at: joined.article.created_at,
            updated_at: joined.article.updated_at,
            author: joined.author.into(),
        }
    }
}

/// Article view without the author block, used inside the author detail view
/// where embedding the author again would recurse.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleSummaryDto {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Article> for ArticleSummaryDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into(),
            title: article.title.into(),
            content: article.content.into(),
            created_at: article.created_at,
            updated_at: article.updated_at,
        }
    }
}
