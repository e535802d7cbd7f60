use crate::application::dto::articles::ArticleSummaryDto;
use crate::domain::author::{Author, AuthorWithArticles};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Public author view embedded in article responses and list output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorDto {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl From<Author> for AuthorDto {
    fn from(author: Author) -> Self {
        Self {
            id: author.id.into(),
            name: author.name.into(),
            email: author.email.into(),
        }
    }
}

/// Detail view for single-author lookups: adds the creation timestamp and the
/// author's articles, summarized without re-embedding the author.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorDetailDto {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub articles: Vec<ArticleSummaryDto>,
}

impl From<AuthorWithArticles> for AuthorDetailDto {
    fn from(detail: AuthorWithArticles) -> Self {
        Self {
            id: detail.author.id.into(),
            name: detail.author.name.into(),
            email: detail.author.email.into(),
            created_at: detail.author.created_at,
            articles: detail.articles.into_iter().map(Into::into).collect(),
        }
    }
}
