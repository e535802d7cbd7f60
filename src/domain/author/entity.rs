// src/domain/author/entity.rs
use crate::domain::article::entity::Article;
use crate::domain::author::value_objects::{AuthorEmail, AuthorId, AuthorName};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Author {
    pub id: AuthorId,
    pub name: AuthorName,
    pub email: AuthorEmail,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Author together with every article that references it. The reverse side
/// of the 1:N relationship is derived by query, never stored.
#[derive(Debug, Clone)]
pub struct AuthorWithArticles {
    pub author: Author,
    pub articles: Vec<Article>,
}

#[derive(Debug, Clone)]
pub struct NewAuthor {
    pub name: AuthorName,
    pub email: AuthorEmail,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial update: a `None` field leaves the stored column untouched.
/// `updated_at` is always rewritten; there is no concurrency token,
/// concurrent writers resolve last-writer-wins.
#[derive(Debug, Clone)]
pub struct AuthorUpdate {
    pub id: AuthorId,
    pub name: Option<AuthorName>,
    pub email: Option<AuthorEmail>,
    pub updated_at: DateTime<Utc>,
}

impl AuthorUpdate {
    pub fn new(id: AuthorId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: None,
            email: None,
            updated_at,
        }
    }

    pub fn with_name(mut self, name: AuthorName) -> Self {
        self.name = Some(name);
        self
    }

    pub fn with_email(mut self, email: AuthorEmail) -> Self {
        self.email = Some(email);
        self
    }
}
