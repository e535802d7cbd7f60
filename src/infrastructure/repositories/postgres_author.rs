// src/infrastructure/repositories/postgres_author.rs
use super::map_sqlx;
use crate::domain::author::{
    Author, AuthorEmail, AuthorId, AuthorName, AuthorReadRepository, AuthorUpdate,
    AuthorWithArticles, AuthorWriteRepository, NewAuthor,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

use super::postgres_article::fetch_articles_by_author;

#[derive(Clone)]
pub struct PostgresAuthorWriteRepository {
    pool: PgPool,
}

impl PostgresAuthorWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresAuthorReadRepository {
    pool: PgPool,
}

impl PostgresAuthorReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct AuthorRow {
    id: i64,
    name: String,
    email: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<AuthorRow> for Author {
    type Error = DomainError;

    fn try_from(row: AuthorRow) -> Result<Self, Self::Error> {
        Ok(Author {
            id: AuthorId::new(row.id)?,
            name: AuthorName::new(row.name)?,
            email: AuthorEmail::new(row.email)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl AuthorWriteRepository for PostgresAuthorWriteRepository {
    async fn insert(&self, author: NewAuthor) -> DomainResult<Author> {
        let NewAuthor {
            name,
            email,
            created_at,
            updated_at,
        } = author;

        let row = sqlx::query_as::<_, AuthorRow>(
            "INSERT INTO authors (name, email, created_at, updated_at)
             VALUES ($1, $2, $3, $4)
             RETURNING id, name, email, created_at, updated_at",
        )
        .bind(name.as_str())
        .bind(email.as_str())
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Author::try_from(row)
    }

    async fn update(&self, update: AuthorUpdate) -> DomainResult<Author> {
        let AuthorUpdate {
            id,
            name,
            email,
            updated_at,
        } = update;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE authors SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(name) = name {
            let name_str: String = name.into();
            builder.push(", name = ");
            builder.push_bind(name_str);
        }

        if let Some(email) = email {
            let email_str: String = email.into();
            builder.push(", email = ");
            builder.push_bind(email_str);
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(" RETURNING id, name, email, created_at, updated_at");

        let maybe_row = builder
            .build_query_as::<AuthorRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let row = maybe_row.ok_or_else(|| DomainError::NotFound("author not found".into()))?;
        Author::try_from(row)
    }

    async fn delete(&self, id: AuthorId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM authors WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("author not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl AuthorReadRepository for PostgresAuthorReadRepository {
    async fn find_by_id(&self, id: AuthorId) -> DomainResult<Option<Author>> {
        let row = sqlx::query_as::<_, AuthorRow>(
            "SELECT id, name, email, created_at, updated_at FROM authors WHERE id = $1",
        )
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Author::try_from).transpose()
    }

    async fn find_with_articles(&self, id: AuthorId) -> DomainResult<Option<AuthorWithArticles>> {
        let Some(author) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let articles = fetch_articles_by_author(&self.pool, id).await?;
        Ok(Some(AuthorWithArticles { author, articles }))
    }

    async fn list(&self) -> DomainResult<Vec<Author>> {
        let rows = sqlx::query_as::<_, AuthorRow>(
            "SELECT id, name, email, created_at, updated_at FROM authors ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Author::try_from).collect()
    }
}
