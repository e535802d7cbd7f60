// src/infrastructure/repositories/postgres_article.rs
use super::map_sqlx;
use crate::domain::article::{
    Article, ArticleContent, ArticleId, ArticleReadRepository, ArticleTitle, ArticleUpdate,
    ArticleWithAuthor, ArticleWriteRepository, NewArticle,
};
use crate::domain::author::{Author, AuthorEmail, AuthorId, AuthorName};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

#[derive(Clone)]
pub struct PostgresArticleWriteRepository {
    pool: PgPool,
}

impl PostgresArticleWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresArticleReadRepository {
    pool: PgPool,
}

impl PostgresArticleReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    title: String,
    content: String,
    author_id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Article {
            id: ArticleId::new(row.id)?,
            title: ArticleTitle::new(row.title)?,
            content: ArticleContent::new(row.content)?,
            author_id: AuthorId::new(row.author_id)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// Flattened article/author join row; read paths always embed the author.
#[derive(Debug, FromRow)]
struct ArticleAuthorRow {
    id: i64,
    title: String,
    content: String,
    author_id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    author_name: String,
    author_email: String,
    author_created_at: DateTime<Utc>,
    author_updated_at: DateTime<Utc>,
}

impl TryFrom<ArticleAuthorRow> for ArticleWithAuthor {
    type Error = DomainError;

    fn try_from(row: ArticleAuthorRow) -> Result<Self, Self::Error> {
        let author_id = AuthorId::new(row.author_id)?;
        Ok(ArticleWithAuthor {
            article: Article {
                id: ArticleId::new(row.id)?,
                title: ArticleTitle::new(row.title)?,
                content: ArticleContent::new(row.content)?,
                author_id,
                created_at: row.created_at,
                updated_at: row.updated_at,
            },
            author: Author {
                id: author_id,
                name: AuthorName::new(row.author_name)?,
                email: AuthorEmail::new(row.author_email)?,
                created_at: row.author_created_at,
                updated_at: row.author_updated_at,
            },
        })
    }
}

const JOINED_COLUMNS: &str = "a.id, a.title, a.content, a.author_id, a.created_at, a.updated_at, \
     au.name AS author_name, au.email AS author_email, \
     au.created_at AS author_created_at, au.updated_at AS author_updated_at";

/// Shared with the author repository for its eager article load.
pub(super) async fn fetch_articles_by_author(
    pool: &PgPool,
    author_id: AuthorId,
) -> DomainResult<Vec<Article>> {
    let rows = sqlx::query_as::<_, ArticleRow>(
        "SELECT id, title, content, author_id, created_at, updated_at
         FROM articles WHERE author_id = $1 ORDER BY id",
    )
    .bind(i64::from(author_id))
    .fetch_all(pool)
    .await
    .map_err(map_sqlx)?;

    rows.into_iter().map(Article::try_from).collect()
}

#[async_trait]
impl ArticleWriteRepository for PostgresArticleWriteRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            title,
            content,
            author_id,
            created_at,
            updated_at,
        } = article;

        let row = sqlx::query_as::<_, ArticleRow>(
            "INSERT INTO articles (title, content, author_id, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id, title, content, author_id, created_at, updated_at",
        )
        .bind(title.as_str())
        .bind(content.as_str())
        .bind(i64::from(author_id))
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Article::try_from(row)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let ArticleUpdate {
            id,
            title,
            content,
            updated_at,
        } = update;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE articles SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(title) = title {
            let title_str: String = title.into();
            builder.push(", title = ");
            builder.push_bind(title_str);
        }

        if let Some(content) = content {
            let content_str: String = content.into();
            builder.push(", content = ");
            builder.push_bind(content_str);
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(" RETURNING id, title, content, author_id, created_at, updated_at");

        let maybe_row = builder
            .build_query_as::<ArticleRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let row = maybe_row.ok_or_else(|| DomainError::NotFound("article not found".into()))?;
        Article::try_from(row)
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM articles WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("article not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl ArticleReadRepository for PostgresArticleReadRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<ArticleWithAuthor>> {
        let sql = format!(
            "SELECT {JOINED_COLUMNS} FROM articles a
             JOIN authors au ON au.id = a.author_id
             WHERE a.id = $1"
        );
        let row = sqlx::query_as::<_, ArticleAuthorRow>(&sql)
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(ArticleWithAuthor::try_from).transpose()
    }

    async fn list(&self) -> DomainResult<Vec<ArticleWithAuthor>> {
        let sql = format!(
            "SELECT {JOINED_COLUMNS} FROM articles a
             JOIN authors au ON au.id = a.author_id
             ORDER BY a.id"
        );
        let rows = sqlx::query_as::<_, ArticleAuthorRow>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(ArticleWithAuthor::try_from).collect()
    }

    async fn list_by_author(&self, author_id: AuthorId) -> DomainResult<Vec<Article>> {
        fetch_articles_by_author(&self.pool, author_id).await
    }

    async fn count_by_author(&self, author_id: AuthorId) -> DomainResult<u64> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM articles WHERE author_id = $1")
                .bind(i64::from(author_id))
                .fetch_one(&self.pool)
                .await
                .map_err(map_sqlx)?;

        Ok(count.max(0) as u64)
    }
}
