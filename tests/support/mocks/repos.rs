// tests/support/mocks/repos.rs
//
// A single in-memory store standing in for all four repository traits, with
// the same outcome contract as the Postgres implementations: absence is
// Ok(None)/NotFound on zero rows, duplicate email is Conflict.
use std::collections::BTreeMap;
use std::sync::{
    Mutex,
    atomic::{AtomicI64, Ordering},
};

use async_trait::async_trait;
use inkpost::domain::article::{
    Article, ArticleId, ArticleReadRepository, ArticleUpdate, ArticleWithAuthor,
    ArticleWriteRepository, NewArticle,
};
use inkpost::domain::author::{
    Author, AuthorId, AuthorReadRepository, AuthorUpdate, AuthorWithArticles,
    AuthorWriteRepository, NewAuthor,
};
use inkpost::domain::errors::{DomainError, DomainResult};

#[derive(Default)]
pub struct InMemoryStore {
    authors: Mutex<BTreeMap<i64, Author>>,
    articles: Mutex<BTreeMap<i64, Article>>,
    next_author_id: AtomicI64,
    next_article_id: AtomicI64,
}

impl InMemoryStore {
    pub fn author_count(&self) -> usize {
        self.authors.lock().unwrap().len()
    }

    pub fn article_count(&self) -> usize {
        self.articles.lock().unwrap().len()
    }
}

#[async_trait]
impl AuthorWriteRepository for InMemoryStore {
    async fn insert(&self, author: NewAuthor) -> DomainResult<Author> {
        let mut authors = self.authors.lock().unwrap();
        if authors
            .values()
            .any(|a| a.email.as_str() == author.email.as_str())
        {
            return Err(DomainError::Conflict("email already exists".into()));
        }

        let id = self.next_author_id.fetch_add(1, Ordering::SeqCst) + 1;
        let stored = Author {
            id: AuthorId::new(id)?,
            name: author.name,
            email: author.email,
            created_at: author.created_at,
            updated_at: author.updated_at,
        };
        authors.insert(id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, update: AuthorUpdate) -> DomainResult<Author> {
        let mut authors = self.authors.lock().unwrap();
        let id = i64::from(update.id);

        if let Some(email) = &update.email {
            if authors
                .iter()
                .any(|(other_id, a)| *other_id != id && a.email.as_str() == email.as_str())
            {
                return Err(DomainError::Conflict("email already exists".into()));
            }
        }

        let author = authors
            .get_mut(&id)
            .ok_or_else(|| DomainError::NotFound("author not found".into()))?;
        if let Some(name) = update.name {
            author.name = name;
        }
        if let Some(email) = update.email {
            author.email = email;
        }
        author.updated_at = update.updated_at;
        Ok(author.clone())
    }

    async fn delete(&self, id: AuthorId) -> DomainResult<()> {
        let mut authors = self.authors.lock().unwrap();
        if authors.remove(&i64::from(id)).is_none() {
            return Err(DomainError::NotFound("author not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl AuthorReadRepository for InMemoryStore {
    async fn find_by_id(&self, id: AuthorId) -> DomainResult<Option<Author>> {
        Ok(self.authors.lock().unwrap().get(&i64::from(id)).cloned())
    }

    async fn find_with_articles(&self, id: AuthorId) -> DomainResult<Option<AuthorWithArticles>> {
        let Some(author) = self.authors.lock().unwrap().get(&i64::from(id)).cloned() else {
            return Ok(None);
        };
        let articles = self
            .articles
            .lock()
            .unwrap()
            .values()
            .filter(|a| a.author_id == id)
            .cloned()
            .collect();
        Ok(Some(AuthorWithArticles { author, articles }))
    }

    async fn list(&self) -> DomainResult<Vec<Author>> {
        Ok(self.authors.lock().unwrap().values().cloned().collect())
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryStore {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let id = self.next_article_id.fetch_add(1, Ordering::SeqCst) + 1;
        let stored = Article {
            id: ArticleId::new(id)?,
            title: article.title,
            content: article.content,
            author_id: article.author_id,
            created_at: article.created_at,
            updated_at: article.updated_at,
        };
        self.articles.lock().unwrap().insert(id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let mut articles = self.articles.lock().unwrap();
        let article = articles
            .get_mut(&i64::from(update.id))
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;
        if let Some(title) = update.title {
            article.title = title;
        }
        if let Some(content) = update.content {
            article.content = content;
        }
        article.updated_at = update.updated_at;
        Ok(article.clone())
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let mut articles = self.articles.lock().unwrap();
        if articles.remove(&i64::from(id)).is_none() {
            return Err(DomainError::NotFound("article not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryStore {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<ArticleWithAuthor>> {
        let Some(article) = self.articles.lock().unwrap().get(&i64::from(id)).cloned() else {
            return Ok(None);
        };
        let author = self
            .authors
            .lock()
            .unwrap()
            .get(&i64::from(article.author_id))
            .cloned()
            .ok_or_else(|| DomainError::Persistence("dangling author reference".into()))?;
        Ok(Some(ArticleWithAuthor { article, author }))
    }

    async fn list(&self) -> DomainResult<Vec<ArticleWithAuthor>> {
        let articles: Vec<Article> = self.articles.lock().unwrap().values().cloned().collect();
        let authors = self.authors.lock().unwrap();
        articles
            .into_iter()
            .map(|article| {
                let author = authors
                    .get(&i64::from(article.author_id))
                    .cloned()
                    .ok_or_else(|| DomainError::Persistence("dangling author reference".into()))?;
                Ok(ArticleWithAuthor { article, author })
            })
            .collect()
    }

    async fn list_by_author(&self, author_id: AuthorId) -> DomainResult<Vec<Article>> {
        Ok(self
            .articles
            .lock()
            .unwrap()
            .values()
            .filter(|a| a.author_id == author_id)
            .cloned()
            .collect())
    }

    async fn count_by_author(&self, author_id: AuthorId) -> DomainResult<u64> {
        Ok(self
            .articles
            .lock()
            .unwrap()
            .values()
            .filter(|a| a.author_id == author_id)
            .count() as u64)
    }
}
