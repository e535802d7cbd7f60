// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{articles::ArticleCommandService, authors::AuthorCommandService},
        ports::time::Clock,
        queries::{articles::ArticleQueryService, authors::AuthorQueryService},
    },
    domain::{
        article::{ArticleReadRepository, ArticleWriteRepository},
        author::{AuthorReadRepository, AuthorWriteRepository},
    },
};

/// All use-case services, wired once at process start from concrete
/// repositories and shared across requests.
pub struct ApplicationServices {
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    pub author_commands: Arc<AuthorCommandService>,
    pub author_queries: Arc<AuthorQueryService>,
}

impl ApplicationServices {
    pub fn new(
        article_write_repo: Arc<dyn ArticleWriteRepository>,
        article_read_repo: Arc<dyn ArticleReadRepository>,
        author_write_repo: Arc<dyn AuthorWriteRepository>,
        author_read_repo: Arc<dyn AuthorReadRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&article_write_repo),
            Arc::clone(&article_read_repo),
            Arc::clone(&author_read_repo),
            Arc::clone(&clock),
        ));
        let article_queries = Arc::new(ArticleQueryService::new(Arc::clone(&article_read_repo)));

        let author_commands = Arc::new(AuthorCommandService::new(
            Arc::clone(&author_write_repo),
            Arc::clone(&author_read_repo),
            Arc::clone(&article_read_repo),
            Arc::clone(&clock),
        ));
        let author_queries = Arc::new(AuthorQueryService::new(Arc::clone(&author_read_repo)));

        Self {
            article_commands,
            article_queries,
            author_commands,
            author_queries,
        }
    }
}
