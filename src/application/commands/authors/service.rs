// src/application/commands/authors/service.rs
use std::sync::Arc;

use crate::{
    application::ports::time::Clock,
    domain::{
        article::ArticleReadRepository,
        author::{AuthorReadRepository, AuthorWriteRepository},
    },
};

pub struct AuthorCommandService {
    pub(super) write_repo: Arc<dyn AuthorWriteRepository>,
    pub(super) read_repo: Arc<dyn AuthorReadRepository>,
    pub(super) article_repo: Arc<dyn ArticleReadRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl AuthorCommandService {
    pub fn new(
        write_repo: Arc<dyn AuthorWriteRepository>,
        read_repo: Arc<dyn AuthorReadRepository>,
        article_repo: Arc<dyn ArticleReadRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            article_repo,
            clock,
        }
    }
}
