// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::{
    application::ports::time::Clock,
    domain::{
        article::{ArticleReadRepository, ArticleWriteRepository},
        author::AuthorReadRepository,
    },
};

pub struct ArticleCommandService {
    pub(super) write_repo: Arc<dyn ArticleWriteRepository>,
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) author_repo: Arc<dyn AuthorReadRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ArticleCommandService {
    pub fn new(
        write_repo: Arc<dyn ArticleWriteRepository>,
        read_repo: Arc<dyn ArticleReadRepository>,
        author_repo: Arc<dyn AuthorReadRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            author_repo,
            clock,
        }
    }
}
