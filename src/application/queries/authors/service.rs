use std::sync::Arc;

use crate::domain::author::AuthorReadRepository;

pub struct AuthorQueryService {
    pub(super) read_repo: Arc<dyn AuthorReadRepository>,
}

impl AuthorQueryService {
    pub fn new(read_repo: Arc<dyn AuthorReadRepository>) -> Self {
        Self { read_repo }
    }
}
