use super::ArticleQueryService;
use crate::application::{dto::ArticleDto, error::ApplicationResult};

impl ArticleQueryService {
    /// All articles with their authors, already joined by the repository.
    pub async fn list_articles(&self) -> ApplicationResult<Vec<ArticleDto>> {
        let articles = self.read_repo.list().await?;
        Ok(articles.into_iter().map(Into::into).collect())
    }
}
