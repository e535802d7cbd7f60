use super::ArticleCommandService;
use crate::{application::error::ApplicationResult, domain::article::ArticleId};

pub struct DeleteArticleCommand {
    pub id: i64,
}

impl ArticleCommandService {
    /// Hard delete; a missing id propagates as the repository's not-found
    /// outcome unchanged.
    pub async fn delete_article(&self, command: DeleteArticleCommand) -> ApplicationResult<()> {
        let id = ArticleId::new(command.id)?;
        self.write_repo.delete(id).await?;
        Ok(())
    }
}
