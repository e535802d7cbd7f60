use super::AuthorCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::author::AuthorId,
};

pub struct DeleteAuthorCommand {
    pub id: i64,
}

impl AuthorCommandService {
    /// Deletion is forbidden while the author still owns articles, so no
    /// article is ever left with a dangling author reference. The foreign
    /// key's ON DELETE RESTRICT backs this check at the store level.
    pub async fn delete_author(&self, command: DeleteAuthorCommand) -> ApplicationResult<()> {
        let id = AuthorId::new(command.id)?;

        let owned = self.article_repo.count_by_author(id).await?;
        if owned > 0 {
            return Err(ApplicationError::conflict(format!(
                "author {id} still owns {owned} article(s)"
            )));
        }

        self.write_repo.delete(id).await?;
        Ok(())
    }
}
