use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{ArticleContent, ArticleId, ArticleTitle, ArticleUpdate, ArticleWithAuthor},
};

/// An empty string is treated the same as an omitted field: the stored value
/// is kept. Clearing a field to empty is therefore not expressible, a known
/// limitation of the partial-update shape.
pub struct UpdateArticleCommand {
    pub id: i64,
    pub title: Option<String>,
    pub content: Option<String>,
}

impl ArticleCommandService {
    pub async fn update_article(
        &self,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::new(command.id)?;
        let existing = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("article {id} not found")))?;

        let title = command
            .title
            .filter(|s| !s.is_empty())
            .map(ArticleTitle::new)
            .transpose()?;
        let content = command
            .content
            .filter(|s| !s.is_empty())
            .map(ArticleContent::new)
            .transpose()?;

        let mut update = ArticleUpdate::new(id, self.clock.now());
        if let Some(title) = title {
            update = update.with_title(title);
        }
        if let Some(content) = content {
            update = update.with_content(content);
        }

        let updated = self.write_repo.update(update).await?;
        // The author cannot change through an article update, so the one
        // loaded above is still current for the returned view.
        Ok(ArticleWithAuthor {
            article: updated,
            author: existing.author,
        }
        .into())
    }
}
