use super::AuthorCommandService;
use crate::{
    application::{
        dto::AuthorDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::author::{AuthorEmail, AuthorId, AuthorName, AuthorUpdate},
};

/// Empty strings count as "not supplied", same as the article update shape.
pub struct UpdateAuthorCommand {
    pub id: i64,
    pub name: Option<String>,
    pub email: Option<String>,
}

impl AuthorCommandService {
    pub async fn update_author(&self, command: UpdateAuthorCommand) -> ApplicationResult<AuthorDto> {
        let id = AuthorId::new(command.id)?;
        self.read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("author {id} not found")))?;

        let name = command
            .name
            .filter(|s| !s.is_empty())
            .map(AuthorName::new)
            .transpose()?;
        let email = command
            .email
            .filter(|s| !s.is_empty())
            .map(AuthorEmail::new)
            .transpose()?;

        let mut update = AuthorUpdate::new(id, self.clock.now());
        if let Some(name) = name {
            update = update.with_name(name);
        }
        if let Some(email) = email {
            update = update.with_email(email);
        }

        let updated = self.write_repo.update(update).await?;
        Ok(updated.into())
    }
}
