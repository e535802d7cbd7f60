// src/application/commands/authors/create.rs
use super::AuthorCommandService;
use crate::{
    application::{dto::AuthorDto, error::ApplicationResult},
    domain::author::{AuthorEmail, AuthorName, NewAuthor},
};

pub struct CreateAuthorCommand {
    pub name: String,
    pub email: String,
}

impl AuthorCommandService {
    /// Creates an author. Email uniqueness is the store's to enforce; a
    /// duplicate surfaces from the repository as a conflict.
    pub async fn create_author(&self, command: CreateAuthorCommand) -> ApplicationResult<AuthorDto> {
        let name = AuthorName::new(command.name)?;
        let email = AuthorEmail::new(command.email)?;
        let now = self.clock.now();

        let created = self
            .write_repo
            .insert(NewAuthor {
                name,
                email,
                created_at: now,
                updated_at: now,
            })
            .await?;
        Ok(created.into())
    }
}
