use super::AuthorQueryService;
use crate::{
    application::{
        dto::AuthorDetailDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::author::AuthorId,
};

pub struct GetAuthorByIdQuery {
    pub id: i64,
}

impl AuthorQueryService {
    /// Single-author lookup returns the detail view with the author's
    /// articles eager-loaded by the repository.
    pub async fn get_author_by_id(
        &self,
        query: GetAuthorByIdQuery,
    ) -> ApplicationResult<AuthorDetailDto> {
        let id = AuthorId::new(query.id)?;
        let detail = self
            .read_repo
            .find_with_articles(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("author {id} not found")))?;
        Ok(detail.into())
    }
}
