// src/presentation/http/validation.rs
//
// Stateless field validation for request bodies. Constraints live in the
// domain value objects; this module runs the same constructors up front so a
// request with several bad fields gets every reason back in one response.
use crate::domain::article::{ArticleContent, ArticleTitle};
use crate::domain::author::{AuthorEmail, AuthorName};
use crate::domain::errors::DomainResult;
use crate::presentation::http::controllers::articles::{
    CreateArticleRequest, UpdateArticleRequest,
};
use crate::presentation::http::controllers::authors::{CreateAuthorRequest, UpdateAuthorRequest};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

fn check<T>(details: &mut Vec<FieldError>, field: &'static str, result: DomainResult<T>) {
    if let Err(err) = result {
        details.push(FieldError {
            field,
            message: err.message().to_string(),
        });
    }
}

fn check_optional<T>(
    details: &mut Vec<FieldError>,
    field: &'static str,
    value: Option<&String>,
    construct: impl Fn(String) -> DomainResult<T>,
) {
    // An absent or empty field means "leave unchanged" and is not validated.
    if let Some(value) = value.filter(|s| !s.is_empty()) {
        check(details, field, construct(value.clone()));
    }
}

pub fn validate_create_article(req: &CreateArticleRequest) -> Vec<FieldError> {
    let mut details = Vec::new();
    check(&mut details, "title", ArticleTitle::new(req.title.as_str()));
    check(
        &mut details,
        "content",
        ArticleContent::new(req.content.as_str()),
    );
    if req.author_id <= 0 {
        details.push(FieldError {
            field: "author_id",
            message: "author_id must be a positive integer".into(),
        });
    }
    details
}

pub fn validate_update_article(req: &UpdateArticleRequest) -> Vec<FieldError> {
    let mut details = Vec::new();
    check_optional(&mut details, "title", req.title.as_ref(), ArticleTitle::new);
    check_optional(
        &mut details,
        "content",
        req.content.as_ref(),
        ArticleContent::new,
    );
    details
}

pub fn validate_create_author(req: &CreateAuthorRequest) -> Vec<FieldError> {
    let mut details = Vec::new();
    check(&mut details, "name", AuthorName::new(req.name.as_str()));
    check(&mut details, "email", AuthorEmail::new(req.email.as_str()));
    details
}

pub fn validate_update_author(req: &UpdateAuthorRequest) -> Vec<FieldError> {
    let mut details = Vec::new();
    check_optional(&mut details, "name", req.name.as_ref(), AuthorName::new);
    check_optional(&mut details, "email", req.email.as_ref(), AuthorEmail::new);
    details
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_article_collects_every_bad_field() {
        let req = CreateArticleRequest {
            title: "abc".into(),
            content: "short".into(),
            author_id: 0,
        };
        let details = validate_create_article(&req);
        let fields: Vec<_> = details.iter().map(|d| d.field).collect();
        assert_eq!(fields, vec!["title", "content", "author_id"]);
    }

    #[test]
    fn update_article_ignores_absent_and_empty_fields() {
        let req = UpdateArticleRequest {
            title: None,
            content: Some(String::new()),
        };
        assert!(validate_update_article(&req).is_empty());
    }

    #[test]
    fn update_author_rejects_bad_email_when_supplied() {
        let req = UpdateAuthorRequest {
            name: None,
            email: Some("not-an-email".into()),
        };
        let details = validate_update_author(&req);
        assert_eq!(details.len(), 1);
        assert_eq!(details[0].field, "email");
    }
}
