// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::{CreateArticleCommand, DeleteArticleCommand, UpdateArticleCommand},
    dto::ArticleDto,
    queries::articles::GetArticleByIdQuery,
};
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use crate::presentation::http::validation;
use axum::{
    Extension, Json,
    extract::{
        Path,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateArticleRequest {
    pub title: String,
    pub content: String,
    pub author_id: i64,
}

#[derive(Debug, Deserialize)]
pub struct UpdateArticleRequest {
    pub title: Option<String>,
    pub content: Option<String>,
}

use super::{decode, decode_id};

pub async fn create_article(
    Extension(state): Extension<HttpState>,
    payload: Result<Json<CreateArticleRequest>, JsonRejection>,
) -> HttpResult<(StatusCode, Json<ArticleDto>)> {
    let payload = decode(payload)?;
    let details = validation::validate_create_article(&payload);
    if !details.is_empty() {
        return Err(HttpError::validation_failed(details));
    }

    let dto = state
        .services
        .article_commands
        .create_article(CreateArticleCommand {
            title: payload.title,
            content: payload.content,
            author_id: payload.author_id,
        })
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(dto)))
}

pub async fn list_articles(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<ArticleDto>>> {
    state
        .services
        .article_queries
        .list_articles()
        .await
        .into_http()
        .map(Json)
}

pub async fn get_article_by_id(
    Extension(state): Extension<HttpState>,
    id: Result<Path<i64>, PathRejection>,
) -> HttpResult<Json<ArticleDto>> {
    let id = decode_id(id, "article")?;
    state
        .services
        .article_queries
        .get_article_by_id(GetArticleByIdQuery { id })
        .await
        .into_http()
        .map(Json)
}

pub async fn update_article(
    Extension(state): Extension<HttpState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<UpdateArticleRequest>, JsonRejection>,
) -> HttpResult<Json<ArticleDto>> {
    let id = decode_id(id, "article")?;
    let payload = decode(payload)?;
    let details = validation::validate_update_article(&payload);
    if !details.is_empty() {
        return Err(HttpError::validation_failed(details));
    }

    state
        .services
        .article_commands
        .update_article(UpdateArticleCommand {
            id,
            title: payload.title,
            content: payload.content,
        })
        .await
        .into_http()
        .map(Json)
}

pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    id: Result<Path<i64>, PathRejection>,
) -> HttpResult<StatusCode> {
    let id = decode_id(id, "article")?;
    state
        .services
        .article_commands
        .delete_article(DeleteArticleCommand { id })
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}
