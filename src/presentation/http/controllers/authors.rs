// src/presentation/http/controllers/authors.rs
use crate::application::{
    commands::authors::{CreateAuthorCommand, DeleteAuthorCommand, UpdateAuthorCommand},
    dto::{AuthorDetailDto, AuthorDto},
    queries::authors::GetAuthorByIdQuery,
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

use super::{decode, decode_id};

#[derive(Debug, Deserialize)]
pub struct CreateAuthorRequest {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateAuthorRequest {
    pub name: Option<String>,
    pub email: Option<String>,
}

pub async fn create_author(
    Extension(state): Extension<HttpState>,
    payload: Result<Json<CreateAuthorRequest>, JsonRejection>,
) -> HttpResult<(StatusCode, Json<AuthorDto>)> {
    let payload = decode(payload)?;
    let details = validation::validate_create_author(&payload);
    if !details.is_empty() {
        return Err(HttpError::validation_failed(details));
    }

    let dto = state
        .services
        .author_commands
        .create_author(CreateAuthorCommand {
            name: payload.name,
            email: payload.email,
        })
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(dto)))
}

pub async fn list_authors(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<AuthorDto>>> {
    state
        .services
        .author_queries
        .list_authors()
        .await
        .into_http()
        .map(Json)
}

pub async fn get_author_by_id(
    Extension(state): Extension<HttpState>,
    id: Result<Path<i64>, PathRejection>,
) -> HttpResult<Json<AuthorDetailDto>> {
    let id = decode_id(id, "author")?;
    state
        .services
        .author_queries
        .get_author_by_id(GetAuthorByIdQuery { id })
        .await
        .into_http()
        .map(Json)
}

pub async fn update_author(
    Extension(state): Extension<HttpState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<UpdateAuthorRequest>, JsonRejection>,
) -> HttpResult<Json<AuthorDto>> {
    let id = decode_id(id, "author")?;
    let payload = decode(payload)?;
    let details = validation::validate_update_author(&payload);
    if !details.is_empty() {
        return Err(HttpError::validation_failed(details));
    }

    state
        .services
        .author_commands
        .update_author(UpdateAuthorCommand {
            id,
            name: payload.name,
            email: payload.email,
        })
        .await
        .into_http()
        .map(Json)
}

pub async fn delete_author(
    Extension(state): Extension<HttpState>,
    id: Result<Path<i64>, PathRejection>,
) -> HttpResult<StatusCode> {
    let id = decode_id(id, "author")?;
    state
        .services
        .author_commands
        .delete_author(DeleteAuthorCommand { id })
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}
