// src/presentation/http/routes.rs
use crate::presentation::http::controllers::{articles, authors};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Router,
    http::Method,
    routing::get,
};
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub fn build_router(state: HttpState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(tower_http::cors::Any)
        .max_age(Duration::from_secs(3600));

    Router::new()
        .route("/health", get(health))
        .route(
            "/api/v1/articles",
            get(articles::list_articles).post(articles::create_article),
        )
        .route(
            "/api/v1/articles/{id}",
            get(articles::get_article_by_id)
                .put(articles::update_article)
                .delete(articles::delete_article),
        )
        .route(
            "/api/v1/authors",
            get(authors::list_authors).post(authors::create_author),
        )
        .route(
            "/api/v1/authors/{id}",
            get(authors::get_author_by_id)
                .put(authors::update_author)
                .delete(authors::delete_author),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(Extension(state))
}

pub async fn health() -> &'static str {
    "ok"
}
