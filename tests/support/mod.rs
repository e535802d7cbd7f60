#![allow(dead_code)]
pub mod mocks;

use std::sync::Arc;

use inkpost::application::{ports::time::Clock, services::ApplicationServices};
use inkpost::domain::article::{ArticleReadRepository, ArticleWriteRepository};
use inkpost::domain::author::{AuthorReadRepository, AuthorWriteRepository};
use inkpost::presentation::http::{routes::build_router, state::HttpState};

pub use mocks::{FixedClock, InMemoryStore, fixed_now};

/// Services wired against the shared in-memory store and a fixed clock.
pub fn make_services() -> (Arc<ApplicationServices>, Arc<InMemoryStore>) {
    let store = Arc::new(InMemoryStore::default());
    let article_write: Arc<dyn ArticleWriteRepository> = store.clone();
    let article_read: Arc<dyn ArticleReadRepository> = store.clone();
    let author_write: Arc<dyn AuthorWriteRepository> = store.clone();
    let author_read: Arc<dyn AuthorReadRepository> = store.clone();
    let clock: Arc<dyn Clock> = Arc::new(FixedClock);

    let services = Arc::new(ApplicationServices::new(
        article_write,
        article_read,
        author_write,
        author_read,
        clock,
    ));
    (services, store)
}

pub fn make_test_router() -> axum::Router {
    let (services, _store) = make_services();
    build_router(HttpState { services })
}
