mod support;

use inkpost::application::commands::articles::{CreateArticleCommand, DeleteArticleCommand};
use inkpost::application::commands::authors::{
    CreateAuthorCommand, DeleteAuthorCommand, UpdateAuthorCommand,
};
use inkpost::application::error::ApplicationError;
use inkpost::application::queries::authors::GetAuthorByIdQuery;
use inkpost::domain::errors::DomainError;

#[tokio::test]
async fn duplicate_email_is_rejected_without_mutating_existing_data() {
    let (services, store) = support::make_services();

    services
        .author_commands
        .create_author(CreateAuthorCommand {
            name: "Jane Doe".into(),
            email: "jane@x.com".into(),
        })
        .await
        .unwrap();

    let err = services
        .author_commands
        .create_author(CreateAuthorCommand {
            name: "Someone Else".into(),
            email: "jane@x.com".into(),
        })
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ApplicationError::Domain(DomainError::Conflict(_))
    ));

    assert_eq!(store.author_count(), 1);
    let listed = services.author_queries.list_authors().await.unwrap();
    assert_eq!(listed[0].name, "Jane Doe");
}

#[tokio::test]
async fn update_of_only_the_name_preserves_the_email() {
    let (services, _store) = support::make_services();

    let created = services
        .author_commands
        .create_author(CreateAuthorCommand {
            name: "Jane Doe".into(),
            email: "jane@x.com".into(),
        })
        .await
        .unwrap();

    let updated = services
        .author_commands
        .update_author(UpdateAuthorCommand {
            id: created.id,
            name: Some("Jane Q. Doe".into()),
            email: None,
        })
        .await
        .unwrap();

    assert_eq!(updated.name, "Jane Q. Doe");
    assert_eq!(updated.email, "jane@x.com");
}

#[tokio::test]
async fn update_of_a_missing_author_is_not_found() {
    let (services, _store) = support::make_services();

    let err = services
        .author_commands
        .update_author(UpdateAuthorCommand {
            id: 7,
            name: Some("Nobody".into()),
            email: None,
        })
        .await
        .unwrap_err();

    assert!(matches!(err, ApplicationError::NotFound(_)));
}

#[tokio::test]
async fn deletion_is_forbidden_while_the_author_still_owns_articles() {
    let (services, store) = support::make_services();

    let author = services
        .author_commands
        .create_author(CreateAuthorCommand {
            name: "Jane Doe".into(),
            email: "jane@x.com".into(),
        })
        .await
        .unwrap();

    let article = services
        .article_commands
        .create_article(CreateArticleCommand {
            title: "Hello World!".into(),
            content: "1234567890".into(),
            author_id: author.id,
        })
        .await
        .unwrap();

    let err = services
        .author_commands
        .delete_author(DeleteAuthorCommand { id: author.id })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Conflict(_)));
    assert_eq!(store.author_count(), 1);

    // once the article is gone the author can be deleted
    services
        .article_commands
        .delete_article(DeleteArticleCommand { id: article.id })
        .await
        .unwrap();
    services
        .author_commands
        .delete_author(DeleteAuthorCommand { id: author.id })
        .await
        .unwrap();
    assert_eq!(store.author_count(), 0);
}

#[tokio::test]
async fn delete_of_a_missing_author_is_not_found() {
    let (services, _store) = support::make_services();

    let err = services
        .author_commands
        .delete_author(DeleteAuthorCommand { id: 3 })
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ApplicationError::Domain(DomainError::NotFound(_))
    ));
}

#[tokio::test]
async fn detail_view_lists_article_summaries_without_author_blocks() {
    let (services, _store) = support::make_services();

    let author = services
        .author_commands
        .create_author(CreateAuthorCommand {
            name: "Jane Doe".into(),
            email: "jane@x.com".into(),
        })
        .await
        .unwrap();

    for title in ["First article", "Second article"] {
        services
            .article_commands
            .create_article(CreateArticleCommand {
                title: title.into(),
                content: "1234567890".into(),
                author_id: author.id,
            })
            .await
            .unwrap();
    }

    let detail = services
        .author_queries
        .get_author_by_id(GetAuthorByIdQuery { id: author.id })
        .await
        .unwrap();

    assert_eq!(detail.id, author.id);
    assert_eq!(detail.created_at, support::fixed_now());
    let titles: Vec<_> = detail.articles.iter().map(|a| a.title.as_str()).collect();
    assert_eq!(titles, vec!["First article", "Second article"]);
}

#[tokio::test]
async fn listing_omits_the_article_fan_out() {
    let (services, _store) = support::make_services();

    services
        .author_commands
        .create_author(CreateAuthorCommand {
            name: "Jane Doe".into(),
            email: "jane@x.com".into(),
        })
        .await
        .unwrap();

    let listed = services.author_queries.list_authors().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].email, "jane@x.com");
}
