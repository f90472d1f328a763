mod common;

use std::fs;
use std::sync::Arc;

use newsdesk::config::parse_location;
use newsdesk::{repository_for, ArticleRepository, FileArticleRepository, Lenient, NewsService};

use common::SAMPLE_DOCUMENT;

#[tokio::test]
async fn test_reads_document_from_disk() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("articles.json");
    fs::write(&path, SAMPLE_DOCUMENT).expect("write document");

    let repository = FileArticleRepository::from_path(&path).expect("repository");
    assert_eq!(repository.location().scheme(), "file");

    let articles = repository.get_all_articles().await.expect("articles");
    assert_eq!(articles.len(), 3);
    assert_eq!(articles[2].extra.get("author"), Some(&serde_json::json!("Desk")));
}

#[tokio::test]
async fn test_service_over_configured_file_location() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("articles.json");
    fs::write(&path, SAMPLE_DOCUMENT).expect("write document");

    let location = parse_location(path.to_str().expect("utf-8 path")).expect("location");
    let service = NewsService::new(repository_for(&location).expect("repository"));

    let news = service.get_articles_by_type("news").await.expect("articles");
    assert_eq!(news.len(), 1);
    assert_eq!(news[0].title, Some(Lenient::Typed("B".to_string())));
}

#[tokio::test]
async fn test_missing_file_is_an_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let repository =
        Arc::new(FileArticleRepository::from_path(dir.path().join("missing.json")).expect("repository"));

    assert!(repository.get_all_articles().await.is_err());
    assert_eq!(NewsService::new(repository).get_favorites().await, None);
}

#[tokio::test]
async fn test_document_must_be_an_array() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("articles.json");
    fs::write(&path, r#"{"id": 1}"#).expect("write document");

    let repository = FileArticleRepository::from_path(&path).expect("repository");
    assert!(repository.get_all_articles().await.is_err());
}
