pub mod file_article_repository;
pub mod http_article_repository;

pub use file_article_repository::FileArticleRepository;
pub use http_article_repository::HttpArticleRepository;

use anyhow::{anyhow, Result};
use std::sync::Arc;
use url::Url;

use crate::base::repository_traits::ArticleRepository;

/// Picks the repository implementation matching the location's scheme
pub fn repository_for(location: &Url) -> Result<Arc<dyn ArticleRepository>> {
    match location.scheme() {
        "http" | "https" => Ok(Arc::new(HttpArticleRepository::new(location.clone()))),
        "file" => Ok(Arc::new(FileArticleRepository::new(location.clone())?)),
        other => Err(anyhow!(
            "Unsupported scheme '{}' for article location {}",
            other,
            location
        )),
    }
}
