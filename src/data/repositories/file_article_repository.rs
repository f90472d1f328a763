use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use log::debug;
use std::path::{Path, PathBuf};
use url::Url;

use crate::base::repository_traits::ArticleRepository;
use crate::models::article::ServerArticle;

/// Article repository reading the JSON document from the local filesystem
pub struct FileArticleRepository {
    path: PathBuf,
    location: Url,
}

impl FileArticleRepository {
    /// Creates a repository from a `file://` URL
    pub fn new(location: Url) -> Result<Self> {
        let path = location
            .to_file_path()
            .map_err(|_| anyhow!("Not a local file location: {}", location))?;
        Ok(Self { path, location })
    }

    /// Creates a repository from a filesystem path, relative paths resolve
    /// against the working directory
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let path = if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir()
                .context("Failed to read the working directory")?
                .join(path)
        };
        let location = Url::from_file_path(&path)
            .map_err(|_| anyhow!("Cannot express {} as a file URL", path.display()))?;
        Ok(Self { path, location })
    }
}

#[async_trait]
impl ArticleRepository for FileArticleRepository {
    fn location(&self) -> &Url {
        &self.location
    }

    async fn get_all_articles(&self) -> Result<Vec<ServerArticle>> {
        debug!("Reading {}", self.path.display());

        let bytes = tokio::fs::read(&self.path)
            .await
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        let articles: Vec<ServerArticle> = serde_json::from_slice(&bytes)
            .context("Article document is not a valid article array")?;

        Ok(articles)
    }
}
