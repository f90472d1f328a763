use anyhow::{Context, Result};
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use url::Url;

use crate::base::repository_traits::ArticleRepository;
use crate::models::article::ServerArticle;

/// Article repository backed by a static JSON document served over HTTP(S)
pub struct HttpArticleRepository {
    client: Client,
    location: Url,
}

impl HttpArticleRepository {
    /// Creates a repository for the given document URL
    pub fn new(location: Url) -> Self {
        Self::with_client(Client::new(), location)
    }

    /// Creates a repository sharing an existing HTTP client
    pub fn with_client(client: Client, location: Url) -> Self {
        Self { client, location }
    }
}

#[async_trait]
impl ArticleRepository for HttpArticleRepository {
    fn location(&self) -> &Url {
        &self.location
    }

    async fn get_all_articles(&self) -> Result<Vec<ServerArticle>> {
        debug!("GET {}", self.location);

        let response = self
            .client
            .get(self.location.clone())
            .send()
            .await
            .with_context(|| format!("Request to {} failed", self.location))?
            .error_for_status()?;

        let articles = response
            .json::<Vec<ServerArticle>>()
            .await
            .context("Article document is not a valid article array")?;

        debug!("Received {} articles from {}", articles.len(), self.location);
        Ok(articles)
    }
}
