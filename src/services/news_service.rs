use log::{debug, error};
use std::sync::Arc;
use thiserror::Error;
use url::Url;

use crate::base::repository_traits::ArticleRepository;
use crate::models::article::{Article, ServerArticle};

#[derive(Debug, Error)]
pub enum NewsError {
    /// Network failure, non-success response or malformed document
    #[error("An error occurred retrieving the news articles from {location}: {source:#}")]
    Retrieval {
        location: Url,
        #[source]
        source: anyhow::Error,
    },
}

/// Retrieves the article collection and hands out filtered, normalized views
///
/// Each call re-reads the whole collection through the repository. Nothing is
/// cached between calls, so concurrent calls cause independent retrievals.
#[derive(Clone)]
pub struct NewsService {
    repository: Arc<dyn ArticleRepository>,
}

impl NewsService {
    pub fn new(repository: Arc<dyn ArticleRepository>) -> Self {
        Self { repository }
    }

    pub fn location(&self) -> &Url {
        self.repository.location()
    }

    /// Articles whose category tag equals `article_type`, in document order
    ///
    /// A failed retrieval is logged and yields `None`, which callers cannot
    /// tell apart from an empty match without looking at the log. Use
    /// [`NewsService::try_articles_by_type`] to get the failure itself.
    pub async fn get_articles_by_type(&self, article_type: &str) -> Option<Vec<Article>> {
        Self::log_failure(self.try_articles_by_type(article_type).await)
    }

    /// Articles flagged as favourite, in document order
    ///
    /// Same failure policy as [`NewsService::get_articles_by_type`].
    pub async fn get_favorites(&self) -> Option<Vec<Article>> {
        Self::log_failure(self.try_favorites().await)
    }

    pub async fn try_articles_by_type(&self, article_type: &str) -> Result<Vec<Article>, NewsError> {
        self.fetch_matching(|article| article.is_of_type(article_type)).await
    }

    pub async fn try_favorites(&self) -> Result<Vec<Article>, NewsError> {
        self.fetch_matching(ServerArticle::is_favourite).await
    }

    async fn fetch_matching<P>(&self, predicate: P) -> Result<Vec<Article>, NewsError>
    where
        P: Fn(&ServerArticle) -> bool,
    {
        let server_articles = self
            .repository
            .get_all_articles()
            .await
            .map_err(|source| NewsError::Retrieval {
                location: self.location().clone(),
                source,
            })?;

        let articles: Vec<Article> = server_articles
            .iter()
            .filter(|&server_article| predicate(server_article))
            .map(Article::from)
            .collect();

        debug!(
            "{} of {} articles matched",
            articles.len(),
            server_articles.len()
        );
        Ok(articles)
    }

    fn log_failure(result: Result<Vec<Article>, NewsError>) -> Option<Vec<Article>> {
        match result {
            Ok(articles) => Some(articles),
            Err(e) => {
                error!("{}", e);
                None
            }
        }
    }
}
