use anyhow::Result;
use async_trait::async_trait;
use url::Url;

use crate::models::article::ServerArticle;

// ==================== ArticleRepository ====================
#[async_trait]
pub trait ArticleRepository: Send + Sync {
    /// The fixed resource location this repository reads from
    fn location(&self) -> &Url;

    /// Retrieves the whole article collection in document order
    ///
    /// Every call performs a fresh retrieval. Network failures, non-success
    /// responses and malformed documents are all reported as errors.
    async fn get_all_articles(&self) -> Result<Vec<ServerArticle>>;
}
