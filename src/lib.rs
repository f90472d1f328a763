pub mod base;
pub mod config;
pub mod data;
pub mod models;
pub mod services;
pub mod store;

// Re-export repository traits
pub use base::repository_traits::ArticleRepository;

// Re-export models
pub use models::article::{normalize, Article, ArticleId, Lenient, ServerArticle};

// Re-export repositories and services selectively
pub use data::repositories::{repository_for, FileArticleRepository, HttpArticleRepository};
pub use services::news_service::{NewsError, NewsService};
pub use store::{Store, StoreBuilder, StoreError, TopToolbar};
