pub mod article;

pub use article::{normalize, Article, ArticleId, Lenient, ServerArticle};
