use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Unique identifier for articles
///
/// Numbers and strings are kept in their original form so the identifier
/// serializes back exactly as it was read. Anything else (floats, integers
/// outside `i64`, objects) is carried as raw JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ArticleId {
    Number(i64),
    Text(String),
    Other(Value),
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArticleId::Number(n) => write!(f, "{}", n),
            ArticleId::Text(s) => write!(f, "{}", s),
            ArticleId::Other(v) => write!(f, "{}", v),
        }
    }
}

/// A document field that holds the expected type or, failing that, the raw
/// JSON value it was given
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Lenient<T> {
    Typed(T),
    Raw(Value),
}

impl<T> Lenient<T> {
    /// The value if it had the expected type
    pub fn typed(&self) -> Option<&T> {
        match self {
            Lenient::Typed(value) => Some(value),
            Lenient::Raw(_) => None,
        }
    }
}

/// An article record exactly as stored in the external document
///
/// Fields are not validated: a field of an unexpected type is kept as
/// [`Lenient::Raw`] and never matches a filter.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerArticle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<ArticleId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Lenient<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Lenient<String>>,
    /// Display date, opaque to this crate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_string: Option<Lenient<String>>,
    /// Image reference token used by the UI to pick an asset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_image_name: Option<Lenient<String>>,
    /// Category tag
    #[serde(skip_serializing_if = "Option::is_none")]
    pub article_type: Option<Lenient<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_favourite: Option<Lenient<bool>>,
    /// Any other fields the document carries; never copied into [`Article`]
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ServerArticle {
    /// Returns true if the category tag is a string equal to `article_type`
    pub fn is_of_type(&self, article_type: &str) -> bool {
        self.article_type
            .as_ref()
            .and_then(Lenient::typed)
            .is_some_and(|tag| tag == article_type)
    }

    /// Returns true only when the favourite flag is the boolean `true`
    pub fn is_favourite(&self) -> bool {
        matches!(self.is_favourite, Some(Lenient::Typed(true)))
    }
}

/// The seven-field view of an article consumed by the UI
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<ArticleId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Lenient<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Lenient<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_string: Option<Lenient<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_image_name: Option<Lenient<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub article_type: Option<Lenient<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_favourite: Option<Lenient<bool>>,
}

impl From<&ServerArticle> for Article {
    fn from(server_article: &ServerArticle) -> Self {
        Self {
            id: server_article.id.clone(),
            title: server_article.title.clone(),
            content: server_article.content.clone(),
            date_string: server_article.date_string.clone(),
            base_image_name: server_article.base_image_name.clone(),
            article_type: server_article.article_type.clone(),
            is_favourite: server_article.is_favourite.clone(),
        }
    }
}

/// Projects a server record into its view shape by field selection
pub fn normalize(server_article: &ServerArticle) -> Article {
    Article::from(server_article)
}
