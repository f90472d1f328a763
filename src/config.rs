use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use url::Url;

use crate::store::top_toolbar::DEFAULT_TITLE;

pub const SETTINGS_FILE: &str = "newsdesk.toml";

/// Where the UI host serves the article collection by default
pub const DEFAULT_ARTICLES_URL: &str = "http://localhost:3000/app/data/articles.json";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub articles_url: String,
    pub default_title: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            articles_url: DEFAULT_ARTICLES_URL.into(),
            default_title: DEFAULT_TITLE.into(),
        }
    }
}

impl Settings {
    pub fn articles_location(&self) -> Result<Url> {
        parse_location(&self.articles_url)
    }
}

/// Loads `newsdesk.toml` from the working directory, then applies the
/// environment
pub fn load_settings() -> Result<Settings> {
    load_settings_from(Path::new(SETTINGS_FILE))
}

pub fn load_settings_from(path: &Path) -> Result<Settings> {
    let mut settings = if path.exists() {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read settings file '{}'", path.display()))?;
        toml::from_str::<Settings>(&raw)
            .with_context(|| format!("invalid settings file '{}'", path.display()))?
    } else {
        Settings::default()
    };

    apply_overrides(&mut settings, |key| std::env::var(key).ok());
    Ok(settings)
}

fn apply_overrides(settings: &mut Settings, var: impl Fn(&str) -> Option<String>) {
    if let Some(v) = var("NEWSDESK_ARTICLES_URL") {
        settings.articles_url = v;
    }
    if let Some(v) = var("APP__ARTICLES_URL") {
        settings.articles_url = v;
    }

    if let Some(v) = var("NEWSDESK_DEFAULT_TITLE") {
        settings.default_title = v;
    }
    if let Some(v) = var("APP__DEFAULT_TITLE") {
        settings.default_title = v;
    }
}

/// Parses an article location; anything without a scheme is a local path
pub fn parse_location(raw: &str) -> Result<Url> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(anyhow!("article location is empty"));
    }

    match Url::parse(raw) {
        Ok(url) => Ok(url),
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            let path = PathBuf::from(raw);
            let path = if path.is_absolute() {
                path
            } else {
                std::env::current_dir()
                    .context("failed to read the working directory")?
                    .join(path)
            };
            Url::from_file_path(&path)
                .map_err(|_| anyhow!("cannot express '{}' as a file url", path.display()))
        }
        Err(e) => Err(e).with_context(|| format!("invalid article location '{raw}'")),
    }
}
