use anyhow::Result;
use std::io::{self, Write};
use clap::{Parser, Subcommand};
use log::{info, warn};
use serde_json::json;

use newsdesk::config::{self, Settings};
use newsdesk::{repository_for, Article, NewsService, Store, TopToolbar};

#[derive(Parser, Debug)]
#[command(name = "newsdesk", about = "Browse the news article collection")]
struct Cli {
    /// Article document location, overrides the configured one
    #[arg(long)]
    articles_url: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List articles of one category
    Category { name: String },
    /// List favourite articles
    Favorites,
    /// Show the toolbar title, optionally changing it first
    Title {
        #[arg(long)]
        set: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let settings = config::load_settings()?;

    run(cli, settings, &mut io::stdout().lock()).await
}

async fn run(cli: Cli, mut settings: Settings, out: &mut impl Write) -> Result<()> {
    if let Some(articles_url) = cli.articles_url {
        settings.articles_url = articles_url;
    }

    let mut store = Store::builder()
        .register(TopToolbar::new(settings.default_title.clone()))?
        .build();

    match cli.command {
        Command::Category { name } => {
            let news_service = news_service(&settings)?;
            print_articles(news_service.get_articles_by_type(&name).await, out)?;
        }
        Command::Favorites => {
            let news_service = news_service(&settings)?;
            print_articles(news_service.get_favorites().await, out)?;
        }
        Command::Title { set } => {
            if let Some(title) = set {
                store.dispatch("topToolbar/changeTitle", json!(title))?;
            }
            let title = store.getter("topToolbar/title")?;
            writeln!(out, "{}", title.as_str().unwrap_or_default())?;
        }
    }

    Ok(())
}

// Only the article commands need a reachable location
fn news_service(settings: &Settings) -> Result<NewsService> {
    let location = settings.articles_location()?;
    info!("Reading articles from {}", location);
    Ok(NewsService::new(repository_for(&location)?))
}

fn print_articles(articles: Option<Vec<Article>>, out: &mut impl Write) -> Result<()> {
    match articles {
        Some(articles) => {
            writeln!(out, "{}", serde_json::to_string_pretty(&articles)?)?;
        }
        None => warn!("No articles were returned"),
    }
    Ok(())
}
