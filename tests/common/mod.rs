#![allow(dead_code)]

use std::cell::RefCell;
use std::sync::Arc;

use log::{Level, LevelFilter, Log, Metadata, Record};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use url::Url;

use newsdesk::HttpArticleRepository;

pub const SAMPLE_DOCUMENT: &str = r#"[
    {"id": 1, "title": "A", "content": "Match report", "dateString": "Mon", "baseImageName": "pitch", "articleType": "sports", "isFavourite": true},
    {"id": 2, "title": "B", "content": "Budget vote", "dateString": "Tue", "baseImageName": "house", "articleType": "news", "isFavourite": false},
    {"id": 3, "title": "C", "content": "Transfer news", "dateString": "Wed", "baseImageName": "boots", "articleType": "sports", "isFavourite": false, "author": "Desk"}
]"#;

/// Serves the same canned HTTP response to every connection and returns the
/// document URL on that server
pub async fn serve(status: &str, body: &str) -> Url {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    let response: Arc<str> = format!(
        "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    )
    .into();

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            let response = response.clone();
            tokio::spawn(async move {
                let mut request = Vec::new();
                let mut buf = [0u8; 1024];
                loop {
                    let n = socket.read(&mut buf).await.unwrap_or(0);
                    if n == 0 {
                        break;
                    }
                    request.extend_from_slice(&buf[..n]);
                    if request.windows(4).any(|w| w == b"\r\n\r\n") {
                        break;
                    }
                }
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    Url::parse(&format!("http://{addr}/app/data/articles.json")).expect("url")
}

/// HTTP repository that ignores proxy settings from the environment
pub fn http_repository(location: Url) -> Arc<HttpArticleRepository> {
    let client = reqwest::Client::builder()
        .no_proxy()
        .build()
        .expect("http client");
    Arc::new(HttpArticleRepository::with_client(client, location))
}

thread_local! {
    static RECORDS: RefCell<Vec<(Level, String)>> = RefCell::new(Vec::new());
}

struct CaptureLogger;

impl Log for CaptureLogger {
    fn enabled(&self, _: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        RECORDS.with(|records| {
            records
                .borrow_mut()
                .push((record.level(), record.args().to_string()))
        });
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger;

/// Installs the capturing logger and clears this thread's records
pub fn capture_logs() {
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(LevelFilter::Trace);
    RECORDS.with(|records| records.borrow_mut().clear());
}

/// Error-level messages logged on this thread since `capture_logs`
pub fn logged_errors() -> Vec<String> {
    RECORDS.with(|records| {
        records
            .borrow()
            .iter()
            .filter(|(level, _)| *level == Level::Error)
            .map(|(_, message)| message.clone())
            .collect()
    })
}
