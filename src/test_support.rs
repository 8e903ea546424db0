//! Fixtures shared by the unit tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use crate::config::FetchConfig;
use crate::error::FetchError;
use crate::tools::fetch::{FetchResult, Fetcher, InFlight};
use crate::types::ScrapeTarget;

/// A chefkoch-style recipe page with two ingredients and two steps.
pub const PANCAKES_PAGE: &str = r#"<!DOCTYPE html>
<html lang="de">
<head><title>Pancakes von koch123 | Chefkoch</title></head>
<body>
  <header><h1 class="site-logo">Chefkoch</h1></header>
  <main>
    <article class="ds-box recipe-header">
      <h1>Pancakes</h1>
      <p class="recipe-text">Fluffige   Pancakes zum Frühstück.</p>
    </article>
    <article class="ds-box ingredients-box">
      <h2>Zutaten</h2>
      <table class="ingredients table-header">
        <tbody>
          <tr><td class="td-left"><span>200&nbsp;g</span></td><td class="td-right"><span>Mehl</span></td></tr>
          <tr><td class="td-left"><span>2</span></td><td class="td-right"><span>Eier</span></td></tr>
        </tbody>
      </table>
    </article>
    <article class="ds-box">
      <h2>Zubereitung</h2>
      <small class="recipe-meta">Arbeitszeit ca. 15 Minuten</small>
      <div class="ds-box">Mehl und Eier verrühren.<br>
        In der Pfanne ausbacken.</div>
    </article>
  </main>
</body>
</html>"#;

/// Fetch settings for talking to [`serve_once`] servers.
pub fn local_fetch_config() -> FetchConfig {
    FetchConfig {
        use_system_proxy: false,
        ..FetchConfig::default()
    }
}

/// Serialize a minimal HTTP/1.1 response with a body.
pub fn http_response(status: u16, reason: &str, body: &str) -> String {
    format!(
        "HTTP/1.1 {status} {reason}\r\nContent-Type: text/html; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    )
}

/// Serve `response` to the first connection on a local port and return a URL for it.
pub async fn serve_once(response: String) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind local port");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("accept");
        let mut buf = vec![0u8; 8192];
        let mut read = 0;
        while read < buf.len() {
            let n = socket.read(&mut buf[read..]).await.unwrap_or(0);
            if n == 0 {
                break;
            }
            read += n;
            if buf[..read].windows(4).any(|w| w == b"\r\n\r\n") {
                break;
            }
        }
        let _ = socket.write_all(response.as_bytes()).await;
        let _ = socket.shutdown().await;
    });
    format!("http://{addr}/rezepte/1/pancakes.html")
}

/// What a [`MockFetcher`] answers with.
#[derive(Debug, Clone)]
pub enum MockReply {
    Page(&'static str),
    Status(u16),
    /// Never completes; used to exercise deadlines and cancellation.
    Hang,
}

/// Counting fetcher that issues tracked leases like the real one.
pub struct MockFetcher {
    reply: MockReply,
    calls: Arc<AtomicUsize>,
    in_flight: InFlight,
}

impl MockFetcher {
    pub fn new(reply: MockReply) -> Self {
        Self {
            reply,
            calls: Arc::new(AtomicUsize::new(0)),
            in_flight: InFlight::new(),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Fetcher for MockFetcher {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn fetch(&self, target: &ScrapeTarget) -> Result<FetchResult, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let lease = self.in_flight.lease();
        match &self.reply {
            MockReply::Page(html) => Ok(FetchResult {
                status: 200,
                body: html.as_bytes().to_vec(),
                content_encoding: None,
                content_type: Some("text/html".into()),
                final_url: target.as_str().to_string(),
                duration_ms: 0,
                lease,
            }),
            MockReply::Status(status) => Err(FetchError::Status {
                status: *status,
                reason: "mock",
            }),
            MockReply::Hang => {
                tokio::time::sleep(Duration::from_secs(3600)).await;
                drop(lease);
                Err(FetchError::Transport("unreachable".into()))
            }
        }
    }

    fn in_flight(&self) -> usize {
        self.in_flight.count()
    }
}
